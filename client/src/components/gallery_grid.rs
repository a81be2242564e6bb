//! Paginated gallery grid with a detail modal.
//!
//! DESIGN
//! ======
//! The grid owns two pieces of local state: the `Pagination` cursor and the
//! id of the selected item. The modal is rendered only while an id is
//! selected; closing it clears the selection.

use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use super::gallery_modal::GalleryModal;
use crate::content::GalleryItem;
use crate::content::gallery::{self, GALLERY_ITEMS};
use crate::state::pagination::{GALLERY_PAGE_SIZE, Pagination};

#[component]
pub fn GalleryGrid() -> impl IntoView {
    let pagination = RwSignal::new(Pagination::new(GALLERY_ITEMS.len(), GALLERY_PAGE_SIZE));
    let selected = RwSignal::new(None::<u32>);

    let visible = move || pagination.get().slice(GALLERY_ITEMS).to_vec();
    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <section class="gallery">
            <div class="gallery__grid">
                <For each=visible key=|item| item.id let:item>
                    <GalleryCard item=item on_select=Callback::new(move |id| selected.set(Some(id)))/>
                </For>
            </div>

            <Show when=move || { pagination.get().total_pages() > 1 }>
                <PageControls pagination=pagination/>
            </Show>

            {move || {
                selected
                    .get()
                    .and_then(gallery::find)
                    .map(|item| view! { <GalleryModal item=*item on_close=on_close/> })
            }}
        </section>
    }
}

#[component]
fn GalleryCard(item: GalleryItem, on_select: Callback<u32>) -> impl IntoView {
    view! {
        <button class="gallery-card" on:click=move |_| on_select.run(item.id) title=item.title>
            <img class="gallery-card__image" src=item.image alt=item.title loading="lazy"/>
            <span class="gallery-card__caption">
                <span class="gallery-card__title">{item.title}</span>
                <span class="gallery-card__author">{item.author}</span>
            </span>
        </button>
    }
}

/// Previous / numbered / next buttons. Out-of-range moves are ignored by
/// `Pagination`, and the edge buttons are disabled to match.
#[component]
fn PageControls(pagination: RwSignal<Pagination>) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="Pages de la galerie">
            <Button
                variant=ButtonVariant::Ghost
                disabled=Signal::derive(move || !pagination.get().has_prev())
                on_click=Callback::new(move |_| {
                    pagination.update(|p| {
                        p.prev();
                    });
                })
            >
                "Précédent"
            </Button>
            {move || {
                pagination
                    .get()
                    .pages()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--active=move || pagination.get().page() == page
                                aria-current=move || (pagination.get().page() == page).then_some("page")
                                on:click=move |_| {
                                    pagination.update(|p| {
                                        p.go_to(page);
                                    });
                                }
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <Button
                variant=ButtonVariant::Ghost
                disabled=Signal::derive(move || !pagination.get().has_next())
                on_click=Callback::new(move |_| {
                    pagination.update(|p| {
                        p.next();
                    });
                })
            >
                "Suivant"
            </Button>
        </nav>
    }
}
