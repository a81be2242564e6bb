//! Event cards with an optional category filter.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::Event;
use crate::content::events::{ALL_CATEGORIES, categories, filter_by_category};
use crate::routes::artisan_href;

/// Grid of events. With `show_filter`, a category bar narrows the list;
/// `limit` caps how many cards are shown (home page preview).
#[component]
pub fn EventGrid(
    events: &'static [Event],
    #[prop(optional)] show_filter: bool,
    #[prop(optional)] limit: Option<usize>,
) -> impl IntoView {
    let category = RwSignal::new(ALL_CATEGORIES);
    let visible = move || {
        let selected = category.get();
        filter_by_category(events, selected)
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .copied()
            .collect::<Vec<Event>>()
    };

    view! {
        <section class="events">
            {show_filter
                .then(|| {
                    view! {
                        <div class="events__filter" role="tablist">
                            {categories(events)
                                .into_iter()
                                .map(|label| {
                                    view! {
                                        <button
                                            class="events__filter-button"
                                            class:events__filter-button--active=move || category.get() == label
                                            role="tab"
                                            on:click=move |_| category.set(label)
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            <div class="events__grid">
                <For each=visible key=|event| event.id let:event>
                    <EventCard event=event/>
                </For>
            </div>
            <Show when=move || visible().is_empty()>
                <p class="events__empty">"Aucun événement dans cette catégorie pour le moment."</p>
            </Show>
        </section>
    }
}

#[component]
fn EventCard(event: Event) -> impl IntoView {
    view! {
        <article class="event-card">
            <img class="event-card__image" src=event.image alt=event.title loading="lazy"/>
            <div class="event-card__body">
                <span class="event-card__category">{event.category}</span>
                <h3 class="event-card__title">{event.title}</h3>
                <p class="event-card__meta">
                    <span class="event-card__date">{event.date}</span>
                    " · "
                    <span class="event-card__place">{event.place}</span>
                </p>
                <p class="event-card__description">{event.description}</p>
                <A href=artisan_href(event.id) attr:class="event-card__link">"Voir le détail"</A>
            </div>
        </article>
    }
}
