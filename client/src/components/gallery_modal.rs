//! Fullscreen detail view for one gallery item.

use leptos::prelude::*;

use crate::content::GalleryItem;

/// Modal overlay; closes on backdrop click, close button or Escape.
#[component]
pub fn GalleryModal(item: GalleryItem, on_close: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="gallery-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="gallery-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="gallery-modal-title"
                on:click=move |ev| ev.stop_propagation()
            >
                <button class="gallery-modal__close" on:click=move |_| on_close.run(()) title="Fermer">
                    "✕"
                </button>
                <img class="gallery-modal__image" src=item.image alt=item.title/>
                <div class="gallery-modal__caption">
                    <h2 id="gallery-modal-title" class="gallery-modal__title">{item.title}</h2>
                    <p class="gallery-modal__author">"Par " {item.author}</p>
                </div>
            </div>
        </div>
    }
}
