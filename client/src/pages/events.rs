//! Events page.

use leptos::prelude::*;

use crate::components::event_grid::EventGrid;
use crate::components::hero::Hero;
use crate::content::events::EVENTS;

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <div class="events-page">
            <Hero
                title="Événements"
                subtitle="Défilés, ateliers, salons et expositions à venir."
                compact=true
            />
            <EventGrid events=EVENTS show_filter=true/>
        </div>
    }
}
