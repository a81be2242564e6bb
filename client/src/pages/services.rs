//! Services page with fragment-anchor scrolling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links such as `/services#couture` land here. After each navigation that
//! carries a fragment naming a known service, the matching card scrolls into
//! view. Unknown fragments do nothing.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::hero::Hero;
use crate::components::service_card::ServiceCard;
use crate::content::services::{SERVICES, find_by_fragment};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let hash = location.hash.get();
        if let Some(service) = find_by_fragment(&hash) {
            if !crate::util::scroll::scroll_to_id(service.slug) {
                log::debug!("service anchor #{} not rendered yet", service.slug);
            }
        }
    });

    view! {
        <div class="services-page">
            <Hero
                title="Nos services"
                subtitle="Tout ce qu'il faut pour créer, apprendre, vendre et se faire connaître."
                compact=true
            />
            <div class="services-grid services-grid--full">
                {SERVICES.iter().map(|service| view! { <ServiceCard service=*service/> }).collect_view()}
            </div>
        </div>
    }
}
