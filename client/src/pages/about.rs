//! About page: mission, history, team.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::team_grid::TeamGrid;
use crate::components::timeline::Timeline;
use crate::content::about::{TEAM, TIMELINE};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <Hero
                title="À propos de Taaru"
                subtitle="« Taaru » signifie la beauté et l'élégance en wolof."
                compact=true
            />
            <section class="about-page__mission">
                <h2 class="section-title">"Notre mission"</h2>
                <p>
                    "Taaru Sénégal relie les artisans du textile, du cuir et de la bijouterie à une "
                    "clientèle qui cherche des pièces uniques, faites à la main et payées au juste prix."
                </p>
                <p>
                    "Nous accompagnons chaque artisan, de la mise en valeur de ses créations jusqu'à la vente, "
                    "et nous faisons vivre la création locale à travers défilés, salons et ateliers."
                </p>
            </section>
            <section class="about-page__history">
                <h2 class="section-title">"Notre histoire"</h2>
                <Timeline steps=TIMELINE/>
            </section>
            <section class="about-page__team">
                <h2 class="section-title">"L'équipe"</h2>
                <TeamGrid members=TEAM/>
            </section>
        </div>
    }
}
