//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::button::ButtonVariant;
use crate::components::event_grid::EventGrid;
use crate::components::hero::Hero;
use crate::components::service_card::ServiceCard;
use crate::content::events::EVENTS;
use crate::content::gallery::GALLERY_ITEMS;
use crate::content::services::SERVICES;
use crate::routes;

const PREVIEW_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Hero
                title="L'élégance du savoir-faire sénégalais"
                subtitle="Couture, maroquinerie, bijoux: rencontrez les artisans qui font la mode de demain."
                background="/images/hero/atelier.jpg"
            >
                <A href=routes::SERVICES attr:class=ButtonVariant::Primary.class()>"Découvrir nos services"</A>
                <A href=routes::REGISTER attr:class=ButtonVariant::Secondary.class()>"Rejoindre Taaru"</A>
            </Hero>

            <section class="home-page__section">
                <h2 class="section-title">"Nos services"</h2>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .take(PREVIEW_COUNT)
                        .map(|service| view! { <ServiceCard service=*service compact=true/> })
                        .collect_view()}
                </div>
            </section>

            <section class="home-page__section home-page__section--tinted">
                <h2 class="section-title">"Créations à la une"</h2>
                <div class="home-page__gallery">
                    {GALLERY_ITEMS
                        .iter()
                        .take(PREVIEW_COUNT)
                        .map(|item| {
                            view! {
                                <figure class="home-page__gallery-item">
                                    <img src=item.image alt=item.title loading="lazy"/>
                                    <figcaption>{item.title}" · "{item.author}</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
                <A href=routes::GALLERY attr:class=ButtonVariant::Ghost.class()>"Voir toute la galerie"</A>
            </section>

            <section class="home-page__section">
                <h2 class="section-title">"Prochains événements"</h2>
                <EventGrid events=EVENTS limit=PREVIEW_COUNT/>
                <A href=routes::EVENTS attr:class=ButtonVariant::Ghost.class()>"Tous les événements"</A>
            </section>
        </div>
    }
}
