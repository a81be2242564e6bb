//! Contact page.

use leptos::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::hero::Hero;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <Hero
                title="Contactez-nous"
                subtitle="Une question, un projet, un partenariat ? Écrivez-nous."
                compact=true
            />
            <div class="contact-page__body">
                <aside class="contact-page__info">
                    <h2>"Nos coordonnées"</h2>
                    <p>"Rue Carnot, Plateau, Dakar"</p>
                    <p>"+221 33 800 00 00"</p>
                    <p>"contact@taaru.sn"</p>
                    <p>"Du lundi au samedi, 9h à 18h"</p>
                </aside>
                <ContactSection/>
            </div>
        </div>
    }
}
