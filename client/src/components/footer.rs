//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::service_card::ServiceLink;
use crate::content::services::SERVICES;
use crate::routes;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <section class="footer__about">
                    <h3 class="footer__title">"Taaru Sénégal"</h3>
                    <p>
                        "La vitrine des artisans, tailleurs et créateurs sénégalais. "
                        "Du fil à l'étoffe, du cuir au bijou."
                    </p>
                </section>
                <section>
                    <h4 class="footer__heading">"Services"</h4>
                    <ul class="footer__links">
                        {SERVICES
                            .iter()
                            .map(|service| {
                                view! {
                                    <li>
                                        <ServiceLink service=*service>{service.title}</ServiceLink>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
                <section>
                    <h4 class="footer__heading">"Découvrir"</h4>
                    <ul class="footer__links">
                        <li><A href=routes::ABOUT>"À propos"</A></li>
                        <li><A href=routes::GALLERY>"Galeries"</A></li>
                        <li><A href=routes::EVENTS>"Événements"</A></li>
                        <li><A href=routes::CONTACT>"Contact"</A></li>
                    </ul>
                </section>
                <section>
                    <h4 class="footer__heading">"Nous joindre"</h4>
                    <address class="footer__contact">
                        "Rue Carnot, Plateau, Dakar"<br/>
                        "+221 33 800 00 00"<br/>
                        "contact@taaru.sn"
                    </address>
                </section>
            </div>
            <p class="footer__legal">"© 2025 Taaru Sénégal. Tous droits réservés."</p>
        </footer>
    }
}
