//! Site navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the layout shell on every public page. Owns its own
//! `NavState`: dropdown selection, mobile menu visibility and the scrolled
//! appearance driven by a window scroll listener. Following a link or
//! changing route closes every menu.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::service_card::ServiceLink;
use crate::content::services::SERVICES;
use crate::routes;
use crate::state::nav::{Dropdown, NavState};
#[cfg(feature = "hydrate")]
use crate::util::scroll;

const PRIMARY_LINKS: &[(&str, &str)] = &[
    (routes::HOME, "Accueil"),
    (routes::ABOUT, "À propos"),
    (routes::GALLERY, "Galeries"),
    (routes::EVENTS, "Événements"),
    (routes::CONTACT, "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let location = use_location();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || nav.maybe_update(|n| n.set_scroll_offset(scroll::vertical_offset())));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = scroll::vertical_offset();
            nav.maybe_update(|n| n.set_scroll_offset(offset));
        });
        on_cleanup(move || handle.remove());
    }

    Effect::new(move || {
        location.pathname.track();
        nav.update(NavState::close_all);
    });

    let close_all = move |_: leptos::ev::MouseEvent| nav.update(NavState::close_all);
    let close_menus = Callback::new(move |()| nav.update(NavState::close_all));

    view! {
        <header
            class="navbar"
            class:navbar--scrolled=move || nav.get().is_scrolled()
        >
            <nav class="navbar__inner" aria-label="Navigation principale">
                <A href=routes::HOME attr:class="navbar__brand">
                    <span class="navbar__logo" aria-hidden="true">"T"</span>
                    <span class="navbar__name">"Taaru Sénégal"</span>
                </A>

                <button
                    class="navbar__burger"
                    aria-label="Ouvrir le menu"
                    aria-expanded=move || nav.get().mobile_open.to_string()
                    on:click=move |_| nav.update(NavState::toggle_mobile)
                >
                    {move || if nav.get().mobile_open { "✕" } else { "☰" }}
                </button>

                <div class="navbar__menu" class:navbar__menu--open=move || nav.get().mobile_open>
                    <ul class="navbar__links">
                        {PRIMARY_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <li class="navbar__item">
                                        <A href=*href attr:class="navbar__link" on:click=close_all>
                                            {*label}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                        <li class="navbar__item navbar__item--dropdown">
                            <DropdownTrigger nav=nav which=Dropdown::Services label="Services"/>
                            <Show when=move || nav.get().is_open(Dropdown::Services)>
                                <ul class="navbar__dropdown">
                                    <li>
                                        <A href=routes::SERVICES attr:class="navbar__dropdown-link" on:click=close_all>
                                            "Tous les services"
                                        </A>
                                    </li>
                                    {SERVICES
                                        .iter()
                                        .map(|service| {
                                            view! {
                                                <li>
                                                    <ServiceLink
                                                        service=*service
                                                        class="navbar__dropdown-link"
                                                        on_follow=close_menus
                                                    >
                                                        {service.title}
                                                    </ServiceLink>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </Show>
                        </li>
                    </ul>

                    <div class="navbar__account">
                        <DropdownTrigger nav=nav which=Dropdown::Account label="Mon compte"/>
                        <Show when=move || nav.get().is_open(Dropdown::Account)>
                            <ul class="navbar__dropdown navbar__dropdown--right">
                                <li>
                                    <A href=routes::LOGIN attr:class="navbar__dropdown-link" on:click=close_all>
                                        "Se connecter"
                                    </A>
                                </li>
                                <li>
                                    <A href=routes::REGISTER attr:class="navbar__dropdown-link" on:click=close_all>
                                        "Créer un compte"
                                    </A>
                                </li>
                            </ul>
                        </Show>
                    </div>
                </div>
            </nav>
        </header>
    }
}

/// Button that opens or closes one named dropdown.
#[component]
fn DropdownTrigger(nav: RwSignal<NavState>, which: Dropdown, label: &'static str) -> impl IntoView {
    view! {
        <button
            class="navbar__trigger"
            class:navbar__trigger--open=move || nav.get().is_open(which)
            aria-haspopup="true"
            aria-expanded=move || nav.get().is_open(which).to_string()
            on:click=move |_| nav.update(|n| n.toggle_dropdown(which))
        >
            {label}
            <span class="navbar__caret" aria-hidden="true">"▾"</span>
        </button>
    }
}
