//! Service offering card.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::ServiceEntry;
use crate::content::services::{anchor_href, anchor_target};
use crate::util::scroll;

/// Card for one service. Full cards carry the slug as element id so the
/// services page can scroll to them; compact cards link to that anchor.
#[component]
pub fn ServiceCard(service: ServiceEntry, #[prop(optional)] compact: bool) -> impl IntoView {
    let id = (!compact).then_some(service.slug);
    view! {
        <article id=id class="service-card" class:service-card--compact=compact>
            <span class=format!("service-card__icon {}", service.icon) aria-hidden="true"></span>
            {service.badge.map(|badge| view! { <span class="service-card__badge">{badge}</span> })}
            <h3 class="service-card__title">{service.title}</h3>
            <p class="service-card__description">{service.description}</p>
            {compact
                .then(|| {
                    view! {
                        <ServiceLink service=service class="service-card__more">
                            "En savoir plus"
                        </ServiceLink>
                    }
                })}
        </article>
    }
}

/// Link to a service's section on the services page. Following it while
/// already there scrolls again, even though the URL does not change.
#[component]
pub fn ServiceLink(
    service: ServiceEntry,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_follow: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let href = anchor_href(service.slug);
    let target = anchor_target(&href);
    view! {
        <A
            href=href
            attr:class=class
            on:click=move |_| {
                if let Some(on_follow) = on_follow {
                    on_follow.run(());
                }
                if let Some(service) = target {
                    scroll::scroll_to_id(service.slug);
                }
            }
        >
            {children()}
        </A>
    }
}
