//! Page hero banner.

use leptos::prelude::*;

/// Full-width banner with heading, tagline and optional call-to-action slot.
#[component]
pub fn Hero(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] background: Option<&'static str>,
    #[prop(optional)] compact: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let style = background.map(|src| format!("background-image: url('{src}')"));
    view! {
        <section class="hero" class:hero--compact=compact style=style>
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1 class="hero__title">{title}</h1>
                <p class="hero__subtitle">{subtitle}</p>
                {children.map(|children| view! { <div class="hero__actions">{children()}</div> })}
            </div>
        </section>
    }
}
