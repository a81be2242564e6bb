//! Fallback page for unmatched paths.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::button::ButtonVariant;
use crate::routes;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Only the initial server render can set the status; client-side
    // navigation to a missing page has no HTTP response to change.
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Cette page n'existe pas ou n'est pas encore disponible."</p>
            <A href=routes::HOME attr:class=ButtonVariant::Primary.class()>"Retour à l'accueil"</A>
        </div>
    }
}
