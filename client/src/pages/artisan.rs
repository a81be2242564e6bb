//! Artisan profile placeholder for `/artisan/:id`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::button::ButtonVariant;
use crate::routes;

#[component]
pub fn ArtisanPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id")).unwrap_or_default();

    view! {
        <div class="artisan-page">
            <h1>"Profil artisan"</h1>
            <p class="artisan-page__id">"Référence : " {id}</p>
            <p>"La fiche détaillée de cet artisan sera bientôt disponible."</p>
            <A href=routes::GALLERY attr:class=ButtonVariant::Ghost.class()>"Parcourir la galerie"</A>
        </div>
    }
}
