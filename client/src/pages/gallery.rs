//! Gallery page.

use leptos::prelude::*;

use crate::components::gallery_grid::GalleryGrid;
use crate::components::hero::Hero;

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <div class="gallery-page">
            <Hero
                title="Galeries"
                subtitle="Les créations de nos artisans, pièce par pièce."
                compact=true
            />
            <GalleryGrid/>
        </div>
    }
}
