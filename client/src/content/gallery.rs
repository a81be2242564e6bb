//! Gallery artworks.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use super::GalleryItem;

pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem { id: 1, image: "/images/galerie/boubou-indigo.jpg", title: "Grand boubou indigo", author: "Awa Diop" },
    GalleryItem { id: 2, image: "/images/galerie/wax-ceremonie.jpg", title: "Ensemble wax de cérémonie", author: "Moussa Fall" },
    GalleryItem { id: 3, image: "/images/galerie/sac-cuir-tresse.jpg", title: "Sac en cuir tressé", author: "Fatou Ndiaye" },
    GalleryItem { id: 4, image: "/images/galerie/kaftan-brode.jpg", title: "Kaftan brodé main", author: "Ibrahima Sarr" },
    GalleryItem { id: 5, image: "/images/galerie/bijoux-filigrane.jpg", title: "Parure en filigrane d'argent", author: "Aminata Ba" },
    GalleryItem { id: 6, image: "/images/galerie/sandales-perlees.jpg", title: "Sandales perlées", author: "Cheikh Mbaye" },
    GalleryItem { id: 7, image: "/images/galerie/robe-bazin.jpg", title: "Robe en bazin riche", author: "Awa Diop" },
    GalleryItem { id: 8, image: "/images/galerie/panier-osier.jpg", title: "Panier en osier teint", author: "Ndeye Sow" },
    GalleryItem { id: 9, image: "/images/galerie/chemise-bogolan.jpg", title: "Chemise bogolan", author: "Moussa Fall" },
    GalleryItem { id: 10, image: "/images/galerie/foulard-tie-dye.jpg", title: "Foulard tie-dye", author: "Khady Gueye" },
    GalleryItem { id: 11, image: "/images/galerie/ceinture-cauris.jpg", title: "Ceinture aux cauris", author: "Fatou Ndiaye" },
    GalleryItem { id: 12, image: "/images/galerie/tenue-mariage.jpg", title: "Tenue de mariage traditionnelle", author: "Ibrahima Sarr" },
    GalleryItem { id: 13, image: "/images/galerie/boucles-or.jpg", title: "Boucles d'oreilles en or", author: "Aminata Ba" },
    GalleryItem { id: 14, image: "/images/galerie/veste-pagne.jpg", title: "Veste en pagne tissé", author: "Cheikh Mbaye" },
];

/// Look up a gallery item by id.
pub fn find(id: u32) -> Option<&'static GalleryItem> {
    GALLERY_ITEMS.iter().find(|item| item.id == id)
}
