//! Service offerings and fragment-anchor lookup.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use super::ServiceEntry;

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "couture",
        icon: "icon-scissors",
        title: "Couture sur mesure",
        description: "Des tailleurs vérifiés réalisent vos tenues à partir de vos mesures et de vos tissus.",
        badge: Some("Populaire"),
    },
    ServiceEntry {
        slug: "formation",
        icon: "icon-graduation",
        title: "Formation des artisans",
        description: "Ateliers de gestion, de photographie produit et de vente en ligne pour les artisans.",
        badge: None,
    },
    ServiceEntry {
        slug: "marketplace",
        icon: "icon-store",
        title: "Marketplace",
        description: "Achetez directement aux créateurs: vêtements, maroquinerie, bijoux et accessoires.",
        badge: Some("Nouveau"),
    },
    ServiceEntry {
        slug: "evenementiel",
        icon: "icon-calendar",
        title: "Événementiel",
        description: "Défilés, salons et expositions pour donner de la visibilité aux talents locaux.",
        badge: None,
    },
];

/// Resolve a URL fragment (with or without the leading `#`) to a service.
pub fn find_by_fragment(fragment: &str) -> Option<&'static ServiceEntry> {
    let slug = fragment.strip_prefix('#').unwrap_or(fragment);
    if slug.is_empty() {
        return None;
    }
    SERVICES.iter().find(|service| service.slug == slug)
}

/// In-page link to a service section.
pub fn anchor_href(slug: &str) -> String {
    format!("{}#{slug}", crate::routes::SERVICES)
}

/// Service targeted by an in-page link such as `/services#couture`. Links to
/// other pages, or without a known fragment, target nothing.
pub fn anchor_target(href: &str) -> Option<&'static ServiceEntry> {
    let (path, fragment) = href.split_once('#')?;
    if path != crate::routes::SERVICES {
        return None;
    }
    find_by_fragment(fragment)
}
