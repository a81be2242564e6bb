//! Upcoming events and the category filter applied on the events page.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use super::Event;

/// Filter label that matches every category.
pub const ALL_CATEGORIES: &str = "Tous";

pub const EVENTS: &[Event] = &[
    Event {
        id: 1,
        title: "Dakar Fashion Week: vitrine Taaru",
        date: "14 juin 2025",
        place: "Place du Souvenir Africain, Dakar",
        description: "Défilé des créateurs du réseau Taaru, du prêt-à-porter au grand boubou.",
        image: "/images/evenements/defile-dakar.jpg",
        category: "Défilé",
    },
    Event {
        id: 2,
        title: "Atelier teinture indigo",
        date: "28 juin 2025",
        place: "Village artisanal de Soumbédioune",
        description: "Initiation aux techniques de teinture naturelle avec nos maîtres teinturiers.",
        image: "/images/evenements/atelier-indigo.jpg",
        category: "Atelier",
    },
    Event {
        id: 3,
        title: "Salon des artisans de Thiès",
        date: "12 juillet 2025",
        place: "Centre culturel régional, Thiès",
        description: "Trois jours de vente directe et de rencontres avec les artisans de la région.",
        image: "/images/evenements/salon-thies.jpg",
        category: "Salon",
    },
    Event {
        id: 4,
        title: "Atelier maroquinerie",
        date: "26 juillet 2025",
        place: "Espace Taaru, Plateau",
        description: "Fabriquez votre propre porte-carte en cuir tanné au Sénégal.",
        image: "/images/evenements/atelier-cuir.jpg",
        category: "Atelier",
    },
    Event {
        id: 5,
        title: "Nuit du wax",
        date: "9 août 2025",
        place: "Institut français, Saint-Louis",
        description: "Défilé nocturne consacré aux créations en wax et en bazin.",
        image: "/images/evenements/nuit-wax.jpg",
        category: "Défilé",
    },
    Event {
        id: 6,
        title: "Exposition « Mains d'or »",
        date: "20 septembre 2025",
        place: "Musée des Civilisations noires, Dakar",
        description: "Bijoux, filigrane et orfèvrerie: le savoir-faire des bijoutiers sénégalais.",
        image: "/images/evenements/mains-dor.jpg",
        category: "Exposition",
    },
];

/// Filter labels: `Tous` followed by each category in first-appearance order.
pub fn categories(events: &[Event]) -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORIES];
    for event in events {
        if !out.contains(&event.category) {
            out.push(event.category);
        }
    }
    out
}

/// Events matching `category`, keeping their static order.
pub fn filter_by_category<'a>(events: &'a [Event], category: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| category == ALL_CATEGORIES || event.category == category)
        .collect()
}
