//! About page content: timeline and team.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use super::{Accent, TeamMember, TimelineStep};

pub const TIMELINE: &[TimelineStep] = &[
    TimelineStep { year: "2019", event: "Premières rencontres avec des tailleurs de la Médina de Dakar." },
    TimelineStep { year: "2020", event: "Lancement du collectif Taaru avec douze artisans fondateurs." },
    TimelineStep { year: "2021", event: "Ouverture de l'espace atelier au Plateau." },
    TimelineStep { year: "2022", event: "Premier défilé Taaru pendant la Dakar Fashion Week." },
    TimelineStep { year: "2023", event: "Programme de formation au commerce en ligne pour 80 artisans." },
    TimelineStep { year: "2024", event: "Ouverture de la marketplace aux régions de Thiès et Saint-Louis." },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Mariama Sène", role: "Fondatrice et directrice", avatar: Some("/images/equipe/mariama.jpg"), accent: Accent::Ochre },
    TeamMember { name: "Ousmane Diallo", role: "Responsable artisans", avatar: Some("/images/equipe/ousmane.jpg"), accent: Accent::Indigo },
    TeamMember { name: "Coumba Faye", role: "Styliste en chef", avatar: None, accent: Accent::Terracotta },
    TeamMember { name: "Pape Ndour", role: "Développement et partenariats", avatar: None, accent: Accent::Emerald },
];
