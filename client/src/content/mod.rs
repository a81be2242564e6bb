//! Static display records rendered by the site's pages.
//!
//! DESIGN
//! ======
//! Every record here is `'static` and immutable. Pages borrow slices of these
//! tables directly; nothing is cloned into reactive state except the id of a
//! selected item.

pub mod about;
pub mod events;
pub mod gallery;
pub mod services;

/// One artwork shown in the gallery grid and detail modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub image: &'static str,
    pub title: &'static str,
    pub author: &'static str,
}

/// A public event (fashion show, workshop, fair).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub place: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
}

/// A dated milestone on the about page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineStep {
    pub year: &'static str,
    pub event: &'static str,
}

/// Accent color token applied to a team card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Ochre,
    Indigo,
    Terracotta,
    Emerald,
}

impl Accent {
    /// CSS modifier class for this accent.
    pub fn class(self) -> &'static str {
        match self {
            Self::Ochre => "accent--ochre",
            Self::Indigo => "accent--indigo",
            Self::Terracotta => "accent--terracotta",
            Self::Emerald => "accent--emerald",
        }
    }
}

/// A team member card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: Option<&'static str>,
    pub accent: Accent,
}

impl TeamMember {
    /// Uppercase initials used when no avatar image exists.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// A service offering. `slug` doubles as the in-page anchor id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub slug: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub badge: Option<&'static str>,
}
