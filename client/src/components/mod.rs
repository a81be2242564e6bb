//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `button` and `field` are stateless form primitives. Section components
//! (gallery, events, contact form, ...) own their local UI state and compose
//! the primitives with static content. `layout`, `navbar` and `footer` make
//! up the shell around public pages.

pub mod button;
pub mod contact_form;
pub mod event_grid;
pub mod field;
pub mod footer;
pub mod gallery_grid;
pub mod gallery_modal;
pub mod hero;
pub mod layout;
pub mod navbar;
pub mod service_card;
pub mod team_grid;
pub mod timeline;
