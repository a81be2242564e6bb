//! Site paths shared by links, redirects and the route tree in `app.rs`.
//!
//! The server crate's router tests request each of these through the real
//! SSR router, so a path renamed here but not in `app.rs` shows up there.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt::Display;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const EVENTS: &str = "/evenements";
pub const GALLERY: &str = "/galeries";
pub const ABOUT: &str = "/a-propos";
pub const SERVICES: &str = "/services";
pub const CONTACT: &str = "/contact";
pub const TRAININGS: &str = "/formations";

/// Where a successful login lands.
pub const AFTER_LOGIN: &str = HOME;

/// Detail route for `id`, served by the artisan profile page.
pub fn artisan_href(id: impl Display) -> String {
    format!("/artisan/{id}")
}
