//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages under the layout shell render only their own
//! content; `login` and `register` render standalone.

pub mod about;
pub mod artisan;
pub mod contact;
pub mod events;
pub mod gallery;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod services;
