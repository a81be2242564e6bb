//! Boundary modules: persistence and the auth capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no server API yet; these modules are the seams where one
//! would plug in.

pub mod auth;
pub mod storage;
