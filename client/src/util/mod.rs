//! Browser helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue from page and component logic. On
//! native builds every helper compiles to a no-op.

pub mod dialog;
pub mod scroll;
