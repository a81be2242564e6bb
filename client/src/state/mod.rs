//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Plain structs with pure transitions; components wrap them in `RwSignal`s
//! and call the transition methods from event handlers. Nothing here touches
//! the DOM, so every rule is unit-testable natively.

pub mod forms;
pub mod nav;
pub mod pagination;
