//! State - GPUI Entity State Modules
//!
//! Toggle, drag and content state are kept apart so each view only
//! re-renders for the state it reads.

pub mod panel_state;
pub mod resize_state;
pub mod tabs_state;
