//! Components - UI Components
//!
//! Views that render state entities; they hold no state of their own.

pub mod layout;
