//! Lab Side Panel Library
//!
//! Collapsible, drag-resizable side panel for the lab manager shell: a
//! toggle between a collapsed and an expanded width, a left-edge resizer,
//! and forced expansion whenever new content is swapped into the panel.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod helpers;
pub mod state;
pub mod theme;
pub mod utils;
