//! Layout Components
//!
//! Navigation rail and the collapsible, resizable side panel.

pub mod nav_rail;
pub mod side_panel;
