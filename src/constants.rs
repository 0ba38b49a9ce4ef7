//! UI Constants
//!
//! Centralized identifiers, glyphs and layout constants for the side panel.

/// Element id of the side panel container
pub const CONTAINER_ID: &str = "SIDEPANEL_CONTAINER";

/// Element id of the collapse/expand toggle button
pub const TOGGLE_BUTTON_ID: &str = "TOGGLE_BUTTON";

/// Element id of the drag handle on the panel's left edge
pub const RESIZER_ID: &str = "RESIZER";

/// Toggle glyph shown while the panel is collapsed
pub const GLYPH_COLLAPSED: &str = "▶";

/// Toggle glyph shown while the panel is expanded
pub const GLYPH_EXPANDED: &str = "◀";

/// Standard deployment widths, in rem
pub const STANDARD_COLLAPSED_REM: f32 = 2.45;
pub const STANDARD_EXPANDED_REM: f32 = 32.0;

/// Compact deployment widths, in rem
pub const COMPACT_COLLAPSED_REM: f32 = 2.0;
pub const COMPACT_EXPANDED_REM: f32 = 30.0;

/// Drag acceptance window in pixels: `min < width <= max`
pub const DRAG_MIN_WIDTH: f32 = 50.0;
pub const DRAG_MAX_WIDTH: f32 = 1001.0;

/// Resizer handle thickness
pub const RESIZER_WIDTH: f32 = 6.0;

/// Toggle button edge, in rem; must fit the narrowest collapsed width
pub const TOGGLE_BUTTON_REM: f32 = 1.25;

/// Horizontal padding of the panel header
pub const HEADER_PADDING_X: f32 = 2.0;

/// Left border of the panel container
pub const CONTAINER_BORDER: f32 = 1.0;

/// Navigation rail width in pixels
pub const NAV_RAIL_WIDTH: f32 = 160.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "panel.toml";

/// Environment variable that selects a preset without a config file
pub const PRESET_ENV_VAR: &str = "SIDEPANEL_PRESET";
