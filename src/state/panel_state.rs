//! PanelState - Collapsed/Expanded Toggle
//!
//! `mode` is what the toggle button shows; `width` is what the container
//! renders. They agree after every toggle and content swap. A drag resize
//! only moves `width`, so the glyph can go stale until the next toggle.

use tracing::{debug, trace};

use crate::constants::{GLYPH_COLLAPSED, GLYPH_EXPANDED};
use crate::domain::config::PanelConfig;
use crate::domain::length::CssLength;

/// The two named panel states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Collapsed,
    Expanded,
}

impl PanelMode {
    /// Toggle button glyph for this mode
    pub fn glyph(&self) -> &'static str {
        match self {
            PanelMode::Collapsed => GLYPH_COLLAPSED,
            PanelMode::Expanded => GLYPH_EXPANDED,
        }
    }
}

/// State of the side panel container and its toggle button
#[derive(Debug, Clone)]
pub struct PanelState {
    config: PanelConfig,
    mode: PanelMode,
    width: CssLength,
}

impl PanelState {
    /// Create the panel in its initialized (collapsed) state
    pub fn new(config: PanelConfig) -> Self {
        let mut state = Self {
            config,
            mode: PanelMode::Collapsed,
            width: config.collapsed_width,
        };
        state.initialize();
        state
    }

    /// Force the collapsed state regardless of what came before
    pub fn initialize(&mut self) {
        self.set_mode(PanelMode::Collapsed);
        debug!(width = %self.width, "Side panel initialized");
    }

    /// Flip between collapsed and expanded.
    ///
    /// The decision is made from the container width, not the glyph: a panel
    /// sitting at exactly the collapsed width expands, anything else
    /// (expanded, or dragged to some pixel width) collapses.
    pub fn toggle_side_panel(&mut self) -> PanelMode {
        let next = if self.width == self.config.collapsed_width {
            PanelMode::Expanded
        } else {
            PanelMode::Collapsed
        };
        self.set_mode(next);
        debug!(mode = ?next, width = %self.width, "Side panel toggled");
        next
    }

    /// Newly swapped content is always shown in an expanded panel
    pub fn on_content_swapped(&mut self) {
        self.set_mode(PanelMode::Expanded);
        debug!(width = %self.width, "Content swapped, side panel expanded");
    }

    /// Set a width produced by a drag resize; the glyph is left alone
    pub fn apply_drag_width(&mut self, pixels: f32) {
        self.width = CssLength::px(pixels);
        trace!(width = %self.width, "Drag width applied");
    }

    fn set_mode(&mut self, mode: PanelMode) {
        self.mode = mode;
        self.width = match mode {
            PanelMode::Collapsed => self.config.collapsed_width,
            PanelMode::Expanded => self.config.expanded_width,
        };
    }

    // ==================== Getters ====================

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn width(&self) -> CssLength {
        self.width
    }

    pub fn glyph(&self) -> &'static str {
        self.mode.glyph()
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Whether the rendered width is one of the two configured widths
    pub fn is_at_rest(&self) -> bool {
        self.width == self.config.collapsed_width || self.width == self.config.expanded_width
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::PanelPreset;

    fn assert_collapsed(state: &PanelState) {
        assert_eq!(state.mode(), PanelMode::Collapsed);
        assert_eq!(state.width(), state.config().collapsed_width);
        assert_eq!(state.glyph(), "▶");
    }

    fn assert_expanded(state: &PanelState) {
        assert_eq!(state.mode(), PanelMode::Expanded);
        assert_eq!(state.width(), state.config().expanded_width);
        assert_eq!(state.glyph(), "◀");
    }

    #[test]
    fn test_initialize_forces_collapsed() {
        let mut state = PanelState::default();
        assert_collapsed(&state);
        assert_eq!(state.width().to_string(), "2.45rem");

        state.on_content_swapped();
        state.initialize();
        assert_collapsed(&state);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut state = PanelState::default();
        for i in 0..10 {
            let mode = state.toggle_side_panel();
            if i % 2 == 0 {
                assert_eq!(mode, PanelMode::Expanded);
                assert_expanded(&state);
            } else {
                assert_eq!(mode, PanelMode::Collapsed);
                assert_collapsed(&state);
            }
        }
    }

    #[test]
    fn test_content_swap_from_any_state_is_idempotent() {
        let mut collapsed = PanelState::default();
        collapsed.on_content_swapped();
        assert_expanded(&collapsed);
        collapsed.on_content_swapped();
        assert_expanded(&collapsed);

        let mut expanded = PanelState::default();
        expanded.toggle_side_panel();
        expanded.on_content_swapped();
        assert_expanded(&expanded);
    }

    #[test]
    fn test_click_swap_scenario() {
        let mut state = PanelState::default();
        state.toggle_side_panel();
        assert_expanded(&state);
        state.toggle_side_panel();
        assert_collapsed(&state);
        state.on_content_swapped();
        assert_expanded(&state);
        state.toggle_side_panel();
        assert_collapsed(&state);
    }

    #[test]
    fn test_compact_preset_widths() {
        let mut state = PanelState::new(PanelConfig::from_preset(PanelPreset::Compact));
        assert_eq!(state.width().to_string(), "2rem");
        state.toggle_side_panel();
        assert_eq!(state.width().to_string(), "30rem");
    }

    #[test]
    fn test_drag_leaves_glyph_stale() {
        let mut state = PanelState::default();
        state.apply_drag_width(300.0);
        assert_eq!(state.width(), CssLength::px(300.0));
        assert_eq!(state.glyph(), "▶");
        assert!(!state.is_at_rest());
    }

    #[test]
    fn test_toggle_after_drag_collapses() {
        let mut state = PanelState::default();
        state.toggle_side_panel();
        state.apply_drag_width(420.0);

        // Not at the collapsed width, so the click collapses
        assert_eq!(state.toggle_side_panel(), PanelMode::Collapsed);
        assert_collapsed(&state);

        // Same from a collapsed glyph: dragged wide, click collapses back
        let mut state = PanelState::default();
        state.apply_drag_width(420.0);
        assert_eq!(state.toggle_side_panel(), PanelMode::Collapsed);
        assert_collapsed(&state);
    }
}
