//! AppEntities - Global Entity Handles
//!
//! Toggle state, drag state and panel content are separate entities so a
//! pointer move only re-renders what reads the width.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::PanelConfig;
use crate::state::{panel_state::PanelState, resize_state::ResizeState, tabs_state::TabsState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Collapsed/expanded state and current width
    pub panel: Entity<PanelState>,
    /// Drag session of the resizer
    pub resize: Entity<ResizeState>,
    /// Content loaded into the panel
    pub tabs: Entity<TabsState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities; the panel starts collapsed
    pub fn init(config: PanelConfig, cx: &mut App) -> Self {
        Self {
            panel: cx.new(|_| PanelState::new(config)),
            resize: cx.new(|_| ResizeState::new(config.drag)),
            tabs: cx.new(|_| TabsState::default()),
        }
    }

    /// Click on the toggle button
    pub fn toggle_panel(&self, cx: &mut App) {
        self.panel.update(cx, |panel, cx| {
            panel.toggle_side_panel();
            cx.notify();
        });
    }

    /// Content-swapped notification: force the expanded state
    pub fn content_swapped(&self, cx: &mut App) {
        self.panel.update(cx, |panel, cx| {
            panel.on_content_swapped();
            cx.notify();
        });
    }
}
