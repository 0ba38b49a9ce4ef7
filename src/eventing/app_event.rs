//! AppEvent - Application Event Enum
//!
//! Events the host sends to the UI layer through the event channel.

use crate::app::navigation::PanelContent;
use crate::error::{Error, Result};

/// Host -> UI events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// New content was swapped into the side panel
    ContentSwapped { content: PanelContent },

    /// Flip the side panel as if the toggle button was clicked
    TogglePanel,

    /// Abort any resize drag in progress
    CancelDrag,
}

/// Cloneable handle the host uses to post events from any thread
#[derive(Debug, Clone)]
pub struct PanelHandle {
    tx: flume::Sender<AppEvent>,
}

impl gpui::Global for PanelHandle {}

impl PanelHandle {
    pub fn new(tx: flume::Sender<AppEvent>) -> Self {
        Self { tx }
    }

    pub fn send(&self, event: AppEvent) -> Result<()> {
        self.tx.send(event).map_err(|e| Error::ChannelSend {
            message: e.to_string(),
        })
    }

    /// Notify the panel that its content was replaced
    pub fn swap_content(&self, content: PanelContent) -> Result<()> {
        self.send(AppEvent::ContentSwapped { content })
    }

    pub fn toggle(&self) -> Result<()> {
        self.send(AppEvent::TogglePanel)
    }
}
