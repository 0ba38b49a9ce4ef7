//! TabsState - Page Loaded into the Side Panel

use crate::app::navigation::{LabPage, PanelContent};

/// Tracks which content the side panel is showing
#[derive(Debug)]
pub struct TabsState {
    /// Page selected in the navigation rail, if the content came from it
    pub active_page: Option<LabPage>,
    /// Content currently in the panel
    pub content: Option<PanelContent>,
    /// Number of swaps since startup
    swaps: u64,
}

impl Default for TabsState {
    fn default() -> Self {
        Self {
            active_page: None,
            content: None,
            swaps: 0,
        }
    }
}

impl TabsState {
    /// Select a page from the rail and load it into the panel
    pub fn set_active_page(&mut self, page: LabPage) -> PanelContent {
        let content = PanelContent::from(page);
        self.active_page = Some(page);
        self.content = Some(content.clone());
        self.swaps += 1;
        content
    }

    /// Load content pushed by the host. The rail stays highlighted only if
    /// the content is one of its pages.
    pub fn swap_content(&mut self, content: PanelContent) {
        self.active_page = LabPage::all()
            .iter()
            .copied()
            .find(|page| PanelContent::from(*page) == content);
        self.content = Some(content);
        self.swaps += 1;
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }
}
