//! Navigation - Lab Resource Pages
//!
//! Pages the navigation rail can load into the side panel.

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Lab resource pages shown in the side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabPage {
    /// Stations registered with the lab
    #[default]
    Stations,
    /// Devices connected to stations
    Devices,
    /// Queued and running operations
    Operations,
    /// Storage and consumables
    Storage,
}

impl LabPage {
    pub fn title(&self) -> &'static str {
        match self {
            LabPage::Stations => "Stations",
            LabPage::Devices => "Devices",
            LabPage::Operations => "Operations",
            LabPage::Storage => "Storage",
        }
    }

    /// One-line summary shown under the page title
    pub fn summary(&self) -> &'static str {
        match self {
            LabPage::Stations => "Stations registered with this lab and their endpoints.",
            LabPage::Devices => "Devices currently attached to the selected station.",
            LabPage::Operations => "Operations submitted to stations and their status.",
            LabPage::Storage => "Containers, reagents and consumables tracked by the lab.",
        }
    }

    /// All pages, in rail order
    pub fn all() -> &'static [LabPage] {
        &[
            LabPage::Stations,
            LabPage::Devices,
            LabPage::Operations,
            LabPage::Storage,
        ]
    }
}

/// Content currently swapped into the side panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelContent {
    pub title: SharedString,
    pub body: SharedString,
}

impl PanelContent {
    pub fn new(title: impl Into<SharedString>, body: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<LabPage> for PanelContent {
    fn from(page: LabPage) -> Self {
        Self::new(page.title(), page.summary())
    }
}
