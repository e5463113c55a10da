//! Panel state owned by the controller.

use std::fmt;

use serde::Serialize;

use hostlens_toolbox::Target;

use super::{LookupViewModel, SearchViewModel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PanelTab {
    #[default]
    Dns,
    Search,
}

impl fmt::Display for PanelTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dns => write!(f, "DNS & GeoIP"),
            Self::Search => write!(f, "Search"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Visibility {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl Visibility {
    /// `Opening` or `Open`.
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// Identity of one selection. In-flight lanes carry a copy; their result is
/// only applied while it still equals the controller's current ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LaneTicket {
    pub session: u64,
    pub target: Target,
}

impl fmt::Display for LaneTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.session, self.target)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PanelState {
    pub target: Option<Target>,
    pub active_tab: PanelTab,
    pub lookup: Option<LookupViewModel>,
    pub search: Option<SearchViewModel>,
    pub visibility: Visibility,
}

impl PanelState {
    /// Fresh state for a just-selected target: both tabs loading.
    pub fn loading(target: Target, visibility: Visibility) -> Self {
        Self {
            lookup: Some(LookupViewModel::loading(target.kind())),
            search: Some(SearchViewModel::loading()),
            target: Some(target),
            active_tab: PanelTab::Dns,
            visibility,
        }
    }

    /// Drop all content, keeping the closed visibility.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
