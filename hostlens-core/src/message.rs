//! Messages into the panel controller and the effects it asks for.
//!
//! ```text
//! HostEvent ──▶ SelectionWatcher ──▶ PanelMessage ──▶ PanelController
//!                                         ▲                  │
//!                  lanes / settle timers ─┘                  ▼
//!                                                       PanelEffect ──▶ PanelRuntime
//! ```
//!
//! The controller is the only place `PanelState` changes. Everything that
//! takes time (HTTP, animation delays) is described as a `PanelEffect`, run
//! by the runtime, and fed back in as another `PanelMessage`.

use hostlens_toolbox::Target;

use crate::types::{LaneTicket, LookupViewModel, PanelTab, SearchViewModel};

/// Raw host events, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Pointer released with `text` selected.
    SelectionReleased { text: String, inside_panel: bool },
    /// Pointer pressed anywhere on the page.
    PointerPressed { inside_panel: bool },
    /// The panel's close button.
    CloseButton,
    /// A tab header was clicked.
    TabButton(PanelTab),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelMessage {
    /// A selection outside the panel classified as a target.
    TargetSelected(Target),
    /// A selection outside the panel that is not a target.
    InvalidSelection,
    /// Pointer pressed outside the panel.
    OutsidePointer,
    CloseRequested,
    TabRequested(PanelTab),
    /// The open animation delay for `session` elapsed.
    OpenSettled { session: u64 },
    /// The close animation delay for `session` elapsed.
    CloseSettled { session: u64 },
    LookupFinished {
        ticket: LaneTicket,
        view: LookupViewModel,
    },
    SearchFinished {
        ticket: LaneTicket,
        view: SearchViewModel,
    },
}

/// What the renderer should redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderScope {
    /// Show the whole panel from the current state.
    Full,
    /// Replace one tab's content only.
    Patch(PanelTab),
    /// Switch the visible tab; content is unchanged.
    Tab(PanelTab),
    /// Start the hide transition.
    Hide,
    /// Drop all content.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEffect {
    Render(RenderScope),
    StartLookup(LaneTicket),
    StartSearch(LaneTicket),
    ScheduleOpenSettle { session: u64 },
    ScheduleCloseSettle { session: u64 },
}

impl PanelEffect {
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::StartLookup(_) | Self::StartSearch(_))
    }
}
