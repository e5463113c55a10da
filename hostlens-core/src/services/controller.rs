//! Panel state machine.
//!
//! `update` is the only function that mutates [`PanelState`]. It never
//! performs I/O or sleeps; anything that takes time is returned as a
//! [`PanelEffect`] for the runtime to carry out.
//!
//! ```text
//!            TargetSelected                OpenSettled
//!  Closed ──────────────────▶ Opening ─────────────────▶ Open
//!    ▲                           │                        │
//!    │ CloseSettled              │ close                  │ close
//!    └──────────── Closing ◀─────┴────────────────────────┘
//! ```
//!
//! "close" is a close request, an invalid selection, or a pointer press
//! outside an open, active panel. A new target while `Closing` reopens.

use hostlens_toolbox::Target;

use crate::message::{PanelEffect, PanelMessage, RenderScope};
use crate::types::{LaneTicket, PanelState, PanelTab, Visibility};

#[derive(Debug, Default)]
pub struct PanelController {
    state: PanelState,
    /// Bumped on every accepted selection.
    session: u64,
    /// Ticket of the target on display. `None` once the panel starts closing.
    ticket: Option<LaneTicket>,
    /// Set by a selection, cleared by an outside press.
    active: bool,
}

impl PanelController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn current_ticket(&self) -> Option<&LaneTicket> {
        self.ticket.as_ref()
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Apply one message and return the effects it requires, in order.
    pub fn update(&mut self, msg: PanelMessage) -> Vec<PanelEffect> {
        match msg {
            PanelMessage::TargetSelected(target) => self.select(target),
            PanelMessage::InvalidSelection | PanelMessage::CloseRequested => {
                if self.state.visibility.is_shown() {
                    self.close()
                } else {
                    Vec::new()
                }
            }
            PanelMessage::OutsidePointer => {
                if self.state.visibility == Visibility::Open && self.active {
                    self.close()
                } else {
                    Vec::new()
                }
            }
            PanelMessage::TabRequested(tab) => self.switch_tab(tab),
            PanelMessage::OpenSettled { session } => {
                if session == self.session && self.state.visibility == Visibility::Opening {
                    self.state.visibility = Visibility::Open;
                }
                Vec::new()
            }
            PanelMessage::CloseSettled { session } => {
                if session == self.session && self.state.visibility == Visibility::Closing {
                    self.state.clear();
                    vec![PanelEffect::Render(RenderScope::Clear)]
                } else {
                    log::debug!("[panel] ignoring close settle of session {session}");
                    Vec::new()
                }
            }
            PanelMessage::LookupFinished { ticket, view } => {
                if !self.is_current(&ticket) {
                    log::debug!("[panel] discarding stale lookup for {ticket}");
                    return Vec::new();
                }
                self.state.lookup = Some(view);
                vec![PanelEffect::Render(RenderScope::Patch(PanelTab::Dns))]
            }
            PanelMessage::SearchFinished { ticket, view } => {
                if !self.is_current(&ticket) {
                    log::debug!("[panel] discarding stale search for {ticket}");
                    return Vec::new();
                }
                self.state.search = Some(view);
                vec![PanelEffect::Render(RenderScope::Patch(PanelTab::Search))]
            }
        }
    }

    fn is_current(&self, ticket: &LaneTicket) -> bool {
        self.ticket.as_ref() == Some(ticket)
    }

    fn select(&mut self, target: Target) -> Vec<PanelEffect> {
        self.session += 1;
        let ticket = LaneTicket {
            session: self.session,
            target: target.clone(),
        };
        log::debug!("[panel] new selection {ticket}");

        let visibility = match self.state.visibility {
            Visibility::Closed | Visibility::Closing | Visibility::Opening => Visibility::Opening,
            Visibility::Open => Visibility::Open,
        };
        self.state = PanelState::loading(target, visibility);
        self.ticket = Some(ticket.clone());
        self.active = true;

        let mut effects = vec![
            PanelEffect::Render(RenderScope::Full),
            PanelEffect::StartLookup(ticket.clone()),
            PanelEffect::StartSearch(ticket),
        ];
        if visibility == Visibility::Opening {
            effects.push(PanelEffect::ScheduleOpenSettle {
                session: self.session,
            });
        }
        effects
    }

    fn close(&mut self) -> Vec<PanelEffect> {
        log::debug!("[panel] closing session {}", self.session);
        self.state.visibility = Visibility::Closing;
        self.ticket = None;
        self.active = false;
        vec![
            PanelEffect::Render(RenderScope::Hide),
            PanelEffect::ScheduleCloseSettle {
                session: self.session,
            },
        ]
    }

    fn switch_tab(&mut self, tab: PanelTab) -> Vec<PanelEffect> {
        if !self.state.visibility.is_shown() {
            return Vec::new();
        }
        self.state.active_tab = tab;
        vec![PanelEffect::Render(RenderScope::Tab(tab))]
    }
}
