//! Host event entry point.

use hostlens_toolbox::classify_target;

use crate::error::CoreResult;
use crate::message::{HostEvent, PanelMessage};
use crate::services::runtime::PanelHandle;

/// Classifies selections and forwards host events to the panel runtime.
#[derive(Debug, Clone)]
pub struct SelectionWatcher {
    handle: PanelHandle,
}

impl SelectionWatcher {
    pub fn new(handle: PanelHandle) -> Self {
        Self { handle }
    }

    /// Translate one host event. Events that originate inside the panel
    /// (selecting text in the results, scrolling) translate to nothing.
    pub fn translate(event: HostEvent) -> Option<PanelMessage> {
        match event {
            HostEvent::SelectionReleased { inside_panel: true, .. }
            | HostEvent::PointerPressed { inside_panel: true } => None,
            HostEvent::SelectionReleased { text, .. } => Some(match classify_target(&text) {
                Some(target) => PanelMessage::TargetSelected(target),
                None => PanelMessage::InvalidSelection,
            }),
            HostEvent::PointerPressed { .. } => Some(PanelMessage::OutsidePointer),
            HostEvent::CloseButton => Some(PanelMessage::CloseRequested),
            HostEvent::TabButton(tab) => Some(PanelMessage::TabRequested(tab)),
        }
    }

    /// Translate and post `event`. Returns whether a message was sent.
    pub fn on_event(&self, event: HostEvent) -> CoreResult<bool> {
        match Self::translate(event) {
            Some(msg) => self.handle.send(msg).map(|()| true),
            None => Ok(false),
        }
    }
}
