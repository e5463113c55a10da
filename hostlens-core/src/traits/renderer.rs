//! Presentation boundary.

use crate::types::{PanelState, PanelTab};

/// Draws the panel. Called only from the runtime's event loop, so
/// implementations may hold non-shareable UI handles.
///
/// Every call must be idempotent: the same state rendered twice produces
/// the same output.
pub trait PanelRenderer {
    /// Build (or rebuild) the whole panel and make it visible.
    fn show(&mut self, state: &PanelState);

    /// Replace the content of one tab; the other tab is left alone.
    fn patch(&mut self, tab: PanelTab, state: &PanelState);

    /// Bring `tab` to the front.
    fn select_tab(&mut self, tab: PanelTab);

    /// Start hiding the panel.
    fn hide(&mut self);

    /// Remove all content once the panel is fully hidden.
    fn clear(&mut self);
}
