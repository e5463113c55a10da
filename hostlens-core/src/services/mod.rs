//! Panel logic: normalization, fetch lanes, state machine and event loop

mod controller;
mod normalizer;
mod orchestrator;
mod runtime;
mod watcher;

pub use controller::PanelController;
pub use normalizer::{normalize_lookup, normalize_search};
pub use orchestrator::{lookup_failure, search_failure, FetchOrchestrator, LaneTimeouts, NO_TOKEN_MESSAGE};
pub use runtime::{PanelHandle, PanelRuntime};
pub use watcher::SelectionWatcher;
