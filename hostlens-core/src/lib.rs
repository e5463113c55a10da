//! hostlens core library
//!
//! Turns a text selection into a two-tab lookup panel:
//! - Classification of the selection (via `hostlens-toolbox`)
//! - Fetch orchestration: lookup lane and token→search lane, each with its own deadline
//! - Normalization of upstream payloads into view models
//! - Panel state machine with stale-result discard
//!
//! Rendering is left to the host through the [`PanelRenderer`] trait; upstream
//! access goes through the gateway traits so it can be swapped in tests.

pub mod adapters;
pub mod config;
pub mod error;
pub mod message;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::LookupConfig;
pub use error::{CoreError, CoreResult};
pub use message::{HostEvent, PanelEffect, PanelMessage, RenderScope};
pub use services::{
    FetchOrchestrator, LaneTimeouts, PanelController, PanelHandle, PanelRuntime, SelectionWatcher,
};
pub use traits::{LookupGateway, PanelRenderer, SearchGateway, TokenProvider};
