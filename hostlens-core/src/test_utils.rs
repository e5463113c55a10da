//! Test helpers
//!
//! Mock gateways with canned results and a renderer that records its calls.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use hostlens_toolbox::{LookupPayload, LookupRecords, SearchPayload, Target, ToolboxResult};

use crate::traits::{LookupGateway, PanelRenderer, SearchGateway, TokenProvider};
use crate::types::{PanelState, PanelTab};

/// A lookup payload with the given A records and nothing else.
pub fn domain_payload(a: &[&str]) -> LookupPayload {
    LookupPayload {
        domain: None,
        records: LookupRecords {
            a: a.iter().map(ToString::to_string).collect(),
            ..LookupRecords::default()
        },
    }
}

async fn pause(delay: Option<Duration>) {
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
}

// ===== MockLookupGateway =====

pub struct MockLookupGateway {
    result: ToolboxResult<LookupPayload>,
    delay: Option<Duration>,
}

impl MockLookupGateway {
    pub fn returning(result: ToolboxResult<LookupPayload>) -> Self {
        Self {
            result,
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl LookupGateway for MockLookupGateway {
    async fn lookup(&self, _target: &Target) -> ToolboxResult<LookupPayload> {
        pause(self.delay).await;
        self.result.clone()
    }
}

// ===== MockTokenProvider =====

pub struct MockTokenProvider {
    token: Option<String>,
    delay: Option<Duration>,
}

impl MockTokenProvider {
    pub fn absent() -> Self {
        Self {
            token: None,
            delay: None,
        }
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl TokenProvider for MockTokenProvider {
    async fn fetch_token(&self) -> Option<String> {
        pause(self.delay).await;
        self.token.clone()
    }
}

// ===== MockSearchGateway =====

pub struct MockSearchGateway {
    result: ToolboxResult<SearchPayload>,
    /// (token, term) of every call
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockSearchGateway {
    pub fn returning(result: ToolboxResult<SearchPayload>) -> Self {
        Self {
            result,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl SearchGateway for MockSearchGateway {
    async fn search(&self, token: &str, term: &str) -> ToolboxResult<SearchPayload> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((token.to_string(), term.to_string()));
        }
        self.result.clone()
    }
}

// ===== RecordingRenderer =====

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Show(PanelState),
    Patch(PanelTab, PanelState),
    SelectTab(PanelTab),
    Hide,
    Clear,
}

#[derive(Default)]
pub struct RecordingRenderer {
    calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Arc<Mutex<Vec<RenderCall>>> {
        Arc::clone(&self.calls)
    }

    /// State passed to the most recent `show` or `patch`.
    pub fn last_state(&self) -> Option<PanelState> {
        let calls = self.calls.lock().ok()?;
        let last = calls.iter().rev().find_map(|call| match call {
            RenderCall::Show(state) | RenderCall::Patch(_, state) => Some(state.clone()),
            _ => None,
        });
        last
    }

    fn record(&self, call: RenderCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl PanelRenderer for RecordingRenderer {
    fn show(&mut self, state: &PanelState) {
        self.record(RenderCall::Show(state.clone()));
    }

    fn patch(&mut self, tab: PanelTab, state: &PanelState) {
        self.record(RenderCall::Patch(tab, state.clone()));
    }

    fn select_tab(&mut self, tab: PanelTab) {
        self.record(RenderCall::SelectTab(tab));
    }

    fn hide(&mut self) {
        self.record(RenderCall::Hide);
    }

    fn clear(&mut self) {
        self.record(RenderCall::Clear);
    }
}
