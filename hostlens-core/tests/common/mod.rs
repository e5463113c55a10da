//! Shared fixtures for the runtime integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use hostlens_core::types::{PanelState, PanelTab};
use hostlens_core::{
    FetchOrchestrator, HostEvent, LaneTimeouts, LookupConfig, LookupGateway, PanelHandle,
    PanelRenderer, PanelRuntime, SearchGateway, SelectionWatcher, TokenProvider,
};
use hostlens_toolbox::{
    LookupPayload, SearchPayload, Target, ToolboxError, ToolboxResult,
};
use tokio::task::JoinHandle;

pub const TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";

pub fn lookup_payload(json: &str) -> LookupPayload {
    serde_json::from_str(json).unwrap()
}

pub fn search_payload(json: &str) -> SearchPayload {
    serde_json::from_str(json).unwrap()
}

// ===== Gateways =====

/// Per-target canned lookup answers with individual latencies.
#[derive(Default)]
pub struct ScriptedLookup {
    answers: HashMap<String, (Duration, ToolboxResult<LookupPayload>)>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLookup {
    pub fn answer(
        mut self,
        target: &str,
        after: Duration,
        result: ToolboxResult<LookupPayload>,
    ) -> Self {
        self.answers.insert(target.to_string(), (after, result));
        self
    }
}

#[async_trait]
impl LookupGateway for ScriptedLookup {
    async fn lookup(&self, target: &Target) -> ToolboxResult<LookupPayload> {
        self.calls.lock().unwrap().push(target.value().to_string());
        match self.answers.get(target.value()) {
            Some((after, result)) => {
                tokio::time::sleep(*after).await;
                result.clone()
            }
            None => Err(ToolboxError::NetworkError(format!("unscripted {target}"))),
        }
    }
}

pub struct FixedToken(pub Option<String>);

#[async_trait]
impl TokenProvider for FixedToken {
    async fn fetch_token(&self) -> Option<String> {
        self.0.clone()
    }
}

pub struct ScriptedSearch {
    after: Duration,
    result: ToolboxResult<SearchPayload>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSearch {
    pub fn new(after: Duration, result: ToolboxResult<SearchPayload>) -> Self {
        Self {
            after,
            result,
            calls: Arc::default(),
        }
    }
}

#[async_trait]
impl SearchGateway for ScriptedSearch {
    async fn search(&self, _token: &str, term: &str) -> ToolboxResult<SearchPayload> {
        self.calls.lock().unwrap().push(term.to_string());
        tokio::time::sleep(self.after).await;
        self.result.clone()
    }
}

// ===== Renderer =====

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Show(PanelState),
    Patch(PanelTab, PanelState),
    SelectTab(PanelTab),
    Hide,
    Clear,
}

#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl PanelRenderer for Recorder {
    fn show(&mut self, state: &PanelState) {
        self.calls.lock().unwrap().push(Call::Show(state.clone()));
    }

    fn patch(&mut self, tab: PanelTab, state: &PanelState) {
        self.calls.lock().unwrap().push(Call::Patch(tab, state.clone()));
    }

    fn select_tab(&mut self, tab: PanelTab) {
        self.calls.lock().unwrap().push(Call::SelectTab(tab));
    }

    fn hide(&mut self) {
        self.calls.lock().unwrap().push(Call::Hide);
    }

    fn clear(&mut self) {
        self.calls.lock().unwrap().push(Call::Clear);
    }
}

// ===== Harness =====

/// A running panel with scripted upstreams.
pub struct Harness {
    handle: PanelHandle,
    watcher: SelectionWatcher,
    calls: Arc<Mutex<Vec<Call>>>,
    lookups: Arc<Mutex<Vec<String>>>,
    searches: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<Recorder>,
}

impl Harness {
    pub fn start(lookup: ScriptedLookup, token: Option<&str>, search: ScriptedSearch) -> Self {
        let config = LookupConfig::default();
        let lookups = Arc::clone(&lookup.calls);
        let searches = Arc::clone(&search.calls);
        let orchestrator = FetchOrchestrator::new(
            Arc::new(lookup),
            Arc::new(FixedToken(token.map(str::to_string))),
            Arc::new(search),
            LaneTimeouts::from(&config),
        );
        let recorder = Recorder::default();
        let calls = Arc::clone(&recorder.calls);
        let (runtime, handle) = PanelRuntime::new(orchestrator, recorder, &config);
        let watcher = runtime.watcher().unwrap();
        let task = tokio::spawn(runtime.run());
        Self {
            handle,
            watcher,
            calls,
            lookups,
            searches,
            task,
        }
    }

    pub fn event(&self, event: HostEvent) {
        self.watcher.on_event(event).unwrap();
    }

    pub fn select(&self, text: &str) {
        self.event(HostEvent::SelectionReleased {
            text: text.to_string(),
            inside_panel: false,
        });
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// State given to the most recent `show` or `patch`.
    pub fn displayed(&self) -> PanelState {
        self.calls()
            .into_iter()
            .rev()
            .find_map(|call| match call {
                Call::Show(state) | Call::Patch(_, state) => Some(state),
                _ => None,
            })
            .unwrap()
    }

    pub fn lookup_calls(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    /// Drop every sender and wait for the loop to drain.
    pub async fn finish(self) {
        drop(self.watcher);
        drop(self.handle);
        self.task.await.unwrap();
    }
}

pub async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
}
