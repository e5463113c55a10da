//! Single-owner event loop around the panel controller.
//!
//! The runtime receives [`PanelMessage`]s over an unbounded channel, feeds
//! them to the controller and carries out the resulting effects: renderer
//! calls run inline, fetch lanes and settle delays are spawned and report
//! back through the same channel. Run it on a `current_thread` runtime next
//! to the host's UI loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, WeakUnboundedSender};

use hostlens_toolbox::ToolboxClient;

use crate::adapters::ToolboxGateway;
use crate::config::LookupConfig;
use crate::error::{CoreError, CoreResult};
use crate::message::{PanelEffect, PanelMessage, RenderScope};
use crate::services::controller::PanelController;
use crate::services::orchestrator::{FetchOrchestrator, LaneTimeouts};
use crate::services::watcher::SelectionWatcher;
use crate::traits::PanelRenderer;
use crate::types::{LaneTicket, PanelState};

/// Sending side of the runtime's channel.
#[derive(Debug, Clone)]
pub struct PanelHandle {
    tx: UnboundedSender<PanelMessage>,
}

impl PanelHandle {
    pub(crate) fn channel() -> (Self, UnboundedReceiver<PanelMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, msg: PanelMessage) -> CoreResult<()> {
        self.tx.send(msg).map_err(|_| CoreError::ChannelClosed)
    }
}

pub struct PanelRuntime<R> {
    controller: PanelController,
    orchestrator: FetchOrchestrator,
    renderer: R,
    open_settle: Duration,
    close_settle: Duration,
    /// Weak so that the loop ends once every external handle is gone and no
    /// lane or timer is still pending.
    tx: WeakUnboundedSender<PanelMessage>,
    rx: UnboundedReceiver<PanelMessage>,
}

impl<R: PanelRenderer> PanelRuntime<R> {
    /// Build a runtime and its first handle.
    pub fn new(
        orchestrator: FetchOrchestrator,
        renderer: R,
        config: &LookupConfig,
    ) -> (Self, PanelHandle) {
        let (handle, rx) = PanelHandle::channel();
        let runtime = Self {
            controller: PanelController::new(),
            orchestrator,
            renderer,
            open_settle: config.open_settle,
            close_settle: config.close_settle,
            tx: handle.tx.downgrade(),
            rx,
        };
        (runtime, handle)
    }

    /// Validate `config` and wire the lanes to the real upstream services.
    pub fn from_config(config: &LookupConfig, renderer: R) -> CoreResult<(Self, PanelHandle)> {
        config.validate()?;
        let gateway = Arc::new(ToolboxGateway::new(ToolboxClient::new()?, config));
        let orchestrator = FetchOrchestrator::new(
            gateway.clone(),
            gateway.clone(),
            gateway,
            LaneTimeouts::from(config),
        )
        .with_link_base(config.link_base());
        log::info!(
            "[runtime] lookup endpoint {}, search {}",
            config.lookup_endpoint,
            config.search_base_url.as_deref().unwrap_or("disabled")
        );
        Ok(Self::new(orchestrator, renderer, config))
    }

    /// Another handle, or `None` once the loop has no senders left.
    pub fn handle(&self) -> Option<PanelHandle> {
        self.tx.upgrade().map(|tx| PanelHandle { tx })
    }

    /// A watcher posting into this runtime.
    pub fn watcher(&self) -> Option<SelectionWatcher> {
        self.handle().map(SelectionWatcher::new)
    }

    pub fn state(&self) -> &PanelState {
        self.controller.state()
    }

    pub fn controller(&self) -> &PanelController {
        &self.controller
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Process messages until every sender is dropped, then hand the
    /// renderer back.
    pub async fn run(mut self) -> R {
        while let Some(msg) = self.rx.recv().await {
            self.dispatch(msg);
        }
        log::debug!("[runtime] channel closed, stopping");
        self.renderer
    }

    /// Apply one message and carry out its effects. Must be called from
    /// within a tokio runtime.
    pub fn dispatch(&mut self, msg: PanelMessage) {
        for effect in self.controller.update(msg) {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: PanelEffect) {
        match effect {
            PanelEffect::Render(scope) => self.render(scope),
            PanelEffect::StartLookup(ticket) => self.spawn_lookup(ticket),
            PanelEffect::StartSearch(ticket) => self.spawn_search(ticket),
            PanelEffect::ScheduleOpenSettle { session } => {
                self.schedule(self.open_settle, PanelMessage::OpenSettled { session });
            }
            PanelEffect::ScheduleCloseSettle { session } => {
                self.schedule(self.close_settle, PanelMessage::CloseSettled { session });
            }
        }
    }

    fn render(&mut self, scope: RenderScope) {
        let state = self.controller.state();
        match scope {
            RenderScope::Full => self.renderer.show(state),
            RenderScope::Patch(tab) => self.renderer.patch(tab, state),
            RenderScope::Tab(tab) => self.renderer.select_tab(tab),
            RenderScope::Hide => self.renderer.hide(),
            RenderScope::Clear => self.renderer.clear(),
        }
    }

    fn spawn_lookup(&self, ticket: LaneTicket) {
        let Some(tx) = self.tx.upgrade() else {
            return;
        };
        let orchestrator = self.orchestrator.clone();
        tokio::spawn(async move {
            let view = orchestrator.run_lookup(&ticket.target).await;
            post(&tx, PanelMessage::LookupFinished { ticket, view });
        });
    }

    fn spawn_search(&self, ticket: LaneTicket) {
        let Some(tx) = self.tx.upgrade() else {
            return;
        };
        let orchestrator = self.orchestrator.clone();
        tokio::spawn(async move {
            let view = orchestrator.run_search(&ticket.target).await;
            post(&tx, PanelMessage::SearchFinished { ticket, view });
        });
    }

    fn schedule(&self, delay: Duration, msg: PanelMessage) {
        let Some(tx) = self.tx.upgrade() else {
            return;
        };
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            post(&tx, msg);
        });
    }
}

fn post(tx: &UnboundedSender<PanelMessage>, msg: PanelMessage) {
    if tx.send(msg).is_err() {
        log::debug!("[runtime] loop already stopped, dropping message");
    }
}
