//! # Runtime — drives an [`App`] against a host, an HTTP client and storage
//!
//! ```text
//!   DOM event ──► Event ──► App::update ──► [Effect]
//!                                             │
//!              ┌──────────────┬───────────────┼───────────────┬──────────────┐
//!              ▼              ▼               ▼               ▼              ▼
//!         Host::apply    Host::arm     KeyValueStore     Step flags    PendingRequest
//!         (DomOp)        (timers)      (Persist)         (preventDefault,   │
//!                                                         stopPropagation)  ▼
//!                                                          HttpClient::send ──► Completion
//!                                                                               │
//!                                                          Event ◄──────────────┘
//! ```
//!
//! [`Runtime::step`] is synchronous so the adapter can honour `preventDefault` and
//! `stopPropagation` before its listener returns. Requests come back in the
//! [`Step`]; the adapter spawns [`Runtime::complete`] for each one. The `App` borrow
//! is released before any `.await`, so overlapping requests interleave freely.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use api::HttpClient;

use crate::app::App;
use crate::charts::{ChartScript, ChartSpec};
use crate::debounce::Ticket;
use crate::dom::DomOp;
use crate::effect::{Effect, PendingRequest, TimerKey};
use crate::event::Event;
use crate::storage::KeyValueStore;

/// The page side of the runtime.
pub trait Host {
    fn apply(&self, op: DomOp);
    /// Schedule `Event::TimerFired { key, ticket }` after `delay`, replacing any timer
    /// already armed under `key`.
    fn arm(&self, key: TimerKey, ticket: Ticket, delay: Duration);
    fn replace_url(&self, url: &str);
    fn load_chart_library(&self, script: ChartScript);
    fn render_chart(&self, chart: ChartSpec);
}

/// What the adapter still has to do after a synchronous dispatch.
#[derive(Debug, Default)]
pub struct Step {
    pub prevent_default: bool,
    pub stop_propagation: bool,
    pub requests: Vec<PendingRequest>,
}

pub struct Runtime<H, C, S> {
    app: RefCell<App>,
    host: H,
    client: C,
    store: S,
}

impl<H: Host, C: HttpClient, S: KeyValueStore> Runtime<H, C, S> {
    pub fn new(app: App, host: H, client: C, store: S) -> Self {
        Self {
            app: RefCell::new(app),
            host,
            client,
            store,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fold one event into the app and carry out every effect that does not need to
    /// wait.
    pub fn step(&self, event: Event) -> Step {
        let effects = self.app.borrow_mut().update(event);
        let mut step = Step::default();
        for effect in effects {
            match effect {
                Effect::Dom(op) => self.host.apply(op),
                Effect::Persist { key, value } => self.store.set(&key, &value),
                Effect::Arm { key, ticket, delay } => self.host.arm(key, ticket, delay),
                Effect::Request(pending) => step.requests.push(pending),
                Effect::ReplaceUrl(url) => self.host.replace_url(&url),
                Effect::LoadChartLibrary(script) => self.host.load_chart_library(script),
                Effect::RenderChart(chart) => self.host.render_chart(chart),
                Effect::PreventDefault => step.prevent_default = true,
                Effect::StopPropagation => step.stop_propagation = true,
            }
        }
        step
    }

    /// Send a request and feed its completion back in, along with any requests the
    /// completion itself produces.
    pub async fn complete(&self, pending: PendingRequest) {
        let mut queue = VecDeque::from([pending]);
        while let Some(PendingRequest {
            request,
            completion,
        }) = queue.pop_front()
        {
            let outcome = self.client.send(&request).await;
            if let Err(e) = &outcome {
                tracing::debug!("{} failed: {}", request.url, e);
            }
            queue.extend(self.step(completion.into_event(outcome)).requests);
        }
    }

    /// [`step`](Self::step) followed by completing every request it produced.
    pub async fn dispatch(&self, event: Event) -> Step {
        let mut step = self.step(event);
        for pending in std::mem::take(&mut step.requests) {
            self.complete(pending).await;
        }
        step
    }
}
