//! Side effects requested by the dispatch core.

use std::time::Duration;

use api::{ApiError, ApiRequest, ApiResponse, FormQuery};

use crate::charts::{ChartScript, ChartSpec};
use crate::debounce::Ticket;
use crate::dom::DomOp;
use crate::event::Event;
use crate::sequence::Seq;

/// Names a timer slot. Arming a key again replaces whatever was armed before.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerKey {
    SidebarResize,
    SliderResize,
    Search,
    FilterField(String),
    AlertAutoDismiss(String),
    AlertRemoval(String),
}

/// How a finished request turns back into an [`Event`].
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    Search { seq: Seq },
    Attendance { person_ids: Vec<String> },
    Filter { seq: Seq, query: FormQuery },
}

impl Completion {
    /// Check the status and decode the body the way the originating feature expects.
    pub fn into_event(self, outcome: Result<ApiResponse, ApiError>) -> Event {
        match self {
            Completion::Search { seq } => Event::SearchCompleted {
                seq,
                outcome: outcome.and_then(ApiResponse::json),
            },
            Completion::Attendance { person_ids } => Event::AttendanceCompleted {
                person_ids,
                outcome: outcome.and_then(ApiResponse::ensure_success).map(|_| ()),
            },
            Completion::Filter { seq, query } => Event::FilterCompleted {
                seq,
                query,
                outcome: outcome.and_then(ApiResponse::json),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
    pub request: ApiRequest,
    pub completion: Completion,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Dom(DomOp),
    /// Write to the key/value store.
    Persist { key: String, value: String },
    /// Fire `Event::TimerFired { key, ticket }` after `delay`.
    Arm {
        key: TimerKey,
        ticket: Ticket,
        delay: Duration,
    },
    Request(PendingRequest),
    /// `history.replaceState` to this URL without navigating.
    ReplaceUrl(String),
    /// Inject the charting library; fire `Event::ChartLibraryLoaded` once it loads.
    LoadChartLibrary(ChartScript),
    RenderChart(ChartSpec),
    /// Cancel the browser default for the triggering DOM event.
    PreventDefault,
    /// Keep the triggering DOM event from bubbling further.
    StopPropagation,
}

impl From<DomOp> for Effect {
    fn from(op: DomOp) -> Self {
        Effect::Dom(op)
    }
}
