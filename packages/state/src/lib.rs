//! # State crate — the page behaviour, without the page
//!
//! Every interactive feature of the ChurchOps pages is modelled here as plain Rust:
//! DOM events come in as [`Event`] values, [`App::update`] folds them into the UI
//! state, and the result is a list of [`Effect`]s (DOM operations, timers, requests,
//! storage writes). [`Runtime`] executes those effects against a [`Host`], an
//! [`HttpClient`](api::HttpClient) and a [`KeyValueStore`]; the `web` crate supplies
//! browser-backed versions of all three.
//!
//! ## Features
//!
//! | Module | Page element | Behaviour |
//! |--------|--------------|-----------|
//! | [`sidebar`] | `#sidebar-toggle`, `.app-container` | off-canvas / collapsed sidebar, persisted |
//! | [`attendance`] | `#attendance-form`, `.select-all` | background submit, busy button, row marking |
//! | [`flash`] | `.flash-messages`, `.alert-close` | alerts with auto-dismiss and fade-out |
//! | [`search`] | `#search-people`, `#search-results` | debounced people lookup |
//! | [`hierarchy`] | `.hierarchy-toggle` | collapsible sections |
//! | [`filter`] | `#filter-form`, `table tbody`, `.pagination` | live table refresh |
//! | [`charts`] | `.report-chart` | lazy Chart.js bootstrap |
//! | [`slider`] | `.slider`, `[data-slider]` | drag-to-scroll, scroll-snap below 768px |
//!
//! ## Timers and requests
//!
//! The core never sleeps. Debounced work is modelled with [`Debouncer`] tickets: the
//! host arms a timer and reports back with `Event::TimerFired`, and only the ticket
//! from the latest call does anything. Search and filter requests carry a [`Seq`]
//! from a [`RequestSequence`]; a response whose token is no longer the latest is
//! dropped, so slow responses can never overwrite newer ones.

pub mod attendance;
pub mod charts;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod effect;
pub mod event;
pub mod filter;
pub mod flash;
pub mod hierarchy;
pub mod search;
pub mod sequence;
pub mod sidebar;
pub mod slider;
pub mod storage;

mod app;
mod runtime;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;

pub use app::App;
pub use charts::{ChartConfig, ChartContainer, ChartOptions, ChartScript, ChartSpec};
pub use config::{ChurchOpsConfig, ConfigError};
pub use debounce::{Debouncer, Ticket};
pub use dom::{DomOp, Target};
pub use effect::{Completion, Effect, PendingRequest, TimerKey};
pub use event::{ClickHit, Event, Pointer};
pub use runtime::{Host, Runtime, Step};
pub use sequence::{RequestSequence, Seq};
pub use sidebar::SidebarState;
pub use storage::{KeyValueStore, MemoryStorage};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;
