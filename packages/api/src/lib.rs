//! # API crate — the HTTP surface the ChurchOps pages talk to
//!
//! Everything the browser glue needs to know about the server lives here: the JSON
//! shapes the endpoints return, how each request is built, and the client that sends
//! it. The dispatch core in the `state` crate only ever sees [`ApiRequest`] values and
//! decoded models, so it can be exercised without a network.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `SearchResult`, `PersonRow`, `Pagination`, `FilterResponse` as they cross the wire |
//! | [`form`] | [`FormQuery`], the ordered field list a form serializes to |
//! | [`request`] | [`ApiRequest`] / [`ApiResponse`] plus one builder per endpoint |
//! | [`client`] | The [`HttpClient`] trait and the `reqwest`-backed [`FetchClient`] |
//! | [`scripted`] | [`ScriptedClient`], a canned-response client for tests and demos |
//!
//! ## Endpoints
//!
//! - `GET /api/people/search?query=<q>&service_id=<id>` → `[SearchResult]`
//! - `POST <attendance form action>` (form-encoded, repeated `person_ids`) → status only
//! - `GET <filter form action>?<fields>&ajax=true` → `FilterResponse`

pub mod client;
pub mod error;
pub mod form;
pub mod models;
pub mod request;
pub mod scripted;

pub use client::{FetchClient, HttpClient};
pub use error::ApiError;
pub use form::FormQuery;
pub use models::{FilterResponse, Pagination, PersonRow, SearchResult};
pub use request::{ApiRequest, ApiResponse, Method};
pub use scripted::ScriptedClient;

/// Header every background request carries so the server can tell it apart from a
/// full page navigation.
pub const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");
