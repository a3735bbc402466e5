//! # Wire models
//!
//! The JSON shapes returned by the ChurchOps endpoints. They are received, rendered
//! and thrown away on the next query; nothing here is persisted client-side.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`SearchResult`] | `GET /api/people/search` (array) |
//! | [`FilterResponse`] | `GET <filter action>?...&ajax=true` |
//! | [`PersonRow`] | one entry of `FilterResponse::people` |
//! | [`Pagination`] | optional `FilterResponse::pagination` |

mod pagination;
mod people;

pub use pagination::Pagination;
pub use people::{FilterResponse, PersonRow, SearchResult};
