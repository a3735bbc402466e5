//! This crate contains every markup fragment the page glue writes into the DOM.
//!
//! Fragments are rendered with `maud`, so interpolated server data is always
//! HTML-escaped. Each function returns a `Markup`; callers use `into_string()` when
//! handing the result to the DOM.

pub use maud::Markup;

mod flash;
pub use flash::{busy_label, flash_alert, AlertKind};

mod search;
pub use search::{search_empty, search_error, search_results};

mod table;
pub use table::{
    person_rows, table_message, TABLE_COLUMNS, TABLE_EMPTY, TABLE_ERROR, TABLE_LOADING,
};
