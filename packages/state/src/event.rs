//! Everything the page can tell the dispatch core.
//!
//! The adapter reads whatever DOM state an event needs (viewport width, form
//! fields, class lists) at the moment it fires and packs it into the variant, so
//! [`App::update`](crate::App::update) never reaches back into the page.

use api::{ApiError, FilterResponse, FormQuery, SearchResult};

use crate::charts::ChartContainer;
use crate::debounce::Ticket;
use crate::effect::TimerKey;
use crate::sequence::Seq;

/// Where a document-level click landed, relative to the elements that care.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickHit {
    /// Inside `#sidebar` or `#sidebar-toggle`.
    pub sidebar: bool,
    /// Inside `#search-people` or `#search-results`.
    pub search: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pointer {
    Touch,
    Mouse,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    // Sidebar
    SidebarLoaded {
        width: f64,
        stored: Option<String>,
    },
    SidebarToggled {
        width: f64,
    },
    NavLinkClicked {
        width: f64,
    },
    DocumentClicked {
        width: f64,
        hit: ClickHit,
    },
    WindowResized {
        width: f64,
    },

    // Attendance
    AttendanceSubmitted {
        action: String,
        fields: FormQuery,
        /// Button text before the busy label replaced it.
        label: String,
    },
    AttendanceCompleted {
        person_ids: Vec<String>,
        outcome: Result<(), ApiError>,
    },
    /// The n-th `.select-all` checkbox changed.
    SelectAllChanged {
        index: usize,
        checked: bool,
    },
    AlertCloseClicked {
        id: String,
    },

    // Search
    SearchInput {
        query: String,
        service_id: Option<String>,
    },
    SearchCompleted {
        seq: Seq,
        outcome: Result<Vec<SearchResult>, ApiError>,
    },
    SearchItemToggled {
        person_id: String,
        checked: bool,
    },

    // Hierarchy
    HierarchyToggled {
        target: String,
        /// `None` when no element has the target id.
        content_collapsed: Option<bool>,
        toggle_collapsed: bool,
    },

    // Filter
    FilterSubmitted {
        action: String,
        query: FormQuery,
    },
    FilterFieldChanged {
        field: String,
        action: String,
        query: FormQuery,
    },
    FilterCompleted {
        seq: Seq,
        query: FormQuery,
        outcome: Result<FilterResponse, ApiError>,
    },

    // Charts
    ChartsFound {
        library_loaded: bool,
        containers: Vec<ChartContainer>,
    },
    ChartLibraryLoaded,

    // Sliders
    SlidersFound {
        count: usize,
        width: f64,
    },
    SliderPressed {
        slider: usize,
        pointer: Pointer,
        x: f64,
        scroll_left: f64,
    },
    SliderMoved {
        slider: usize,
        pointer: Pointer,
        x: f64,
    },
    SliderReleased {
        slider: usize,
        pointer: Pointer,
    },
    SliderLeft {
        slider: usize,
    },

    TimerFired {
        key: TimerKey,
        ticket: Ticket,
    },
}
