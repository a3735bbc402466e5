//! # DOM operations — what the core asks the page to change
//!
//! The dispatch core never holds an element. It names elements through [`Target`]
//! (resolved by the host against the server-rendered markup) and describes changes as
//! [`DomOp`] values. A target that resolves to nothing makes its operation a no-op;
//! that is how "row not on this page" or "no `.pagination` block" are handled.
//!
//! | Target | Resolves to |
//! |--------|-------------|
//! | `AppContainer` | `.app-container` |
//! | `SubmitButton` | `#attendance-form button[type="submit"]` |
//! | `FlashMessages` | `.flash-messages` |
//! | `Alert(id)` | `#id` (a flash alert) |
//! | `PersonRow(id)` | closest `tr, .person-item` of the `person_ids` checkbox with that value |
//! | `SelectAllScope(n)` | `person_ids` checkboxes in the container of the n-th `.select-all` |
//! | `SearchResults` | `#search-results` |
//! | `SearchResultItem(id)` | `.search-result-item` holding that person |
//! | `HierarchyToggle(t)` / `HierarchyContent(t)` / `ToggleIcon(t)` | `.hierarchy-toggle[data-target=t]`, `#t`, the toggle's `.toggle-icon` |
//! | `TableBody` | `table tbody` |
//! | `PaginationInfo` / `PaginationPrev` / `PaginationNext` | `.pagination-info`, first / last `.pagination-controls a` |
//! | `Slider(n)` / `SliderItems(n)` | n-th `.slider, [data-slider]` / its children |

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    AppContainer,
    SubmitButton,
    FlashMessages,
    Alert(String),
    PersonRow(String),
    SelectAllScope(usize),
    SearchResults,
    SearchResultItem(String),
    HierarchyToggle(String),
    HierarchyContent(String),
    ToggleIcon(String),
    TableBody,
    PaginationInfo,
    PaginationPrev,
    PaginationNext,
    Slider(usize),
    SliderItems(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DomOp {
    AddClass(Target, &'static str),
    RemoveClass(Target, &'static str),
    /// Replace the children with parsed markup.
    SetHtml(Target, String),
    /// Parse markup and append it after the last child.
    AppendHtml(Target, String),
    SetText(Target, String),
    SetAttribute(Target, &'static str, String),
    SetDisabled(Target, bool),
    SetChecked(Target, bool),
    SetStyle(Target, &'static str, &'static str),
    SetScrollLeft(Target, f64),
    ScrollIntoView(Target),
    Remove(Target),
}

impl DomOp {
    pub fn target(&self) -> &Target {
        match self {
            DomOp::AddClass(t, _)
            | DomOp::RemoveClass(t, _)
            | DomOp::SetHtml(t, _)
            | DomOp::AppendHtml(t, _)
            | DomOp::SetText(t, _)
            | DomOp::SetAttribute(t, _, _)
            | DomOp::SetDisabled(t, _)
            | DomOp::SetChecked(t, _)
            | DomOp::SetStyle(t, _, _)
            | DomOp::SetScrollLeft(t, _)
            | DomOp::ScrollIntoView(t)
            | DomOp::Remove(t) => t,
        }
    }
}

/// `AddClass` when `on`, `RemoveClass` otherwise.
pub fn class(target: Target, name: &'static str, on: bool) -> DomOp {
    if on {
        DomOp::AddClass(target, name)
    } else {
        DomOp::RemoveClass(target, name)
    }
}
