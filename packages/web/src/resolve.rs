//! # Target resolution — which elements a [`Target`] means
//!
//! The selector table lives here, written against the small [`Dom`] trait rather
//! than web-sys, so the scoping rules can be checked without a browser. The
//! browser implementation is `page::Page`.

use state::Target;

pub const SELECT_ALL: &str = ".select-all";
pub const SELECT_ALL_SCOPE: &str = ".cell-content, .team-content, .department-content";
pub const PERSON_IDS: &str = r#"input[name="person_ids"]"#;
pub const PERSON_ROW: &str = "tr, .person-item";
pub const HIERARCHY_TOGGLE: &str = ".hierarchy-toggle";
pub const REPORT_CHART: &str = ".report-chart";
pub const SLIDERS: &str = ".slider, [data-slider]";

/// The DOM queries target resolution needs.
pub trait Dom {
    type Element: Clone;

    fn by_id(&self, id: &str) -> Option<Self::Element>;
    /// Elements matching `selector` under `root`, or in the whole document.
    fn select_all(&self, root: Option<&Self::Element>, selector: &str) -> Vec<Self::Element>;
    /// `element` itself or its nearest ancestor matching `selector`.
    fn closest(&self, element: &Self::Element, selector: &str) -> Option<Self::Element>;
    fn children(&self, element: &Self::Element) -> Vec<Self::Element>;
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    /// An input's current value.
    fn value(&self, element: &Self::Element) -> Option<String>;

    fn first(&self, selector: &str) -> Option<Self::Element> {
        self.select_all(None, selector).into_iter().next()
    }
}

/// Every element `target` refers to right now; empty when nothing matches.
pub fn resolve<D: Dom>(dom: &D, target: &Target) -> Vec<D::Element> {
    match target {
        Target::AppContainer => dom.first(".app-container").into_iter().collect(),
        Target::SubmitButton => dom
            .first(r#"#attendance-form button[type="submit"]"#)
            .into_iter()
            .collect(),
        Target::FlashMessages => dom.first(".flash-messages").into_iter().collect(),
        Target::Alert(id) | Target::HierarchyContent(id) => dom.by_id(id).into_iter().collect(),
        Target::PersonRow(person_id) => person_checkboxes(dom, None, person_id)
            .first()
            .and_then(|checkbox| dom.closest(checkbox, PERSON_ROW))
            .into_iter()
            .collect(),
        Target::SelectAllScope(index) => dom
            .select_all(None, SELECT_ALL)
            .get(*index)
            .and_then(|checkbox| dom.closest(checkbox, SELECT_ALL_SCOPE))
            .map(|scope| dom.select_all(Some(&scope), PERSON_IDS))
            .unwrap_or_default(),
        Target::SearchResults => dom.by_id("search-results").into_iter().collect(),
        Target::SearchResultItem(person_id) => {
            let Some(results) = dom.by_id("search-results") else {
                return Vec::new();
            };
            person_checkboxes(dom, Some(&results), person_id)
                .iter()
                .filter_map(|checkbox| dom.closest(checkbox, ".search-result-item"))
                .collect()
        }
        Target::HierarchyToggle(name) => hierarchy_toggles(dom, name),
        Target::ToggleIcon(name) => hierarchy_toggles(dom, name)
            .iter()
            .flat_map(|toggle| dom.select_all(Some(toggle), ".toggle-icon").into_iter().take(1))
            .collect(),
        Target::TableBody => dom.first("table tbody").into_iter().collect(),
        Target::PaginationInfo => dom
            .first(".pagination .pagination-info")
            .into_iter()
            .collect(),
        Target::PaginationPrev => dom
            .first(".pagination .pagination-controls a:first-child")
            .into_iter()
            .collect(),
        Target::PaginationNext => dom
            .first(".pagination .pagination-controls a:last-child")
            .into_iter()
            .collect(),
        Target::Slider(index) => dom
            .select_all(None, SLIDERS)
            .into_iter()
            .nth(*index)
            .into_iter()
            .collect(),
        Target::SliderItems(index) => dom
            .select_all(None, SLIDERS)
            .get(*index)
            .map(|slider| dom.children(slider))
            .unwrap_or_default(),
    }
}

/// `person_ids` checkboxes under `root` (or the whole document) with this value.
fn person_checkboxes<D: Dom>(
    dom: &D,
    root: Option<&D::Element>,
    person_id: &str,
) -> Vec<D::Element> {
    dom.select_all(root, PERSON_IDS)
        .into_iter()
        .filter(|input| dom.value(input).as_deref() == Some(person_id))
        .collect()
}

fn hierarchy_toggles<D: Dom>(dom: &D, name: &str) -> Vec<D::Element> {
    dom.select_all(None, HIERARCHY_TOGGLE)
        .into_iter()
        .filter(|toggle| dom.attribute(toggle, "data-target").as_deref() == Some(name))
        .collect()
}
