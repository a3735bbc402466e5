use api::SearchResult;
use maud::{html, Markup};

/// Result list for the people search typeahead.
///
/// Each item carries a `person_ids` checkbox so a match can be ticked straight into
/// the attendance form; people already recorded come pre-checked and `marked`.
pub fn search_results(results: &[SearchResult]) -> Markup {
    html! {
        ul.search-results-list {
            @for person in results {
                li.search-result-item.marked[person.marked] data-person-id=(person.id) {
                    div.search-result-info {
                        div.search-result-name { (person.name) }
                        div.search-result-path {
                            @for (depth, level) in person.hierarchy().iter().enumerate() {
                                @if depth > 0 { " \u{00BB} " }
                                (level)
                            }
                        }
                    }
                    div.search-result-action {
                        label.form-check {
                            input type="checkbox" name="person_ids" value=(person.id)
                                class="form-check-input" checked[person.marked];
                            span.form-check-label { "Mark" }
                        }
                    }
                }
            }
        }
    }
}

pub fn search_empty() -> Markup {
    html! { div.search-empty { "No results found" } }
}

pub fn search_error() -> Markup {
    html! { div.search-error { "Error searching for people" } }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: i64, name: &str, marked: bool) -> SearchResult {
        SearchResult {
            id,
            name: name.to_string(),
            region: "North".to_string(),
            direction: "D1".to_string(),
            department: "Choir".to_string(),
            team: "Tenors".to_string(),
            cell: "C3".to_string(),
            marked,
        }
    }

    #[test]
    fn test_marked_person_is_prechecked() {
        let html = search_results(&[person(4, "Ada Obi", true)]).into_string();
        assert!(html.contains(r#"<li class="search-result-item marked" data-person-id="4">"#));
        assert!(html.contains(r#"value="4" class="form-check-input" checked>"#));
    }

    #[test]
    fn test_unmarked_person() {
        let html = search_results(&[person(5, "Kofi Mensah", false)]).into_string();
        assert!(html.contains(r#"<li class="search-result-item" data-person-id="5">"#));
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_hierarchy_path() {
        let html = search_results(&[person(1, "A", false)]).into_string();
        assert!(html.contains("North » D1 » Choir » Tenors » C3"));
    }

    #[test]
    fn test_names_are_escaped() {
        let html = search_results(&[person(2, "<script>x</script>", false)]).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            search_empty().into_string(),
            r#"<div class="search-empty">No results found</div>"#
        );
        assert_eq!(
            search_error().into_string(),
            r#"<div class="search-error">Error searching for people</div>"#
        );
    }
}
