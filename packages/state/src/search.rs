//! # People search — debounced lookup into `#search-results`
//!
//! Input is trimmed and debounced; once the window passes a query of at least
//! `min_query_chars` characters goes to the search endpoint, anything shorter just
//! clears the results. Every request carries a [`Seq`] token and only the latest one
//! may touch the results container, so a slow early response can never overwrite a
//! later one. Clearing (short query or a click elsewhere) invalidates whatever is in
//! flight.

use api::{ApiError, SearchResult};

use crate::config::{millis, SearchConfig};
use crate::debounce::{Debouncer, Ticket};
use crate::dom::{class, DomOp, Target};
use crate::effect::{Completion, Effect, PendingRequest, TimerKey};
use crate::event::ClickHit;
use crate::sequence::{RequestSequence, Seq};

/// Trimmed query plus the `data-service-id` of the input.
type SearchArgs = (String, Option<String>);

#[derive(Debug)]
pub struct Search {
    endpoint: String,
    min_chars: usize,
    debounce: Debouncer<SearchArgs>,
    seq: RequestSequence,
    /// Results, a placeholder or a request may be on their way into the container.
    showing: bool,
}

impl Search {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            min_chars: config.min_query_chars,
            debounce: Debouncer::new(millis(config.debounce_ms)),
            seq: RequestSequence::new(),
            showing: false,
        }
    }

    pub fn input(&mut self, query: &str, service_id: Option<String>) -> Effect {
        let ticket = self.debounce.call((query.trim().to_string(), service_id));
        Effect::Arm {
            key: TimerKey::Search,
            ticket,
            delay: self.debounce.window(),
        }
    }

    fn clear(&mut self) -> Effect {
        self.seq.invalidate();
        self.showing = false;
        DomOp::SetHtml(Target::SearchResults, String::new()).into()
    }

    pub fn fired(&mut self, ticket: Ticket) -> Vec<Effect> {
        let Some((query, service_id)) = self.debounce.fire(ticket) else {
            return vec![];
        };
        if query.chars().count() < self.min_chars {
            return vec![self.clear()];
        }

        let seq = self.seq.issue();
        self.showing = true;
        tracing::debug!("searching people for {:?}", query);
        let request = api::request::search_people(&self.endpoint, &query, service_id.as_deref());
        vec![Effect::Request(PendingRequest {
            request,
            completion: Completion::Search { seq },
        })]
    }

    pub fn completed(
        &mut self,
        seq: Seq,
        outcome: Result<Vec<SearchResult>, ApiError>,
    ) -> Vec<Effect> {
        if !self.seq.is_current(seq) {
            tracing::debug!("dropping stale search response {:?}", seq);
            return vec![];
        }
        let markup = match outcome {
            Ok(results) if results.is_empty() => ui::search_empty(),
            Ok(results) => ui::search_results(&results),
            Err(e) => {
                tracing::error!("Search error: {}", e);
                ui::search_error()
            }
        };
        vec![DomOp::SetHtml(Target::SearchResults, markup.into_string()).into()]
    }

    pub fn item_toggled(&self, person_id: String, checked: bool) -> Vec<Effect> {
        vec![class(Target::SearchResultItem(person_id), "marked", checked).into()]
    }

    pub fn document_clicked(&mut self, hit: ClickHit) -> Vec<Effect> {
        if hit.search || !self.showing {
            return vec![];
        }
        vec![self.clear()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search() -> Search {
        Search::new(&SearchConfig::default())
    }

    fn fire_query(search: &mut Search, query: &str) -> Vec<Effect> {
        let Effect::Arm { ticket, .. } = search.input(query, Some("12".to_string())) else {
            panic!("expected a timer");
        };
        search.fired(ticket)
    }

    fn issued(effects: &[Effect]) -> Option<(String, Seq)> {
        effects.iter().find_map(|e| match e {
            Effect::Request(PendingRequest {
                request,
                completion: Completion::Search { seq },
            }) => Some((request.url.clone(), *seq)),
            _ => None,
        })
    }

    fn person(id: i64, name: &str) -> SearchResult {
        SearchResult {
            id,
            name: name.to_string(),
            region: "North".to_string(),
            direction: "D1".to_string(),
            department: "Dept".to_string(),
            team: "T".to_string(),
            cell: "C".to_string(),
            marked: false,
        }
    }

    #[test]
    fn test_short_query_clears_without_request() {
        let mut search = search();
        let effects = fire_query(&mut search, " a ");
        assert_eq!(
            effects,
            vec![Effect::Dom(DomOp::SetHtml(Target::SearchResults, String::new()))]
        );
    }

    #[test]
    fn test_query_is_trimmed_and_sent() {
        let mut search = search();
        let (url, _) = issued(&fire_query(&mut search, "  ab ")).expect("request");
        assert_eq!(url, "/api/people/search?query=ab&service_id=12");
    }

    #[test]
    fn test_burst_sends_only_last_query() {
        let mut search = search();
        let tickets: Vec<Ticket> = ["a", "ab", "abc"]
            .into_iter()
            .filter_map(|q| match search.input(q, None) {
                Effect::Arm { ticket, .. } => Some(ticket),
                _ => None,
            })
            .collect();
        let requests: Vec<String> = tickets
            .into_iter()
            .filter_map(|t| issued(&search.fired(t)).map(|(url, _)| url))
            .collect();
        assert_eq!(requests, vec!["/api/people/search?query=abc".to_string()]);
    }

    #[test]
    fn test_results_render() {
        let mut search = search();
        let (_, seq) = issued(&fire_query(&mut search, "ann")).expect("request");
        let effects = search.completed(seq, Ok(vec![person(7, "Ann Lee")]));
        match &effects[0] {
            Effect::Dom(DomOp::SetHtml(Target::SearchResults, html)) => {
                assert!(html.contains("Ann Lee"));
                assert!(html.contains(r#"value="7""#));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_error_placeholders() {
        let mut search = search();
        let (_, seq) = issued(&fire_query(&mut search, "zz")).expect("request");
        let empty = search.completed(seq, Ok(vec![]));
        assert!(matches!(
            &empty[0],
            Effect::Dom(DomOp::SetHtml(_, html)) if html.contains("No results found")
        ));

        let (_, seq) = issued(&fire_query(&mut search, "zzz")).expect("request");
        let failed = search.completed(seq, Err(ApiError::Transport("offline".to_string())));
        assert!(matches!(
            &failed[0],
            Effect::Dom(DomOp::SetHtml(_, html)) if html.contains("Error searching for people")
        ));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut search = search();
        let (_, first) = issued(&fire_query(&mut search, "an")).expect("request");
        let (_, second) = issued(&fire_query(&mut search, "ann")).expect("request");
        assert!(search.completed(first, Ok(vec![person(1, "Old")])).is_empty());
        assert_eq!(search.completed(second, Ok(vec![])).len(), 1);
    }

    #[test]
    fn test_outside_click_clears_and_invalidates() {
        let mut search = search();
        let (_, seq) = issued(&fire_query(&mut search, "ann")).expect("request");
        let inside = ClickHit {
            search: true,
            ..ClickHit::default()
        };
        assert!(search.document_clicked(inside).is_empty());
        assert_eq!(search.document_clicked(ClickHit::default()).len(), 1);
        assert!(search.completed(seq, Ok(vec![person(1, "Late")])).is_empty());
        assert!(search.document_clicked(ClickHit::default()).is_empty());
    }

    #[test]
    fn test_item_toggle_marks_item() {
        let search = search();
        assert_eq!(
            search.item_toggled("7".to_string(), false),
            vec![Effect::Dom(DomOp::RemoveClass(
                Target::SearchResultItem("7".to_string()),
                "marked"
            ))]
        );
    }
}
