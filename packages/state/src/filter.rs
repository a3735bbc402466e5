//! # Filter form — live refresh of the saints table
//!
//! Submitting refreshes at once; each watched field has its own debouncer, so a
//! burst of changes on one dropdown produces a single refresh while changes on two
//! different dropdowns each get theirs. A refresh always uses the most recent form
//! snapshot the adapter reported, whichever field triggered it.
//!
//! The flow of one refresh:
//!
//! ```text
//! tbody <- "Loading..."  ->  GET <action>?<fields>&ajax=true  ->  rows / placeholder
//!                                                             ->  pagination links
//!                                                             ->  history.replaceState
//! ```
//!
//! Responses carry a [`Seq`]; only the latest refresh may write the table.

use std::collections::HashMap;
use std::time::Duration;

use api::{ApiError, FilterResponse, FormQuery, Pagination};

use crate::config::{millis, FilterConfig};
use crate::debounce::{Debouncer, Ticket};
use crate::dom::{DomOp, Target};
use crate::effect::{Completion, Effect, PendingRequest, TimerKey};
use crate::sequence::{RequestSequence, Seq};

#[derive(Debug)]
pub struct Filter {
    name_field: String,
    select_window: Duration,
    name_window: Duration,
    fields: HashMap<String, Debouncer<()>>,
    action: String,
    latest: FormQuery,
    seq: RequestSequence,
}

impl Filter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            name_field: config.name_field.clone(),
            select_window: millis(config.select_debounce_ms),
            name_window: millis(config.name_debounce_ms),
            fields: HashMap::new(),
            action: String::new(),
            latest: FormQuery::new(),
            seq: RequestSequence::new(),
        }
    }

    fn window_for(&self, field: &str) -> Duration {
        if field == self.name_field {
            self.name_window
        } else {
            self.select_window
        }
    }

    pub fn submitted(&mut self, action: String, query: FormQuery) -> Vec<Effect> {
        self.action = action;
        self.latest = query;
        let mut effects = vec![Effect::PreventDefault];
        effects.extend(self.refresh());
        effects
    }

    pub fn field_changed(&mut self, field: String, action: String, query: FormQuery) -> Effect {
        self.action = action;
        self.latest = query;
        let window = self.window_for(&field);
        let debouncer = self
            .fields
            .entry(field.clone())
            .or_insert_with(|| Debouncer::new(window));
        Effect::Arm {
            key: TimerKey::FilterField(field),
            ticket: debouncer.call(()),
            delay: window,
        }
    }

    pub fn field_fired(&mut self, field: &str, ticket: Ticket) -> Vec<Effect> {
        let fired = self
            .fields
            .get_mut(field)
            .and_then(|debouncer| debouncer.fire(ticket));
        match fired {
            Some(()) => self.refresh(),
            None => vec![],
        }
    }

    fn refresh(&mut self) -> Vec<Effect> {
        let seq = self.seq.issue();
        let request = api::request::load_filtered(&self.action, &self.latest);
        tracing::debug!("refreshing table from {}", request.url);
        vec![
            DomOp::SetHtml(Target::TableBody, ui::table_message(ui::TABLE_LOADING).into_string())
                .into(),
            Effect::Request(PendingRequest {
                request,
                completion: Completion::Filter {
                    seq,
                    query: self.latest.clone(),
                },
            }),
        ]
    }

    pub fn completed(
        &mut self,
        seq: Seq,
        query: FormQuery,
        outcome: Result<FilterResponse, ApiError>,
    ) -> Vec<Effect> {
        if !self.seq.is_current(seq) {
            tracing::debug!("dropping stale filter response {:?}", seq);
            return vec![];
        }
        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error loading filtered data: {}", e);
                let row = ui::table_message(ui::TABLE_ERROR).into_string();
                return vec![DomOp::SetHtml(Target::TableBody, row).into()];
            }
        };

        let body = if response.people.is_empty() {
            ui::table_message(ui::TABLE_EMPTY)
        } else {
            ui::person_rows(&response.people)
        };
        let mut effects = vec![DomOp::SetHtml(Target::TableBody, body.into_string()).into()];
        if let Some(pagination) = &response.pagination {
            effects.extend(self.pagination(&query, pagination));
        }
        effects.push(Effect::ReplaceUrl(query.url_with(&self.action, &[])));
        effects
    }

    fn pagination(&self, query: &FormQuery, pagination: &Pagination) -> Vec<Effect> {
        let mut effects = vec![DomOp::SetText(Target::PaginationInfo, pagination.label()).into()];
        let controls = [
            (Target::PaginationPrev, pagination.has_prev, pagination.prev_target()),
            (Target::PaginationNext, pagination.has_next, pagination.next_target()),
        ];
        for (target, enabled, page) in controls {
            if !enabled {
                effects.push(DomOp::AddClass(target, "disabled").into());
                continue;
            }
            if let Some(page) = page {
                let href = query.url_with(&self.action, &[("page", &page.to_string())]);
                effects.push(DomOp::SetAttribute(target.clone(), "href", href).into());
            }
            effects.push(DomOp::RemoveClass(target, "disabled").into());
        }
        effects
    }
}
