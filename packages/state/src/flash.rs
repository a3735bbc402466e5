//! Flash alerts: appending, auto-dismissal and the fade-out-then-remove sequence.
//!
//! Alerts created here get ids `flash-<n>`; server-rendered ones get theirs from the
//! adapter. Either way an id is dismissed at most once.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use ui::AlertKind;

use crate::config::{millis, AttendanceConfig};
use crate::debounce::Ticket;
use crate::dom::{DomOp, Target};
use crate::effect::{Effect, TimerKey};

#[derive(Debug)]
pub struct Flash {
    auto_dismiss: Duration,
    fade_out: Duration,
    next_id: u64,
    issued: u64,
    armed: HashMap<TimerKey, Ticket>,
    dismissed: HashSet<String>,
}

impl Flash {
    pub fn new(config: &AttendanceConfig) -> Self {
        Self {
            auto_dismiss: millis(config.auto_dismiss_ms),
            fade_out: millis(config.fade_out_ms),
            next_id: 0,
            issued: 0,
            armed: HashMap::new(),
            dismissed: HashSet::new(),
        }
    }

    fn arm(&mut self, key: TimerKey, delay: Duration) -> Effect {
        self.issued += 1;
        let ticket = Ticket::new(self.issued);
        self.armed.insert(key.clone(), ticket);
        Effect::Arm { key, ticket, delay }
    }

    /// Append an alert to `.flash-messages`. Success alerts scroll into view and
    /// dismiss themselves.
    pub fn show(&mut self, kind: AlertKind, message: &str) -> Vec<Effect> {
        self.next_id += 1;
        let id = format!("flash-{}", self.next_id);
        let markup = ui::flash_alert(&id, kind, message).into_string();
        let mut effects = vec![DomOp::AppendHtml(Target::FlashMessages, markup).into()];
        if kind == AlertKind::Success {
            effects.push(DomOp::ScrollIntoView(Target::Alert(id.clone())).into());
            effects.push(self.arm(TimerKey::AlertAutoDismiss(id), self.auto_dismiss));
        }
        effects
    }

    /// Start fading an alert out; it is removed once the fade finishes.
    pub fn dismiss(&mut self, id: &str) -> Vec<Effect> {
        if !self.dismissed.insert(id.to_string()) {
            return vec![];
        }
        self.armed.remove(&TimerKey::AlertAutoDismiss(id.to_string()));
        vec![
            DomOp::AddClass(Target::Alert(id.to_string()), "fade-out").into(),
            self.arm(TimerKey::AlertRemoval(id.to_string()), self.fade_out),
        ]
    }

    pub fn timer_fired(&mut self, key: TimerKey, ticket: Ticket) -> Vec<Effect> {
        if self.armed.get(&key) != Some(&ticket) {
            return vec![];
        }
        self.armed.remove(&key);
        match key {
            TimerKey::AlertAutoDismiss(id) => self.dismiss(&id),
            TimerKey::AlertRemoval(id) => {
                self.dismissed.remove(&id);
                vec![DomOp::Remove(Target::Alert(id)).into()]
            }
            _ => vec![],
        }
    }
}
