//! # Sidebar — off-canvas below the breakpoint, collapsible above it
//!
//! Two classes on `.app-container` drive the layout:
//!
//! | Viewport | Class | Meaning |
//! |----------|-------|---------|
//! | narrow (`< breakpoint`) | `sidebar-open` | off-canvas menu is showing |
//! | wide (`>= breakpoint`) | `sidebar-collapsed` | menu shrunk to icons |
//!
//! The last state is persisted as `open`, `collapsed` or `default`. A narrow page
//! never *starts* open; a wide page restores `collapsed`. The core keeps its own
//! mirror of both classes and of the stored value, so decisions never need to read
//! the DOM or storage back.

use crate::config::{millis, SidebarConfig};
use crate::debounce::{Debouncer, Ticket};
use crate::dom::{class, Target};
use crate::effect::{Effect, TimerKey};
use crate::event::ClickHit;

const OPEN: &str = "sidebar-open";
const COLLAPSED: &str = "sidebar-collapsed";

/// Persisted sidebar preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarState {
    Default,
    Collapsed,
    Open,
}

impl SidebarState {
    pub fn as_str(self) -> &'static str {
        match self {
            SidebarState::Default => "default",
            SidebarState::Collapsed => "collapsed",
            SidebarState::Open => "open",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(SidebarState::Default),
            "collapsed" => Some(SidebarState::Collapsed),
            "open" => Some(SidebarState::Open),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Sidebar {
    breakpoint: f64,
    storage_key: String,
    resize: Debouncer<f64>,
    open: bool,
    collapsed: bool,
    stored: Option<SidebarState>,
    /// Set once the page turned out to have a sidebar.
    wired: bool,
}

impl Sidebar {
    pub fn new(config: &SidebarConfig) -> Self {
        Self {
            breakpoint: config.breakpoint_px,
            storage_key: config.storage_key.clone(),
            resize: Debouncer::new(millis(config.resize_debounce_ms)),
            open: false,
            collapsed: false,
            stored: None,
            wired: false,
        }
    }

    fn narrow(&self, width: f64) -> bool {
        width < self.breakpoint
    }

    fn persist(&mut self, state: SidebarState) -> Effect {
        self.stored = Some(state);
        Effect::Persist {
            key: self.storage_key.clone(),
            value: state.as_str().to_string(),
        }
    }

    fn set_open(&mut self, open: bool) -> Effect {
        self.open = open;
        class(Target::AppContainer, OPEN, open).into()
    }

    fn set_collapsed(&mut self, collapsed: bool) -> Effect {
        self.collapsed = collapsed;
        class(Target::AppContainer, COLLAPSED, collapsed).into()
    }

    pub fn loaded(&mut self, width: f64, stored: Option<&str>) -> Vec<Effect> {
        self.stored = stored.and_then(SidebarState::parse);
        self.wired = true;
        if self.narrow(width) {
            let mut effects = vec![self.set_open(false)];
            if self.stored == Some(SidebarState::Open) {
                effects.push(self.persist(SidebarState::Default));
            }
            effects
        } else {
            let collapsed = self.stored == Some(SidebarState::Collapsed);
            vec![self.set_collapsed(collapsed)]
        }
    }

    pub fn toggled(&mut self, width: f64) -> Vec<Effect> {
        let toggle = if self.narrow(width) {
            self.set_open(!self.open)
        } else {
            self.set_collapsed(!self.collapsed)
        };
        let state = if self.open {
            SidebarState::Open
        } else if self.collapsed {
            SidebarState::Collapsed
        } else {
            SidebarState::Default
        };
        tracing::debug!("sidebar toggled to {}", state.as_str());
        vec![
            toggle,
            self.persist(state),
            Effect::PreventDefault,
            Effect::StopPropagation,
        ]
    }

    fn close(&mut self, width: f64) -> Vec<Effect> {
        if !self.wired || !self.narrow(width) || !self.open {
            return vec![];
        }
        vec![self.set_open(false), self.persist(SidebarState::Default)]
    }

    pub fn nav_link_clicked(&mut self, width: f64) -> Vec<Effect> {
        self.close(width)
    }

    pub fn document_clicked(&mut self, width: f64, hit: ClickHit) -> Vec<Effect> {
        if hit.sidebar {
            return vec![];
        }
        self.close(width)
    }

    pub fn resized(&mut self, width: f64) -> Option<Effect> {
        if !self.wired {
            return None;
        }
        Some(Effect::Arm {
            key: TimerKey::SidebarResize,
            ticket: self.resize.call(width),
            delay: self.resize.window(),
        })
    }

    pub fn resize_fired(&mut self, ticket: Ticket) -> Vec<Effect> {
        let Some(width) = self.resize.fire(ticket) else {
            return vec![];
        };
        if self.narrow(width) {
            vec![self.set_collapsed(false)]
        } else {
            let mut effects = vec![self.set_open(false)];
            if self.stored == Some(SidebarState::Collapsed) {
                effects.push(self.set_collapsed(true));
            }
            effects
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::DomOp;
    use std::time::Duration;

    fn new_sidebar() -> Sidebar {
        Sidebar::new(&SidebarConfig::default())
    }

    fn persisted(effects: &[Effect]) -> Option<&str> {
        effects.iter().find_map(|e| match e {
            Effect::Persist { value, .. } => Some(value.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_state_strings() {
        for state in [
            SidebarState::Default,
            SidebarState::Collapsed,
            SidebarState::Open,
        ] {
            assert_eq!(SidebarState::parse(state.as_str()), Some(state));
        }
        assert_eq!(SidebarState::parse("sideways"), None);
    }

    #[test]
    fn test_narrow_load_rewrites_open() {
        let mut sidebar = new_sidebar();
        let effects = sidebar.loaded(800.0, Some("open"));
        assert_eq!(
            effects[0],
            Effect::Dom(DomOp::RemoveClass(Target::AppContainer, OPEN))
        );
        assert_eq!(persisted(&effects), Some("default"));
    }

    #[test]
    fn test_narrow_load_leaves_other_states_alone() {
        let mut sidebar = new_sidebar();
        assert_eq!(persisted(&sidebar.loaded(800.0, Some("collapsed"))), None);
        assert_eq!(persisted(&sidebar.loaded(800.0, None)), None);
    }

    #[test]
    fn test_wide_load_restores_collapsed() {
        let mut sidebar = new_sidebar();
        assert_eq!(
            sidebar.loaded(1200.0, Some("collapsed")),
            vec![Effect::Dom(DomOp::AddClass(Target::AppContainer, COLLAPSED))]
        );
        let mut sidebar = new_sidebar();
        assert_eq!(
            sidebar.loaded(1200.0, Some("default")),
            vec![Effect::Dom(DomOp::RemoveClass(
                Target::AppContainer,
                COLLAPSED
            ))]
        );
    }

    #[test]
    fn test_toggle_narrow_opens_and_suppresses_click() {
        let mut sidebar = new_sidebar();
        sidebar.loaded(800.0, None);
        let effects = sidebar.toggled(800.0);
        assert_eq!(
            effects[0],
            Effect::Dom(DomOp::AddClass(Target::AppContainer, OPEN))
        );
        assert_eq!(persisted(&effects), Some("open"));
        assert!(effects.contains(&Effect::PreventDefault));
        assert!(effects.contains(&Effect::StopPropagation));

        let effects = sidebar.toggled(800.0);
        assert_eq!(persisted(&effects), Some("default"));
    }

    #[test]
    fn test_toggle_wide_collapses() {
        let mut sidebar = new_sidebar();
        sidebar.loaded(1200.0, None);
        assert_eq!(persisted(&sidebar.toggled(1200.0)), Some("collapsed"));
        assert_eq!(persisted(&sidebar.toggled(1200.0)), Some("default"));
    }

    #[test]
    fn test_outside_click_closes_only_when_open_and_narrow() {
        let mut sidebar = new_sidebar();
        sidebar.loaded(800.0, None);
        assert!(sidebar.document_clicked(800.0, ClickHit::default()).is_empty());

        sidebar.toggled(800.0);
        let inside = ClickHit {
            sidebar: true,
            ..ClickHit::default()
        };
        assert!(sidebar.document_clicked(800.0, inside).is_empty());
        assert!(sidebar.document_clicked(1200.0, ClickHit::default()).is_empty());

        let effects = sidebar.document_clicked(800.0, ClickHit::default());
        assert_eq!(persisted(&effects), Some("default"));
        assert!(sidebar.nav_link_clicked(800.0).is_empty());
    }

    #[test]
    fn test_resize_is_debounced() {
        let mut sidebar = new_sidebar();
        sidebar.loaded(800.0, Some("collapsed"));
        let tickets: Vec<Ticket> = [900.0, 1000.0, 1100.0]
            .into_iter()
            .map(|w| match sidebar.resized(w) {
                Some(Effect::Arm { ticket, delay, .. }) => {
                    assert_eq!(delay, Duration::from_millis(100));
                    ticket
                }
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert!(sidebar.resize_fired(tickets[0]).is_empty());
        assert_eq!(
            sidebar.resize_fired(tickets[2]),
            vec![
                Effect::Dom(DomOp::RemoveClass(Target::AppContainer, OPEN)),
                Effect::Dom(DomOp::AddClass(Target::AppContainer, COLLAPSED)),
            ]
        );
    }

    #[test]
    fn test_page_without_sidebar_ignores_resize() {
        let mut sidebar = new_sidebar();
        assert!(sidebar.resized(700.0).is_none());
        assert!(sidebar.document_clicked(700.0, ClickHit::default()).is_empty());
    }

    #[test]
    fn test_resize_to_narrow_drops_collapsed() {
        let mut sidebar = new_sidebar();
        sidebar.loaded(1200.0, Some("collapsed"));
        let Some(Effect::Arm { ticket, .. }) = sidebar.resized(700.0) else {
            panic!("expected a timer");
        };
        assert_eq!(
            sidebar.resize_fired(ticket),
            vec![Effect::Dom(DomOp::RemoveClass(
                Target::AppContainer,
                COLLAPSED
            ))]
        );
    }
}
