use crate::attendance::Attendance;
use crate::charts::Charts;
use crate::config::ChurchOpsConfig;
use crate::effect::{Effect, TimerKey};
use crate::event::Event;
use crate::filter::Filter;
use crate::flash::Flash;
use crate::hierarchy;
use crate::search::Search;
use crate::sidebar::Sidebar;
use crate::slider::Sliders;

/// UI state for every feature on a page.
///
/// `update` is pure: it folds one [`Event`] into the state and returns the
/// [`Effect`]s the host must carry out, in order.
#[derive(Debug)]
pub struct App {
    sidebar: Sidebar,
    flash: Flash,
    attendance: Attendance,
    search: Search,
    filter: Filter,
    charts: Charts,
    sliders: Sliders,
}

impl App {
    pub fn new(config: &ChurchOpsConfig) -> Self {
        Self {
            sidebar: Sidebar::new(&config.sidebar),
            flash: Flash::new(&config.attendance),
            attendance: Attendance::new(),
            search: Search::new(&config.search),
            filter: Filter::new(&config.filter),
            charts: Charts::new(&config.charts),
            sliders: Sliders::new(&config.slider),
        }
    }

    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        tracing::trace!("dispatch {:?}", event);
        match event {
            Event::SidebarLoaded { width, stored } => self.sidebar.loaded(width, stored.as_deref()),
            Event::SidebarToggled { width } => self.sidebar.toggled(width),
            Event::NavLinkClicked { width } => self.sidebar.nav_link_clicked(width),
            Event::DocumentClicked { width, hit } => {
                let mut effects = self.sidebar.document_clicked(width, hit);
                effects.extend(self.search.document_clicked(hit));
                effects
            }
            Event::WindowResized { width } => self
                .sidebar
                .resized(width)
                .into_iter()
                .chain(self.sliders.resized(width))
                .collect(),

            Event::AttendanceSubmitted {
                action,
                fields,
                label,
            } => self.attendance.submitted(&action, fields, label),
            Event::AttendanceCompleted {
                person_ids,
                outcome,
            } => self
                .attendance
                .completed(person_ids, outcome, &mut self.flash),
            Event::SelectAllChanged { index, checked } => {
                self.attendance.select_all(index, checked)
            }
            Event::AlertCloseClicked { id } => self.flash.dismiss(&id),

            Event::SearchInput { query, service_id } => {
                vec![self.search.input(&query, service_id)]
            }
            Event::SearchCompleted { seq, outcome } => self.search.completed(seq, outcome),
            Event::SearchItemToggled { person_id, checked } => {
                self.search.item_toggled(person_id, checked)
            }

            Event::HierarchyToggled {
                target,
                content_collapsed,
                toggle_collapsed,
            } => hierarchy::toggle(&target, content_collapsed, toggle_collapsed),

            Event::FilterSubmitted { action, query } => self.filter.submitted(action, query),
            Event::FilterFieldChanged {
                field,
                action,
                query,
            } => vec![self.filter.field_changed(field, action, query)],
            Event::FilterCompleted {
                seq,
                query,
                outcome,
            } => self.filter.completed(seq, query, outcome),

            Event::ChartsFound {
                library_loaded,
                containers,
            } => self.charts.found(library_loaded, containers),
            Event::ChartLibraryLoaded => self.charts.library_loaded(),

            Event::SlidersFound { count, width } => self.sliders.found(count, width),
            Event::SliderPressed {
                slider,
                pointer,
                x,
                scroll_left,
            } => self.sliders.pressed(slider, pointer, x, scroll_left),
            Event::SliderMoved { slider, pointer, x } => self.sliders.moved(slider, pointer, x),
            Event::SliderReleased { slider, pointer } => self.sliders.released(slider, pointer),
            Event::SliderLeft { slider } => self.sliders.left(slider),

            Event::TimerFired { key, ticket } => match key {
                TimerKey::SidebarResize => self.sidebar.resize_fired(ticket),
                TimerKey::SliderResize => self.sliders.resize_fired(ticket),
                TimerKey::Search => self.search.fired(ticket),
                TimerKey::FilterField(field) => self.filter.field_fired(&field, ticket),
                key @ (TimerKey::AlertAutoDismiss(_) | TimerKey::AlertRemoval(_)) => {
                    self.flash.timer_fired(key, ticket)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{DomOp, Target};
    use crate::event::ClickHit;

    #[test]
    fn test_resize_reaches_both_debouncers() {
        let mut app = App::new(&ChurchOpsConfig::default());
        app.update(Event::SidebarLoaded {
            width: 1200.0,
            stored: None,
        });
        app.update(Event::SlidersFound {
            count: 1,
            width: 1200.0,
        });
        let keys: Vec<TimerKey> = app
            .update(Event::WindowResized { width: 700.0 })
            .into_iter()
            .filter_map(|e| match e {
                Effect::Arm { key, .. } => Some(key),
                _ => None,
            })
            .collect();
        assert_eq!(keys, vec![TimerKey::SidebarResize, TimerKey::SliderResize]);
    }

    #[test]
    fn test_click_outside_closes_sidebar_and_clears_search() {
        let mut app = App::new(&ChurchOpsConfig::default());
        app.update(Event::SidebarLoaded {
            width: 600.0,
            stored: None,
        });
        app.update(Event::SidebarToggled { width: 600.0 });
        let armed = app.update(Event::SearchInput {
            query: "ann".to_string(),
            service_id: None,
        });
        let Some(Effect::Arm { key, ticket, .. }) = armed.into_iter().next() else {
            panic!("expected a timer");
        };
        app.update(Event::TimerFired { key, ticket });

        let effects = app.update(Event::DocumentClicked {
            width: 600.0,
            hit: ClickHit::default(),
        });
        assert!(effects.contains(&Effect::Dom(DomOp::RemoveClass(
            Target::AppContainer,
            "sidebar-open"
        ))));
        assert!(effects.contains(&Effect::Dom(DomOp::SetHtml(
            Target::SearchResults,
            String::new()
        ))));
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut app = App::new(&ChurchOpsConfig::default());
        let first = app.update(Event::SearchInput {
            query: "an".to_string(),
            service_id: None,
        });
        app.update(Event::SearchInput {
            query: "ann".to_string(),
            service_id: None,
        });
        let Some(Effect::Arm { key, ticket, .. }) = first.into_iter().next() else {
            panic!("expected a timer");
        };
        assert!(app.update(Event::TimerFired { key, ticket }).is_empty());
    }
}
