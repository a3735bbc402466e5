//! Event listeners, one function per feature.
//!
//! Each function looks for its elements and returns quietly when the page does not
//! have them, so one missing feature never stops the others from wiring.

use std::rc::Rc;

use state::{ChartContainer, ChurchOpsConfig, ClickHit, Event, KeyValueStore, Pointer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Element, EventTarget, HtmlFormElement, HtmlInputElement, MouseEvent,
    Node, TouchEvent,
};

use crate::host::chart_constructor;
use crate::page::{self, log_js_error};
use crate::resolve::{HIERARCHY_TOGGLE, REPORT_CHART, SELECT_ALL, SLIDERS};
use crate::{handle, PageRuntime};

fn listen<T, F>(target: &T, kind: &str, handler: F)
where
    T: AsRef<EventTarget>,
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(e) = target
        .as_ref()
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        log_js_error(kind, e);
    }
    closure.forget();
}

/// Like [`listen`], but allowed to call `preventDefault` on touch events.
fn listen_active<T, F>(target: &T, kind: &str, handler: F)
where
    T: AsRef<EventTarget>,
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    if let Err(e) = target
        .as_ref()
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )
    {
        log_js_error(kind, e);
    }
    closure.forget();
}

fn event_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn input_value(element: &Element) -> Option<(String, bool)> {
    let input = element.dyn_ref::<HtmlInputElement>()?;
    Some((input.value(), input.checked()))
}

pub fn sidebar(runtime: &Rc<PageRuntime>, config: &ChurchOpsConfig) {
    let toggle = page::by_id("sidebar-toggle");
    let sidebar = page::by_id("sidebar");
    let container = page::first(".app-container");
    let (Some(toggle), Some(_), Some(_)) = (&toggle, &sidebar, &container) else {
        tracing::error!(
            "Mobile menu elements not found: hamburger={} sidebar={} appContainer={}",
            toggle.is_some(),
            sidebar.is_some(),
            container.is_some()
        );
        return;
    };

    let rt = Rc::clone(runtime);
    listen(toggle, "click", move |e| {
        handle(&rt, &e, Event::SidebarToggled { width: page::width() });
    });

    for link in page::all(".sidebar .nav-link") {
        let rt = Rc::clone(runtime);
        listen(&link, "click", move |e| {
            handle(&rt, &e, Event::NavLinkClicked { width: page::width() });
        });
    }

    let stored = runtime.store().get(&config.sidebar.storage_key);
    crate::fire(
        runtime,
        Event::SidebarLoaded {
            width: page::width(),
            stored,
        },
    );
    tracing::info!("sidebar wired");
}

/// One document-level click handler: alert close buttons, plus the outside-click
/// checks for the sidebar and the search results.
pub fn document_clicks(runtime: &Rc<PageRuntime>) {
    let Some(document) = page::document() else {
        return;
    };
    let rt = Rc::clone(runtime);
    listen(&document, "click", move |e| {
        let clicked = event_element(&e);
        let alert = clicked
            .as_ref()
            .and_then(|el| page::closest(el, ".alert-close"))
            .and_then(|close| page::closest(&close, ".alert"));
        if let Some(alert) = alert {
            handle(&rt, &e, Event::AlertCloseClicked { id: alert_id(&alert) });
        }

        let node: Option<Node> = clicked.map(Node::from);
        let inside = |ids: &[&str]| {
            ids.iter()
                .any(|id| page::contains(page::by_id(id).as_ref(), node.as_ref()))
        };
        let hit = ClickHit {
            sidebar: inside(&["sidebar", "sidebar-toggle"]),
            search: inside(&["search-people", "search-results"]),
        };
        handle(
            &rt,
            &e,
            Event::DocumentClicked {
                width: page::width(),
                hit,
            },
        );
    });
}

thread_local! {
    static NEXT_ALERT: std::cell::Cell<u32> = const { std::cell::Cell::new(0) };
}

/// The alert's id, assigning `alert-<n>` to server-rendered alerts that have none.
fn alert_id(alert: &Element) -> String {
    let id = alert.id();
    if !id.is_empty() {
        return id;
    }
    let n = NEXT_ALERT.with(|next| {
        next.set(next.get() + 1);
        next.get()
    });
    let id = format!("alert-{}", n);
    alert.set_id(&id);
    id
}

pub fn resize(runtime: &Rc<PageRuntime>) {
    let Some(window) = page::window() else {
        return;
    };
    let rt = Rc::clone(runtime);
    listen(&window, "resize", move |e| {
        handle(&rt, &e, Event::WindowResized { width: page::width() });
    });
}

pub fn attendance(runtime: &Rc<PageRuntime>) {
    let Some(form) = page::by_id("attendance-form")
        .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let rt = Rc::clone(runtime);
    let submitted = form.clone();
    listen(&form, "submit", move |e| {
        let fields = match page::form_fields(&submitted) {
            Ok(fields) => fields,
            Err(err) => {
                log_js_error("could not read attendance form", err);
                return;
            }
        };
        let label = submitted
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|button| button.text_content())
            .unwrap_or_default();
        handle(
            &rt,
            &e,
            Event::AttendanceSubmitted {
                action: submitted.action(),
                fields,
                label,
            },
        );
    });

    for (index, checkbox) in page::all(SELECT_ALL).into_iter().enumerate() {
        let rt = Rc::clone(runtime);
        listen(&checkbox, "change", move |e| {
            let checked = event_element(&e)
                .and_then(|el| input_value(&el))
                .map(|(_, checked)| checked)
                .unwrap_or(false);
            handle(&rt, &e, Event::SelectAllChanged { index, checked });
        });
    }
    tracing::info!("attendance form wired");
}

pub fn search(runtime: &Rc<PageRuntime>) {
    let Some(input) = page::by_id("search-people") else {
        return;
    };

    let rt = Rc::clone(runtime);
    listen(&input, "input", move |e| {
        let Some(element) = event_element(&e) else {
            return;
        };
        let query = input_value(&element).map(|(q, _)| q).unwrap_or_default();
        let service_id = element.get_attribute("data-service-id");
        handle(&rt, &e, Event::SearchInput { query, service_id });
    });

    if let Some(results) = page::by_id("search-results") {
        let rt = Rc::clone(runtime);
        listen(&results, "change", move |e| {
            let Some(element) = event_element(&e) else {
                return;
            };
            if element.get_attribute("name").as_deref() != Some("person_ids") {
                return;
            }
            if let Some((person_id, checked)) = input_value(&element) {
                handle(&rt, &e, Event::SearchItemToggled { person_id, checked });
            }
        });
    }
    tracing::info!("people search wired");
}

pub fn hierarchy(runtime: &Rc<PageRuntime>) {
    let toggles = page::all(HIERARCHY_TOGGLE);
    if toggles.is_empty() {
        return;
    }
    for toggle in &toggles {
        let rt = Rc::clone(runtime);
        let element = toggle.clone();
        listen(toggle, "click", move |e| {
            let target = element.get_attribute("data-target").unwrap_or_default();
            let content_collapsed = page::by_id(&target)
                .map(|content| content.class_list().contains("collapsed"));
            let toggle_collapsed = element.class_list().contains("collapsed");
            handle(
                &rt,
                &e,
                Event::HierarchyToggled {
                    target,
                    content_collapsed,
                    toggle_collapsed,
                },
            );
        });
    }
    tracing::info!("{} hierarchy toggles wired", toggles.len());
}

pub fn filter(runtime: &Rc<PageRuntime>, config: &ChurchOpsConfig) {
    let Some(form) = page::by_id("filter-form")
        .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    if form.class_list().contains("no-ajax") {
        return;
    }

    let rt = Rc::clone(runtime);
    let submitted = form.clone();
    listen(&form, "submit", move |e| match page::form_fields(&submitted) {
        Ok(query) => handle(
            &rt,
            &e,
            Event::FilterSubmitted {
                action: submitted.action(),
                query,
            },
        ),
        Err(err) => log_js_error("could not read filter form", err),
    });

    let watched = config
        .filter
        .watched_fields
        .iter()
        .map(|field| (field.clone(), "change"))
        .chain(std::iter::once((config.filter.name_field.clone(), "input")));
    for (field, kind) in watched {
        let Some(element) = page::by_id(&field) else {
            continue;
        };
        let rt = Rc::clone(runtime);
        let form = form.clone();
        listen(&element, kind, move |e| match page::form_fields(&form) {
            Ok(query) => handle(
                &rt,
                &e,
                Event::FilterFieldChanged {
                    field: field.clone(),
                    action: form.action(),
                    query,
                },
            ),
            Err(err) => log_js_error("could not read filter form", err),
        });
    }
    tracing::info!("filter form wired");
}

pub fn charts(runtime: &Rc<PageRuntime>) {
    let containers: Vec<ChartContainer> = page::all(REPORT_CHART)
        .iter()
        .enumerate()
        .map(|(index, container)| ChartContainer {
            index,
            data: container.get_attribute("data-chart"),
            chart_type: container.get_attribute("data-type"),
            has_canvas: matches!(container.query_selector("canvas"), Ok(Some(_))),
        })
        .collect();
    if containers.is_empty() {
        return;
    }
    tracing::info!("{} report charts found", containers.len());
    crate::fire(
        runtime,
        Event::ChartsFound {
            library_loaded: chart_constructor().is_some(),
            containers,
        },
    );
}

fn touch_x(event: &web_sys::Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

fn mouse_x(event: &web_sys::Event) -> Option<f64> {
    Some(f64::from(event.dyn_ref::<MouseEvent>()?.client_x()))
}

pub fn sliders(runtime: &Rc<PageRuntime>) {
    let sliders = page::all(SLIDERS);
    if sliders.is_empty() {
        return;
    }

    for (slider, element) in sliders.iter().enumerate() {
        let (rt, el) = (Rc::clone(runtime), element.clone());
        listen_active(element, "touchstart", move |e| {
            if let Some(x) = touch_x(&e) {
                let scroll_left = f64::from(el.scroll_left());
                let pressed = Event::SliderPressed {
                    slider,
                    pointer: Pointer::Touch,
                    x,
                    scroll_left,
                };
                handle(&rt, &e, pressed);
            }
        });
        let rt = Rc::clone(runtime);
        listen_active(element, "touchmove", move |e| {
            if let Some(x) = touch_x(&e) {
                handle(&rt, &e, Event::SliderMoved { slider, pointer: Pointer::Touch, x });
            }
        });
        let rt = Rc::clone(runtime);
        listen(element, "touchend", move |e| {
            handle(&rt, &e, Event::SliderReleased { slider, pointer: Pointer::Touch });
        });

        let (rt, el) = (Rc::clone(runtime), element.clone());
        listen(element, "mousedown", move |e| {
            if let Some(x) = mouse_x(&e) {
                let scroll_left = f64::from(el.scroll_left());
                let pressed = Event::SliderPressed {
                    slider,
                    pointer: Pointer::Mouse,
                    x,
                    scroll_left,
                };
                handle(&rt, &e, pressed);
            }
        });
        let rt = Rc::clone(runtime);
        listen(element, "mousemove", move |e| {
            if let Some(x) = mouse_x(&e) {
                handle(&rt, &e, Event::SliderMoved { slider, pointer: Pointer::Mouse, x });
            }
        });
        let rt = Rc::clone(runtime);
        listen(element, "mouseup", move |e| {
            handle(&rt, &e, Event::SliderReleased { slider, pointer: Pointer::Mouse });
        });
        let rt = Rc::clone(runtime);
        listen(element, "mouseleave", move |e| {
            handle(&rt, &e, Event::SliderLeft { slider });
        });
    }
    tracing::info!("{} sliders wired", sliders.len());

    crate::fire(
        runtime,
        Event::SlidersFound {
            count: sliders.len(),
            width: page::width(),
        },
    );
}
