//! # DomHost — the browser side of `state::Host`
//!
//! Resolves each [`state::Target`] (see [`crate::resolve`]) against the live document
//! at the moment an operation is applied, so markup replaced by an earlier operation
//! is always found fresh. A target that matches nothing turns the operation into a
//! no-op.
//!
//! Timers are gloo `Timeout`s kept per [`TimerKey`]; arming a key drops (and so
//! cancels) the timeout already stored there.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use state::{ChartScript, ChartSpec, DomOp, Event, Host, Ticket, TimerKey};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlInputElement, HtmlScriptElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::page::{self, log_js_error, Page};
use crate::resolve::{resolve, REPORT_CHART};
use crate::PageRuntime;

pub struct DomHost {
    runtime: Weak<PageRuntime>,
    timers: RefCell<HashMap<TimerKey, (Ticket, Timeout)>>,
}

impl DomHost {
    pub fn new(runtime: Weak<PageRuntime>) -> Self {
        Self {
            runtime,
            timers: RefCell::new(HashMap::new()),
        }
    }

    fn apply_to(element: &Element, op: &DomOp) -> Result<(), JsValue> {
        match op {
            DomOp::AddClass(_, name) => element.class_list().add_1(name)?,
            DomOp::RemoveClass(_, name) => element.class_list().remove_1(name)?,
            DomOp::SetHtml(_, html) => element.set_inner_html(html),
            DomOp::AppendHtml(_, html) => element.insert_adjacent_html("beforeend", html)?,
            DomOp::SetText(_, text) => element.set_text_content(Some(text)),
            DomOp::SetAttribute(_, name, value) => element.set_attribute(name, value)?,
            DomOp::SetDisabled(_, true) => element.set_attribute("disabled", "")?,
            DomOp::SetDisabled(_, false) => element.remove_attribute("disabled")?,
            DomOp::SetChecked(_, checked) => {
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    input.set_checked(*checked);
                }
            }
            DomOp::SetStyle(_, property, value) => {
                if let Some(html) = element.dyn_ref::<HtmlElement>() {
                    html.style().set_property(property, value)?;
                }
            }
            DomOp::SetScrollLeft(_, left) => element.set_scroll_left(*left as i32),
            DomOp::ScrollIntoView(_) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            DomOp::Remove(_) => element.remove(),
        }
        Ok(())
    }
}

/// `window.Chart`, if the library is on the page.
pub fn chart_constructor() -> Option<Function> {
    let window = page::window()?;
    let chart = Reflect::get(&window, &JsValue::from_str("Chart")).ok()?;
    chart.dyn_into::<Function>().ok()
}

impl Host for DomHost {
    fn apply(&self, op: DomOp) {
        for element in resolve(&Page, op.target()) {
            if let Err(e) = Self::apply_to(&element, &op) {
                log_js_error("DOM update failed", e);
            }
        }
    }

    fn arm(&self, key: TimerKey, ticket: Ticket, delay: Duration) {
        let runtime = self.runtime.clone();
        let fired = key.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            // The map owns this closure's Timeout; it must not be dropped mid-callback.
            wasm_bindgen_futures::spawn_local(async move {
                let Some(runtime) = runtime.upgrade() else {
                    return;
                };
                {
                    let mut timers = runtime.host().timers.borrow_mut();
                    if timers.get(&fired).map(|(t, _)| *t) == Some(ticket) {
                        timers.remove(&fired);
                    }
                }
                crate::fire(&runtime, Event::TimerFired { key: fired, ticket });
            });
        });
        self.timers.borrow_mut().insert(key, (ticket, timeout));
    }

    fn replace_url(&self, url: &str) {
        let Some(history) = page::window().and_then(|w| w.history().ok()) else {
            return;
        };
        let state = Object::new();
        if let Err(e) = Reflect::set(&state, &JsValue::from_str("path"), &JsValue::from_str(url)) {
            log_js_error("history state", e);
        }
        if let Err(e) = history.replace_state_with_url(&state, "", Some(url)) {
            log_js_error("replaceState failed", e);
        }
    }

    fn load_chart_library(&self, script: ChartScript) {
        let Some(document) = page::document() else {
            return;
        };
        let element = match document
            .create_element("script")
            .map(|el| el.dyn_into::<HtmlScriptElement>())
        {
            Ok(Ok(element)) => element,
            _ => {
                tracing::error!("could not create chart library script element");
                return;
            }
        };
        element.set_src(&script.src);
        element.set_integrity(&script.integrity);
        element.set_cross_origin(Some(script.cross_origin));

        let runtime = self.runtime.clone();
        let onload = Closure::once_into_js(move || {
            if let Some(runtime) = runtime.upgrade() {
                crate::fire(&runtime, Event::ChartLibraryLoaded);
            }
        });
        element.set_onload(Some(onload.unchecked_ref()));

        let appended = document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))
            .and_then(|head| head.append_child(&element));
        if let Err(e) = appended {
            log_js_error("could not inject chart library", e);
        }
    }

    fn render_chart(&self, chart: ChartSpec) {
        let Some(constructor) = chart_constructor() else {
            tracing::error!("Chart is not defined, skipping chart {}", chart.container);
            return;
        };
        let Some(canvas) = page::all(REPORT_CHART)
            .get(chart.container)
            .and_then(|container| container.query_selector("canvas").ok().flatten())
        else {
            return;
        };
        let config = match chart
            .config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("chart {} config: {}", chart.container, e);
                return;
            }
        };
        if let Err(e) = Reflect::construct(&constructor, &Array::of2(&canvas, &config)) {
            log_js_error("new Chart failed", e);
        }
    }
}
