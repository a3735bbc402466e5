//! Small DOM lookups shared by the host and the listeners.

use api::FormQuery;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, Node, Window};

use crate::resolve::Dom;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// `window.innerWidth`, 0 when unavailable.
pub fn width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn first(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Whether `node` is `container` or inside it.
pub fn contains(container: Option<&Element>, node: Option<&Node>) -> bool {
    match container {
        Some(container) => container.contains(node),
        None => false,
    }
}

fn elements(list: web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The live document, as target resolution sees it.
pub struct Page;

impl Dom for Page {
    type Element = Element;

    fn by_id(&self, id: &str) -> Option<Element> {
        by_id(id)
    }

    fn select_all(&self, root: Option<&Element>, selector: &str) -> Vec<Element> {
        match root {
            Some(root) => root.query_selector_all(selector).map(elements).unwrap_or_default(),
            None => all(selector),
        }
    }

    fn closest(&self, element: &Element, selector: &str) -> Option<Element> {
        closest(element, selector)
    }

    fn children(&self, element: &Element) -> Vec<Element> {
        let children = element.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .collect()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn value(&self, element: &Element) -> Option<String> {
        element.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value)
    }

    fn first(&self, selector: &str) -> Option<Element> {
        first(selector)
    }
}

/// Every string field of a form, in document order, the way `FormData` sees it.
pub fn form_fields(form: &HtmlFormElement) -> Result<FormQuery, JsValue> {
    let data = web_sys::FormData::new_with_form(form)?;
    let mut fields = FormQuery::new();
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(fields);
    };
    for entry in entries {
        let pair = js_sys::Array::from(&entry?);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push(name, value);
        }
    }
    Ok(fields)
}

pub fn log_js_error(context: &str, error: JsValue) {
    tracing::warn!("{}: {:?}", context, error);
}
