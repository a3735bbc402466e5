//! # ChurchOps page behaviour for the browser
//!
//! Compiled to wasm and loaded by every ChurchOps page. On start it reads the
//! optional `<script id="churchops-config" type="application/toml">` element,
//! installs the console logger, builds one [`state::Runtime`] for the page and wires
//! each feature whose elements are present.
//!
//! Listeners translate DOM events into [`state::Event`]s and hand them to [`fire`];
//! everything the page does in response is decided by the `state` crate.

pub mod config;
pub mod resolve;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod wire;

#[cfg(target_arch = "wasm32")]
pub(crate) use browser::{fire, handle, PageRuntime};

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::rc::Rc;

    use api::FetchClient;
    use state::{App, ChurchOpsConfig, Event, LocalStorage, Runtime, Step};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::config::{level_filter, parse_config};
    use crate::host::DomHost;
    use crate::{console, page, wire};

    pub(crate) type PageRuntime = Runtime<DomHost, FetchClient, LocalStorage>;

    /// Run one event through the page runtime and send off any requests it made.
    pub(crate) fn fire(runtime: &Rc<PageRuntime>, event: Event) -> Step {
        let mut step = runtime.step(event);
        for pending in std::mem::take(&mut step.requests) {
            let runtime = Rc::clone(runtime);
            wasm_bindgen_futures::spawn_local(async move {
                runtime.complete(pending).await;
            });
        }
        step
    }

    /// [`fire`] for a listener: applies `preventDefault`/`stopPropagation` to the DOM
    /// event before the listener returns.
    pub(crate) fn handle(runtime: &Rc<PageRuntime>, dom_event: &web_sys::Event, event: Event) {
        let step = fire(runtime, event);
        if step.prevent_default {
            dom_event.prevent_default();
        }
        if step.stop_propagation {
            dom_event.stop_propagation();
        }
    }

    fn client() -> FetchClient {
        let href = page::window().and_then(|w| w.location().href().ok());
        match href.map(|href| FetchClient::with_base(&href)) {
            Some(Ok(client)) => client,
            Some(Err(e)) => {
                tracing::warn!("page URL unusable as request base: {}", e);
                FetchClient::new()
            }
            None => FetchClient::new(),
        }
    }

    fn wire_all(runtime: &Rc<PageRuntime>, config: &ChurchOpsConfig) {
        wire::sidebar(runtime, config);
        wire::document_clicks(runtime);
        wire::resize(runtime);
        wire::attendance(runtime);
        wire::search(runtime);
        wire::hierarchy(runtime);
        wire::filter(runtime, config);
        wire::charts(runtime);
        wire::sliders(runtime);
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();

        let element = ChurchOpsConfig::element_id();
        let embedded = page::by_id(element).and_then(|el| el.text_content());
        let (config, problem) = parse_config(embedded.as_deref());
        console::init(level_filter(&config.logging.level));
        if let Some(problem) = problem {
            tracing::warn!("ignoring #{}: {}", element, problem);
        }

        let app = App::new(&config);
        let client = client();
        let runtime: Rc<PageRuntime> = Rc::new_cyclic(|weak| {
            Runtime::new(app, DomHost::new(weak.clone()), client, LocalStorage::new())
        });

        let Some(document) = page::document() else {
            tracing::error!("no document; nothing to wire");
            return;
        };
        if document.ready_state() != "loading" {
            wire_all(&runtime, &config);
            return;
        }
        let onready = Closure::once_into_js(move || wire_all(&runtime, &config));
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", onready.unchecked_ref())
        {
            page::log_js_error("could not wait for DOMContentLoaded", e);
        }
    }
}
