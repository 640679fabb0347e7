//! Browser entry point (`wasm-bindgen`).
//!
//! The host page calls [`start`] once with the element that contains the
//! search form, the results region and the action buttons.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement};

use crate::models::config::ClientConfig;
use crate::services::{ExportTrigger, SearchController};
use crate::view::results::{EXPORT_CUSTOMER_ACTION, LOYALTY_REPORT_ACTION};

pub mod console;
pub mod dom;
pub mod fetch;

pub use dom::DomPage;
pub use fetch::FetchApi;

/// Binds the search form and the export actions found under `root`.
#[wasm_bindgen]
pub fn start(root: web_sys::Element) -> Result<(), JsValue> {
    console::install();

    let config = Rc::new(read_config(&root));
    let document = root
        .owner_document()
        .ok_or_else(|| JsValue::from_str("root element is not attached to a document"))?;
    let form = required(&root, "#searchForm")?;
    let input: HtmlInputElement = required(&root, "#documentNumber")?.dyn_into()?;
    let results = required(&root, "#results")?;

    let api = Rc::new(FetchApi::new(config.api_base.as_str()));
    let page = Rc::new(DomPage::new(document, results));
    let controller = Rc::new(SearchController::new(
        Rc::clone(&api),
        Rc::clone(&page),
        Rc::clone(&config),
    ));
    let exports = Rc::new(ExportTrigger::new(api, page, config));

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let document_number = input.value();
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            let _ = controller.search(&document_number).await;
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(button) = action_target(&event) else {
            return;
        };
        let exports = Rc::clone(&exports);
        match button.get_attribute("data-action").as_deref() {
            Some(EXPORT_CUSTOMER_ACTION) => {
                let Some(document_number) = button.get_attribute("data-document-number") else {
                    log::warn!("Export button without a document number");
                    return;
                };
                spawn_local(async move {
                    let _ = exports.export_customer(&document_number).await;
                });
            }
            Some(LOYALTY_REPORT_ACTION) => spawn_local(async move {
                let _ = exports.download_loyalty_report().await;
            }),
            _ => {}
        }
    });
    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    log::info!("Customer lookup ready");
    Ok(())
}

fn read_config(root: &web_sys::Element) -> ClientConfig {
    let Some(raw) = root.get_attribute("data-config") else {
        return ClientConfig::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid data-config: {err}");
        ClientConfig::default()
    })
}

fn required(root: &web_sys::Element, selector: &str) -> Result<web_sys::Element, JsValue> {
    root.query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing {selector} element")))
}

fn action_target(event: &Event) -> Option<web_sys::Element> {
    event
        .target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .closest("[data-action]")
        .ok()
        .flatten()
}

/// Best-effort text of a JavaScript exception.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
