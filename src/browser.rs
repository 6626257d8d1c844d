use gloo_net::http::Request;
use serde_json::json;
use url::Url;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, FormData, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Storage,
};

use crate::contact::{reply_error_summary, ContactFields, FormTransport, SubmitError};
use crate::logging::{log_event, LogLevel};
use crate::nav::scroll_target;
use crate::sync::{ElementBox, GeometrySnapshot, SectionBox};
use crate::theme::{PreferenceStore, Theme};

pub const REVEAL_ATTRIBUTE: &str = "data-reveal";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn document() -> Option<Document> {
    window()?.document()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn applied_theme() -> Theme {
    document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute("data-theme"))
        .and_then(|value| Theme::from_str(&value))
        .unwrap_or_default()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn capture_geometry() -> GeometrySnapshot {
    let Some(document) = document() else {
        return GeometrySnapshot::default();
    };

    let sections = query_all::<HtmlElement>(&document, "section[id]")
        .into_iter()
        .map(|section| SectionBox {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect();

    let watched = query_all::<Element>(&document, &format!("[{REVEAL_ATTRIBUTE}]"))
        .into_iter()
        .filter_map(|element| {
            let key = element.get_attribute(REVEAL_ATTRIBUTE)?;
            Some(ElementBox {
                key,
                top: element.get_bounding_client_rect().top(),
            })
        })
        .collect();

    let skills_top = document
        .get_element_by_id("skills")
        .map(|skills| skills.get_bounding_client_rect().top());

    GeometrySnapshot {
        scroll_y: scroll_y(),
        viewport_height: viewport_height(),
        sections,
        watched,
        skills_top,
    }
}

pub fn scroll_to_section(id: &str) {
    let Some(document) = document() else {
        return;
    };
    let Some(section) = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let header_height = document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(section.offset_top()), header_height));
    options.set_behavior(ScrollBehavior::Smooth);

    if let Some(win) = window() {
        win.scroll_to_with_scroll_to_options(&options);
    }
}

pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe_page<F>(mut on_visible: F) -> Option<Self>
    where
        F: FnMut(Vec<String>) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let keys: Vec<String> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter(IntersectionObserverEntry::is_intersecting)
                    .filter_map(|entry| entry.target().get_attribute(REVEAL_ATTRIBUTE))
                    .collect();

                if !keys.is_empty() {
                    on_visible(keys);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        let document = document()?;
        for element in query_all::<Element>(&document, &format!("[{REVEAL_ATTRIBUTE}]")) {
            observer.observe(&element);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn js_error(value: JsValue) -> SubmitError {
    SubmitError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

pub struct FetchTransport;

impl FormTransport for FetchTransport {
    async fn post_form(&self, endpoint: &Url, fields: &ContactFields) -> Result<u16, SubmitError> {
        let form = FormData::new().map_err(js_error)?;
        for (name, value) in fields.pairs() {
            form.append_with_str(name, value).map_err(js_error)?;
        }

        let response = Request::post(endpoint.as_str())
            .header("Accept", "application/json")
            .body(form)
            .map_err(|error| SubmitError::Network(error.to_string()))?
            .send()
            .await
            .map_err(|error| SubmitError::Network(error.to_string()))?;

        let status = response.status();
        if !response.ok() {
            if let Some(summary) = response
                .text()
                .await
                .ok()
                .and_then(|body| reply_error_summary(&body))
            {
                log_event(
                    LogLevel::Debug,
                    "contact_endpoint_rejected",
                    json!({ "status": status, "errors": summary }),
                );
            }
        }

        Ok(status)
    }
}
