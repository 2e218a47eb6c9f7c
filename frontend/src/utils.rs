use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlInputElement, HtmlTextAreaElement, Window};

pub fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn value_from_target(target: Option<EventTarget>) -> String {
    target
        .map(|target| get_value_from_input(JsValue::from(target)))
        .unwrap_or_default()
}

/// Best-effort text for a thrown JS value: `TypeError: Failed to fetch` and the like.
pub fn js_error_text(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        format!("{}: {}", String::from(err.name()), String::from(err.message()))
    } else if let Some(text) = err.as_string() {
        text
    } else {
        format!("{:?}", err)
    }
}
