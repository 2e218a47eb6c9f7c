use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

use shared::errors::TransportError;
use shared::transport::Transport;
use shared::types::{HttpRequest, HttpResponse};

use crate::utils::{get_window, js_error_text};

/// `window.fetch`, one request at a time. Any status counts as a response.
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        send(request).await.map_err(|err| TransportError(js_error_text(&err)))
    }
}

async fn send(request: HttpRequest) -> Result<HttpResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    if request.no_store {
        opts.set_cache(RequestCache::NoStore);
    }
    if let Some(body) = &request.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let fetch_request = Request::new_with_str_and_init(&request.url, &opts)?;
    for (name, value) in &request.headers {
        fetch_request.headers().set(name, value)?;
    }

    let window = get_window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;

    Ok(HttpResponse::new(resp.status(), body.as_string().unwrap_or_default()))
}
