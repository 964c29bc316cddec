//! Thin fetch wrapper over the portal's JSON API.
//!
//! The backend expects cookie auth, so every request is sent with
//! credentials included.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

pub const API_BASE: &str = "/api/v1";

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_credentials(RequestCredentials::Include);

    let request = build_request(path, &init)?;
    send(request).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let payload = serde_json::to_string(body).map_err(|e| e.to_string())?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_credentials(RequestCredentials::Include);
    init.set_body(&JsValue::from_str(&payload));

    let request = build_request(path, &init)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    send(request).await
}

fn build_request(path: &str, init: &RequestInit) -> Result<Request, String> {
    let url = format!("{}{}", API_BASE, path);
    Request::new_with_str_and_init(&url, init).map_err(js_err)
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<T, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response.dyn_into().map_err(js_err)?;

    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let text = text.as_string().unwrap_or_default();

    if !response.ok() {
        return Err(format!("request failed ({}): {}", response.status(), text));
    }

    serde_json::from_str(&text).map_err(|e| e.to_string())
}

fn js_err(err: JsValue) -> String {
    format!("{:?}", err)
}
