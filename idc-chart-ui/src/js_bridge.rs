//! Typed wrappers around the browser APIs the chart needs.
//!
//! Everything JS-facing lives here so the rest of the workspace stays plain
//! Rust: failures are turned into [`LoadError`]s or logged, never thrown.

use idc_data::LoadError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn js_error(context: &str, value: JsValue) -> LoadError {
    let detail = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    LoadError::Fetch(format!("{}: {}", context, detail))
}

/// Fetch `url` and return the response body as text.
///
/// Non-2xx responses are errors, like `d3.csv` treats them.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::Fetch("no window available".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error(url, e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", e))?;
    if !response.ok() {
        return Err(LoadError::Fetch(format!(
            "{} returned HTTP {} {}",
            url,
            response.status(),
            response.status_text()
        )));
    }

    let body = response
        .text()
        .map_err(|e| js_error("reading response body", e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| js_error("reading response body", e))?;
    let text = text
        .as_string()
        .ok_or_else(|| LoadError::Fetch(format!("{} body is not text", url)))?;
    log::info!("js_bridge: fetched {} ({} bytes)", url, text.len());
    Ok(text)
}

/// Wall clock in milliseconds; the time base for all transitions.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Resolve on the browser's next animation frame.
pub async fn next_animation_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|window| window.request_animation_frame(&resolve).is_ok())
            .unwrap_or(false);
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Text content of the element with `id`, if it exists and is non-empty.
pub fn element_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}
