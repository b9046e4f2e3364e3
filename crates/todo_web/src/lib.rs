//! Browser host for the task list: binds `todo_core` to `localStorage`,
//! the page's DOM and the console.

pub mod app;
pub mod dom;
pub mod logging;
pub mod storage;

use log::warn;
use todo_core::config::{CONFIG_ELEMENT_ID, load_config_with_fallback};
use todo_core::error::AppError;
use todo_core::logging::level_or_default;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

pub use app::App;

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn js_error(value: JsValue) -> AppError {
    AppError::host(js_message(&value))
}

fn to_js(err: AppError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let raw_config = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let loaded = load_config_with_fallback(raw_config.as_deref());
    logging::init_logging(level_or_default(&loaded.config.log_level)).map_err(to_js)?;
    if let Some(err) = loaded.error {
        warn!(
            "event=config_load module=web status=fallback error_code={} error={}",
            err.code(),
            err.message()
        );
    }

    App::mount(&window, &document, loaded.config).map_err(to_js)
}
