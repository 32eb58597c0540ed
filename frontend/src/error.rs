use thiserror::Error;
use wasm_bindgen::JsValue;

/// Browser-side failures. None of these reach the user as an error page;
/// callers log them and fall back.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("local storage unavailable: {0}")]
    Storage(String),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("missing DOM handle: {0}")]
    Dom(&'static str),
    #[error("request failed: {0}")]
    Network(String),
}

pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
