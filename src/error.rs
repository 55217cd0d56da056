//! UI error types
//!
//! Errors raised while wiring behavior onto the server-rendered page.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors that can occur while enhancing a page
#[derive(Error, Debug)]
pub enum UiError {
    /// No `window` global (not running in a browser)
    #[error("window is not available")]
    NoWindow,

    /// No `document` on the window
    #[error("document is not available")]
    NoDocument,

    /// Document has no `<body>` or `<head>` yet
    #[error("document has no <{0}> element")]
    MissingRoot(&'static str),

    /// A JavaScript call threw
    #[error("JS error: {0}")]
    Js(String),

    /// An element was not of the expected type
    #[error("Unexpected element for {selector}: expected {expected}")]
    ElementType {
        selector: String,
        expected: &'static str,
    },

    /// Page configuration block could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Js(message)
    }
}

/// Result type for UI operations
pub type UiResult<T> = Result<T, UiError>;
