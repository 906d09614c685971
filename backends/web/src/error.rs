use core::fmt;

use kelp_core::{RenderError, ValidateError};

/// Error type produced by the web backend.
#[derive(Debug, Clone)]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g., when executed outside of a browser).
    DomUnavailable,
    /// The requested mounting node cannot be located.
    RootNotFound(String),
    /// The node tree failed validation before any DOM mutation.
    Invalid(ValidateError),
    /// A JSON payload could not be parsed into a node tree.
    Json(String),
    /// Wrapper around JavaScript exceptions.
    Js(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomUnavailable => write!(f, "DOM is not available"),
            Self::RootNotFound(id) => write!(f, "Failed to find DOM element with id `{id}`"),
            Self::Invalid(err) => write!(f, "Invalid node tree: {err}"),
            Self::Json(msg) => write!(f, "Failed to parse node tree JSON: {msg}"),
            Self::Js(msg) => write!(f, "JavaScript error: {msg}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<ValidateError> for WebError {
    fn from(err: ValidateError) -> Self {
        Self::Invalid(err)
    }
}

impl From<RenderError<Self>> for WebError {
    fn from(err: RenderError<Self>) -> Self {
        match err {
            RenderError::Invalid(err) => Self::Invalid(err),
            RenderError::Backend(err) => err,
        }
    }
}

impl From<serde_json::Error> for WebError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

impl From<WebError> for wasm_bindgen::JsValue {
    fn from(value: WebError) -> Self {
        Self::from(value.to_string())
    }
}
