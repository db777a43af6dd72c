//! Payment widget collaborator.
//!
//! The vendor script exposes a `window.pay` global with an `open` entry
//! point. It loads independently of the application bundle, so absence is an
//! expected state surfaced as a typed error rather than a thrown exception.

use serde_json::Value as JsonValue;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Payment widget failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentWidgetError {
    /// The vendor script has not loaded (or was blocked)
    #[error("payment widget is not loaded")]
    NotLoaded,

    /// Parameters could not be handed to the widget
    #[error("invalid payment parameters: {0}")]
    InvalidParams(String),

    /// The widget rejected the open call
    #[error("payment widget rejected the request: {0}")]
    OpenFailed(String),
}

/// Narrow interface over the vendor payment widget
#[derive(Clone)]
pub struct PaymentWidgetService;

impl PaymentWidgetService {
    /// Create a new payment widget service
    pub fn new() -> Self {
        Self
    }

    fn widget() -> Option<js_sys::Object> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str("pay")).ok()?;
        value.dyn_into::<js_sys::Object>().ok()
    }

    fn open_fn(widget: &js_sys::Object) -> Option<js_sys::Function> {
        js_sys::Reflect::get(widget, &JsValue::from_str("open"))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
    }

    /// Whether the vendor script has loaded and exposed its entry point
    pub fn is_ready(&self) -> bool {
        Self::widget()
            .as_ref()
            .and_then(Self::open_fn)
            .is_some()
    }

    /// Open the payment dialog with gateway parameters from an order response
    pub fn open_payment(&self, params: &JsonValue) -> Result<(), PaymentWidgetError> {
        let widget = Self::widget().ok_or(PaymentWidgetError::NotLoaded)?;
        let open = Self::open_fn(&widget).ok_or(PaymentWidgetError::NotLoaded)?;

        let js_params = serde_wasm_bindgen::to_value(params)
            .map_err(|e| PaymentWidgetError::InvalidParams(e.to_string()))?;

        open.call1(&widget, &js_params)
            .map_err(|e| PaymentWidgetError::OpenFailed(format!("{e:?}")))?;
        Ok(())
    }
}

impl Default for PaymentWidgetService {
    fn default() -> Self {
        Self::new()
    }
}
