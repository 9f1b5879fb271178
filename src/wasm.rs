//! WASM bindings for texview
//!
//! This module provides JavaScript-accessible functions for rendering the
//! LaTeX contract preview in a browser host.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::core::latex2html::{latex_to_html_with_diagnostics, HtmlConverter, L2HOptions};

/// Render options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct RenderRequestOptions {
    /// Extra class hint for the outer preview container
    #[serde(default)]
    pub container_class: Option<String>,
    /// Run the allow-list sanitizer over the output (default: true)
    #[serde(default = "default_true")]
    pub sanitize: bool,
    /// Wrap the fragment in the titled preview container (default: true)
    #[serde(default = "default_true")]
    pub wrap_document: bool,
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
impl From<RenderRequestOptions> for L2HOptions {
    fn from(opts: RenderRequestOptions) -> Self {
        L2HOptions {
            container_class: opts.container_class,
            sanitize: opts.sanitize,
            wrap_document: opts.wrap_document,
        }
    }
}

/// Render result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RenderOutcome {
    /// The rendered HTML
    pub output: String,
    /// Whether the render was successful
    pub success: bool,
    /// Error message if the render failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

/// Safely serialize a value to JsValue, returning an error object on failure.
///
/// This prevents panics from `unwrap()` when serialization fails.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = RenderOutcome {
            output: String::new(),
            success: false,
            error: Some(format!("Serialization error: {}", e)),
            warnings: vec![],
        };
        // This inner serialization should always succeed for simple structs
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a LaTeX contract document to preview HTML
///
/// Returns a `RenderOutcome` object with `output`, `success`, `error` and
/// `warnings` fields.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn render_latex(input: &str) -> JsValue {
    let result = latex_to_html_with_diagnostics(input);
    to_js_value(&RenderOutcome {
        output: result.output.clone(),
        success: true,
        error: None,
        warnings: result.format_warnings(),
    })
}

/// Render a LaTeX contract document with explicit options
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn render_latex_with_options(input: &str, options: JsValue) -> JsValue {
    let options: RenderRequestOptions = match serde_wasm_bindgen::from_value(options) {
        Ok(opts) => opts,
        Err(e) => {
            return to_js_value(&RenderOutcome {
                output: String::new(),
                success: false,
                error: Some(format!("Invalid options: {}", e)),
                warnings: vec![],
            });
        }
    };
    let mut converter = HtmlConverter::with_options(options.into());
    let result = converter.convert_document_with_diagnostics(input);
    to_js_value(&RenderOutcome {
        output: result.output.clone(),
        success: true,
        error: None,
        warnings: result.format_warnings(),
    })
}
