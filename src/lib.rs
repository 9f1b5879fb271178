//! Texview - LaTeX-subset to HTML preview renderer
//!
//! Texview converts the constrained LaTeX subset used for contract documents
//! into a styled HTML fragment suitable for direct display, and provides a
//! small render state machine around the (synchronous) conversion for hosts
//! that show loading/error states.
//!
//! # Example
//!
//! ```
//! use texview::latex_to_html;
//!
//! let html = latex_to_html(r"\section{Terms} The \textbf{Client} agrees.");
//! assert!(html.contains("<h2"));
//! assert!(html.contains("<strong>Client</strong>"));
//! ```

pub mod core;
pub mod renderer;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the primary conversion API at the crate root
pub use crate::core::latex2html::{
    latex_to_html, latex_to_html_with_diagnostics, latex_to_html_with_options, ConversionResult,
    HtmlConverter, L2HOptions, RenderWarning, WarningKind,
};
pub use crate::renderer::{PreviewRenderer, RenderOptions, RenderState};
pub use crate::utils::error::{RenderError, RenderResult};
