//! Utility modules
//!
//! - Diagnostics and error reporting
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{
    diagnostics_to_json, format_diagnostics, DiagnosticSeverity, RenderDiagnostic,
};
pub use error::{RenderError, RenderResult};
