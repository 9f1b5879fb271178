//! LaTeX to HTML converter
//!
//! This module implements the staged rewrite pipeline that turns a
//! constrained LaTeX subset into a styled HTML fragment. The stages run in a
//! fixed order; several of them depend on earlier stages having already
//! consumed syntax they would otherwise destroy (see `context.rs`).

pub mod context;
mod compound;
mod document;
mod environment;
mod layout;
mod markup;
mod paragraph;
mod preamble;
mod sanitize;
mod sweep;

pub use context::{HtmlConverter, L2HOptions};
pub use sanitize::sanitize_fragment;

// =============================================================================
// Warning System
// =============================================================================

/// Kind of warning generated during conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// An environment with no dedicated rewrite fell through to the sweeper
    UnsupportedEnvironment,
    /// A command together with its brace argument was deleted by the sweeper
    SweptCommand,
    /// A bare command token was deleted by the sweeper
    SweptToken,
    /// A bracket group (option payload) was deleted by the sweeper
    SweptGroup,
    /// General conversion issue
    ConversionIssue,
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningKind::UnsupportedEnvironment => write!(f, "unsupported environment"),
            WarningKind::SweptCommand => write!(f, "swept command"),
            WarningKind::SweptToken => write!(f, "swept token"),
            WarningKind::SweptGroup => write!(f, "swept group"),
            WarningKind::ConversionIssue => write!(f, "conversion issue"),
        }
    }
}

/// A warning generated during LaTeX to HTML conversion
#[derive(Debug, Clone)]
pub struct RenderWarning {
    /// The kind of warning
    pub kind: WarningKind,
    /// Human-readable message
    pub message: String,
    /// Location context (e.g., "\\watermark" or "tabular")
    pub location: Option<String>,
}

impl RenderWarning {
    /// Create a new warning
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        RenderWarning {
            kind,
            message: message.into(),
            location: None,
        }
    }

    /// Add location context to the warning
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Create an unsupported environment warning
    pub fn unsupported_environment(name: &str) -> Self {
        RenderWarning::new(
            WarningKind::UnsupportedEnvironment,
            format!(
                "Environment '{}' has no dedicated rewrite; its structure will be lost",
                name
            ),
        )
        .with_location(name.to_string())
    }

    /// Create a swept command warning
    pub fn swept_command(name: &str) -> Self {
        RenderWarning::new(
            WarningKind::SweptCommand,
            format!("Command '\\{}' and its argument were removed", name),
        )
        .with_location(format!("\\{}", name))
    }

    /// Create a swept token warning
    pub fn swept_token(name: &str) -> Self {
        RenderWarning::new(
            WarningKind::SweptToken,
            format!("Bare command '\\{}' was removed", name),
        )
        .with_location(format!("\\{}", name))
    }

    /// Create a swept group warning
    pub fn swept_group(content: &str) -> Self {
        RenderWarning::new(
            WarningKind::SweptGroup,
            format!("Option group '[{}]' was removed", content),
        )
    }
}

impl std::fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref loc) = self.location {
            write!(f, "[{}] {}: {}", self.kind, loc, self.message)
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}

impl From<RenderWarning> for crate::utils::diagnostics::RenderDiagnostic {
    fn from(warning: RenderWarning) -> Self {
        use crate::utils::diagnostics::{DiagnosticSeverity, RenderDiagnostic};

        let severity = match warning.kind {
            WarningKind::UnsupportedEnvironment | WarningKind::ConversionIssue => {
                DiagnosticSeverity::Warning
            }
            WarningKind::SweptCommand | WarningKind::SweptToken | WarningKind::SweptGroup => {
                DiagnosticSeverity::Info
            }
        };

        let mut diag = RenderDiagnostic::new(severity, warning.kind.to_string(), warning.message);
        if let Some(loc) = warning.location {
            diag = diag.with_location(loc);
        }
        diag
    }
}

/// Result of conversion with diagnostics
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// The converted HTML
    pub output: String,
    /// Warnings generated during conversion
    pub warnings: Vec<RenderWarning>,
}

impl ConversionResult {
    /// Create a new result with no warnings
    pub fn ok(output: String) -> Self {
        ConversionResult {
            output,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings
    pub fn with_warnings(output: String, warnings: Vec<RenderWarning>) -> Self {
        ConversionResult { output, warnings }
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get warnings as formatted strings
    pub fn format_warnings(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}

/// Convert a LaTeX document to an HTML preview
pub fn latex_to_html(input: &str) -> String {
    let mut converter = HtmlConverter::new();
    converter.convert_document(input)
}

/// Convert a LaTeX document to an HTML preview with explicit options
pub fn latex_to_html_with_options(input: &str, options: L2HOptions) -> String {
    let mut converter = HtmlConverter::with_options(options);
    converter.convert_document(input)
}

/// Convert LaTeX to HTML with full diagnostics
///
/// Returns both the converted output and any warnings generated during
/// conversion. This is the recommended function for applications that need
/// to report conversion issues.
///
/// # Example
///
/// ```
/// use texview::latex_to_html_with_diagnostics;
///
/// let result = latex_to_html_with_diagnostics(r"\begin{quote}Hello\end{quote}");
/// assert!(result.output.contains("Hello"));
/// assert!(result.has_warnings());
/// ```
pub fn latex_to_html_with_diagnostics(input: &str) -> ConversionResult {
    let mut converter = HtmlConverter::new();
    converter.convert_document_with_diagnostics(input)
}
