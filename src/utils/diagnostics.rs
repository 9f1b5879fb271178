//! Unified diagnostic reporting
//!
//! Conversion warnings are surfaced to the CLI (and to embedders) as
//! severity-tagged diagnostics with text and JSON formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics (determines coloring and behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Critical errors (red) - e.g., a failed custom stage
    Error,
    /// Warnings (yellow) - e.g., an environment losing its structure
    Warning,
    /// Informational (cyan) - e.g., swept residual commands
    Info,
}

/// Unified diagnostic type for CLI output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderDiagnostic {
    /// Severity level (for coloring and strict mode)
    pub severity: DiagnosticSeverity,
    /// Warning kind as string (e.g., "unsupported environment")
    pub kind: String,
    /// Human-readable message
    pub message: String,
    /// Location context (e.g., "\\watermark" or "tabular")
    pub location: Option<String>,
}

impl RenderDiagnostic {
    /// Create a new diagnostic.
    pub fn new(
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind: kind.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add location context.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Get ANSI color code for this diagnostic's severity.
    pub fn color_code(&self) -> &'static str {
        match self.severity {
            DiagnosticSeverity::Error => "\x1b[31m",   // red
            DiagnosticSeverity::Warning => "\x1b[33m", // yellow
            DiagnosticSeverity::Info => "\x1b[36m",    // cyan
        }
    }
}

impl fmt::Display for RenderDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref loc) = self.location {
            write!(f, "[{}] {}: {}", self.kind, loc, self.message)
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}

/// Format diagnostics for terminal output, one per line.
pub fn format_diagnostics(diagnostics: &[RenderDiagnostic], color: bool) -> String {
    let mut out = String::new();
    for diag in diagnostics {
        if color {
            out.push_str(diag.color_code());
            out.push_str(&diag.to_string());
            out.push_str("\x1b[0m");
        } else {
            out.push_str(&diag.to_string());
        }
        out.push('\n');
    }
    out
}

/// Serialize diagnostics as a JSON array.
pub fn diagnostics_to_json(diagnostics: &[RenderDiagnostic]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(diagnostics)
}
