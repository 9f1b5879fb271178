//! Converter state and options for LaTeX to HTML conversion

use super::{
    compound, document, environment, layout, markup, paragraph, preamble, sanitize, sweep,
    ConversionResult, RenderWarning,
};

/// LaTeX to HTML conversion options
#[derive(Debug, Clone)]
pub struct L2HOptions {
    /// Extra class hint for the outer preview container
    pub container_class: Option<String>,
    /// Run the assembled fragment through the allow-list sanitizer.
    /// Disable only when inspecting raw pipeline output.
    pub sanitize: bool,
    /// Wrap the fragment in the titled preview container
    pub wrap_document: bool,
}

impl Default for L2HOptions {
    fn default() -> Self {
        Self {
            container_class: None,
            sanitize: true,
            wrap_document: true,
        }
    }
}

impl L2HOptions {
    /// Options producing a bare fragment (no container, still sanitized)
    pub fn fragment() -> Self {
        Self {
            wrap_document: false,
            ..Self::default()
        }
    }
}

/// Stateful LaTeX to HTML converter
///
/// Drives the rewrite stages in their required order and accumulates
/// warnings. One converter handles one document at a time; `warnings` is
/// reset at the start of each conversion.
#[derive(Debug, Default)]
pub struct HtmlConverter {
    options: L2HOptions,
    warnings: Vec<RenderWarning>,
}

impl HtmlConverter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self {
            options: L2HOptions::default(),
            warnings: Vec::new(),
        }
    }

    /// Create a converter with explicit options
    pub fn with_options(options: L2HOptions) -> Self {
        Self {
            options,
            warnings: Vec::new(),
        }
    }

    /// Warnings accumulated by the last conversion
    pub fn warnings(&self) -> &[RenderWarning] {
        &self.warnings
    }

    /// Convert a full LaTeX document to HTML
    ///
    /// Unrecognized markup never aborts the conversion; it is swept and
    /// reported through `warnings()`.
    pub fn convert_document(&mut self, input: &str) -> String {
        self.warnings.clear();

        let mut text = preamble::strip_preamble(input);
        text = preamble::strip_comments(&text);
        // Compound commands must be resolved before anything strips the
        // outer command, or the nested form is destroyed.
        text = compound::resolve_compounds(&text);
        text = environment::rewrite_environments(&text, &mut self.warnings);
        text = markup::rewrite_markup(&text);
        text = layout::rewrite_layout(&text);
        // Safety net for everything the targeted rewrites did not consume.
        text = sweep::sweep_residuals(&text, &mut self.warnings);
        text = paragraph::format_paragraphs(&text);

        if self.options.sanitize {
            text = sanitize::sanitize_fragment(&text);
        }
        if self.options.wrap_document {
            text = document::wrap_document(&text, self.options.container_class.as_deref());
        }
        text
    }

    /// Convert a document and return output together with warnings
    pub fn convert_document_with_diagnostics(&mut self, input: &str) -> ConversionResult {
        let output = self.convert_document(input);
        ConversionResult::with_warnings(output, self.warnings.clone())
    }
}
