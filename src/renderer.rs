//! Preview render state machine
//!
//! Owns the display lifecycle around the (synchronous) conversion:
//! `Idle` with no input, `Rendering` once input arrives, then `Rendered` or
//! `Errored`. The pending state is a UX affordance, not real asynchrony —
//! the conversion has no suspension point, so a new input simply supersedes
//! the previous state on the next completion and there is nothing to
//! cancel. Hosts that want a minimum spinner display can honor the
//! `min_pending` hint.
//!
//! The transform is injectable so embedders can add stages and tests can
//! force failures; on failure the original source is preserved for a
//! fallback display.

use std::time::Duration;

use crate::core::latex2html::{HtmlConverter, L2HOptions};
use crate::utils::error::{RenderError, RenderResult};

/// State of one render invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// No input present
    Idle,
    /// Input present, transformation not yet completed
    Rendering,
    /// Transformation succeeded
    Rendered(String),
    /// Transformation failed; the raw source is kept for fallback display
    Errored { message: String, source: String },
}

impl RenderState {
    /// The rendered HTML, if in the `Rendered` state
    pub fn html(&self) -> Option<&str> {
        match self {
            RenderState::Rendered(html) => Some(html),
            _ => None,
        }
    }

    pub fn is_rendering(&self) -> bool {
        matches!(self, RenderState::Rendering)
    }
}

/// Options for the preview renderer
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Conversion options passed to the default transform
    pub conversion: L2HOptions,
    /// Minimum duration a host should keep the pending indicator visible
    pub min_pending: Option<Duration>,
}

type Transform = Box<dyn Fn(&str) -> RenderResult<String>>;

/// Drives the render state machine around a document transform
pub struct PreviewRenderer {
    options: RenderOptions,
    transform: Transform,
    source: Option<String>,
    state: RenderState,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewRenderer {
    /// Renderer with the default conversion pipeline
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Renderer with explicit options, still using the default pipeline
    pub fn with_options(options: RenderOptions) -> Self {
        let conversion = options.conversion.clone();
        Self {
            options,
            transform: Box::new(move |source| {
                let mut converter = HtmlConverter::with_options(conversion.clone());
                Ok(converter.convert_document(source))
            }),
            source: None,
            state: RenderState::Idle,
        }
    }

    /// Replace the transform (custom stages, test fault injection)
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> RenderResult<String> + 'static,
    {
        self.transform = Box::new(transform);
        self
    }

    /// Current state
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// The `min_pending` hint for hosts showing a loading indicator
    pub fn min_pending(&self) -> Option<Duration> {
        self.options.min_pending
    }

    /// Accept new input. Any change of input (including the first non-empty
    /// input) restarts the machine at `Rendering`; empty input returns to
    /// `Idle`.
    pub fn set_source(&mut self, source: &str) {
        if source.trim().is_empty() {
            self.source = None;
            self.state = RenderState::Idle;
            return;
        }
        if self.source.as_deref() == Some(source) {
            return;
        }
        self.source = Some(source.to_string());
        self.state = RenderState::Rendering;
    }

    /// Run the transform for the pending input, if any
    pub fn complete(&mut self) {
        if !self.state.is_rendering() {
            return;
        }
        let source = match self.source.as_deref() {
            Some(s) => s,
            None => {
                self.state = RenderState::Idle;
                return;
            }
        };
        self.state = match (self.transform)(source) {
            Ok(html) => RenderState::Rendered(html),
            Err(err) => RenderState::Errored {
                message: err.to_string(),
                source: source.to_string(),
            },
        };
    }

    /// Set input and complete in one step
    pub fn render(&mut self, source: &str) -> &RenderState {
        self.set_source(source);
        self.complete();
        &self.state
    }
}

/// Render once with the default pipeline, returning the outcome directly
pub fn render_once(source: &str) -> RenderResult<String> {
    if source.trim().is_empty() {
        return Err(RenderError::EmptyInput);
    }
    let mut converter = HtmlConverter::new();
    Ok(converter.convert_document(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_stays_idle_on_empty_input() {
        let mut renderer = PreviewRenderer::new();
        assert_eq!(*renderer.state(), RenderState::Idle);
        renderer.render("   ");
        assert_eq!(*renderer.state(), RenderState::Idle);
    }

    #[test]
    fn input_moves_to_rendering_then_rendered() {
        let mut renderer = PreviewRenderer::new();
        renderer.set_source(r"\section{One}");
        assert!(renderer.state().is_rendering());
        renderer.complete();
        assert!(renderer.state().html().unwrap().contains("One"));
    }

    #[test]
    fn unchanged_input_does_not_restart() {
        let mut renderer = PreviewRenderer::new();
        renderer.render("same text");
        let first = renderer.state().clone();
        renderer.set_source("same text");
        assert_eq!(*renderer.state(), first);
    }

    #[test]
    fn new_input_supersedes_previous_result() {
        let mut renderer = PreviewRenderer::new();
        renderer.render("first");
        renderer.set_source("second");
        assert!(renderer.state().is_rendering());
        renderer.complete();
        assert!(renderer.state().html().unwrap().contains("second"));
    }

    #[test]
    fn failure_preserves_raw_source() {
        let mut renderer = PreviewRenderer::new()
            .with_transform(|_| Err(RenderError::stage("injected", "rejected sentinel")));
        renderer.render(r"\section{Original Source}");
        match renderer.state() {
            RenderState::Errored { message, source } => {
                assert!(message.contains("injected"));
                assert_eq!(source, r"\section{Original Source}");
            }
            other => panic!("expected Errored, got {:?}", other),
        }
    }

    #[test]
    fn min_pending_hint_is_exposed() {
        let renderer = PreviewRenderer::with_options(RenderOptions {
            min_pending: Some(Duration::from_millis(300)),
            ..RenderOptions::default()
        });
        assert_eq!(renderer.min_pending(), Some(Duration::from_millis(300)));
    }

    #[test]
    fn render_once_rejects_empty_input() {
        assert!(matches!(render_once(""), Err(RenderError::EmptyInput)));
    }
}
