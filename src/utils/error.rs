//! Error handling for Texview rendering
//!
//! The pipeline itself never fails on unrecognized markup; these errors come
//! from custom stages, empty input handling, and the CLI's file IO.

use std::fmt;

/// Render error type
#[derive(Debug, Clone)]
pub enum RenderError {
    /// The input document was empty or whitespace-only
    EmptyInput,
    /// A pipeline stage rejected the working text
    StageFailed { stage: String, message: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyInput => {
                write!(f, "Input document is empty")
            }
            RenderError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
            RenderError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            RenderError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError {
            message: err.to_string(),
        }
    }
}

// Convenience constructors
impl RenderError {
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        RenderError::StageFailed {
            stage: stage.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        RenderError::InternalError {
            message: message.into(),
        }
    }
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
