//! Error types for template loading and rendering.
//!
//! [`RenderError`] abstracts over the underlying template engine's errors so
//! callers never match on MiniJinja types directly.

use std::fmt;
use std::path::PathBuf;

/// Error type for loading, executing, and writing templates.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error, compilation failure, or a failure while
    /// evaluating template logic (undefined values, unknown filters).
    TemplateError(String),

    /// A template referenced by name could not be resolved.
    TemplateNotFound(String),

    /// A template source file could not be read.
    ReadError(PathBuf, std::io::Error),

    /// The output file could not be created.
    OutputError(PathBuf, std::io::Error),

    /// Writing rendered bytes to the sink failed.
    IoError(std::io::Error),

    /// Other operational error.
    OperationError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            RenderError::ReadError(path, err) => {
                write!(f, "cannot read template {}: {}", path.display(), err)
            }
            RenderError::OutputError(path, err) => {
                write!(f, "cannot create output file {}: {}", path.display(), err)
            }
            RenderError::IoError(err) => write!(f, "I/O error: {}", err),
            RenderError::OperationError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::ReadError(_, err)
            | RenderError::OutputError(_, err)
            | RenderError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod
            | ErrorKind::InvalidOperation => RenderError::TemplateError(err.to_string()),
            _ => RenderError::OperationError(err.to_string()),
        }
    }
}
