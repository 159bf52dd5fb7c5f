//! Render destinations for one-shot output.
//!
//! [`OutputDestination`] covers the synchronous sinks: standard output and a
//! file. The HTTP sink lives with the preview server, which renders into a
//! buffer via [`Template::render_bytes`](crate::Template::render_bytes).

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use stamp_map::DataMapping;
use tracing::debug;

use crate::engine::Template;
use crate::error::RenderError;

/// Destination for rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    /// Write to standard output
    Stdout,
    /// Create or truncate a file and write to it
    File(PathBuf),
}

impl OutputDestination {
    /// Executes `template` once, streaming into this destination.
    ///
    /// A file destination is created if absent and truncated if present. The
    /// handle is released when this call returns, on success or failure.
    pub fn render(&self, template: &dyn Template, data: &DataMapping) -> Result<(), RenderError> {
        match self {
            OutputDestination::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                template.execute(&mut handle, data)?;
                handle.flush()?;
            }
            OutputDestination::File(path) => {
                validate_path(path)?;
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|e| RenderError::OutputError(path.clone(), e))?;
                let mut writer = BufWriter::new(file);
                template.execute(&mut writer, data)?;
                writer.flush()?;
                debug!(path = %path.display(), "wrote output file");
            }
        }
        Ok(())
    }
}

/// Validates that a file path's parent directory exists.
fn validate_path(path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(RenderError::OutputError(
                path.to_path_buf(),
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("parent directory does not exist: {}", parent.display()),
                ),
            ));
        }
    }
    Ok(())
}
