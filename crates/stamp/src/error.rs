//! Application errors and their exit statuses.

use std::net::SocketAddr;

use stamp_map::MapError;
use stamp_render::RenderError;

/// Every way a `stamp` run can fail.
///
/// Each variant maps to a stable exit status via [`AppError::exit_code`]:
///
/// | Code | Variants |
/// |------|----------|
/// | 1 | [`Usage`](Self::Usage) |
/// | 2 | [`Load`](Self::Load), [`Render`](Self::Render) |
/// | 3 | [`MapFile`](Self::MapFile) |
/// | 4 | [`WorkingDir`](Self::WorkingDir), [`Bind`](Self::Bind), [`Serve`](Self::Serve) |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad or conflicting arguments.
    #[error("{0}")]
    Usage(String),

    /// The template could not be read or compiled.
    #[error("cannot load template: {0}")]
    Load(#[source] RenderError),

    /// Executing the template or writing its output failed.
    #[error("cannot render template: {0}")]
    Render(#[source] RenderError),

    #[error(transparent)]
    MapFile(#[from] MapError),

    #[error("cannot resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("preview server failed: {0}")]
    Serve(#[source] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage(_) => 1,
            AppError::MapFile(MapError::EmptySeparator) => 1,
            AppError::Load(_) | AppError::Render(_) => 2,
            AppError::MapFile(_) => 3,
            AppError::WorkingDir(_) | AppError::Bind { .. } | AppError::Serve(_) => 4,
        }
    }
}
