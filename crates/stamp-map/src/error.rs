use std::path::PathBuf;

/// Errors raised while building a [`DataMapping`](crate::DataMapping).
///
/// Line content never produces an error; only the file itself can fail.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The map file could not be opened.
    #[error("cannot open map file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part way through.
    #[error("cannot read map file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An empty separator would split every line between each character.
    #[error("separator must not be empty")]
    EmptySeparator,
}
