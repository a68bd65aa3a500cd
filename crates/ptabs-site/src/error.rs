use std::path::PathBuf;

/// Site build error.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Source directory does not exist.
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Walking the source tree failed.
    #[error("Failed to walk source directory: {0}")]
    Walk(#[from] ignore::Error),
    /// A bundled asset could not be loaded.
    #[error("Asset not found: {0}")]
    MissingAsset(String),
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
