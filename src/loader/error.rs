use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no data found in {path:?}")]
    NoDataFound { path: PathBuf },
    #[error("invalid file type: {extension:?}")]
    InvalidFileType { extension: String },
    #[error("unsupported archive format: {path:?}")]
    UnsupportedArchive { path: PathBuf },
    #[error("entry {entry:?} in {path:?} holds {actual} bytes, header says {expected}")]
    Truncated {
        path: PathBuf,
        entry: String,
        expected: u64,
        actual: u64,
    },
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read zip archive {path:?}: {source}")]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| LoadError::Io { path, source }
    }
}
