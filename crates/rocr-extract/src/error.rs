use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Bundle(#[from] rocr_bundle::Error),

    #[error("failed to create staging directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to copy resource to {path}: {source}")]
    Copy { path: PathBuf, source: io::Error },

    #[error("failed to load native module {path}: {source}")]
    Load {
        path: PathBuf,
        source: libloading::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
