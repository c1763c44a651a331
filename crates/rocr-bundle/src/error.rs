use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file name in '{path}' must be a slash-separated segment of at least 3 characters")]
    InvalidFilename { path: String },

    #[error("resource '{path}' not found in bundle")]
    NotFound { path: String },

    #[error("bundle archive is corrupted")]
    Corrupted,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
