//! Resource lookup over the packaged distributable.
//!
//! Native libraries and model assets ship embedded in the packaged archive.
//! A [`Bundle`] resolves a logical slash-separated path to a byte stream;
//! presence or absence of a path is the only contract callers rely on.

pub use dir::DirBundle;
pub use error::{Error, Result};
pub use zip_bundle::ZipBundle;

mod dir;
mod error;
pub mod path;
mod zip_bundle;

use std::io::Read;

/// Read-stream access to resources embedded in the packaged archive.
pub trait Bundle: Send + Sync {
    /// Open the resource at `path` for reading.
    ///
    /// Fails with [`Error::NotFound`] when no such resource is embedded.
    fn open(&self, path: &str) -> Result<Box<dyn Read + Send + '_>>;

    /// Whether a resource exists at `path`.
    fn contains(&self, path: &str) -> bool;
}

impl<B: Bundle + ?Sized> Bundle for &B {
    fn open(&self, path: &str) -> Result<Box<dyn Read + Send + '_>> {
        (**self).open(path)
    }

    fn contains(&self, path: &str) -> bool {
        (**self).contains(path)
    }
}
