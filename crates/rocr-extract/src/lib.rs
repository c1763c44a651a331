//! Staging of bundled native libraries and model assets.
//!
//! The [`Extractor`] copies resources out of the packaged archive into a
//! per-process staging directory under the system temp dir, re-staging any
//! existing file whose CPU architecture no longer matches the running
//! process, and optionally loads the result as a native module. All staging
//! is serialized through the extractor, so concurrent callers cannot race on
//! directory creation or on identical target files.

pub use error::{Error, Result};
pub use extractor::{Extractor, ExtractOptions, STAGING_DIR_NAME};
pub use model::ModelSet;

mod cleanup;
mod error;
mod extractor;
mod model;
