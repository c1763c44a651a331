//! Per-platform dispatchers for the bundled RapidOcr native libraries.
//!
//! Each packaged variant ships exactly one native library; the dispatcher
//! for that variant names its resource path and backend family, nothing
//! more. Which dispatcher a deployment instantiates is decided by
//! packaging, not at runtime.

pub use backend::Backend;
pub use dispatch::{
    NcnnLinuxX8664, NcnnMacX8664, NcnnWindowsX8664, OnnxLinuxX8664, OnnxMacArm64, OnnxMacX8664,
    OnnxWindowsX86, OnnxWindowsX8664,
};

mod backend;
mod dispatch;

use std::path::PathBuf;

use rocr_bundle::Bundle;
use rocr_extract::{ExtractOptions, Extractor, Result};

/// A packaged variant that can load its designated native library.
pub trait LibraryLoader {
    /// Resource path of the native library inside the bundle.
    fn resource(&self) -> &'static str;

    /// Engine backend the library belongs to.
    fn backend(&self) -> Backend;

    /// Stage the designated library and load it into the process.
    ///
    /// Returns the staged path. Loading failure is unrecoverable; the
    /// process has no OCR backend without its native module.
    fn load_library<B: Bundle>(&self, extractor: &Extractor<B>) -> Result<PathBuf>
    where
        Self: Sized,
    {
        extractor.extract(
            self.resource(),
            self.backend().tag(),
            ExtractOptions::new().load(true),
        )
    }
}

/// Stage the loader's library without loading it.
///
/// Useful when the library is linked or loaded by other means and only the
/// on-disk copy is needed.
pub fn stage_library<B: Bundle>(
    loader: &dyn LibraryLoader,
    extractor: &Extractor<B>,
) -> Result<PathBuf> {
    extractor.extract(
        loader.resource(),
        loader.backend().tag(),
        ExtractOptions::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocr_bundle::DirBundle;

    #[test]
    fn stage_library_places_file_under_backend_tag() {
        let src = tempfile::tempdir().unwrap();
        std::fs::create_dir(src.path().join("lib")).unwrap();
        std::fs::write(src.path().join("lib/libRapidOcr-x86_64.so"), b"elf").unwrap();

        let staging = tempfile::tempdir().unwrap();
        let extractor =
            Extractor::with_root(DirBundle::new(src.path()), staging.path().join("ocrJava"));

        let staged = stage_library(&OnnxLinuxX8664, &extractor).unwrap();
        assert_eq!(staged, extractor.root().join("onnx/libRapidOcr-x86_64.so"));
        assert_eq!(std::fs::read(&staged).unwrap(), b"elf");
    }

    #[test]
    fn load_library_surfaces_missing_resource() {
        // Empty bundle: staging fails before any load is attempted.
        let src = tempfile::tempdir().unwrap();
        let staging = tempfile::tempdir().unwrap();
        let extractor =
            Extractor::with_root(DirBundle::new(src.path()), staging.path().join("ocrJava"));

        let err = NcnnLinuxX8664.load_library(&extractor).unwrap_err();
        assert!(matches!(
            err,
            rocr_extract::Error::Bundle(rocr_bundle::Error::NotFound { .. })
        ));
    }
}
