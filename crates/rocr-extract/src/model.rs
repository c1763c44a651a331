//! Model asset descriptors and batch staging.

use std::path::PathBuf;

use rocr_bundle::Bundle;

use crate::error::Result;
use crate::extractor::{ExtractOptions, Extractor};

/// A named set of model assets bundled together.
///
/// Consumed, not owned, by the extractor: `kind` tags the destination
/// directory, `dir` is the base directory inside the bundle, `files` are
/// paths relative to it.
#[derive(Clone, Debug)]
pub struct ModelSet {
    kind: String,
    dir: String,
    files: Vec<String>,
}

impl ModelSet {
    pub fn new(
        kind: impl Into<String>,
        dir: impl Into<String>,
        files: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            kind: kind.into(),
            dir: dir.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Bundle-relative base path: leading slash stripped, trailing slash
    /// ensured.
    pub fn base_path(&self) -> String {
        let stripped = self.dir.trim_start_matches('/');
        if stripped.ends_with('/') || stripped.is_empty() {
            stripped.to_string()
        } else {
            format!("{stripped}/")
        }
    }
}

impl<B: Bundle> Extractor<B> {
    /// Stage every file of a model set under `<root>/<kind>/`.
    ///
    /// Pure file staging: nothing is loaded. Fails on the first extraction
    /// failure, leaving earlier files in place.
    pub fn extract_models(&self, set: &ModelSet, delete_on_exit: bool) -> Result<Vec<PathBuf>> {
        let base = set.base_path();
        let options = ExtractOptions::new().delete_on_exit(delete_on_exit);

        let mut staged = Vec::with_capacity(set.files().len());
        for file in set.files() {
            staged.push(self.extract(&format!("{base}{file}"), set.kind(), options)?);
        }
        Ok(staged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_normalizes_slashes() {
        let set = ModelSet::new("det", "/models/det/", ["a.onnx"]);
        assert_eq!(set.base_path(), "models/det/");

        let set = ModelSet::new("det", "models/det", ["a.onnx"]);
        assert_eq!(set.base_path(), "models/det/");
    }

    #[test]
    fn empty_dir_stays_empty() {
        let set = ModelSet::new("det", "", ["a.onnx"]);
        assert_eq!(set.base_path(), "");
    }
}
