use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::{Bundle, path};

/// Bundle backed by a plain directory tree.
///
/// Used when resources are deployed unpacked next to the application, and
/// throughout the test suites.
#[derive(Clone, Debug)]
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Bundle for DirBundle {
    fn open(&self, logical: &str) -> Result<Box<dyn Read + Send + '_>> {
        let full = self.root.join(path::normalize(logical));
        match File::open(&full) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound {
                path: logical.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, logical: &str) -> bool {
        self.root.join(path::normalize(logical)).is_file()
    }
}
