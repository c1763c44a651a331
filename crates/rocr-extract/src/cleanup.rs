//! Best-effort removal of staged files at shutdown.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::warn;

/// Deferred deletion list for staged files and their directories.
///
/// Removal is best-effort: failures are logged, never propagated. Files go
/// first so their directories have a chance of being empty; directories are
/// only removed when they are.
#[derive(Debug, Default)]
pub(crate) struct CleanupList {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl CleanupList {
    pub fn register_file(&mut self, path: PathBuf) {
        if !self.files.contains(&path) {
            self.files.push(path);
        }
    }

    pub fn register_dir(&mut self, path: PathBuf) {
        if !self.dirs.contains(&path) {
            self.dirs.push(path);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    pub fn run(&mut self) {
        for file in self.files.drain(..) {
            if let Err(e) = fs::remove_file(&file) {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!(path = %file.display(), error = %e, "failed to remove staged file");
                }
            }
        }
        for dir in self.dirs.drain(..) {
            if let Err(e) = fs::remove_dir(&dir) {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!(path = %dir.display(), error = %e, "failed to remove staging directory");
                }
            }
        }
    }
}
