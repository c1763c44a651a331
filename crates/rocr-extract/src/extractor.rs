use std::collections::HashMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use libloading::Library;
use once_cell::sync::Lazy;
use tracing::debug;

use rocr_bundle::{Bundle, path};
use rocr_platform::{ArchProbe, FileCmdProbe};

use crate::cleanup::CleanupList;
use crate::error::{Error, Result};

/// Directory under the system temp dir holding every staged file.
pub const STAGING_DIR_NAME: &str = "ocrJava";

/// Loaded native modules stay mapped for the process lifetime; nothing ever
/// unloads them, even if the extractor that loaded them is dropped.
static LOADED: Lazy<Mutex<Vec<Library>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Per-call extraction flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtractOptions {
    pub load: bool,
    pub delete_on_exit: bool,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the staged file as a native module after copying.
    pub fn load(mut self, load: bool) -> Self {
        self.load = load;
        self
    }

    /// Register the staged file and its directory for best-effort removal
    /// at shutdown.
    pub fn delete_on_exit(mut self, delete_on_exit: bool) -> Self {
        self.delete_on_exit = delete_on_exit;
        self
    }
}

/// Stages resources from the packaged bundle into the process's staging
/// root and optionally loads them as native modules.
///
/// Construct one at startup and thread it into every call; there is no
/// hidden process-global state besides the retained module handles. All
/// operations are serialized through an internal mutex, so the extractor
/// can be shared freely across threads.
pub struct Extractor<B> {
    bundle: B,
    root: PathBuf,
    probe: Box<dyn ArchProbe>,
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    // Destination directories created so far, one per backend/model tag.
    dirs: HashMap<String, PathBuf>,
    cleanup: CleanupList,
}

impl<B: Bundle> Extractor<B> {
    /// Extractor rooted at `<system temp dir>/ocrJava`.
    pub fn new(bundle: B) -> Self {
        Self::with_root(bundle, std::env::temp_dir().join(STAGING_DIR_NAME))
    }

    /// Extractor rooted at an explicit staging directory.
    pub fn with_root(bundle: B, root: impl Into<PathBuf>) -> Self {
        Self {
            bundle,
            root: root.into(),
            probe: Box::new(FileCmdProbe::host()),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Replace the architecture probe.
    pub fn with_probe(mut self, probe: impl ArchProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Staging root this extractor writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stage a bundled resource under `<root>/<dest_tag>/<filename>`.
    ///
    /// Copies the resource out of the bundle when the target file is absent
    /// or fails the architecture probe; otherwise the existing file is kept
    /// untouched. With [`ExtractOptions::load`] the staged file is then
    /// loaded into the process as a native module; with
    /// [`ExtractOptions::delete_on_exit`] it is registered for best-effort
    /// removal at shutdown.
    ///
    /// Returns the absolute path of the staged file.
    pub fn extract(
        &self,
        resource: &str,
        dest_tag: &str,
        options: ExtractOptions,
    ) -> Result<PathBuf> {
        // Validated before anything touches the filesystem.
        let filename = path::file_name(resource)?;

        let mut inner = lock(&self.inner);

        let dir = self.dest_dir(&mut inner, dest_tag)?;
        let target = dir.join(filename);

        if !target.exists() || !self.probe.matches(&target) {
            debug!(resource, target = %target.display(), "staging resource");
            self.stage(resource, &target)?;
        }

        if options.load {
            let library = unsafe { Library::new(&target) }.map_err(|source| Error::Load {
                path: target.clone(),
                source,
            })?;
            lock(&LOADED).push(library);
            debug!(target = %target.display(), "loaded native module");
        }

        if options.delete_on_exit {
            inner.cleanup.register_file(target.clone());
            inner.cleanup.register_dir(dir);
        }

        Ok(target)
    }

    /// Run the deferred deletion list now.
    ///
    /// Intended for the process's shutdown path; also invoked on drop.
    /// Best-effort: failures are logged, never returned.
    pub fn run_cleanup(&self) {
        lock(&self.inner).cleanup.run();
    }

    fn dest_dir(&self, inner: &mut Inner, tag: &str) -> Result<PathBuf> {
        let tag = tag.trim_start_matches('/');
        if let Some(dir) = inner.dirs.get(tag) {
            return Ok(dir.clone());
        }

        let dir = self.root.join(tag);
        fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
            path: dir.clone(),
            source,
        })?;
        inner.dirs.insert(tag.to_string(), dir.clone());
        Ok(dir)
    }

    fn stage(&self, resource: &str, target: &Path) -> Result<()> {
        let mut reader = self.bundle.open(resource)?;

        let mut file = File::create(target).map_err(|source| Error::Copy {
            path: target.to_path_buf(),
            source,
        })?;

        if let Err(source) = io::copy(&mut reader, &mut file) {
            // Never leave a truncated binary behind.
            drop(file);
            let _ = fs::remove_file(target);
            return Err(Error::Copy {
                path: target.to_path_buf(),
                source,
            });
        }

        Ok(())
    }
}

impl<B> Drop for Extractor<B> {
    fn drop(&mut self) {
        let inner = self
            .inner
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !inner.cleanup.is_empty() {
            inner.cleanup.run();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
