use std::fs::File;
use std::io::{Cursor, Read};
use std::path::PathBuf;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};
use crate::{Bundle, path};

/// Bundle backed by the packaged zip archive.
///
/// The archive is re-opened per lookup so the bundle stays cheap to clone
/// and share; entries are buffered before being handed out, which keeps the
/// reader independent of the archive handle.
#[derive(Clone, Debug)]
pub struct ZipBundle {
    archive_path: PathBuf,
}

impl ZipBundle {
    /// Open `archive_path`, verifying it is a readable archive.
    pub fn open(archive_path: impl Into<PathBuf>) -> Result<Self> {
        let archive_path = archive_path.into();
        let file = File::open(&archive_path)?;
        ZipArchive::new(file).map_err(from_zip)?;
        Ok(Self { archive_path })
    }

    fn archive(&self) -> Result<ZipArchive<File>> {
        let file = File::open(&self.archive_path)?;
        ZipArchive::new(file).map_err(from_zip)
    }
}

impl Bundle for ZipBundle {
    fn open(&self, logical: &str) -> Result<Box<dyn Read + Send + '_>> {
        let mut archive = self.archive()?;
        let mut entry = match archive.by_name(path::normalize(logical)) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(Error::NotFound {
                    path: logical.to_string(),
                });
            }
            Err(e) => return Err(from_zip(e)),
        };

        let mut content = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut content)?;
        Ok(Box::new(Cursor::new(content)))
    }

    fn contains(&self, logical: &str) -> bool {
        self.archive()
            .map(|mut archive| archive.by_name(path::normalize(logical)).is_ok())
            .unwrap_or(false)
    }
}

fn from_zip(e: ZipError) -> Error {
    match e {
        ZipError::Io(e) => Error::Io(e),
        _ => Error::Corrupted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn write_archive(dir: &std::path::Path) -> PathBuf {
        let archive_path = dir.join("bundle.jar");
        let file = File::create(&archive_path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        writer.start_file("lib/libX.so", options).unwrap();
        writer.write_all(b"native bytes").unwrap();
        writer.start_file("models/det/a.onnx", options).unwrap();
        writer.write_all(b"model a").unwrap();
        writer.finish().unwrap();

        archive_path
    }

    #[test]
    fn open_reads_entry_content() {
        let dir = tempdir().unwrap();
        let bundle = ZipBundle::open(write_archive(dir.path())).unwrap();

        let mut content = Vec::new();
        bundle.open("lib/libX.so").unwrap().read_to_end(&mut content).unwrap();
        assert_eq!(content, b"native bytes");
    }

    #[test]
    fn leading_slash_is_ignored() {
        let dir = tempdir().unwrap();
        let bundle = ZipBundle::open(write_archive(dir.path())).unwrap();

        assert!(bundle.contains("/models/det/a.onnx"));
        assert!(bundle.contains("models/det/a.onnx"));
    }

    #[test]
    fn missing_entry_is_not_found() {
        let dir = tempdir().unwrap();
        let bundle = ZipBundle::open(write_archive(dir.path())).unwrap();

        assert!(matches!(
            bundle.open("lib/absent.so"),
            Err(Error::NotFound { .. })
        ));
        assert!(!bundle.contains("lib/absent.so"));
    }

    #[test]
    fn garbage_archive_rejected() {
        let dir = tempdir().unwrap();
        let garbage = dir.path().join("garbage.jar");
        std::fs::write(&garbage, b"not a zip archive").unwrap();

        assert!(ZipBundle::open(garbage).is_err());
    }
}
