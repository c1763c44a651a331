//! Logical resource path handling.
//!
//! Resource paths are slash-separated regardless of host platform. The last
//! segment is the filename and must be at least [`MIN_FILE_NAME_LEN`]
//! characters; a path with no directory component is rejected.

use crate::error::{Error, Result};

/// Shortest filename accepted for an extraction target.
pub const MIN_FILE_NAME_LEN: usize = 3;

/// Filename portion of a logical resource path.
pub fn file_name(path: &str) -> Result<&str> {
    let invalid = || Error::InvalidFilename {
        path: path.to_string(),
    };

    let (_, name) = path.rsplit_once('/').ok_or_else(invalid)?;
    if name.len() < MIN_FILE_NAME_LEN {
        return Err(invalid());
    }
    Ok(name)
}

/// Strip any leading slashes so the path can be resolved inside an archive.
pub fn normalize(path: &str) -> &str {
    path.trim_start_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_last_segment() {
        assert_eq!(file_name("lib/libRapidOcr-x86_64.so").unwrap(), "libRapidOcr-x86_64.so");
        assert_eq!(file_name("models/det/a.onnx").unwrap(), "a.onnx");
    }

    #[test]
    fn short_file_name_rejected() {
        assert!(matches!(file_name("lib/ab"), Err(Error::InvalidFilename { .. })));
        assert!(matches!(file_name("lib/"), Err(Error::InvalidFilename { .. })));
    }

    #[test]
    fn path_without_directory_rejected() {
        assert!(matches!(file_name("libRapidOcr.so"), Err(Error::InvalidFilename { .. })));
        assert!(matches!(file_name(""), Err(Error::InvalidFilename { .. })));
    }

    #[test]
    fn normalize_strips_leading_slashes() {
        assert_eq!(normalize("/lib/a.so"), "lib/a.so");
        assert_eq!(normalize("lib/a.so"), "lib/a.so");
        assert_eq!(normalize("//models/"), "models/");
    }
}
