//! Binary architecture probing.
//!
//! An extracted library left behind by a previous run may have been produced
//! for a different CPU architecture (an x86_64 process under Rosetta 2 next
//! to an arm64 one, or the reverse). The probe classifies an on-disk binary
//! and answers whether it matches the running process, so callers can
//! re-stage a mismatched file instead of failing at load time.

use std::path::Path;

use tracing::{debug, warn};

use crate::arch::Arch;
use crate::command::Command;
use crate::error::Result;
use crate::os::OS;

/// Capability: does the binary at a path match the running process's
/// architecture?
///
/// Implementations never fail; any internal error degrades to `false`,
/// trading a possibly-unnecessary re-copy for robustness.
pub trait ArchProbe: Send + Sync {
    fn matches(&self, path: &Path) -> bool;
}

/// Probe that classifies Mach-O dynamic libraries with the `file(1)` utility.
///
/// Only meaningful on macOS and only for `.dylib` files; every other
/// OS/extension combination reports a match unconditionally (no check is
/// performed there). The comparison is a substring heuristic over the
/// utility's human-readable output, limited to the two known 64-bit
/// families.
pub struct FileCmdProbe {
    os: OS,
    arch: Arch,
}

impl FileCmdProbe {
    /// Probe for the detected host OS and process architecture.
    pub fn host() -> Self {
        Self::new(OS::detect(), Arch::detect())
    }

    pub fn new(os: OS, arch: Arch) -> Self {
        Self { os, arch }
    }

    fn is_checked(&self, path: &Path) -> bool {
        self.os == OS::Macos && path.extension().and_then(|e| e.to_str()) == Some("dylib")
    }
}

impl ArchProbe for FileCmdProbe {
    fn matches(&self, path: &Path) -> bool {
        if !self.is_checked(path) {
            return true;
        }

        // Outside the two known 64-bit families there is nothing to compare
        // against; assume a mismatch and let the caller re-stage.
        let Some(token) = self.arch.macho_token() else {
            return false;
        };

        match classify(path) {
            Ok(description) => {
                let matched = description.contains(token);
                debug!(
                    path = %path.display(),
                    description,
                    matched,
                    "probed binary architecture"
                );
                matched
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "architecture probe failed, forcing re-stage");
                false
            }
        }
    }
}

/// First line of `file <path>` output.
fn classify(path: &Path) -> Result<String> {
    Command::new("file").arg(path).capture_line()
}

/// Probe that reports every binary as matching.
///
/// Stands in for the real probe on platforms without a checkable format,
/// and in tests.
pub struct MatchAll;

impl ArchProbe for MatchAll {
    fn matches(&self, _path: &Path) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn non_macos_hosts_never_check() {
        let probe = FileCmdProbe::new(OS::Linux, Arch::X86_64);
        assert!(probe.matches(Path::new("/tmp/libX.dylib")));

        let probe = FileCmdProbe::new(OS::Windows, Arch::X86_64);
        assert!(probe.matches(Path::new("C:\\tmp\\RapidOcr.dll")));
    }

    #[test]
    fn non_dylib_files_never_checked_on_macos() {
        let probe = FileCmdProbe::new(OS::Macos, Arch::ARM64);
        assert!(probe.matches(Path::new("/tmp/libX.so")));
        assert!(probe.matches(Path::new("/tmp/model.onnx")));
    }

    #[test]
    fn unknown_process_arch_forces_restage() {
        // No token to compare against, so the probe cannot succeed; it must
        // degrade to a mismatch without spawning anything.
        let probe = FileCmdProbe::new(OS::Macos, Arch::Unknown);
        assert!(!probe.matches(&PathBuf::from("/nonexistent/libX.dylib")));
    }

    #[test]
    fn match_all_matches_anything() {
        assert!(MatchAll.matches(Path::new("/does/not/exist")));
    }
}
