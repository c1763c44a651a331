//! CPU architecture detection.

/// CPU architecture reported for the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X86_64,
    ARM,
    ARM64,
    Unknown,
}

impl Arch {
    /// Detect the architecture of the running process.
    ///
    /// Under translation layers (Rosetta 2) this reports the translated
    /// architecture, which is the one extracted binaries must match.
    pub fn detect() -> Self {
        let cpu_arch = sysinfo::System::cpu_arch();
        match cpu_arch.as_str() {
            "i386" | "i686" => Arch::X86,
            "x86_64" => Arch::X86_64,
            "arm" | "armv7l" => Arch::ARM,
            "aarch64" | "arm64" => Arch::ARM64,
            _ => Arch::Unknown,
        }
    }

    /// Token `file(1)` prints for this architecture in Mach-O descriptions,
    /// for the two 64-bit families the probe knows how to verify.
    pub fn macho_token(self) -> Option<&'static str> {
        match self {
            Arch::X86_64 => Some("x86_64"),
            Arch::ARM64 => Some("arm64"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_is_a_known_family_on_test_hosts() {
        // CI and developer machines are all 64-bit.
        let arch = Arch::detect();
        assert!(matches!(arch, Arch::X86_64 | Arch::ARM64));
    }

    #[test]
    fn only_64bit_families_have_macho_tokens() {
        assert_eq!(Arch::X86_64.macho_token(), Some("x86_64"));
        assert_eq!(Arch::ARM64.macho_token(), Some("arm64"));
        assert_eq!(Arch::X86.macho_token(), None);
        assert_eq!(Arch::ARM.macho_token(), None);
        assert_eq!(Arch::Unknown.macho_token(), None);
    }
}
