//! Operating system detection.

/// Operating system family of the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OS {
    Windows,
    Macos,
    Linux,
    Unknown,
}

impl OS {
    /// Detect the operating system the process was built for.
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "windows" => OS::Windows,
            "macos" => OS::Macos,
            "linux" => OS::Linux,
            _ => OS::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_matches_compile_target() {
        let os = OS::detect();
        #[cfg(target_os = "linux")]
        assert_eq!(os, OS::Linux);
        #[cfg(target_os = "macos")]
        assert_eq!(os, OS::Macos);
        #[cfg(target_os = "windows")]
        assert_eq!(os, OS::Windows);
    }
}
