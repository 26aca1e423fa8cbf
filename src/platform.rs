use std::fmt;

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
    Other,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::MacOs => write!(f, "macos"),
            Os::Linux => write!(f, "linux"),
            Os::Other => write!(f, "other"),
        }
    }
}

/// Platform information for the current system.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub os: Os,
}

impl Platform {
    /// Detect the current platform.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
        }
    }

    /// Create a platform with explicit values (for testing).
    #[must_use]
    pub const fn new(os: Os) -> Self {
        Self { os }
    }

    /// Whether Homebrew-based tool provisioning applies on this system.
    ///
    /// Homebrew installs on macOS and Linux; everything else skips the
    /// tool-provisioning steps rather than failing them.
    #[must_use]
    pub fn supports_homebrew(&self) -> bool {
        matches!(self.os, Os::MacOs | Os::Linux)
    }

    fn detect_os() -> Os {
        if cfg!(target_os = "macos") {
            Os::MacOs
        } else if cfg!(target_os = "linux") {
            Os::Linux
        } else {
            Os::Other
        }
    }
}
