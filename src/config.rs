//! Fixed collaborators for a setup run.
//!
//! The package sets and destination paths are deliberately hard-coded: there
//! is no manifest format, no versioning, and no lock file. The only variable
//! inputs are the source tree root and the home directory, both resolved once
//! per run and carried explicitly so provisioning logic never reaches for
//! ambient process state.

use std::path::{Path, PathBuf};

use anyhow::Result;

/// File name of the persisted API token, under `<home>/.ssh/`.
pub const CREDENTIAL_FILE: &str = "DigitalOceanToken";

/// Remote bootstrap command that installs Homebrew when `brew` is missing.
pub const HOMEBREW_BOOTSTRAP: &str = "/usr/bin/ruby -e \"$(curl -fsSL \
     https://raw.githubusercontent.com/Homebrew/install/master/install)\"";

/// Python modules `ocean` imports at runtime.
pub const PYTHON_LIBS: &[&str] = &["digitalocean", "tabulate"];

/// Resolved paths for a single setup run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source tree root containing `src/ocean` and `src/requirements.txt`.
    pub root: PathBuf,
    /// User's home directory.
    pub home: PathBuf,
}

impl Config {
    /// Create a config with explicit paths (primarily for tests).
    #[must_use]
    pub const fn new(root: PathBuf, home: PathBuf) -> Self {
        Self { root, home }
    }

    /// Resolve the config from an optional `--root` override.
    ///
    /// The root defaults to the current directory; the home directory comes
    /// from the platform conventions (`$HOME` on Unix).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or, absent
    /// an override, the current directory cannot be read.
    pub fn resolve(root_override: Option<&Path>) -> Result<Self> {
        let root = match root_override {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self { root, home })
    }

    /// Path of the persisted API token file.
    #[must_use]
    pub fn credential_file(&self) -> PathBuf {
        self.home.join(".ssh").join(CREDENTIAL_FILE)
    }

    /// Destination directory on the user's search path.
    #[must_use]
    pub fn bin_dir(&self) -> PathBuf {
        self.home.join(".bin")
    }

    /// Source path of the `ocean` executable tree.
    #[must_use]
    pub fn artifact_source(&self) -> PathBuf {
        self.root.join("src").join("ocean")
    }

    /// Requirements manifest consumed by `pip3 install -r`.
    #[must_use]
    pub fn requirements_manifest(&self) -> PathBuf {
        self.root.join("src").join("requirements.txt")
    }
}
