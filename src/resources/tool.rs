//! External tool resource.
//!
//! A required command-line tool whose presence is checked by search-path
//! resolution. Presence is a transient fact re-derived on every run, never
//! persisted.

use anyhow::Result;

use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::config::HOMEBREW_BOOTSTRAP;
use crate::error::ProvisionError;
use crate::exec::Executor;

/// How a missing tool gets installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installer {
    /// Fetch and run the remote Homebrew bootstrap script.
    HomebrewBootstrap,
    /// Install a package with `brew install`.
    Homebrew {
        /// Homebrew package name.
        package: &'static str,
    },
}

/// A required tool that can be checked and installed.
pub struct ToolResource<'a> {
    /// Tool name as resolved on the search path.
    pub name: &'static str,
    installer: Installer,
    executor: &'a dyn Executor,
}

impl<'a> ToolResource<'a> {
    /// Create a new tool resource.
    #[must_use]
    pub const fn new(name: &'static str, installer: Installer, executor: &'a dyn Executor) -> Self {
        Self {
            name,
            installer,
            executor,
        }
    }
}

impl Applicable for ToolResource<'_> {
    fn description(&self) -> String {
        match self.installer {
            Installer::HomebrewBootstrap => format!("{} (remote bootstrap)", self.name),
            Installer::Homebrew { .. } => format!("{} (brew)", self.name),
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        let result = match self.installer {
            // The bootstrap is a shell construct (command substitution), so
            // it runs through bash rather than being spawned directly.
            Installer::HomebrewBootstrap => {
                self.executor.run("/bin/bash", &["-c", HOMEBREW_BOOTSTRAP])
            }
            Installer::Homebrew { package } => self.executor.run("brew", &["install", package]),
        };
        result.map_err(|e| ProvisionError::ToolInstall {
            tool: self.name.to_string(),
            reason: format!("{e:#}"),
        })?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for ToolResource<'_> {
    fn current_state(&self) -> Result<ResourceState> {
        if self.executor.which(self.name) {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }
}
