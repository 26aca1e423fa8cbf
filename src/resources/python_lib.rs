//! Python library resource.
//!
//! Importability of the modules `ocean` needs at runtime, probed per module
//! through the interpreter. Installation is batched: one `pip3 install -r`
//! run from the fixed requirements manifest covers every module.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::error::ProvisionError;
use crate::exec::Executor;

/// A Python module that must be importable.
pub struct PythonLibResource<'a> {
    /// Module name as imported by `ocean`.
    pub module: String,
    manifest: PathBuf,
    executor: &'a dyn Executor,
}

impl<'a> PythonLibResource<'a> {
    /// Create a new library resource backed by the requirements manifest.
    #[must_use]
    pub const fn new(module: String, manifest: PathBuf, executor: &'a dyn Executor) -> Self {
        Self {
            module,
            manifest,
            executor,
        }
    }
}

/// Run the interpreter's package installer against the requirements manifest.
///
/// One invocation installs every listed library; there is no per-module
/// granularity in the manifest format.
///
/// # Errors
///
/// Returns [`ProvisionError::LibraryInstall`] if `pip3` cannot be spawned or
/// exits non-zero.
pub fn install_from_manifest(
    manifest: &Path,
    executor: &dyn Executor,
) -> Result<(), ProvisionError> {
    let manifest_str = manifest.display().to_string();
    executor
        .run("pip3", &["install", "-r", &manifest_str])
        .map_err(|e| ProvisionError::LibraryInstall {
            manifest: manifest_str,
            reason: format!("{e:#}"),
        })?;
    Ok(())
}

impl Applicable for PythonLibResource<'_> {
    fn description(&self) -> String {
        format!("{} (pip3)", self.module)
    }

    fn apply(&self) -> Result<ResourceChange> {
        install_from_manifest(&self.manifest, self.executor)?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for PythonLibResource<'_> {
    fn current_state(&self) -> Result<ResourceState> {
        let import = format!("import {}", self.module);
        let result = self.executor.run_unchecked("python3", &["-c", &import])?;
        if result.success {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }
}
