//! Credential file resource.
//!
//! The persisted API token at `<home>/.ssh/DigitalOceanToken`. Existence of
//! the file is the sole completion signal: once present it is never rewritten
//! by this engine, and its content is never validated.

use std::path::PathBuf;

use anyhow::Result;

use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::credential::TokenSource;
use crate::error::CredentialError;

/// The API token file, fed from an injected [`TokenSource`].
pub struct CredentialResource<'a> {
    path: PathBuf,
    source: &'a dyn TokenSource,
}

impl<'a> CredentialResource<'a> {
    /// Create a new credential resource.
    #[must_use]
    pub const fn new(path: PathBuf, source: &'a dyn TokenSource) -> Self {
        Self { path, source }
    }
}

impl Applicable for CredentialResource<'_> {
    fn description(&self) -> String {
        format!("API token ({})", self.path.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        if self.path.exists() {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        // The token source may block on stdin, so it is consulted only after
        // the existence check.
        let token = self.source.obtain()?;
        super::fs::ensure_parent_dir(&self.path)?;
        std::fs::write(&self.path, &token).map_err(|source| CredentialError::Persist {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for CredentialResource<'_> {
    fn current_state(&self) -> Result<ResourceState> {
        if self.path.exists() {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }
}
