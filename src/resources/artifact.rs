//! Installed copy of the `ocean` executable tree.
//!
//! The artifact is copied verbatim into the destination directory on every
//! run, replacing whatever was there. There is no state check; this resource
//! implements only [`Applicable`].

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::{Applicable, ResourceChange, fs};

/// The `ocean` executable (file or directory) to place on the search path.
pub struct ArtifactResource {
    source: PathBuf,
    dest_dir: PathBuf,
}

impl ArtifactResource {
    /// Create a new artifact resource.
    #[must_use]
    pub const fn new(source: PathBuf, dest_dir: PathBuf) -> Self {
        Self { source, dest_dir }
    }

    /// Final path of the installed artifact inside the destination directory.
    fn target(&self) -> PathBuf {
        self.source.file_name().map_or_else(
            || self.dest_dir.clone(),
            |name| self.dest_dir.join(name),
        )
    }
}

impl Applicable for ArtifactResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.source.display(), self.dest_dir.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        if !self.source.exists() {
            return Ok(ResourceChange::Skipped {
                reason: format!("source artifact missing: {}", self.source.display()),
            });
        }

        std::fs::create_dir_all(&self.dest_dir)
            .with_context(|| format!("creating directory {}", self.dest_dir.display()))?;

        // Replace the previous copy wholesale so the destination is an exact
        // mirror of the current source, with no stale leftovers.
        let target = self.target();
        if target.is_dir() {
            std::fs::remove_dir_all(&target)
                .with_context(|| format!("removing previous copy {}", target.display()))?;
        } else if target.exists() {
            std::fs::remove_file(&target)
                .with_context(|| format!("removing previous copy {}", target.display()))?;
        }

        if self.source.is_dir() {
            fs::copy_dir_recursive(&self.source, &target)?;
        } else {
            std::fs::copy(&self.source, &target).with_context(|| {
                format!(
                    "copying {} to {}",
                    self.source.display(),
                    target.display()
                )
            })?;
        }
        Ok(ResourceChange::Applied)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn description_shows_source_and_destination() {
        let resource =
            ArtifactResource::new(PathBuf::from("/repo/src/ocean"), PathBuf::from("/h/.bin"));
        assert_eq!(resource.description(), "/repo/src/ocean -> /h/.bin");
    }

    #[test]
    fn copies_directory_artifact_into_dest() {
        let repo = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let source = repo.path().join("ocean");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("__main__.py"), b"entry").unwrap();

        let dest = home.path().join(".bin");
        let resource = ArtifactResource::new(source, dest.clone());
        assert_eq!(resource.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(
            std::fs::read(dest.join("ocean/__main__.py")).unwrap(),
            b"entry"
        );
    }

    #[test]
    fn copies_file_artifact_into_dest() {
        let repo = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let source = repo.path().join("ocean");
        std::fs::write(&source, b"#!/usr/bin/env python3").unwrap();

        let dest = home.path().join(".bin");
        let resource = ArtifactResource::new(source, dest.clone());
        assert_eq!(resource.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(
            std::fs::read(dest.join("ocean")).unwrap(),
            b"#!/usr/bin/env python3"
        );
    }

    #[test]
    fn overwrites_previous_copy_and_drops_stale_files() {
        let repo = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let source = repo.path().join("ocean");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("current.py"), b"v2").unwrap();

        let dest = home.path().join(".bin");
        let previous = dest.join("ocean");
        std::fs::create_dir_all(&previous).unwrap();
        std::fs::write(previous.join("current.py"), b"v1").unwrap();
        std::fs::write(previous.join("stale.py"), b"old").unwrap();

        let resource = ArtifactResource::new(source, dest.clone());
        assert_eq!(resource.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(std::fs::read(previous.join("current.py")).unwrap(), b"v2");
        assert!(
            !previous.join("stale.py").exists(),
            "stale files must not survive reinstallation"
        );
    }

    #[test]
    fn missing_source_is_skipped_with_reason() {
        let home = tempfile::tempdir().unwrap();
        let resource = ArtifactResource::new(
            PathBuf::from("/nonexistent/src/ocean"),
            home.path().join(".bin"),
        );
        match resource.apply().unwrap() {
            ResourceChange::Skipped { reason } => {
                assert!(reason.contains("/nonexistent/src/ocean"));
            }
            other => panic!("expected Skipped, got {other:?}"),
        }
    }

    #[test]
    fn repeated_apply_is_idempotent() {
        let repo = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let source = repo.path().join("ocean");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("__main__.py"), b"entry").unwrap();

        let dest = home.path().join(".bin");
        let resource = ArtifactResource::new(source, dest.clone());
        resource.apply().unwrap();
        resource.apply().unwrap();
        assert_eq!(
            std::fs::read(dest.join("ocean/__main__.py")).unwrap(),
            b"entry"
        );
    }
}
