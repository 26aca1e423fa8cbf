use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::artifact::ArtifactResource;
use crate::resources::{Applicable as _, ResourceChange};

/// Copy the `ocean` executable into the user's bin directory.
///
/// The copy runs unconditionally so a rerun always picks up source changes.
pub struct InstallArtifact;

impl Task for InstallArtifact {
    fn name(&self) -> &'static str {
        "Install artifact"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let source = ctx.config.artifact_source();
        let dest = ctx.config.bin_dir();
        let resource = ArtifactResource::new(source.clone(), dest.clone());

        if ctx.dry_run {
            if source.exists() {
                ctx.log.dry_run(&format!(
                    "copy {} to {}",
                    source.display(),
                    dest.display()
                ));
                return Ok(TaskResult::DryRun);
            }
            return Ok(TaskResult::Skipped(format!(
                "source artifact missing: {}",
                source.display()
            )));
        }

        match resource.apply()? {
            ResourceChange::Applied => {
                ctx.log
                    .info(&format!("copied ocean to {}", dest.display()));
                Ok(TaskResult::Ok)
            }
            ResourceChange::AlreadyCorrect => Ok(TaskResult::Ok),
            ResourceChange::Skipped { reason } => Ok(TaskResult::Skipped(reason)),
        }
    }
}
