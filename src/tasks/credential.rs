use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::credential::CredentialResource;
use crate::resources::{Applicable as _, Resource as _, ResourceChange};

/// Persist the API token file if it does not exist yet.
pub struct ProvisionCredential;

impl Task for ProvisionCredential {
    fn name(&self) -> &'static str {
        "Provision credential"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let path = ctx.config.credential_file();
        let resource = CredentialResource::new(path.clone(), ctx.token_source);

        if !resource.needs_change()? {
            ctx.log.info("token file already present");
            return Ok(TaskResult::Ok);
        }

        if ctx.dry_run {
            ctx.log
                .dry_run(&format!("persist API token to {}", path.display()));
            return Ok(TaskResult::DryRun);
        }

        match resource.apply()? {
            ResourceChange::Applied => {
                ctx.log
                    .info(&format!("persisted API token to {}", path.display()));
                Ok(TaskResult::Ok)
            }
            ResourceChange::AlreadyCorrect => Ok(TaskResult::Ok),
            ResourceChange::Skipped { reason } => Ok(TaskResult::Skipped(reason)),
        }
    }
}
