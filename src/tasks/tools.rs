use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::tool::{Installer, ToolResource};
use crate::resources::{Applicable as _, Resource as _};

/// Install Homebrew by running its remote bootstrap script.
pub struct InstallPackageManager;

impl Task for InstallPackageManager {
    fn name(&self) -> &'static str {
        "Install package manager"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.platform.supports_homebrew()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resource = ToolResource::new("brew", Installer::HomebrewBootstrap, ctx.executor);

        if !resource.needs_change()? {
            ctx.log.info("brew already installed");
            return Ok(TaskResult::Ok);
        }

        if ctx.dry_run {
            ctx.log.dry_run("bootstrap Homebrew from its install script");
            return Ok(TaskResult::DryRun);
        }

        resource.apply()?;
        ctx.log.info("brew installed");
        Ok(TaskResult::Ok)
    }
}

/// Install the Python interpreter with `brew install`.
pub struct InstallInterpreter;

impl Task for InstallInterpreter {
    fn name(&self) -> &'static str {
        "Install interpreter"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resource = ToolResource::new(
            "python3",
            Installer::Homebrew { package: "python3" },
            ctx.executor,
        );

        if !resource.needs_change()? {
            ctx.log.info("python3 already installed");
            return Ok(TaskResult::Ok);
        }

        // python3 installs through brew; without brew there is nothing to do.
        if !ctx.executor.which("brew") {
            return Ok(TaskResult::Skipped("brew not available".to_string()));
        }

        if ctx.dry_run {
            ctx.log.dry_run("brew install python3");
            return Ok(TaskResult::DryRun);
        }

        resource.apply()?;
        ctx.log.info("python3 installed");
        Ok(TaskResult::Ok)
    }
}
