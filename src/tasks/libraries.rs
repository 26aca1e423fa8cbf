use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::config::PYTHON_LIBS;
use crate::resources::Resource as _;
use crate::resources::python_lib::{PythonLibResource, install_from_manifest};

/// Install the Python libraries `ocean` imports at runtime.
///
/// Each module is probed through the interpreter; one batch install from the
/// requirements manifest covers every missing module.
pub struct InstallPythonLibraries;

impl Task for InstallPythonLibraries {
    fn name(&self) -> &'static str {
        "Install Python libraries"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if !ctx.executor.which("python3") {
            return Ok(TaskResult::Skipped("python3 not available".to_string()));
        }

        let manifest = ctx.config.requirements_manifest();
        let mut missing = Vec::new();
        for module in PYTHON_LIBS {
            let resource =
                PythonLibResource::new((*module).to_string(), manifest.clone(), ctx.executor);
            if resource.needs_change()? {
                missing.push(*module);
            }
        }

        if missing.is_empty() {
            ctx.log.info("all libraries importable");
            return Ok(TaskResult::Ok);
        }
        ctx.log
            .debug(&format!("missing modules: {}", missing.join(", ")));

        if ctx.dry_run {
            ctx.log
                .dry_run(&format!("pip3 install -r {}", manifest.display()));
            return Ok(TaskResult::DryRun);
        }

        if !ctx.executor.which("pip3") {
            return Ok(TaskResult::Skipped("pip3 not available".to_string()));
        }
        if !manifest.exists() {
            return Ok(TaskResult::Skipped(format!(
                "requirements manifest missing: {}",
                manifest.display()
            )));
        }

        install_from_manifest(&manifest, ctx.executor)?;
        ctx.log
            .info(&format!("installed: {}", missing.join(", ")));
        Ok(TaskResult::Ok)
    }
}
