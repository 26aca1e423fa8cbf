//! Named setup tasks executed in a fixed order.
pub mod artifact;
pub mod credential;
pub mod libraries;
pub mod tools;

use anyhow::Result;

use crate::config::Config;
use crate::credential::TokenSource;
use crate::exec::Executor;
use crate::logging::{Logger, TaskStatus};
use crate::platform::Platform;

/// Shared context for task execution.
pub struct Context<'a> {
    /// Resolved directory layout.
    pub config: &'a Config,
    /// Detected platform information.
    pub platform: &'a Platform,
    /// Logger for output and task recording.
    pub log: &'a Logger,
    /// Command executor (for testing or real system calls).
    pub executor: &'a dyn Executor,
    /// Where the API token comes from when the credential file is missing.
    pub token_source: &'a dyn TokenSource,
    /// Whether to preview changes without applying them.
    pub dry_run: bool,
}

impl<'a> Context<'a> {
    /// Create a new context for task execution.
    #[must_use]
    pub const fn new(
        config: &'a Config,
        platform: &'a Platform,
        log: &'a Logger,
        executor: &'a dyn Executor,
        token_source: &'a dyn TokenSource,
        dry_run: bool,
    ) -> Self {
        Self {
            config,
            platform,
            log,
            executor,
            token_source,
            dry_run,
        }
    }
}

/// Outcome of a single task run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Task completed (including the already-satisfied case).
    Ok,
    /// Task was skipped with a reason.
    Skipped(String),
    /// Task previewed its changes without applying them.
    DryRun,
}

/// A named, executable task.
pub trait Task {
    /// Human-readable task name.
    fn name(&self) -> &'static str;

    /// Whether this task applies on the current platform.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task fails, such as when system commands
    /// fail or file operations are not permitted.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// The complete set of setup tasks, in execution order.
#[must_use]
pub fn all_setup_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(credential::ProvisionCredential),
        Box::new(tools::InstallPackageManager),
        Box::new(tools::InstallInterpreter),
        Box::new(libraries::InstallPythonLibraries),
        Box::new(artifact::InstallArtifact),
    ]
}

/// Execute a task, recording the result in the logger.
pub fn execute(task: &dyn Task, ctx: &Context) {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return;
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}
