//! Command execution capability.
//!
//! All external commands go through the [`Executor`] trait so that tasks and
//! resources can be exercised in tests without touching the real system.
//! Every invocation yields an explicit [`ExecResult`]; non-zero exits are
//! surfaced as errors by [`Executor::run`].

use anyhow::{Context, Result, bail};
use std::process::{Command, Output};

/// Result of a command execution.
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Capability to run external commands and resolve tools on the search path.
pub trait Executor: Send + Sync {
    /// Run a command and return its output. Fails if the command exits non-zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or exits non-zero.
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Run a command, allowing failure (returns the result without bailing).
    ///
    /// # Errors
    ///
    /// Returns an error only if the command cannot be spawned at all.
    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Check if a program is available on the search path.
    fn which(&self, program: &str) -> bool;
}

/// [`Executor`] backed by [`std::process::Command`] and the `which` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute: {program}"))?;
        let result = ExecResult::from(output);
        if !result.success {
            bail!(
                "{program} failed (exit {}): {}",
                result.code.unwrap_or(-1),
                result.stderr.trim()
            );
        }
        Ok(result)
    }

    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute: {program}"))?;
        Ok(ExecResult::from(output))
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
