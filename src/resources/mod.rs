//! Idempotent resource primitives (check + apply pattern).
pub mod artifact;
pub mod credential;
pub mod fs;
pub mod python_lib;
pub mod tool;

use anyhow::Result;

/// Minimal interface for resources that can be described and applied.
///
/// Resources that can determine their own state implement the richer
/// [`Resource`] super-trait; resources applied unconditionally (the copied
/// artifact) implement only this trait.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Apply the resource change.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be applied due to I/O
    /// failures, failed external commands, or other system errors.
    fn apply(&self) -> Result<ResourceChange>;
}

/// State of a resource (credential file, tool, library).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist or is not present.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated.
    Applied,
    /// Resource was already correct (no change needed).
    AlreadyCorrect,
    /// Resource was skipped (e.g., missing source artifact).
    Skipped {
        /// Reason why the resource was skipped.
        reason: String,
    },
}

/// Unified interface for resources that can be checked and applied.
pub trait Resource: Applicable {
    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined due to I/O or
    /// command failures.
    fn current_state(&self) -> Result<ResourceState>;

    /// Determine if the resource needs to be changed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Resource::current_state`].
    fn needs_change(&self) -> Result<bool> {
        Ok(self.current_state()? == ResourceState::Missing)
    }
}

/// Shared test helpers for resource unit tests.
///
/// Provides a configurable [`MockExecutor`](test_helpers::MockExecutor) so
/// individual resource test modules do not have to duplicate the boilerplate.
#[cfg(test)]
pub mod test_helpers {
    use std::collections::VecDeque;
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use crate::exec::{ExecResult, Executor};

    /// A configurable mock executor for resource unit tests.
    ///
    /// Maintains a queue of `(success, stdout)` responses consumed in FIFO
    /// order. When the queue is empty any call returns a failed response.
    /// Use [`with_which`](Self::with_which) to configure the value returned
    /// by [`Executor::which`] for every program (defaults to `false`),
    /// [`with_program`](Self::with_program) to mark individual programs as
    /// present, and [`call_count`](Self::call_count) to inspect how many
    /// calls were made.
    #[derive(Debug)]
    pub struct MockExecutor {
        responses: Mutex<VecDeque<(bool, String)>>,
        which_result: bool,
        available: Vec<String>,
        call_count: AtomicUsize,
    }

    impl MockExecutor {
        /// Create a mock with a single successful response.
        #[must_use]
        pub fn ok(stdout: &str) -> Self {
            Self::with_responses(vec![(true, stdout.to_string())])
        }

        /// Create a mock with a single failed response (empty stdout).
        #[must_use]
        pub fn fail() -> Self {
            Self::with_responses(vec![(false, String::new())])
        }

        /// Create a mock from an ordered list of `(success, stdout)` pairs.
        #[must_use]
        pub fn with_responses(responses: Vec<(bool, String)>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                which_result: false,
                available: Vec::new(),
                call_count: AtomicUsize::new(0),
            }
        }

        /// Set the value returned by every [`Executor::which`] call.
        #[must_use]
        pub fn with_which(mut self, result: bool) -> Self {
            self.which_result = result;
            self
        }

        /// Mark a single program as present on the search path.
        #[must_use]
        pub fn with_program(mut self, name: &str) -> Self {
            self.available.push(name.to_string());
            self
        }

        /// Return the total number of run calls made so far.
        #[must_use]
        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        fn next(&self) -> (bool, String) {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.responses.lock().map_or_else(
                |_| (false, "mutex poisoned".to_string()),
                |mut guard| {
                    guard
                        .pop_front()
                        .unwrap_or_else(|| (false, "unexpected call".to_string()))
                },
            )
        }
    }

    impl Executor for MockExecutor {
        fn run(&self, _: &str, _: &[&str]) -> anyhow::Result<ExecResult> {
            let (success, stdout) = self.next();
            if success {
                Ok(ExecResult {
                    stdout,
                    stderr: String::new(),
                    success: true,
                    code: Some(0),
                })
            } else {
                anyhow::bail!("mock command failed")
            }
        }

        fn run_unchecked(&self, _: &str, _: &[&str]) -> anyhow::Result<ExecResult> {
            let (success, stdout) = self.next();
            Ok(ExecResult {
                stdout,
                stderr: String::new(),
                success,
                code: Some(i32::from(!success)),
            })
        }

        fn which(&self, program: &str) -> bool {
            self.which_result || self.available.iter().any(|p| p == program)
        }
    }
}
