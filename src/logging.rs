//! Structured logger with dry-run awareness and summary collection.
//!
//! Messages are emitted through [`tracing`]; [`init_subscriber`] installs a
//! console formatter in the engine's house style. The [`Logger`] additionally
//! records per-step outcomes so a run can end with a one-screen summary.

use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Task execution result for summary reporting.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    /// Human-readable task name.
    pub name: String,
    /// Final status of the task.
    pub status: TaskStatus,
    /// Optional detail message (e.g., skip reason or error description).
    pub message: Option<String>,
}

/// Status of a completed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task completed successfully.
    Ok,
    /// Task does not apply to the current platform.
    NotApplicable,
    /// Task was explicitly skipped (e.g., tool not found, already provisioned).
    Skipped,
    /// Task ran in dry-run mode; no changes were applied.
    DryRun,
    /// Task encountered an error and could not complete.
    Failed,
}

/// Structured logger with dry-run awareness and summary collection.
#[derive(Debug, Default)]
pub struct Logger {
    tasks: Mutex<Vec<TaskEntry>>,
}

impl Logger {
    /// Create a new logger with an empty task record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "ocean_setup::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: "ocean_setup::dry_run", "{msg}");
    }

    /// Record a task result for the summary.
    pub fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.tasks.lock() {
            guard.push(TaskEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Return a clone of all recorded task entries.
    #[must_use]
    pub fn task_entries(&self) -> Vec<TaskEntry> {
        self.tasks.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Return `true` if any recorded task has failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Count the number of failed tasks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.tasks.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|t| t.status == TaskStatus::Failed)
                .count()
        })
    }

    /// Print the summary of all recorded tasks.
    pub fn print_summary(&self) {
        let tasks = self.task_entries();
        if tasks.is_empty() {
            return;
        }

        println!();
        self.stage("Summary");

        let mut ok = 0u32;
        let mut not_applicable = 0u32;
        let mut skipped = 0u32;
        let mut dry_run = 0u32;
        let mut failed = 0u32;

        for task in &tasks {
            let (icon, color) = match task.status {
                TaskStatus::Ok => {
                    ok += 1;
                    ("✓", "\x1b[32m")
                }
                TaskStatus::NotApplicable => {
                    not_applicable += 1;
                    ("·", "\x1b[2m")
                }
                TaskStatus::Skipped => {
                    skipped += 1;
                    ("○", "\x1b[33m")
                }
                TaskStatus::DryRun => {
                    dry_run += 1;
                    ("~", "\x1b[37m")
                }
                TaskStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = task
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));

            self.info(&format!("{color}{icon} {}{suffix}\x1b[0m", task.name));
        }

        println!();
        let total = ok + not_applicable + skipped + dry_run + failed;
        self.info(&format!(
            "{total} steps: \x1b[32m{ok} ok\x1b[0m, \x1b[2m{not_applicable} n/a\x1b[0m, \x1b[33m{skipped} skipped\x1b[0m, \x1b[37m{dry_run} dry-run\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
        ));
    }
}

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits setup-style console
/// output: stage arrows, dimmed debug lines, and dry-run tags.
struct SetupFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for SetupFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();
        let target = metadata.target();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match level {
            tracing::Level::ERROR => writeln!(writer, "\x1b[31mERROR\x1b[0m {msg}"),
            tracing::Level::WARN => writeln!(writer, "\x1b[33mWARN\x1b[0m  {msg}"),
            tracing::Level::INFO if target == "ocean_setup::stage" => {
                writeln!(writer, "\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m")
            }
            tracing::Level::INFO if target == "ocean_setup::dry_run" => {
                writeln!(writer, "  \x1b[33m[DRY RUN]\x1b[0m {msg}")
            }
            tracing::Level::INFO => writeln!(writer, "  {msg}"),
            _ => writeln!(writer, "  \x1b[2m{msg}\x1b[0m"),
        }
    }
}

/// Install the global tracing subscriber for console output.
///
/// `RUST_LOG` overrides the default level (info, or debug when `verbose`).
/// Calling this more than once is harmless; later calls are no-ops.
pub fn init_subscriber(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(SetupFormatter)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
