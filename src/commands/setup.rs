use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;
use crate::credential;
use crate::exec::SystemExecutor;
use crate::logging::Logger;
use crate::platform::Platform;
use crate::tasks::{self, Context, Task};

/// Run the setup command.
///
/// # Errors
///
/// Returns an error if configuration resolution fails or any task fails.
pub fn run(args: &Cli, log: &Logger) -> Result<()> {
    let platform = Platform::detect();
    let config = Config::resolve(args.root.as_deref())?;

    log.info(&format!("ocean-setup {}", env!("CARGO_PKG_VERSION")));
    log.debug(&format!("platform: {}", platform.os));
    log.debug(&format!("root: {}", config.root.display()));

    let token_source = credential::source_for(args.token.clone());
    let executor = SystemExecutor;
    let ctx = Context::new(
        &config,
        &platform,
        log,
        &executor,
        token_source.as_ref(),
        args.dry_run,
    );

    let all_tasks = tasks::all_setup_tasks();
    let tasks_to_run: Vec<&dyn Task> = all_tasks
        .iter()
        .filter(|t| {
            let name = t.name().to_lowercase();
            if !args.only.is_empty() {
                return args.only.iter().any(|o| name.contains(&o.to_lowercase()));
            }
            if !args.skip.is_empty() {
                return !args.skip.iter().any(|s| name.contains(&s.to_lowercase()));
            }
            true
        })
        .map(AsRef::as_ref)
        .collect();

    for task in tasks_to_run {
        tasks::execute(task, &ctx);
    }

    log.print_summary();

    if log.has_failures() {
        anyhow::bail!("one or more setup steps failed");
    }
    Ok(())
}
