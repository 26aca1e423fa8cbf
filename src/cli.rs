use clap::Parser;

/// Top-level CLI entry point for the ocean setup engine.
///
/// The surface accepts at most one positional argument: the API token.
/// Anything beyond that is rejected by the parser with a usage error before
/// any side effect takes place.
#[derive(Parser, Debug)]
#[command(
    name = "ocean-setup",
    about = "Bootstrap the ocean DigitalOcean CLI: token, tools, libraries, binary",
    version
)]
pub struct Cli {
    /// DigitalOcean API token to persist (prompted for interactively when omitted)
    pub token: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview changes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Override the source tree root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<std::path::PathBuf>,

    /// Skip specific steps
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only specific steps
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}
