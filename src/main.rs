use anyhow::Result;
use clap::Parser;

use ocean_setup::{cli, commands, logging};

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();
    commands::setup::run(&args, &log)
}
