pub mod cli;
pub mod table;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

const ENV_BEAGLE_LOGLEVEL: &str = "BEAGLE_LOGLEVEL";

/// Main entry point for the CLI
pub fn cli_main(args: Vec<String>) -> Result<()> {
    let _ = env_logger::try_init_from_env(Env::new().filter(ENV_BEAGLE_LOGLEVEL));

    let cli = cli::Cli::parse_from(args);
    let stdout = std::io::stdout();
    cli.run(&mut stdout.lock())
}
