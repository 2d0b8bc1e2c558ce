//! tide-cli - Command line tool for cleaning tide gauge records and filling
//! their gaps from a hindcast.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tide-cli",
    version,
    about = "Tide gauge regularization and hindcast gap filling"
)]
struct Cli {
    #[command(subcommand)]
    command: tide_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::debug!("Starting tide-cli {}", env!("CARGO_PKG_VERSION"));
    tide_cmd::run(cli.command)
}
