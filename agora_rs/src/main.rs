use anyhow::Result;
use clap::Parser;
use tracing::debug;

use agora::args::Cli;
use agora::commands::run;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries HTML/JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("agora v{}: {:?}", env!("CARGO_PKG_VERSION"), cli.command);

    let stdout = std::io::stdout();
    run(&cli.command, &mut stdout.lock())
}
