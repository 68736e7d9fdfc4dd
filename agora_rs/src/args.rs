//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "agora")]
#[command(about = "Render the Agora landing page to static HTML")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the page and write HTML
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Validate content and list the grid slots
    Check {
        /// Content file to validate (.toml or .json)
        #[arg(short, long)]
        content: PathBuf,

        /// Config file (default: .agora/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the composed page tree as JSON
    Layout {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where content and config come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Content file (.toml or .json); built-in Agora copy when omitted
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file (default: .agora/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
