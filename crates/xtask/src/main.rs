//! Development tasks for script files
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CheckScript, ReadScript};

/// Development tasks for script files
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Tools for recorded scripts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Read and inspect a script file
    ReadScript(ReadScript),

    /// Validate script files
    CheckScript(CheckScript),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::ReadScript(cmd) => cmd.execute(),
        Command::CheckScript(cmd) => cmd.execute(),
    }
}
