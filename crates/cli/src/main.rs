//! Rewind CLI - rewind command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;
mod util;

/// Rewind - bounded checkpoint history for a published JSON document
#[derive(Parser)]
#[command(name = "rewind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root (default: nearest rewind.toml above the cwd, else cwd)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to bind (default: 8787, or REWIND_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show checkpoint history
    Log {
        /// Number of checkpoints to show (default: 20)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one checkpoint in detail
    Show {
        /// Checkpoint ID
        checkpoint: String,
    },
    /// Create a checkpoint from a JSON document file
    Save {
        /// Path to the document file
        file: PathBuf,
        /// Checkpoint label
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Overwrite the live document from a checkpoint
    Restore {
        /// Checkpoint ID
        checkpoint: String,
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Delete ALL checkpoints
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Overwrite the live document from a JSON document file
    Publish {
        /// Path to the document file
        file: PathBuf,
    },
    /// Show the live document location and content summary
    Live,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let root = util::resolve_root(cli.root)?;

    match cli.command {
        Commands::Serve { port } => cmd::serve::run(&root, port).await,
        Commands::Log { limit } => cmd::log::run(&root, limit).await,
        Commands::Show { checkpoint } => cmd::show::run(&root, &checkpoint).await,
        Commands::Save { file, message } => cmd::save::run(&root, &file, message).await,
        Commands::Restore { checkpoint, yes } => cmd::restore::run(&root, &checkpoint, yes).await,
        Commands::Clear { yes } => cmd::clear::run(&root, yes).await,
        Commands::Publish { file } => cmd::publish::run(&root, &file).await,
        Commands::Live => cmd::live::run(&root).await,
    }
}
