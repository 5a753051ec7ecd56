//! tlh-translit CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod report;

#[derive(Parser)]
#[command(name = "tlh-translit")]
#[command(version)]
#[command(about = "Reconstruct transliterations from TLH word markup", long_about = None)]
struct Cli {
    /// Disable colors in error reports
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct every <w> element of XML documents
    Reconstruct {
        /// Input files (reads stdin when none are given, or for '-')
        files: Vec<PathBuf>,

        /// Output results as JSON lines
        #[arg(long)]
        json: bool,

        /// Keep going after a word cannot be reconstructed
        #[arg(short, long)]
        keep_going: bool,
    },

    /// Reconstruct a single <w> element given as XML
    Word {
        /// Word markup, e.g. '<w><aGr>I-NA</aGr></w>'
        markup: String,
    },

    /// List the supported tags and how they are rendered
    Tags,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tlh_translit_cli=info,tlh_translit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let color = !cli.no_color;

    match cli.command {
        Commands::Reconstruct {
            files,
            json,
            keep_going,
        } => commands::reconstruct::execute(commands::reconstruct::ReconstructArgs {
            files,
            json,
            keep_going,
            color,
        }),
        Commands::Word { markup } => commands::word::execute(&markup, color),
        Commands::Tags => {
            commands::tags::execute();
            Ok(())
        }
    }
}
