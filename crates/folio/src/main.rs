//! Folio CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Render document trees to HTML bundles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document tree to an HTML bundle
    Render {
        /// Document tree (JSON)
        input: PathBuf,

        /// Document configuration (YAML)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Directory the bundle is written into
        #[arg(short = 'o', long, default_value = ".")]
        output_dir: PathBuf,

        /// Port of a running preview server to connect to
        #[arg(long)]
        port: Option<u16>,

        /// Directory whose resources override the built-in ones
        #[arg(long)]
        resources: Option<PathBuf>,

        /// Do not number headings, figures and tables
        #[arg(long)]
        no_location_awareness: bool,

        /// Only give headings an id when they set one explicitly
        #[arg(long)]
        no_auto_ids: bool,
    },

    /// Print what discovery finds in a document tree, as JSON
    Inspect {
        /// Document tree (JSON)
        input: PathBuf,

        /// Document configuration (YAML)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            config,
            output_dir,
            port,
            resources,
            no_location_awareness,
            no_auto_ids,
        } => commands::render::execute(commands::render::RenderArgs {
            input,
            config,
            output_dir,
            port,
            resources,
            location_awareness: !no_location_awareness,
            automatic_identifiers: !no_auto_ids,
        }),
        Commands::Inspect { input, config } => commands::inspect::execute(&input, config.as_deref()),
    }
}
