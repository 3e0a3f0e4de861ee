#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{CheckStrategy, CommandStrategy, InfoInput, InfoStrategy, VersionStrategy};

#[derive(Parser)]
#[command(name = "dtgen")]
#[command(about = "Android build.prop device metadata extractor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show device metadata extracted from a build.prop file
    Info {
        /// Path to the build.prop file
        build_prop: PathBuf,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify that a build.prop file carries every required property
    Check {
        /// Path to the build.prop file
        build_prop: PathBuf,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { build_prop, json } => {
            InfoStrategy.execute(InfoInput { build_prop, json })
        }
        Commands::Check { build_prop } => CheckStrategy.execute(build_prop),
        Commands::Version => VersionStrategy.execute(()),
    }
}
