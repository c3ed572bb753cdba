mod collection;
mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::commands::delete::DeleteArgs;
use crate::commands::edit::EditArgs;
use crate::commands::expand::ExpandArgs;
use crate::commands::list::ListArgs;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "recur")]
#[command(about = "Expand recurring events into occurrences, then edit or delete one or all of them")]
struct Cli {
    /// Config file (defaults to ~/.config/recur/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the resulting collection here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an event, expanding it into occurrences if it repeats
    Expand(ExpandArgs),
    /// Edit one occurrence, or every occurrence in its series
    Edit(EditArgs),
    /// Delete one occurrence, or every occurrence in its series
    Delete(DeleteArgs),
    /// List occurrences by day
    List(ListArgs),
    /// Write a commented default config file
    InitConfig,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RECUR_LOG")
        .unwrap_or_else(|_| EnvFilter::new("recur=info,recur_core=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = cli.output.as_deref();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Expand(args) => commands::expand::run(args, &config, output),
        Commands::Edit(args) => commands::edit::run(args, &config, output),
        Commands::Delete(args) => commands::delete::run(args, &config, output),
        Commands::List(args) => commands::list::run(args),
        Commands::InitConfig => commands::config::run(cli.config.as_deref()),
    }
}
