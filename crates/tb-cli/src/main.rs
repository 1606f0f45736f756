//! Ticketbox — incident-ticket intake from the command line.
//!
//! # Commands
//!
//! - `submit`: classify a description and append the ticket to the store
//! - `history`: list every stored ticket
//! - `report`: ticket counts per category and per priority
//! - `classify`: show the inferred category and priority without saving

mod commands;
mod state;

use clap::{ArgAction, Parser, Subcommand};
use state::{AppState, Engine};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ticketbox")]
#[command(version)]
#[command(about = "Residential incident tickets with automatic category and priority")]
struct Cli {
    /// CSV file holding the tickets
    #[arg(long, global = true, env = "TICKETBOX_STORE", default_value = "tickets.csv")]
    store: PathBuf,

    /// Classification engine
    #[arg(long, global = true, value_enum, default_value_t = Engine::Trained)]
    engine: Engine,

    /// JSON classifier configuration (vocabulary, priorities, templates)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new ticket
    Submit {
        /// Resident's name
        #[arg(long)]
        name: String,
        /// What happened
        #[arg(long)]
        description: String,
    },
    /// List stored tickets
    History,
    /// Summarize stored tickets
    Report,
    /// Classify a description without saving it
    Classify { text: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut state = AppState::init(&cli.store, cli.engine, cli.config.as_deref())?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Submit { name, description } => {
            commands::submit::run(&mut state, &name, &description, &mut out)?;
        }
        Commands::History => commands::history::run(&state, &mut out)?,
        Commands::Report => commands::report::run(&state, &mut out)?,
        Commands::Classify { text } => commands::classify::run(&state, &text, &mut out)?,
    }
    Ok(())
}
