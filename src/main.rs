use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gogym::store::FileStore;

mod cli;

#[derive(Parser)]
#[command(name = "gogym")]
#[command(about = "GoGym - workout, shooting and daily challenge tracker")]
#[command(version)]
struct Cli {
    /// Directory for history files (defaults to ~/.gogym)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's challenge: view, complete and browse past completions
    Challenge {
        #[command(subcommand)]
        command: cli::challenge::ChallengeCommand,
    },

    /// Log workouts and browse workout history
    Workout {
        #[command(subcommand)]
        command: cli::workout::WorkoutCommand,
    },

    /// Track shooting sessions and browse shooting history
    Shooting {
        #[command(subcommand)]
        command: cli::shooting::ShootingCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let store = match cli.data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::open_default(),
    };

    match cli.command {
        Commands::Challenge { command } => cli::challenge::run(command, store).await?,
        Commands::Workout { command } => cli::workout::run(command, store).await?,
        Commands::Shooting { command } => cli::shooting::run(command, store).await?,
    }

    Ok(())
}
