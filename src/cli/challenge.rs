//! Daily challenge commands

use anyhow::{Context, Result};
use chrono::Local;
use clap::Subcommand;

use gogym::challenge::{Catalog, ChallengeLog};
use gogym::store::FileStore;

#[derive(Subcommand)]
pub enum ChallengeCommand {
    /// Show today's challenge, completion state and streak
    Today,

    /// Toggle completion of today's challenge
    Complete,

    /// List past completions, latest first
    History,
}

pub async fn run(command: ChallengeCommand, store: FileStore) -> Result<()> {
    let catalog = Catalog::builtin();
    let log = ChallengeLog::new(store);
    let today = Local::now().date_naive();

    match command {
        ChallengeCommand::Today => {
            let challenge = catalog.challenge_for(today)?;
            println!("{today}  {challenge}");

            if log.is_completed(today).await {
                println!("Completed ✓ (run `gogym challenge complete` to undo)");
            } else {
                println!("Not completed yet");
            }
            print_streak(log.streak(today).await);
        }
        ChallengeCommand::Complete => {
            let challenge = catalog.challenge_for(today)?;
            let completed = log
                .toggle(today, challenge)
                .await
                .context("Failed to save challenge history")?;

            if completed {
                println!("Completed: {challenge}");
            } else {
                println!("Undone: {challenge}");
            }
            print_streak(log.streak(today).await);
        }
        ChallengeCommand::History => {
            let records = log.load().await;
            if records.is_empty() {
                println!("No completed challenges yet.");
                return Ok(());
            }

            for record in records.iter().rev() {
                println!("{}  {}", record.date, record.challenge);
            }
        }
    }

    Ok(())
}

fn print_streak(streak: u32) {
    println!("🔥 {} day{}", streak, if streak == 1 { "" } else { "s" });
}
