//! Shooting tracker commands

use anyhow::{Context, Result};
use chrono::Local;
use clap::Subcommand;
use tokio::io::{AsyncBufReadExt, BufReader};

use gogym::domain::ShotTracker;
use gogym::sessions::shooting_log;
use gogym::store::FileStore;

#[derive(Subcommand)]
pub enum ShootingCommand {
    /// Interactive shooting tracker (m = made, x = missed, r = reset,
    /// s [name] = save session, q = quit)
    Track,

    /// Show shooting history, latest first
    History,

    /// Delete a session by id
    Delete { id: String },
}

pub async fn run(command: ShootingCommand, store: FileStore) -> Result<()> {
    let log = shooting_log(store);

    match command {
        ShootingCommand::Track => {
            let mut tracker = ShotTracker::new();
            let mut lines = BufReader::new(tokio::io::stdin()).lines();

            println!("Shooting tracker: m = made, x = missed, r = reset, s [name] = save, q = quit");
            print_score(&tracker);

            while let Some(line) = lines.next_line().await? {
                let input = line.trim();
                let (cmd, rest) = match input.split_once(' ') {
                    Some((cmd, rest)) => (cmd, rest.trim()),
                    None => (input, ""),
                };

                match cmd {
                    "m" | "made" => {
                        tracker.record_shot(true);
                        print_score(&tracker);
                    }
                    "x" | "missed" => {
                        tracker.record_shot(false);
                        print_score(&tracker);
                    }
                    "r" | "reset" => {
                        tracker.reset();
                        print_score(&tracker);
                    }
                    "s" | "save" => {
                        let name = (!rest.is_empty()).then(|| rest.to_string());
                        let today = Local::now().date_naive();
                        let record = tracker.finish(name, today);
                        let percentage = record.percentage.clone();

                        log.append(record)
                            .await
                            .context("Failed to save shooting session")?;
                        println!("Session saved! ({percentage}%)");
                        print_score(&tracker);
                    }
                    "q" | "quit" => break,
                    "" => {}
                    other => println!("Unknown input '{other}'"),
                }
            }
        }
        ShootingCommand::History => {
            let records = log.list().await;
            if records.is_empty() {
                println!("No saved sessions yet.");
                return Ok(());
            }

            for session in records.iter().rev() {
                println!(
                    "{}  {}  {} / {}  ({}%)  [{}]",
                    session.date,
                    session.name,
                    session.makes,
                    session.attempts,
                    session.percentage,
                    session.id
                );
            }
        }
        ShootingCommand::Delete { id } => {
            let removed = log
                .remove(&id)
                .await
                .context("Failed to save shooting history")?;
            if removed {
                println!("Deleted session {id}");
            } else {
                println!("No session with id {id}");
            }
        }
    }

    Ok(())
}

fn print_score(tracker: &ShotTracker) {
    println!(
        "{} / {}  ({}%)",
        tracker.makes(),
        tracker.attempts(),
        tracker.percentage()
    );
}
