use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matchplay_tracker::config::TournamentConfig;
use matchplay_tracker::models::{EntityId, HoleWinner, MatchStatus, Team};
use matchplay_tracker::scoring::{format_final_result, would_close_out};
use matchplay_tracker::store::{EventLogFile, MatchStore};

#[derive(Parser)]
#[command(name = "matchplay-tracker")]
#[command(about = "Ryder-Cup style golf trip tracker")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./tournament.toml")]
    config: String,

    /// Data directory path
    #[arg(long, default_value = "./data")]
    data_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a hole result
    Score {
        /// Match number (1-based slot in the session)
        #[arg(long, short)]
        r#match: u32,

        /// Hole number (1-18)
        #[arg(long)]
        hole: u32,

        /// Hole winner: teamA, teamB, or halved
        #[arg(long)]
        winner: String,

        /// Raw team A strokes
        #[arg(long)]
        team_a_strokes: Option<u32>,

        /// Raw team B strokes
        #[arg(long)]
        team_b_strokes: Option<u32>,

        /// Who is entering the score
        #[arg(long, default_value = "captain")]
        scorer: String,
    },

    /// Undo the most recently recorded result for a match
    Undo {
        /// Match number (1-based slot in the session)
        #[arg(long, short)]
        r#match: u32,
    },

    /// Show match results and team standings
    Standings,

    /// Play out a scripted demo tournament and show the standings
    Simulate {
        /// Seed for the scripted results
        #[arg(long, default_value = "1")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config_path = PathBuf::from(&cli.config);
    let config = if config_path.exists() {
        TournamentConfig::from_file(&config_path)?
    } else {
        tracing::debug!("No config at {:?}, using defaults", config_path);
        TournamentConfig::default()
    };

    let log = EventLogFile::in_dir(&PathBuf::from(&cli.data_dir));
    let mut store = MatchStore::from_config(&config);
    store.replay(log.read_all()?);

    match cli.command {
        Commands::Score {
            r#match: match_number,
            hole,
            winner,
            team_a_strokes,
            team_b_strokes,
            scorer,
        } => {
            let winner: HoleWinner = winner
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let match_id = store
                .match_by_number(match_number)
                .ok_or_else(|| anyhow::anyhow!("No match number {}", match_number))?
                .id
                .clone();

            let before = store.match_state(&match_id)?;
            if !before.is_closed_out
                && would_close_out(before.current_score, before.holes_remaining, winner)
            {
                println!("This result ends the match.");
            }

            let state = store.record_hole_result(
                &match_id,
                hole,
                winner,
                team_a_strokes,
                team_b_strokes,
                EntityId::from(scorer.as_str()),
            )?;

            if let Some(event) = store.results_for(&match_id).last() {
                log.append(event)?;
            }

            println!(
                "Match {}: {} ({})",
                match_number, state.display_score, state.status
            );
            if state.status == MatchStatus::Completed {
                println!(
                    "{}",
                    format_final_result(&state, &config.team_a_name, &config.team_b_name)
                );
            }
        }

        Commands::Undo {
            r#match: match_number,
        } => {
            let match_id = store
                .match_by_number(match_number)
                .ok_or_else(|| anyhow::anyhow!("No match number {}", match_number))?
                .id
                .clone();

            if store.undo_last_score(&match_id)? {
                let ids: Vec<_> = store.matches().iter().map(|m| m.id.clone()).collect();
                let mut remaining = Vec::new();
                for id in &ids {
                    remaining.extend_from_slice(store.results_for(id));
                }
                log.write_all(&remaining)?;

                let state = store.match_state(&match_id)?;
                println!(
                    "Undid last score. Match {}: {} ({})",
                    match_number, state.display_score, state.status
                );
            } else {
                println!("Nothing to undo for match {}.", match_number);
            }
        }

        Commands::Standings => {
            print_standings(&store, &config)?;
        }

        Commands::Simulate { seed } => {
            let mut store = MatchStore::from_config(&config);
            simulate(&mut store, seed)?;
            print_standings(&store, &config)?;
        }
    }

    Ok(())
}

fn print_standings(store: &MatchStore, config: &TournamentConfig) -> Result<()> {
    println!(
        "{}: {} vs {}",
        store.session().trip_name,
        config.team_a_name,
        config.team_b_name
    );
    println!();

    for (i, m) in store.matches().iter().enumerate() {
        let state = store.match_state(&m.id)?;
        let line = match m.status {
            MatchStatus::Scheduled => "not started".to_string(),
            MatchStatus::Active => format!("{} thru {}", state.display_score, state.holes_played),
            MatchStatus::Completed => {
                format_final_result(&state, &config.team_a_name, &config.team_b_name)
            }
        };
        println!("  Match {:>2}: {}", i + 1, line);
    }
    println!();

    let standings = store.standings();
    println!(
        "{} {} - {} {}",
        config.team_a_name, standings.team_a_points, standings.team_b_points, config.team_b_name
    );
    println!(
        "{} of {} matches complete",
        standings.matches_completed, standings.total_matches
    );

    let magic = store.magic_number(config.effective_points_to_win())?;
    match magic.clinching_team {
        Some(team) => {
            let name = match team {
                Team::A => &config.team_a_name,
                Team::B => &config.team_b_name,
            };
            println!("{} has clinched the cup!", name);
        }
        None => {
            println!(
                "To win: {} needs {}, {} needs {}",
                config.team_a_name, magic.team_a_needed, config.team_b_name, magic.team_b_needed
            );
        }
    }

    Ok(())
}

// Scripted demo: every match plays hole by hole with a cheap deterministic
// generator until it closes out or reaches the 18th.
fn simulate(store: &mut MatchStore, seed: u64) -> Result<()> {
    let scorer = EntityId::from("simulator");
    let mut rng = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);

    let match_ids: Vec<_> = store.matches().iter().map(|m| m.id.clone()).collect();
    for match_id in match_ids {
        for hole in 1..=18u32 {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let winner = match (rng >> 33) % 3 {
                0 => HoleWinner::TeamA,
                1 => HoleWinner::TeamB,
                _ => HoleWinner::Halved,
            };

            let state = store.record_hole_result(
                &match_id,
                hole,
                winner,
                None,
                None,
                scorer.clone(),
            )?;
            if state.status == MatchStatus::Completed {
                break;
            }
        }
    }

    Ok(())
}
