//! Headless Auto-Battle Runner
//!
//! Plays a session without input by fighting the same roster slot every
//! round, then prints a JSON summary.

use clap::Parser;
use crypt_keeper::core::config::GameConfig;
use crypt_keeper::entity::Combatant;
use crypt_keeper::events::EventLog;
use crypt_keeper::session::{Game, RoundOutcome};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Headless Auto-Battle Runner
#[derive(Parser, Debug)]
#[command(name = "autobattle")]
#[command(about = "Fight the starting roster automatically and print a JSON summary")]
struct Args {
    /// TOML config file (missing keys use defaults)
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Roster slot to attack each round (1-based; falls back to the last slot)
    #[arg(long, default_value_t = 1)]
    target: usize,

    /// Maximum rounds before giving up
    #[arg(long, default_value_t = 100)]
    max_rounds: u32,

    /// Heal whenever health drops to this value or below
    #[arg(long, default_value_t = 0)]
    heal_below: i32,

    /// Random seed for special attack rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Enable critical hits, poison and fire strikes
    #[arg(long)]
    special_attacks: bool,

    /// Print the event log to stderr when done
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct BattleSummary {
    outcome: &'static str,
    rounds: u32,
    kills: u32,
    resurrections: u32,
    player_level: i32,
    player_experience: i32,
    player_health: i32,
    monsters_remaining: usize,
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("crypt_keeper=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config {}: {}", path.display(), e);
            eprintln!("Using default config");
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    config.seed = Some(seed);
    config.special_attacks |= args.special_attacks;

    let mut game = match Game::new(config, EventLog::memory()) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Failed to start session: {}", e);
            std::process::exit(1);
        }
    };

    let mut rounds = 0;
    let mut kills = 0;
    let mut resurrections = 0;

    while rounds < args.max_rounds && !game.is_over() && !game.roster().is_empty() {
        if args.heal_below > 0 && game.player().health() <= args.heal_below {
            if let Err(e) = game.heal() {
                eprintln!("Heal failed: {}", e);
                break;
            }
        }

        let slot = args.target.max(1).min(game.roster().len()) - 1;
        rounds += 1;

        match game.fight(slot) {
            Ok(report) => match report.outcome {
                RoundOutcome::MonsterSlain { .. } => kills += 1,
                RoundOutcome::MonsterResurrected { .. } => {
                    kills += 1;
                    resurrections += 1;
                }
                RoundOutcome::Exchanged | RoundOutcome::PlayerSlain => {}
            },
            Err(e) => {
                eprintln!("Round {} failed: {}", rounds, e);
                break;
            }
        }
    }

    let outcome = if game.is_over() {
        "defeat"
    } else if game.roster().is_empty() {
        "victory"
    } else {
        "timeout"
    };

    if args.verbose {
        for line in game.log().lines() {
            eprintln!("{}", line);
        }
    }

    let summary = BattleSummary {
        outcome,
        rounds,
        kills,
        resurrections,
        player_level: game.player().level(),
        player_experience: game.player().experience(),
        player_health: game.player().health(),
        monsters_remaining: game.roster().len(),
        seed,
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize summary: {}", e);
            std::process::exit(1);
        }
    }
}
