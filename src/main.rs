//! Crypt Keeper - Entry Point
//!
//! Sets up logging and configuration, builds the starting session and runs
//! the interactive menu loop until the player exits or falls.

use clap::Parser;
use crypt_keeper::combat::StrikeOutcome;
use crypt_keeper::command::{Command, CommandExecutor, CommandOutcome, MENU};
use crypt_keeper::core::config::{config, set_config, GameConfig};
use crypt_keeper::core::error::{GameError, Result};
use crypt_keeper::entity::Combatant;
use crypt_keeper::events::EventLog;
use crypt_keeper::session::{Game, RoundOutcome, RoundReport};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Interactive crypt crawl
#[derive(Parser, Debug)]
#[command(name = "crypt-keeper")]
#[command(about = "Fight skeletons and liches in a turn-based crypt crawl")]
struct Args {
    /// TOML config file (missing keys use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Player name
    #[arg(long)]
    name: Option<String>,

    /// Save file used by the save and load commands
    #[arg(long)]
    save: Option<PathBuf>,

    /// Event log file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Random seed for special attack rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Enable critical hits, poison and fire strikes
    #[arg(long)]
    special_attacks: bool,
}

fn main() -> Result<()> {
    // Event lines are info level; keep the console quiet unless asked
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("crypt_keeper=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if set_config(build_config(&args)?).is_err() {
        tracing::warn!("Game config was already set; ignoring command line");
    }

    let config = config().clone();
    let log = EventLog::file(&config.log_path)?;
    let mut game = Game::new(config, log)?;

    println!("\n=== CRYPT KEEPER ===");
    println!("Type a command by name or menu number. Monsters are numbered as listed.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        display_status(&game);
        println!("{}", MENU);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match CommandExecutor::execute(&mut game, &command) {
            Ok(CommandOutcome::Exit) => break,
            Ok(outcome) => report(&game, &outcome),
            Err(GameError::IoError(e)) => eprintln!("Error: file operation failed: {}", e),
            Err(e) => eprintln!("Error: {}", e),
        }

        if game.is_over() {
            println!("\n{} has fallen. Game over.", game.player().name());
            break;
        }
    }

    game.end()?;
    println!(
        "\nGoodbye! {} finished at level {} with {} monster(s) left.",
        game.player().name(),
        game.player().level(),
        game.roster().len()
    );
    Ok(())
}

fn build_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(name) = &args.name {
        config.player_name = name.clone();
    }
    if let Some(save) = &args.save {
        config.save_path = save.clone();
    }
    if let Some(log) = &args.log {
        config.log_path = log.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.special_attacks {
        config.special_attacks = true;
    }

    config.validate().map_err(GameError::Config)?;
    Ok(config)
}

/// Player line and numbered roster
fn display_status(game: &Game) {
    println!();
    println!("Player: {}", game.player());
    println!();
    if game.roster().is_empty() {
        println!("No monsters remain.");
    } else {
        println!("Monsters:");
        for (i, monster) in game.roster().iter().enumerate() {
            println!("  {}. {}", i + 1, monster);
        }
    }
    println!();
}

fn report(game: &Game, outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Fought(round) => report_round(round),
        CommandOutcome::Healed { health } => println!("Healed. HP now {}.", health),
        CommandOutcome::ItemAdded(item) => println!("Added {} to inventory.", item),
        CommandOutcome::ItemRemoved(item) => println!("Removed {} from inventory.", item),
        CommandOutcome::Saved(path) => println!("Game saved to {}.", path.display()),
        CommandOutcome::Loaded(path, load) => {
            println!(
                "Game loaded from {} ({} monster(s)).",
                path.display(),
                load.monsters_loaded
            );
            for warning in &load.warnings {
                eprintln!("Warning: {}", warning);
            }
        }
        CommandOutcome::Status => display_inventory(game),
        CommandOutcome::Exit => {}
    }
}

fn report_round(round: &RoundReport) {
    println!("\nFighting {}!", round.target);

    let strike = &round.player_strike;
    if let Some(special) = strike.special {
        print!("{} ", special.announcement());
    }
    match strike.outcome {
        StrikeOutcome::NoEffect => println!("Your attack has no effect!"),
        StrikeOutcome::Landed(_) => println!("You hit {} for {} damage.", strike.defender, strike.damage),
    }

    if let Some(retaliation) = &round.retaliation {
        if let Some(special) = retaliation.special {
            print!("{} ", special.announcement());
        }
        println!(
            "{} strikes back for {} damage.",
            retaliation.attacker, retaliation.damage
        );
    }

    match round.outcome {
        RoundOutcome::Exchanged => {}
        RoundOutcome::MonsterSlain { levels_gained } => {
            println!("{} is destroyed!", round.target);
            announce_levels(levels_gained);
        }
        RoundOutcome::MonsterResurrected { levels_gained } => {
            println!("{} falls... and the Lich raises it again!", round.target);
            announce_levels(levels_gained);
        }
        RoundOutcome::PlayerSlain => println!("You have been defeated!"),
    }
}

fn announce_levels(levels: i32) {
    if levels > 0 {
        println!("Level up! (+{})", levels);
    }
}

fn display_inventory(game: &Game) {
    let inventory = game.player().inventory();
    if inventory.is_empty() {
        println!("Inventory is empty.");
        return;
    }
    println!("Inventory Contents:");
    for item in inventory.items() {
        println!("- {}", item);
    }
}
