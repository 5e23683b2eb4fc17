//! Command execution - applies parsed commands to a game session

use crate::command::parser::Command;
use crate::core::error::Result;
use crate::session::{Game, LoadReport, RoundReport};
use std::path::PathBuf;

/// Executes menu commands against a session
pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute a command. Failures are returned for the caller to display;
    /// none of them end the session.
    pub fn execute(game: &mut Game, command: &Command) -> Result<CommandOutcome> {
        match command {
            Command::Fight(index) => game.fight(*index).map(CommandOutcome::Fought),
            Command::Heal => game.heal().map(|health| CommandOutcome::Healed { health }),
            Command::AddItem(item) => {
                game.add_item(item)?;
                Ok(CommandOutcome::ItemAdded(item.clone()))
            }
            Command::RemoveItem(item) => {
                game.remove_item(item)?;
                Ok(CommandOutcome::ItemRemoved(item.clone()))
            }
            Command::Save(path) => {
                let path = path.clone().unwrap_or_else(|| game.config().save_path.clone());
                game.save(&path)?;
                Ok(CommandOutcome::Saved(path))
            }
            Command::Load(path) => {
                let path = path.clone().unwrap_or_else(|| game.config().save_path.clone());
                let report = game.load(&path)?;
                Ok(CommandOutcome::Loaded(path, report))
            }
            Command::Status => Ok(CommandOutcome::Status),
            Command::Exit => Ok(CommandOutcome::Exit),
        }
    }
}

/// Result of executing a command
#[derive(Debug)]
pub enum CommandOutcome {
    Fought(RoundReport),
    Healed { health: i32 },
    ItemAdded(String),
    ItemRemoved(String),
    Saved(PathBuf),
    Loaded(PathBuf, LoadReport),
    Status,
    Exit,
}
