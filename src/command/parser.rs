//! Parse menu input into commands
//!
//! Each command can be given by name or by its menu number:
//! `(1) Fight, (2) Heal, (3) Add Item, (4) Remove Item, (5) Save, (6) Load, (7) Exit`.

use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fight the monster at this 0-based roster index
    Fight(usize),
    Heal,
    AddItem(String),
    RemoveItem(String),
    /// Save to the given path, or the configured one
    Save(Option<PathBuf>),
    /// Load from the given path, or the configured one
    Load(Option<PathBuf>),
    Status,
    Exit,
}

pub const MENU: &str =
    "Options: (1) Fight <n>, (2) Heal, (3) Add Item <name>, (4) Remove Item <name>, (5) Save, (6) Load, (7) Exit";

impl FromStr for Command {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "1" | "fight" | "f" => parse_monster_number(rest).map(Command::Fight),
            "2" | "heal" | "h" => Ok(Command::Heal),
            "3" | "add" | "a" => item_name(rest, "add").map(Command::AddItem),
            "4" | "remove" | "r" => item_name(rest, "remove").map(Command::RemoveItem),
            "5" | "save" => Ok(Command::Save(optional_path(rest))),
            "6" | "load" => Ok(Command::Load(optional_path(rest))),
            "status" | "s" => Ok(Command::Status),
            "7" | "exit" | "quit" | "q" => Ok(Command::Exit),
            "" => Err("Please enter a command.".to_string()),
            other => Err(format!(
                "Unknown command '{}'. Please choose between 1 and 7.",
                other
            )),
        }
    }
}

fn parse_monster_number(rest: &str) -> Result<usize, String> {
    if rest.is_empty() {
        return Err("Usage: fight <monster number>".to_string());
    }
    match rest.parse::<usize>() {
        Ok(0) | Err(_) => Err(format!(
            "Invalid monster number '{}'. Monsters are numbered from 1.",
            rest
        )),
        Ok(n) => Ok(n - 1),
    }
}

fn item_name(rest: &str, verb: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("Usage: {} <item name>", verb))
    } else {
        Ok(rest.to_string())
    }
}

fn optional_path(rest: &str) -> Option<PathBuf> {
    (!rest.is_empty()).then(|| PathBuf::from(rest))
}
