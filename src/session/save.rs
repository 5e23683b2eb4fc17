//! Flat text save format
//!
//! ```text
//! <player record>
//! <monster count>
//! <monster record>   (count times)
//! ```
//!
//! A missing or broken player record, count, or monster line aborts the
//! load. A monster record that is present but unusable is skipped and
//! reported as a [`LoadWarning`].

use crate::core::error::{GameError, Result};
use crate::core::types::MonsterKind;
use crate::entity::{Character, Monster};
use std::fmt;

/// Everything decoded from a save file
#[derive(Debug, Clone)]
pub struct SaveData {
    pub player: Character,
    pub monsters: Vec<Monster>,
    pub warnings: Vec<LoadWarning>,
}

/// A monster record that was skipped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    UnknownKind { line: usize, tag: String },
    Malformed { line: usize, reason: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::UnknownKind { line, tag } => {
                write!(f, "Failed to load monster on line {}: Unknown monster type: {}", line, tag)
            }
            LoadWarning::Malformed { line, reason } => {
                write!(f, "Failed to load monster on line {}: {}", line, reason)
            }
        }
    }
}

/// Render a full save file, newline terminated
pub fn encode(player: &Character, monsters: &[Monster]) -> String {
    let mut out = String::new();
    out.push_str(&player.to_record());
    out.push('\n');
    out.push_str(&monsters.len().to_string());
    out.push('\n');
    for monster in monsters {
        out.push_str(&monster.to_record());
        out.push('\n');
    }
    out
}

/// Parse a save file written by [`encode`]. Lines after the last monster
/// record are ignored.
pub fn decode(text: &str) -> Result<SaveData> {
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

    let player_line = lines
        .next()
        .ok_or_else(|| GameError::CorruptSave("missing player record".into()))?;
    let player = Character::from_record(player_line)
        .map_err(|e| GameError::CorruptSave(format!("player record: {}", e)))?;

    let count_line = lines
        .next()
        .ok_or_else(|| GameError::CorruptSave("missing monster count".into()))?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| GameError::CorruptSave(format!("invalid monster count: {:?}", count_line)))?;

    let mut monsters = Vec::new();
    let mut warnings = Vec::new();

    for i in 0..count {
        // Line numbers are 1-based; monsters start on line 3
        let line_no = i + 3;
        let record = lines.next().ok_or_else(|| {
            GameError::CorruptSave(format!(
                "expected {} monster records, found {}",
                count, i
            ))
        })?;

        match decode_monster(record, line_no) {
            Ok(monster) => monsters.push(monster),
            Err(warning) => {
                tracing::warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }

    Ok(SaveData {
        player,
        monsters,
        warnings,
    })
}

fn decode_monster(record: &str, line: usize) -> std::result::Result<Monster, LoadWarning> {
    let tag = record.split(',').next().unwrap_or_default();
    if MonsterKind::from_tag(tag).is_none() {
        return Err(LoadWarning::UnknownKind {
            line,
            tag: tag.to_string(),
        });
    }

    Monster::from_record(record).map_err(|e| LoadWarning::Malformed {
        line,
        reason: e.to_string(),
    })
}
