//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monster variant tag
///
/// The tag is what gets written to save files, and it is what combat
/// switches on for variant rules (a live Lich keeps Skeletons from
/// staying dead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Skeleton,
    Lich,
}

/// Stat preset used when a monster is created without explicit stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatPreset {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 2] = [MonsterKind::Skeleton, MonsterKind::Lich];

    /// Stable tag used in save files
    pub fn tag(&self) -> &'static str {
        match self {
            MonsterKind::Skeleton => "Skeleton",
            MonsterKind::Lich => "Lich",
        }
    }

    /// Reverse of [`MonsterKind::tag`]. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn default_stats(&self) -> StatPreset {
        match self {
            MonsterKind::Skeleton => StatPreset {
                health: 40,
                attack: 10,
                defense: 15,
            },
            MonsterKind::Lich => StatPreset {
                health: 600,
                attack: 35,
                defense: 25,
            },
        }
    }

    /// Whether defeated monsters of this kind come back while a Lich lives
    pub fn resurrectable(&self) -> bool {
        matches!(self, MonsterKind::Skeleton)
    }

    /// Whether this kind keeps resurrectable monsters from dying
    pub fn raises_dead(&self) -> bool {
        matches!(self, MonsterKind::Lich)
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Whether the session still accepts game-changing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Active,
    GameOver,
}
