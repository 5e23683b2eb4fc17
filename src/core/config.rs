//! Game configuration with documented constants
//!
//! Tunable values live here. Rules that define the game itself (the
//! player's health cap, experience per level, monster stat presets) are
//! fixed constants next to the types they govern.

use crate::core::error::{GameError, Result};
use crate::core::types::MonsterKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One monster in the starting roster, created with its kind's default stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub kind: MonsterKind,
    pub name: String,
}

impl RosterEntry {
    pub fn new(kind: MonsterKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Configuration for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === PLAYER ===
    /// Name of the player character
    pub player_name: String,

    /// Starting health. Values above the player health cap are clamped.
    pub player_health: i32,

    pub player_attack: i32,

    pub player_defense: i32,

    // === PROGRESSION ===
    /// Experience awarded for every monster defeat, resurrected or not
    pub defeat_experience: i32,

    /// Health restored by one Heal command
    pub heal_amount: i32,

    // === ROSTER ===
    /// Monsters present when a new session starts, in roster order
    pub starting_roster: Vec<RosterEntry>,

    // === SPECIAL ATTACKS ===
    /// Roll per-variant bonus damage on every hit with positive base damage
    ///
    /// Off by default, so damage is exactly `attack - defense`.
    pub special_attacks: bool,

    /// Percent chance (0-100) of a player critical hit (damage doubled)
    pub critical_chance: u32,

    /// Percent chance (0-100) of a Skeleton poison hit (+5 damage)
    pub poison_chance: u32,

    /// Percent chance (0-100) of a Lich fire strike (+10 damage)
    pub fire_chance: u32,

    /// Seed for the combat RNG. `None` seeds from entropy.
    pub seed: Option<u64>,

    // === FILES ===
    pub save_path: PathBuf,

    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Hero".to_string(),
            player_health: 100,
            player_attack: 45,
            player_defense: 10,

            defeat_experience: 50,
            heal_amount: 20,

            starting_roster: vec![
                RosterEntry::new(MonsterKind::Skeleton, "Skeleton1"),
                RosterEntry::new(MonsterKind::Skeleton, "Skeleton2"),
                RosterEntry::new(MonsterKind::Lich, "LichKing"),
            ],

            special_attacks: false,
            critical_chance: 20,
            poison_chance: 30,
            fire_chance: 40,
            seed: None,

            save_path: PathBuf::from("game_save.txt"),
            log_path: PathBuf::from("game.log"),
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate().map_err(GameError::Config)?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.player_name.is_empty() {
            return Err("player_name must not be empty".into());
        }

        if self.player_health <= 0 {
            return Err(format!(
                "player_health ({}) must be positive",
                self.player_health
            ));
        }

        if self.player_attack < 0 || self.player_defense < 0 {
            return Err("player_attack and player_defense must be non-negative".into());
        }

        if self.defeat_experience < 0 || self.heal_amount < 0 {
            return Err("defeat_experience and heal_amount must be non-negative".into());
        }

        for (label, chance) in [
            ("critical_chance", self.critical_chance),
            ("poison_chance", self.poison_chance),
            ("fire_chance", self.fire_chance),
        ] {
            if chance > 100 {
                return Err(format!("{} ({}) must be at most 100", label, chance));
            }
        }

        if let Some(entry) = self.starting_roster.iter().find(|e| e.name.is_empty()) {
            return Err(format!("starting_roster has a {} with no name", entry.kind));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Get the global game config (initializes with defaults if not set)
pub fn config() -> &'static GameConfig {
    CONFIG.get_or_init(GameConfig::default)
}

/// Set the global game config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: GameConfig) -> std::result::Result<(), GameConfig> {
    CONFIG.set(config)
}
