//! The player character
//!
//! Player health is capped at [`PLAYER_MAX_HEALTH`] regardless of the
//! starting health. Monsters have no such cap.

use crate::combat::resolution::{self, StrikeReport};
use crate::combat::special::{SpecialAttack, SpecialRoller};
use crate::core::error::{GameError, Result};
use crate::entity::combatant::{Combatant, Vitals};
use crate::entity::inventory::Inventory;
use crate::entity::monster::parse_stat;
use crate::events::EventLog;
use std::fmt;

/// Upper bound for player health
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Experience needed for one level
pub const EXPERIENCE_PER_LEVEL: i32 = 100;

/// Number of comma-separated fields in a character record
pub const RECORD_FIELDS: usize = 7;

/// The player: a combatant with level, experience and an inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    vitals: Vitals,
    level: i32,
    experience: i32,
    inventory: Inventory,
}

impl Character {
    /// Level 1 character with no experience and an empty inventory
    ///
    /// Health above the cap is clamped to it.
    pub fn new(name: &str, health: i32, attack: i32, defense: i32) -> Result<Self> {
        let mut vitals = Vitals::new(name, health, attack, defense)?;
        vitals.health = vitals.health.min(PLAYER_MAX_HEALTH);

        Ok(Self {
            vitals,
            level: 1,
            experience: 0,
            inventory: Inventory::new(),
        })
    }

    /// New character carrying a Sword and a Shield
    pub fn with_starting_gear(name: &str, health: i32, attack: i32, defense: i32) -> Result<Self> {
        let mut character = Self::new(name, health, attack, defense)?;
        character.inventory.add("Sword")?;
        character.inventory.add("Shield")?;
        Ok(character)
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Attack a target with `attack - defense` damage
    pub fn attack(
        &self,
        target: &mut dyn Combatant,
        roller: &mut SpecialRoller,
        log: &mut EventLog,
    ) -> Result<StrikeReport> {
        resolution::strike(self, target, roller, log)
    }

    /// Restore health up to the cap
    pub fn heal(&mut self, amount: i32, log: &mut EventLog) -> Result<()> {
        if amount < 0 {
            return Err(GameError::InvalidArgument(format!(
                "Heal amount must be non-negative, got {}",
                amount
            )));
        }

        self.vitals.health = self.vitals.health.saturating_add(amount).min(PLAYER_MAX_HEALTH);
        log.log(format!("{} heals for {} HP!", self.vitals.name, amount))
    }

    /// Add experience, converting every full [`EXPERIENCE_PER_LEVEL`] into
    /// a level. Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: i32, log: &mut EventLog) -> Result<i32> {
        if amount < 0 {
            return Err(GameError::InvalidArgument(format!(
                "Experience must be non-negative, got {}",
                amount
            )));
        }

        let total = self.experience.saturating_add(amount);
        let gained = total / EXPERIENCE_PER_LEVEL;
        let start_level = self.level;
        let level = start_level.checked_add(gained).ok_or_else(|| {
            GameError::InvalidArgument(format!(
                "{} experience would raise level {} past {}",
                amount,
                start_level,
                i32::MAX
            ))
        })?;

        self.level = level;
        self.experience = total % EXPERIENCE_PER_LEVEL;

        log.log(format!("{} gains {} experience!", self.vitals.name, amount))?;
        for step in 1..=gained {
            log.log(format!(
                "{} leveled up to level {}!",
                self.vitals.name,
                start_level + step
            ))?;
        }
        Ok(gained)
    }

    pub fn add_item(&mut self, item: &str, log: &mut EventLog) -> Result<()> {
        self.inventory.add(item)?;
        log.log(format!("{} added {} to inventory.", self.vitals.name, item))
    }

    pub fn remove_item(&mut self, item: &str, log: &mut EventLog) -> Result<()> {
        self.inventory.remove(item)?;
        log.log(format!("{} removed {} from inventory.", self.vitals.name, item))
    }

    /// `name,health,attack,defense,level,experience,inventory`
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.vitals.name,
            self.vitals.health,
            self.vitals.attack,
            self.vitals.defense,
            self.level,
            self.experience,
            self.inventory.to_payload()
        )
    }

    /// Build a character from a record written by [`Character::to_record`]
    ///
    /// Nothing is mutated on failure; callers replace their character only
    /// once this returns `Ok`.
    pub fn from_record(record: &str) -> Result<Self> {
        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() < RECORD_FIELDS {
            return Err(GameError::MalformedRecord(format!(
                "character record needs {} fields, got {}",
                RECORD_FIELDS,
                fields.len()
            )));
        }

        let health = parse_stat("health", fields[1])?;
        let attack = parse_stat("attack", fields[2])?;
        let defense = parse_stat("defense", fields[3])?;
        let level = parse_stat("level", fields[4])?;
        let experience = parse_stat("experience", fields[5])?;
        let inventory = Inventory::from_payload(fields[6])?;

        if level < 1 {
            return Err(GameError::MalformedRecord(format!(
                "level must be at least 1, got {}",
                level
            )));
        }
        if experience < 0 {
            return Err(GameError::MalformedRecord(format!(
                "experience must be non-negative, got {}",
                experience
            )));
        }

        let mut character = Self::new(fields[0], health, attack, defense)
            .map_err(|e| GameError::MalformedRecord(e.to_string()))?;
        character.level = level;
        character.experience = experience;
        character.inventory = inventory;
        Ok(character)
    }
}

impl Combatant for Character {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn special_attack(&self) -> Option<SpecialAttack> {
        Some(SpecialAttack::Critical)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, HP: {}, Attack: {}, Defense: {}, Level: {}, Experience: {}",
            self.vitals.name,
            self.vitals.health,
            self.vitals.attack,
            self.vitals.defense,
            self.level,
            self.experience
        )
    }
}
