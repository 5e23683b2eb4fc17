//! Monsters: a combatant plus a variant tag

use crate::combat::special::SpecialAttack;
use crate::core::error::{GameError, Result};
use crate::core::types::MonsterKind;
use crate::entity::combatant::{Combatant, Vitals};
use std::fmt;

/// A monster in the session roster. Monster health has no upper cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    kind: MonsterKind,
    vitals: Vitals,
}

impl Monster {
    pub fn new(kind: MonsterKind, name: &str, health: i32, attack: i32, defense: i32) -> Result<Self> {
        Ok(Self {
            kind,
            vitals: Vitals::new(name, health, attack, defense)?,
        })
    }

    /// Monster with its kind's stat preset
    pub fn with_defaults(kind: MonsterKind, name: &str) -> Result<Self> {
        let preset = kind.default_stats();
        Self::new(kind, name, preset.health, preset.attack, preset.defense)
    }

    /// Skeleton with 40 HP, 10 attack, 15 defense
    pub fn skeleton(name: &str) -> Result<Self> {
        Self::with_defaults(MonsterKind::Skeleton, name)
    }

    /// Lich with 600 HP, 35 attack, 25 defense
    pub fn lich(name: &str) -> Result<Self> {
        Self::with_defaults(MonsterKind::Lich, name)
    }

    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    /// `type,name,health,attack,defense`
    ///
    /// Names are written as-is; a comma inside a name corrupts the record.
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.kind.tag(),
            self.vitals.name,
            self.vitals.health,
            self.vitals.attack,
            self.vitals.defense
        )
    }

    /// Parse a record written by [`Monster::to_record`]
    ///
    /// Fields past the fifth are ignored.
    pub fn from_record(record: &str) -> Result<Self> {
        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() < 5 {
            return Err(GameError::MalformedRecord(format!(
                "monster record needs 5 fields, got {}",
                fields.len()
            )));
        }

        let kind = MonsterKind::from_tag(fields[0]).ok_or_else(|| {
            GameError::MalformedRecord(format!("Unknown monster type: {}", fields[0]))
        })?;
        let health = parse_stat("health", fields[2])?;
        let attack = parse_stat("attack", fields[3])?;
        let defense = parse_stat("defense", fields[4])?;

        Self::new(kind, fields[1], health, attack, defense)
            .map_err(|e| GameError::MalformedRecord(e.to_string()))
    }
}

pub(crate) fn parse_stat(label: &str, field: &str) -> Result<i32> {
    field
        .trim()
        .parse()
        .map_err(|_| GameError::MalformedRecord(format!("invalid {}: {:?}", label, field)))
}

impl Combatant for Monster {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn special_attack(&self) -> Option<SpecialAttack> {
        match self.kind {
            MonsterKind::Skeleton => Some(SpecialAttack::Poison),
            MonsterKind::Lich => Some(SpecialAttack::Fire),
        }
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, HP: {}, Attack: {}, Defense: {}",
            self.kind, self.vitals.name, self.vitals.health, self.vitals.attack, self.vitals.defense
        )
    }
}
