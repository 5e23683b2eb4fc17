//! Game session controller
//!
//! The session owns the player, the monster roster and the event log. The
//! player and monsters never interact directly; every exchange goes through
//! [`Game::fight`].
//!
//! A round moves idle -> target selected -> resolved:
//! 1. the roster index is validated (a bad index leaves the session idle),
//! 2. the player strikes the target,
//! 3. a surviving target retaliates, possibly ending the session,
//! 4. a defeated target awards experience and is either removed or, for a
//!    Skeleton while any Lich lives, replaced in place by a fresh Skeleton.

use crate::combat::resolution::{retaliate, StrikeReport};
use crate::combat::special::SpecialRoller;
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::SessionState;
use crate::entity::{Character, Combatant, Monster};
use crate::events::EventLog;
use crate::session::save::{self, LoadWarning};
use std::fs;
use std::path::Path;

/// How a combat round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both sides are still standing
    Exchanged,
    /// The target fell and left the roster
    MonsterSlain { levels_gained: i32 },
    /// The target fell and was raised again in the same roster slot
    MonsterResurrected { levels_gained: i32 },
    /// The player fell; the session is over
    PlayerSlain,
}

/// Everything that happened in one round
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub target: String,
    pub player_strike: StrikeReport,
    pub retaliation: Option<StrikeReport>,
    pub outcome: RoundOutcome,
}

/// Summary of a successful load
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub monsters_loaded: usize,
    pub warnings: Vec<LoadWarning>,
}

/// One player, a roster of monsters and the event log
pub struct Game {
    player: Character,
    roster: Vec<Monster>,
    log: EventLog,
    roller: SpecialRoller,
    config: GameConfig,
    state: SessionState,
}

impl Game {
    /// New session with the configured player (carrying starting gear) and
    /// starting roster
    pub fn new(config: GameConfig, log: EventLog) -> Result<Self> {
        config.validate().map_err(GameError::Config)?;

        let player = Character::with_starting_gear(
            &config.player_name,
            config.player_health,
            config.player_attack,
            config.player_defense,
        )?;
        let roster = config.starting_roster.clone();

        let mut game = Self::with_player(player, config, log);
        for entry in roster {
            game.add_monster(Monster::with_defaults(entry.kind, &entry.name)?)?;
        }

        tracing::info!(
            player = %game.player.name(),
            monsters = game.roster.len(),
            "Session started"
        );
        Ok(game)
    }

    /// Session with an explicit player and an empty roster
    pub fn with_player(player: Character, config: GameConfig, log: EventLog) -> Self {
        Self {
            player,
            roster: Vec::new(),
            roller: SpecialRoller::from_config(&config),
            log,
            config,
            state: SessionState::Active,
        }
    }

    /// Swap the special-attack roller, e.g. for a seeded one in tests
    pub fn set_roller(&mut self, roller: SpecialRoller) {
        self.roller = roller;
    }

    pub fn add_monster(&mut self, monster: Monster) -> Result<()> {
        self.log.log(format!("Added monster: {}", monster.name()))?;
        self.roster.push(monster);
        Ok(())
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn roster(&self) -> &[Monster] {
        &self.roster
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Whether any Lich in the roster still has health
    pub fn lich_alive(&self) -> bool {
        self.roster
            .iter()
            .any(|m| m.kind().raises_dead() && m.is_alive())
    }

    fn ensure_active(&self) -> Result<()> {
        if self.is_over() {
            return Err(GameError::SessionOver);
        }
        Ok(())
    }

    /// Run one combat round against the monster at `index` (0-based)
    pub fn fight(&mut self, index: usize) -> Result<RoundReport> {
        self.ensure_active()?;

        if index >= self.roster.len() {
            return Err(GameError::InvalidSelection {
                index,
                available: self.roster.len(),
            });
        }

        let target = self.roster[index].name().to_string();
        self.log.log(format!("Fighting {}!", target))?;

        let player_strike = {
            let monster = &mut self.roster[index];
            self.player.attack(monster, &mut self.roller, &mut self.log)
        };

        // A fallen target leaves its slot even when the strike's log write failed
        if !self.roster[index].is_alive() {
            let settled = self.settle_defeat(index);
            let player_strike = player_strike?;
            let outcome = settled?;
            return Ok(RoundReport {
                target,
                player_strike,
                retaliation: None,
                outcome,
            });
        }

        let player_strike = player_strike?;
        let retaliation = retaliate(
            &self.roster[index],
            &mut self.player,
            &mut self.roller,
            &mut self.log,
        );
        if !self.player.is_alive() {
            self.state = SessionState::GameOver;
        }
        let retaliation = retaliation?;

        let outcome = if retaliation.defeated_defender() {
            self.log.log(format!(
                "Game over: {} has fallen to {}.",
                self.player.name(),
                target
            ))?;
            RoundOutcome::PlayerSlain
        } else {
            RoundOutcome::Exchanged
        };

        Ok(RoundReport {
            target,
            player_strike,
            retaliation: Some(retaliation),
            outcome,
        })
    }

    /// Clear the fallen monster's slot first, then award experience and log
    /// what happened to it. The roster never keeps a monster at 0 health.
    fn settle_defeat(&mut self, index: usize) -> Result<RoundOutcome> {
        let fallen = &self.roster[index];
        let kind = fallen.kind();
        let name = fallen.name().to_string();

        let resurrected = kind.resurrectable() && self.lich_alive();
        if resurrected {
            self.roster[index] = Monster::with_defaults(kind, &name)?;
        } else {
            self.roster.remove(index);
        }

        let levels_gained = self
            .player
            .gain_experience(self.config.defeat_experience, &mut self.log)?;

        if resurrected {
            self.log
                .log(format!("{} has been resurrected by the Lich!", name))?;
            Ok(RoundOutcome::MonsterResurrected { levels_gained })
        } else {
            self.log
                .log(format!("{} has been removed from the battlefield.", name))?;
            Ok(RoundOutcome::MonsterSlain { levels_gained })
        }
    }

    /// Heal the player by the configured amount
    pub fn heal(&mut self) -> Result<i32> {
        self.heal_by(self.config.heal_amount)
    }

    /// Heal the player, returning the new health
    pub fn heal_by(&mut self, amount: i32) -> Result<i32> {
        self.ensure_active()?;
        self.player.heal(amount, &mut self.log)?;
        Ok(self.player.health())
    }

    pub fn add_item(&mut self, item: &str) -> Result<()> {
        self.ensure_active()?;
        self.player.add_item(item, &mut self.log)
    }

    pub fn remove_item(&mut self, item: &str) -> Result<()> {
        self.ensure_active()?;
        self.player.remove_item(item, &mut self.log)
    }

    /// Write the session to `path`, replacing any previous save
    pub fn save(&mut self, path: &Path) -> Result<()> {
        fs::write(path, save::encode(&self.player, &self.roster))?;
        self.log
            .log(format!("Game progress saved to {}", path.display()))
    }

    /// Replace the session with the contents of `path`
    ///
    /// The file is fully decoded before anything changes, so a failed load
    /// leaves the current player and roster intact.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        let text = fs::read_to_string(path)?;
        let data = save::decode(&text)?;

        self.player = data.player;
        self.roster = data.monsters;
        self.state = if self.player.is_alive() {
            SessionState::Active
        } else {
            SessionState::GameOver
        };

        self.log
            .log(format!("Loaded character: {}", self.player.name()))?;
        for monster in &self.roster {
            self.log.log(format!("Loaded monster: {}", monster.name()))?;
        }
        for warning in &data.warnings {
            self.log.warn(warning)?;
        }
        self.log
            .log(format!("Game progress loaded from {}", path.display()))?;

        Ok(LoadReport {
            monsters_loaded: self.roster.len(),
            warnings: data.warnings,
        })
    }

    /// Record the end of the session
    pub fn end(&mut self) -> Result<()> {
        self.log.log("Game ended.")
    }
}
