pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, GameConfig, RosterEntry};
pub use error::{GameError, Result};
pub use types::{MonsterKind, SessionState, StatPreset};
