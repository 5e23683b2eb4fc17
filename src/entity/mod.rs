pub mod character;
pub mod combatant;
pub mod inventory;
pub mod monster;

pub use character::{Character, EXPERIENCE_PER_LEVEL, PLAYER_MAX_HEALTH};
pub use combatant::{Combatant, DamageOutcome, Vitals};
pub use inventory::Inventory;
pub use monster::Monster;
