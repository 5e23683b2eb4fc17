pub mod resolution;
pub mod special;

pub use resolution::{base_damage, retaliate, strike, StrikeOutcome, StrikeReport};
pub use special::{SpecialAttack, SpecialRoller};
