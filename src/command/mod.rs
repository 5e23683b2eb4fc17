//! Command surface
//!
//! Text input -> Command -> CommandExecutor -> CommandOutcome

pub mod executor;
pub mod parser;

pub use executor::{CommandExecutor, CommandOutcome};
pub use parser::{Command, MENU};
