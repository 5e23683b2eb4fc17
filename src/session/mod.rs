pub mod game;
pub mod save;

pub use game::{Game, LoadReport, RoundOutcome, RoundReport};
pub use save::{decode, encode, LoadWarning, SaveData};
