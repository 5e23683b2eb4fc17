use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Item {0} not found in inventory")]
    ItemNotFound(String),

    #[error("Invalid monster selection: {index} (roster has {available})")]
    InvalidSelection { index: usize, available: usize },

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Corrupt save: {0}")]
    CorruptSave(String),

    #[error("The session is over")]
    SessionOver,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
