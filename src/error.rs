use std::path::PathBuf;

/// Errors returned by the board model and the game engine.
///
/// None of these are fatal: a rejected call never mutates state, so the
/// caller may reissue a corrected call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: isize, width: usize },

    #[error("row {row} is outside the board (height {height})")]
    InvalidRow { row: isize, height: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameAlreadyOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
