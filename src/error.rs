use std::path::PathBuf;

use crate::game::PlacementMode;

/// Errors from calling a placement entry point the session does not accept.
///
/// Rule violations by players (bad coordinates, taken cells, moves after the
/// end) are not errors; they come back as invalid `RoundOutcome`s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("{operation} is not supported in {mode} mode")]
    UnsupportedOperation {
        mode: PlacementMode,
        operation: &'static str,
    },

    #[error("placement at ({column}, {row}) was not preceded by a drop into column {column}")]
    OutOfSequence { column: i32, row: i32 },
}

/// Errors from parsing a rendered board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 6 board rows, found {0}")]
    RowCount(usize),

    #[error("row {0} is not enclosed in brackets")]
    MissingBrackets(usize),

    #[error("row {row} has {width} cells, expected 7")]
    RowWidth { row: usize, width: usize },

    #[error("row {row} contains unknown cell {found:?}")]
    UnknownCell { row: usize, found: char },
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

    #[error("unknown placement mode '{0}' (expected 'column_drop' or 'explicit_cell')")]
    UnknownMode(String),
}
