use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, GameError};

/// Which placement entry point a session accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Players pick a column; the landing row follows from gravity.
    #[default]
    ColumnDrop,
    /// Players pick column and row directly.
    ExplicitCell,
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementMode::ColumnDrop => f.write_str("column_drop"),
            PlacementMode::ExplicitCell => f.write_str("explicit_cell"),
        }
    }
}

impl FromStr for PlacementMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "column_drop" | "column-drop" | "drop" => Ok(PlacementMode::ColumnDrop),
            "explicit_cell" | "explicit-cell" | "explicit" => Ok(PlacementMode::ExplicitCell),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Call sequence of a column-drop session: a column-only call arms exactly one
/// explicit placement for that column, which consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropSequence {
    #[default]
    ReadyForColumn,
    ColumnChosenAwaitingCell { column: i32 },
}

impl DropSequence {
    /// Record a column-only call
    pub fn choose_column(&mut self, column: i32) {
        *self = DropSequence::ColumnChosenAwaitingCell { column };
    }

    /// Consume the armed column for an explicit call, or reject it.
    pub fn take_cell(&mut self, column: i32, row: i32) -> Result<(), GameError> {
        match *self {
            DropSequence::ColumnChosenAwaitingCell { column: chosen } if chosen == column => {
                *self = DropSequence::ReadyForColumn;
                Ok(())
            }
            _ => Err(GameError::OutOfSequence { column, row }),
        }
    }
}
