use std::fmt;

use super::Player;

/// What a single `play` call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    player: Option<Player>,
    message: String,
    valid: bool,
}

impl RoundOutcome {
    /// Outcome attributed to the player who acted
    pub fn by(player: Player, message: impl Into<String>, valid: bool) -> Self {
        RoundOutcome {
            player: Some(player),
            message: message.into(),
            valid,
        }
    }

    /// Outcome with no acting player, e.g. a draw or a move after the game ended
    pub fn system(message: impl Into<String>, valid: bool) -> Self {
        RoundOutcome {
            player: None,
            message: message.into(),
            valid,
        }
    }

    pub fn player(&self) -> Option<Player> {
        self.player
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result of Round: {}", self.message)
    }
}
