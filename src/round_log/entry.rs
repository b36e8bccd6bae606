use std::fmt;

use crate::game::Player;

/// Kind of log entry; decides the label and whether a player is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A counted round, labelled with its number
    Default,
    Invalid,
    GameOver,
    Draw,
}

impl Category {
    /// Whether entries of this category show the acting player
    pub fn is_from_player(self) -> bool {
        matches!(self, Category::Default | Category::Invalid)
    }

    /// Bracketed label text. A default entry without a round only arises when
    /// a caller builds one by hand; the engine always numbers its rounds.
    pub fn label(self, round: Option<u32>) -> String {
        match (self, round) {
            (Category::Default, Some(round)) => format!("Round {round:02}"),
            (Category::Default, None) => "Round --".to_string(),
            (Category::Invalid, _) => "invalid!".to_string(),
            (Category::GameOver, _) => "GameOver".to_string(),
            (Category::Draw, _) => "  Draw  ".to_string(),
        }
    }
}

/// One immutable record in the [`RoundLog`](super::RoundLog).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogEntry {
    message: String,
    round: Option<u32>,
    player: Option<Player>,
    category: Category,
    valid: bool,
}

impl LogEntry {
    pub fn new(
        message: impl Into<String>,
        round: Option<u32>,
        player: Option<Player>,
        category: Category,
        valid: bool,
    ) -> Self {
        LogEntry {
            message: message.into(),
            round,
            player,
            category,
            valid,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Counted round, `None` when the entry does not consume a round
    pub fn round(&self) -> Option<u32> {
        self.round
    }

    /// Round number with `-1` for uncounted entries
    pub fn round_number(&self) -> i64 {
        self.round.map_or(-1, i64::from)
    }

    pub fn player(&self) -> Option<Player> {
        self.player
    }

    /// 1 or 2, or 0 when no player is attached
    pub fn player_number(&self) -> u8 {
        self.player.map_or(0, Player::number)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Display for LogEntry {
    /// `[<label>] [Player N]: <message>` for player categories, `[<label>] <message>` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.category.label(self.round))?;
        if self.category.is_from_player() {
            write!(f, "[Player {}]: ", self.player_number())?;
        }
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Category::Default.label(Some(7)), "Round 07");
        assert_eq!(Category::Default.label(Some(42)), "Round 42");
        assert_eq!(Category::Default.label(None), "Round --");
        assert_eq!(Category::Invalid.label(None), "invalid!");
        assert_eq!(Category::GameOver.label(None), "GameOver");
        assert_eq!(Category::Draw.label(None), "  Draw  ");
    }

    #[test]
    fn test_player_attribution() {
        assert!(Category::Default.is_from_player());
        assert!(Category::Invalid.is_from_player());
        assert!(!Category::GameOver.is_from_player());
        assert!(!Category::Draw.is_from_player());
    }

    #[test]
    fn test_default_entry_display() {
        let entry = LogEntry::new(
            "Position (1, 6) belongs now to player Test1",
            Some(1),
            Some(Player::One),
            Category::Default,
            true,
        );
        assert_eq!(
            entry.to_string(),
            "[Round 01] [Player 1]: Position (1, 6) belongs now to player Test1"
        );
        assert_eq!(entry.round_number(), 1);
    }

    #[test]
    fn test_invalid_entry_display() {
        let entry = LogEntry::new(
            "Chosen position (8, 6) is not in range!",
            None,
            Some(Player::Two),
            Category::Invalid,
            false,
        );
        assert_eq!(
            entry.to_string(),
            "[invalid!] [Player 2]: Chosen position (8, 6) is not in range!"
        );
        assert_eq!(entry.round_number(), -1);
        assert_eq!(entry.player_number(), 2);
    }

    #[test]
    fn test_terminal_entries_hide_player() {
        let over = LogEntry::new(
            "Player Test2 has won the game!",
            None,
            None,
            Category::GameOver,
            true,
        );
        assert_eq!(over.to_string(), "[GameOver] Player Test2 has won the game!");
        assert_eq!(over.player_number(), 0);

        let draw = LogEntry::new("Draw, nobody won!", None, None, Category::Draw, true);
        assert_eq!(draw.to_string(), "[  Draw  ] Draw, nobody won!");
    }
}
