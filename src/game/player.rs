use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// 1 for the first player, 2 for the second
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Display names of both seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    first: String,
    second: String,
}

impl Players {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Players {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.first,
            Player::Two => &self.second,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}
