use std::fmt;

use super::{Board, DropSequence, GameState, PlacementMode, Player, Players, RoundOutcome};
use crate::error::GameError;
use crate::round_log::RoundLog;

/// One game between two named players, together with its round log.
///
/// The placement mode is fixed at creation. A column-drop session accepts
/// [`Session::play`], which computes the landing row and then places through
/// [`Session::play_at`]; calling `play_at` on its own is out of sequence.
/// An explicit-cell session accepts only `play_at`.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    log: RoundLog,
    mode: PlacementMode,
    sequence: DropSequence,
}

impl Session {
    pub fn new(first: impl Into<String>, second: impl Into<String>, mode: PlacementMode) -> Self {
        Session {
            state: GameState::new(Players::new(first, second)),
            log: RoundLog::new(),
            mode,
            sequence: DropSequence::default(),
        }
    }

    /// Drop a piece into the 1-based `column`.
    pub fn play(&mut self, column: i32) -> Result<RoundOutcome, GameError> {
        if self.mode != PlacementMode::ColumnDrop {
            return Err(GameError::UnsupportedOperation {
                mode: self.mode,
                operation: "play(column)",
            });
        }

        self.sequence.choose_column(column);
        let row = self.state.board().landing_row(column);
        self.play_at(column, row)
    }

    /// Place a piece at the 1-based `(column, row)`.
    pub fn play_at(&mut self, column: i32, row: i32) -> Result<RoundOutcome, GameError> {
        if self.mode == PlacementMode::ColumnDrop {
            self.sequence.take_cell(column, row)?;
        }
        Ok(self.state.place(column, row, &mut self.log))
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn log(&self) -> &RoundLog {
        &self.log
    }

    /// Mutable access for callers that prune entries
    pub fn log_mut(&mut self) -> &mut RoundLog {
        &mut self.log
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn player_name(&self, player: Player) -> &str {
        self.state.players().name(player)
    }

    pub fn first_player_name(&self) -> &str {
        self.state.players().first()
    }

    pub fn second_player_name(&self) -> &str {
        self.state.players().second()
    }

    pub fn current_player_name(&self) -> &str {
        self.player_name(self.current_player())
    }

    pub fn rounds_played(&self) -> u32 {
        self.state.rounds_played()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn is_draw(&self) -> bool {
        self.state.is_draw()
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Board text, with column and row numbers when `header` is set
    pub fn render(&self, header: bool) -> String {
        self.board().render(header)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.board(), f)
    }
}
