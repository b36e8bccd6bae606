use super::win::{self, MAX_ROUNDS, MIN_ROUNDS};
use super::{Board, PlaceError, Player, Players, RoundOutcome};
use crate::round_log::{Category, LogEntry, RoundRecorder};

/// Board, turn order, round count and the terminal latches of one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    players: Players,
    current_player: Player,
    rounds_played: u32,
    winner: Option<Player>,
    draw: bool,
    over: bool,
}

impl GameState {
    /// Create initial game state; the first player moves first
    pub fn new(players: Players) -> Self {
        GameState {
            board: Board::new(),
            players,
            current_player: Player::One,
            rounds_played: 0,
            winner: None,
            draw: false,
            over: false,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Valid placements so far
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_draw(&self) -> bool {
        self.draw
    }

    /// Check if game is over, by a win or a draw
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Place the current player's piece at the 1-based `(column, row)`.
    ///
    /// Checks run in the order game over, range, occupancy; the first failure
    /// returns an invalid outcome and leaves the state untouched. A successful
    /// placement counts a round and is then checked for a win, then a draw,
    /// and only then passes the turn.
    pub fn place(
        &mut self,
        column: i32,
        row: i32,
        recorder: &mut dyn RoundRecorder,
    ) -> RoundOutcome {
        if self.over {
            log::debug!("rejected ({column}, {row}): game is already over");
            return RoundOutcome::system("Game is already over!", false);
        }

        let player = self.current_player;
        let x = column.saturating_sub(1);
        let y = row.saturating_sub(1);

        if let Err(err) = self.board.occupy(x, y, player.to_cell()) {
            let message = match err {
                PlaceError::OutOfRange => {
                    format!("Chosen position ({column}, {row}) is not in range!")
                }
                PlaceError::Occupied => {
                    format!("Chosen position ({column}, {row}) is already taken!")
                }
            };
            log::debug!("player {} rejected: {message}", player.number());
            let outcome = RoundOutcome::by(player, message, false);
            self.record(recorder, &outcome, Category::Invalid, None);
            return outcome;
        }

        self.rounds_played += 1;
        let name = self.players.name(player);
        let placed = RoundOutcome::by(
            player,
            format!("Position ({column}, {row}) belongs now to player {name}"),
            true,
        );
        log::debug!("round {}: {}", self.rounds_played, placed.message());
        self.record(recorder, &placed, Category::Default, Some(self.rounds_played));

        if self.rounds_played > MIN_ROUNDS {
            if let Some(direction) = win::winning_direction(&self.board, x, y, player.to_cell()) {
                self.over = true;
                self.winner = Some(player);
                log::info!(
                    "player {} wins in round {} ({direction:?})",
                    player.number(),
                    self.rounds_played
                );
                let won = RoundOutcome::by(player, format!("Player {name} has won the game!"), true);
                self.record(recorder, &won, Category::GameOver, None);
                return won;
            }
        }

        if self.rounds_played == MAX_ROUNDS {
            self.over = true;
            self.draw = true;
            log::info!("board full after {} rounds, draw", self.rounds_played);
            let drawn = RoundOutcome::system("Draw, nobody won!", true);
            self.record(recorder, &drawn, Category::Draw, None);
            return drawn;
        }

        self.current_player = player.other();
        placed
    }

    fn record(
        &self,
        recorder: &mut dyn RoundRecorder,
        outcome: &RoundOutcome,
        category: Category,
        round: Option<u32>,
    ) {
        let player = category
            .is_from_player()
            .then_some(self.current_player);
        let entry = LogEntry::new(outcome.message(), round, player, category, outcome.is_valid());
        if !recorder.record(entry) {
            log::warn!("round log rejected a {category:?} entry for round {round:?}");
        }
    }
}
