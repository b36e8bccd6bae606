//! Core Connect Four rules: board, players, win detection, the placement and
//! turn state machine, and the session that ties them to a round log.

mod board;
mod mode;
mod outcome;
mod player;
mod session;
mod state;
pub mod win;

pub use board::{Board, Cell, PlaceError, COLS, ROWS};
pub use mode::{DropSequence, PlacementMode};
pub use outcome::RoundOutcome;
pub use player::{Player, Players};
pub use session::Session;
pub use state::GameState;
