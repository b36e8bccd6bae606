//! # Connect Four Engine
//!
//! Rules engine for two-player Connect Four: board state, move validation,
//! turn alternation, win/draw detection, and a log of round outcomes.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, win detection, placement state machine, sessions
//! - [`round_log`] — Append-only round log and its entries
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod round_log;

/// Separator placed between rendered board rows and log lines.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";
