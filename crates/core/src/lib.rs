//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`shape`]: generator-walk orientation geometry, cached per shape
//! - [`piece`]: the falling piece (kind + anchor + orientation)
//! - [`grid`]: 10x16 locked-block state with collision detection and
//!   row clearing
//! - [`session`]: the per-frame game state machine (timing, scoring,
//!   leveling, pause/game-over/restart)
//! - [`rng`]: seedable LCG and the injectable uniform shape source
//! - [`snapshot`]: render-facing state copies
//!
//! # Game Rules
//!
//! This is deliberately a pre-guideline rule set:
//!
//! - Uniform random dealing (no bag randomizer)
//! - A single right-wall nudge on rotation (no kick tables)
//! - One drop action that lands the piece (no soft/hard distinction)
//! - Pieces lock the moment their next step down collides (no lock delay)
//! - 100 points per cleared row, 10 points per drop cell, and a 5% gravity
//!   speed-up every 2 lines with no speed cap
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use gridfall_core::GameSession;
//! use gridfall_core::types::GameAction;
//!
//! let mut game = GameSession::new(12345);
//!
//! // One frame: gravity timing, player actions, then lock-and-deal.
//! game.update(Duration::from_millis(16), &[GameAction::MoveRight]);
//! game.update(Duration::from_millis(16), &[GameAction::Drop]);
//!
//! assert!(game.score() > 0); // Drop awards points per cell descended
//! ```

pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, LockedBlock};
pub use piece::Piece;
pub use rng::{ShapeSource, SimpleRng, UniformDealer};
pub use session::GameSession;
pub use shape::{geometry, CellOffset};
pub use snapshot::{CellView, GameSnapshot};
