//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The view
//! renders into a plain framebuffer of styled characters, and the renderer
//! flushes that buffer to the terminal with full-frame redraws.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so frame contents can be asserted in tests
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
