//! Game engine - the rules of the dodge game on top of the field
//!
//! The engine owns a [`Field`](tui_dodge_core::Field) together with the player
//! position, score and game-over flag. It is a synchronous, turn-based state
//! machine: every call to [`GameEngine::handle_input`] runs one complete
//! simulation step and returns, and [`GameEngine::render`] turns the current
//! state into the text frame a terminal front end displays.
//!
//! # Turn Structure
//!
//! For each movement input while the game is running:
//!
//! 1. The player tries to step one cell. Stepping onto an item scores a point
//!    and spawns a new item plus a new enemy. Stepping onto an enemy ends the game.
//! 2. Unless the game just ended, every enemy gets one random step in a single
//!    row-major sweep over the field. An enemy stepping onto the player ends the game.
//!
//! After a game over only `Confirm` (restart) and `Quit` do anything.
//!
//! # Example
//!
//! ```
//! use tui_dodge_engine::{Flow, GameEngine};
//! use tui_dodge_types::Input;
//!
//! type SmallGame = GameEngine<12, 12>;
//!
//! let mut game = SmallGame::with_seed(12345);
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.player(), (1, 1));
//!
//! // Moving into the top border is a no-op.
//! assert_eq!(game.handle_input(Input::MoveUp), Flow::Continue);
//! assert_eq!(game.player(), (1, 1));
//!
//! assert_eq!(game.handle_input(Input::Quit), Flow::Quit);
//! ```

pub mod engine;
pub mod snapshot;

pub use tui_dodge_core as core;
pub use tui_dodge_types as types;

pub use engine::{game_over_text, Flow, Game, GameEngine, Status};
pub use snapshot::GameSnapshot;
