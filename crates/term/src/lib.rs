//! Terminal front end for the dodge game.
//!
//! The engine produces a plain text frame. This crate places that frame on a
//! styled framebuffer sized to the terminal and flushes it with crossterm,
//! redrawing only the runs of cells that changed since the last frame.
//!
//! - [`fb`]: framebuffer and style types
//! - [`game_view`]: text frame to framebuffer, pure and unit-testable
//! - [`renderer`]: raw mode, alternate screen and diff flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_dodge_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{FrameKind, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
