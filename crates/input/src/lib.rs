//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the engine's [`crate::types::Input`]
//! alphabet. The engine itself never sees raw terminal events.

pub mod map;

pub use tui_dodge_types as types;

pub use map::{map_key_event, should_quit};
