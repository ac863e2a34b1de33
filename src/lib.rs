//! TUI Dodge (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_dodge::{core,engine,input,term,types}` and owns the process-level
//! pieces the binary needs: configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_dodge_core as core;
pub use tui_dodge_engine as engine;
pub use tui_dodge_input as input;
pub use tui_dodge_term as term;
pub use tui_dodge_types as types;

pub use config::{Config, ConfigError};
