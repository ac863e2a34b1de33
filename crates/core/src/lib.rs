//! Core field module - the bordered grid the game is played on
//!
//! This crate owns the representation of the playing field and nothing else.
//! It has no knowledge of score, turns or input; the engine crate builds the
//! game rules on top of it.
//!
//! - **Fixed size**: dimensions are const generics, chosen at compile time
//! - **Canonical**: the cell value at a position is the only record of what occupies it
//! - **Bordered**: the outer ring is always border, occupants live in the interior
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tui_dodge_core::Field;
//! use tui_dodge_types::Cell;
//!
//! let mut field: Field<12, 12> = Field::new();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let (row, col) = field.random_empty_interior_cell(&mut rng).unwrap();
//! field.set(row, col, Cell::Item);
//! assert_eq!(field.count(Cell::Item), 1);
//! ```

pub mod field;

pub use tui_dodge_types as types;

pub use field::{Field, GameField};
