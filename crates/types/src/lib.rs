//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! by the field, the engine, the key mapping and the terminal view alike.
//!
//! # Field Dimensions
//!
//! The playing field is fixed at compile time:
//!
//! - **Interior**: 60 columns x 30 rows
//! - **Border**: one extra cell on every side, so the full grid is 62 x 32
//! - **Player start**: interior cell (1, 1), just inside the top-left corner
//!
//! # Glyphs
//!
//! | Cell | Glyph |
//! |------|-------|
//! | Border corner | `+` |
//! | Border horizontal run | `-` |
//! | Border vertical run | `\|` |
//! | Empty | ` ` |
//! | Player | `0` |
//! | Item | `$` |
//! | Enemy | `X` |
//!
//! # Examples
//!
//! ```
//! use tui_dodge_types::{BorderKind, Cell, Direction, Input};
//!
//! assert_eq!(Cell::Player.glyph(), '0');
//! assert_eq!(Cell::from_glyph('+'), Some(Cell::Border(BorderKind::Corner)));
//!
//! let input = Input::from_str("moveUp").unwrap();
//! assert_eq!(input.direction(), Some(Direction::Up));
//! assert_eq!(Direction::Up.offset(), (-1, 0));
//! ```

/// Interior width of the playing field in columns.
pub const INTERIOR_COLS: usize = 60;

/// Interior height of the playing field in rows.
pub const INTERIOR_ROWS: usize = 30;

/// Full grid width including the left and right border columns.
pub const FIELD_COLS: usize = INTERIOR_COLS + 2;

/// Full grid height including the top and bottom border rows.
pub const FIELD_ROWS: usize = INTERIOR_ROWS + 2;

/// Interior cell the player occupies after a reset, as `(row, col)`.
pub const PLAYER_START: (usize, usize) = (1, 1);

/// Segment of the border ring a border cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// One of the four corners
    Corner,
    /// Top or bottom run
    Horizontal,
    /// Left or right run
    Vertical,
}

/// A single grid position on the field.
///
/// The field stores exactly one `Cell` per position, and that value is the
/// only record of what occupies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Border(BorderKind),
    Player,
    Item,
    Enemy,
}

impl Cell {
    /// Glyph used when the cell is drawn as text.
    pub fn glyph(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Border(BorderKind::Corner) => '+',
            Cell::Border(BorderKind::Horizontal) => '-',
            Cell::Border(BorderKind::Vertical) => '|',
            Cell::Player => '0',
            Cell::Item => '$',
            Cell::Enemy => 'X',
        }
    }

    /// Reverse glyph lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dodge_types::Cell;
    ///
    /// assert_eq!(Cell::from_glyph('X'), Some(Cell::Enemy));
    /// assert_eq!(Cell::from_glyph('$'), Some(Cell::Item));
    /// assert_eq!(Cell::from_glyph('?'), None);
    /// ```
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Cell::Empty),
            '+' => Some(Cell::Border(BorderKind::Corner)),
            '-' => Some(Cell::Border(BorderKind::Horizontal)),
            '|' => Some(Cell::Border(BorderKind::Vertical)),
            '0' => Some(Cell::Player),
            '$' => Some(Cell::Item),
            'X' => Some(Cell::Enemy),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_border(&self) -> bool {
        matches!(self, Cell::Border(_))
    }
}

/// One orthogonal step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions in the order enemies pick from them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(row, col)` delta of a single step.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Apply one step to `(row, col)`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    pub fn step(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.offset();
        Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
    }
}

/// Discrete inputs the engine understands.
///
/// Raw key events are mapped onto this alphabet by the input crate; the
/// engine never sees terminal events directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Move the player one cell up
    MoveUp,
    /// Move the player one cell down
    MoveDown,
    /// Move the player one cell left
    MoveLeft,
    /// Move the player one cell right
    MoveRight,
    /// Restart after a game over
    Confirm,
    /// Leave the game
    Quit,
}

impl Input {
    /// Parse input from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dodge_types::Input;
    ///
    /// assert_eq!(Input::from_str("moveLeft"), Some(Input::MoveLeft));
    /// assert_eq!(Input::from_str("CONFIRM"), Some(Input::Confirm));
    /// assert_eq!(Input::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(Input::MoveUp),
            "movedown" => Some(Input::MoveDown),
            "moveleft" => Some(Input::MoveLeft),
            "moveright" => Some(Input::MoveRight),
            "confirm" => Some(Input::Confirm),
            "quit" => Some(Input::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Input::MoveUp => "moveUp",
            Input::MoveDown => "moveDown",
            Input::MoveLeft => "moveLeft",
            Input::MoveRight => "moveRight",
            Input::Confirm => "confirm",
            Input::Quit => "quit",
        }
    }

    /// Movement direction carried by this input, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Input::MoveUp => Some(Direction::Up),
            Input::MoveDown => Some(Direction::Down),
            Input::MoveLeft => Some(Direction::Left),
            Input::MoveRight => Some(Direction::Right),
            Input::Confirm | Input::Quit => None,
        }
    }
}
