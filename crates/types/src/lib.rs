//! Shared types module - constants and pure data types
//!
//! This crate defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (engine, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Cell Values
//!
//! A board cell is a plain `u8`. `0` means empty; `1..=7` is the color id of
//! the piece kind that locked there. The engine only ever distinguishes zero
//! from non-zero; the renderer uses the id as a color-table index.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame cadence of the gameplay loop (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity: one automatic drop per second |
//!
//! # Examples
//!
//! ```
//! use gridfall_types::{Command, PieceKind, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let kind = PieceKind::T;
//! assert_eq!(kind.color_id(), 1);
//! assert_eq!(PieceKind::from_color_id(1), Some(PieceKind::T));
//!
//! let cmd = Command::from_str("moveLeft").unwrap();
//! assert_eq!(cmd, Command::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame cadence of the gameplay loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Gravity interval: the active piece drops one row per second
pub const DROP_INTERVAL_MS: u64 = 1000;

/// Points awarded per swept row (flat, regardless of how many rows clear
/// together)
pub const POINTS_PER_ROW: u32 = 10;

/// A cell on the game board or inside a piece shape
///
/// `0` is empty; `1..=7` carries a [`PieceKind`] color id.
pub type Cell = u8;

/// The seven piece kinds
///
/// The declaration order fixes the color-id bijection: T=1, O=2, L=3, J=4,
/// I=5, S=6, Z=7. Color id 0 is reserved for "empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

/// All seven kinds in color-id order
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::T,
    PieceKind::O,
    PieceKind::L,
    PieceKind::J,
    PieceKind::I,
    PieceKind::S,
    PieceKind::Z,
];

impl PieceKind {
    /// The cell value this kind writes into the board when it locks
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::T.color_id(), 1);
    /// assert_eq!(PieceKind::Z.color_id(), 7);
    /// ```
    pub fn color_id(&self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`color_id`](Self::color_id); `None` for 0 and out-of-range
    /// values
    pub fn from_color_id(id: Cell) -> Option<Self> {
        match id {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation direction for the active piece
///
/// Clockwise transposes the shape matrix and reverses each row;
/// counter-clockwise transposes and reverses the row order. Applying one and
/// then the other restores the original matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDir {
    Cw,
    Ccw,
}

impl RotationDir {
    /// The direction that undoes this one
    pub fn flipped(&self) -> Self {
        match self {
            RotationDir::Cw => RotationDir::Ccw,
            RotationDir::Ccw => RotationDir::Cw,
        }
    }
}

/// Discrete commands accepted by the engine
///
/// Each command maps one-to-one onto a session operation; there is no
/// payload beyond the command's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Drop the active piece one row (locks on contact)
    SoftDrop,
    /// Rotate the active piece 90° clockwise
    RotateCw,
    /// Rotate the active piece 90° counter-clockwise
    RotateCcw,
    /// Resume the gravity clock
    Start,
    /// Suspend the gravity clock (inputs still apply)
    Pause,
}

impl Command {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotateCw"), Some(Command::RotateCw));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "start" => Some(Command::Start),
            "pause" => Some(Command::Pause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::Start => "start",
            Command::Pause => "pause",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_id_bijection_is_fixed() {
        // T,O,L,J,I,S,Z map onto 1..=7 in declaration order.
        for (i, kind) in ALL_KINDS.iter().enumerate() {
            assert_eq!(kind.color_id(), (i + 1) as Cell);
            assert_eq!(PieceKind::from_color_id((i + 1) as Cell), Some(*kind));
        }
        assert_eq!(PieceKind::from_color_id(0), None);
        assert_eq!(PieceKind::from_color_id(8), None);
    }

    #[test]
    fn piece_kind_string_roundtrip() {
        for kind in ALL_KINDS {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
        assert_eq!(PieceKind::from_str("x"), None);
    }

    #[test]
    fn command_string_roundtrip() {
        let all = [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::RotateCw,
            Command::RotateCcw,
            Command::Start,
            Command::Pause,
        ];
        for cmd in all {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn rotation_dir_flip_is_involutive() {
        assert_eq!(RotationDir::Cw.flipped(), RotationDir::Ccw);
        assert_eq!(RotationDir::Ccw.flipped().flipped(), RotationDir::Ccw);
    }
}
