//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole board/piece simulation: grid state, piece
//! shapes, collision, rotation with its corrective kick search, locking,
//! row sweeping, scoring, and the gravity clock. It has **zero dependencies**
//! on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every game rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for tick processing
//!
//! # Module Structure
//!
//! - [`board`]: 12x20 grid with collision detection, merging, and row sweep
//! - [`pieces`]: shape matrices per piece kind and in-place 90° rotation
//! - [`game`]: the session object owning board, active piece, score, clock
//! - [`clock`]: gravity accumulator driven by an external timestamp feed
//! - [`rng`]: small LCG used to pick spawn kinds uniformly
//! - [`snapshot`]: read-only state export for renderers
//!
//! # Game Rules
//!
//! This engine implements the compact classic ruleset:
//!
//! - Pieces spawn centered at the top row and fall one row per second
//! - Side and bottom walls are solid; the area above the board is open
//! - Rotation is matrix transpose + reverse, with an alternating,
//!   widening horizontal kick search near obstructions
//! - A full row is removed and replaced by an empty top row; each removed
//!   row is worth a flat 10 points
//! - A blocked spawn silently wipes the board and score and play continues
//!
//! # Example
//!
//! ```
//! use gridfall_core::Game;
//! use gridfall_types::Command;
//!
//! let mut game = Game::new(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateCw);
//! game.apply(Command::SoftDrop);
//!
//! // Gravity is driven by an external monotonic clock.
//! game.advance(1001);
//! ```

pub mod board;
pub mod clock;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, SweptRows};
pub use clock::DropClock;
pub use game::{Game, Player};
pub use pieces::Shape;
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
