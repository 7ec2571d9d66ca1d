//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`gridfall_types::Command`] values.
//! Intentionally stateless: every command is a discrete press, with no
//! auto-repeat handling of its own (terminal key repeat is enough here).

pub mod map;

pub use gridfall_types as types;

pub use map::{handle_key_event, should_quit};
