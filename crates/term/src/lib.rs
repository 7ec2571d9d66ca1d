//! Terminal presentation for the engine snapshot.
//!
//! Renders the composited board grid, the score line, and a pause marker
//! into an alternate-screen, raw-mode terminal. Full redraw per frame.

pub mod palette;
pub mod screen;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use palette::cell_color;
pub use screen::TermScreen;
