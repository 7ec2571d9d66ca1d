//! Color lookup by cell value.
//!
//! The engine never interprets a non-zero cell beyond "occupied"; the color
//! table is purely a rendering concern. Ids 1..=7 follow the fixed
//! kind-to-id bijection.

use crossterm::style::Color;
use gridfall_types::Cell;

/// Terminal color for a locked or falling cell; `None` for empty
pub fn cell_color(id: Cell) -> Option<Color> {
    let (r, g, b) = match id {
        1 => (0xFF, 0x0D, 0x72),
        2 => (0x0D, 0xC2, 0xFF),
        3 => (0x0D, 0xFF, 0x72),
        4 => (0xF5, 0x38, 0xFF),
        5 => (0xFF, 0x8E, 0x0D),
        6 => (0xFF, 0xE1, 0x38),
        7 => (0x38, 0x77, 0xFF),
        _ => return None,
    };
    Some(Color::Rgb { r, g, b })
}
