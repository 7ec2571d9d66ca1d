//! Read-only state export for renderers and other observers.

use crate::game::Player;
use crate::pieces::MAX_SHAPE;
use gridfall_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The active piece as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Shape matrix padded to 4x4; cells outside `size` are zero
    pub cells: [[Cell; MAX_SHAPE]; MAX_SHAPE],
    pub size: u8,
    pub x: i8,
    pub y: i8,
}

impl From<&Player> for ActiveSnapshot {
    fn from(player: &Player) -> Self {
        let mut cells = [[0; MAX_SHAPE]; MAX_SHAPE];
        let n = player.shape.size();
        for (y, row) in cells.iter_mut().enumerate().take(n) {
            for (x, cell) in row.iter_mut().enumerate().take(n) {
                *cell = player.shape.get(x, y);
            }
        }
        Self {
            kind: player.kind,
            cells,
            size: n as u8,
            x: player.x,
            y: player.y,
        }
    }
}

/// Everything a frame needs: locked grid, active piece, score, play state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub score: u32,
    pub playing: bool,
}

impl GameSnapshot {
    /// Board grid with the active piece's non-zero cells overlaid
    ///
    /// Cells hanging above the top edge are dropped; the engine guarantees
    /// the piece is otherwise inside the grid.
    pub fn composited(&self) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = self.board;
        let n = self.active.size as usize;
        for (ly, row) in self.active.cells.iter().enumerate().take(n) {
            for (lx, &v) in row.iter().enumerate().take(n) {
                if v == 0 {
                    continue;
                }
                let bx = self.active.x + lx as i8;
                let by = self.active.y + ly as i8;
                if by < 0 {
                    continue;
                }
                grid[by as usize][bx as usize] = v;
            }
        }
        grid
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                kind: PieceKind::T,
                cells: [[0; MAX_SHAPE]; MAX_SHAPE],
                size: 0,
                x: 0,
                y: 0,
            },
            score: 0,
            playing: false,
        }
    }
}
