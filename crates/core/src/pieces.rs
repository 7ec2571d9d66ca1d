//! Pieces module - shape matrices and in-place rotation
//!
//! A shape is a small square matrix of cell values in the piece's local
//! frame: zero cells are "no block", non-zero cells all carry the kind's
//! color id. The matrix sizes are 2x2 (O), 3x3 (T, L, J, S, Z), and 4x4 (I);
//! the zero rows and columns inside a matrix are significant because the
//! rotation pivot and the kick-search bound both come from the matrix size,
//! not from the filled extent.

use gridfall_types::{Cell, PieceKind, RotationDir, BOARD_WIDTH};

/// Largest shape matrix edge (the I piece)
pub const MAX_SHAPE: usize = 4;

/// A piece's footprint in its own local coordinate frame
///
/// Backed by a fixed 4x4 array with a logical edge length `size`; cells
/// outside `size` are always zero. The one live `Shape` per active piece is
/// owned exclusively by the session, so in-place rotation needs no
/// synchronization or copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    cells: [[Cell; MAX_SHAPE]; MAX_SHAPE],
    size: usize,
}

impl Shape {
    /// Build the spawn-orientation shape for a piece kind
    ///
    /// The patterns are fixed data; each non-zero cell carries the kind's
    /// color id.
    pub fn of(kind: PieceKind) -> Self {
        let id = kind.color_id();
        match kind {
            PieceKind::T => Self::from_rows(&[
                [0, 0, 0],
                [id, id, id],
                [0, id, 0],
            ]),
            PieceKind::O => Self::from_rows(&[
                [id, id],
                [id, id],
            ]),
            PieceKind::L => Self::from_rows(&[
                [0, id, 0],
                [0, id, 0],
                [0, id, id],
            ]),
            PieceKind::J => Self::from_rows(&[
                [0, id, 0],
                [0, id, 0],
                [id, id, 0],
            ]),
            PieceKind::I => Self::from_rows(&[
                [0, id, 0, 0],
                [0, id, 0, 0],
                [0, id, 0, 0],
                [0, id, 0, 0],
            ]),
            PieceKind::S => Self::from_rows(&[
                [0, id, id],
                [id, id, 0],
                [0, 0, 0],
            ]),
            PieceKind::Z => Self::from_rows(&[
                [id, id, 0],
                [0, id, id],
                [0, 0, 0],
            ]),
        }
    }

    fn from_rows<const N: usize>(rows: &[[Cell; N]; N]) -> Self {
        let mut cells = [[0; MAX_SHAPE]; MAX_SHAPE];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..N].copy_from_slice(row);
        }
        Self { cells, size: N }
    }

    /// Edge length of the shape matrix (2, 3, or 4)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at local coordinates, zero outside the matrix
    pub fn get(&self, lx: usize, ly: usize) -> Cell {
        if lx < self.size && ly < self.size {
            self.cells[ly][lx]
        } else {
            0
        }
    }

    /// Iterate the non-zero cells as `(lx, ly, value)`
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let n = self.size;
        (0..n).flat_map(move |ly| {
            (0..n).filter_map(move |lx| {
                let v = self.cells[ly][lx];
                (v != 0).then_some((lx, ly, v))
            })
        })
    }

    /// Rotate the matrix 90° in place
    ///
    /// Transpose, then reverse each row (clockwise) or the row order
    /// (counter-clockwise). Four applications in the same direction restore
    /// the original matrix.
    pub fn rotate(&mut self, dir: RotationDir) {
        let n = self.size;
        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[y][x];
                self.cells[y][x] = self.cells[x][y];
                self.cells[x][y] = tmp;
            }
        }
        match dir {
            RotationDir::Cw => {
                for row in self.cells[..n].iter_mut() {
                    row[..n].reverse();
                }
            }
            RotationDir::Ccw => {
                self.cells[..n].reverse();
            }
        }
    }

    /// Spawn column for this shape: horizontally centered on the board
    ///
    /// Integer division on both terms, so a 3-wide shape on a 12-wide board
    /// spawns at column 5.
    pub fn spawn_x(&self) -> i8 {
        (BOARD_WIDTH as i8) / 2 - (self.size as i8) / 2
    }
}
