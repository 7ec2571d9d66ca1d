//! Game module - the simulation session
//!
//! Ties the board, the active piece, the score, and the gravity clock into
//! one explicitly-owned object. All mutation goes through the operations
//! here; the board never reads the active piece on its own, it is always
//! handed in for collision checks.

use crate::board::Board;
use crate::clock::DropClock;
use crate::pieces::Shape;
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use gridfall_types::{Command, PieceKind, RotationDir, POINTS_PER_ROW};

/// The active falling piece
///
/// `(x, y)` is where the shape's local origin (top-left) lands on the
/// board; a shape cell at local `(lx, ly)` occupies board `(x+lx, y+ly)`.
/// Outside the rotation kick search the piece never overlaps a locked cell
/// and never crosses the side or bottom walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Player {
    /// A fresh piece of the given kind at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            x: shape.spawn_x(),
            y: 0,
            shape,
        }
    }
}

/// A complete game session
///
/// Single-threaded by construction: commands and clock ticks are applied
/// synchronously, each running to completion before the next.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    player: Player,
    score: u32,
    rng: SimpleRng,
    clock: DropClock,
}

impl Game {
    /// Create a session with the given RNG seed and spawn the first piece
    ///
    /// The clock starts running; `pause` suspends gravity.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let player = Player::spawn(rng.pick_kind());
        Self {
            board: Board::new(),
            player,
            score: 0,
            rng,
            clock: DropClock::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    /// Milliseconds accumulated toward the next automatic drop
    pub fn drop_counter(&self) -> u64 {
        self.clock.drop_counter()
    }

    /// Replace the active piece with a random kind at its spawn position
    ///
    /// Topping out is handled here, not surfaced: if the fresh piece
    /// already collides, the whole board is wiped and the score returns to
    /// zero, and play continues on the empty board.
    pub fn reset_active(&mut self) {
        let kind = self.rng.pick_kind();
        self.reset_active_as(kind);
    }

    /// Replace the active piece with a specific kind at its spawn position
    ///
    /// Kind selection is the caller's responsibility; the random path in
    /// [`reset_active`](Self::reset_active) delegates here.
    pub fn reset_active_as(&mut self, kind: PieceKind) {
        self.player = Player::spawn(kind);
        if self
            .board
            .collides(&self.player.shape, self.player.x, self.player.y)
        {
            self.board.clear();
            self.score = 0;
        }
    }

    /// Shift the active piece horizontally; an illegal shift is a no-op
    pub fn shift(&mut self, dx: i8) {
        self.player.x += dx;
        if self
            .board
            .collides(&self.player.shape, self.player.x, self.player.y)
        {
            self.player.x -= dx;
        }
    }

    /// Drop the active piece one row, locking it on contact
    ///
    /// On contact the piece is merged at its last legal position, the next
    /// piece spawns, and then full rows are swept and scored - in that
    /// order, so a merge that blocks the spawn wipes the board before the
    /// sweep runs. The gravity accumulator is zeroed on every call.
    pub fn drop_active(&mut self) {
        self.player.y += 1;
        if self
            .board
            .collides(&self.player.shape, self.player.x, self.player.y)
        {
            self.player.y -= 1;
            self.board
                .merge(&self.player.shape, self.player.x, self.player.y);
            self.reset_active();
            let swept = self.board.sweep();
            self.score += POINTS_PER_ROW * swept.len() as u32;
        }
        self.clock.reset_counter();
    }

    /// Rotate the active piece, kicking off walls and locked cells
    ///
    /// After the in-place rotation, an alternating and widening sequence of
    /// horizontal displacements is tried: -1, +2, -3, +4, ... When the next
    /// trial displacement exceeds the shape's matrix size the rotation is
    /// abandoned: the shape is rotated back and the original column
    /// restored, leaving the piece exactly as it was.
    pub fn rotate_active(&mut self, dir: RotationDir) {
        let original_x = self.player.x;
        let mut offset: i8 = -1;

        self.player.shape.rotate(dir);
        while self
            .board
            .collides(&self.player.shape, self.player.x, self.player.y)
        {
            self.player.x += offset;
            offset = -(offset + if offset > 0 { 1 } else { -1 });
            if offset > self.player.shape.size() as i8 {
                self.player.shape.rotate(dir.flipped());
                self.player.x = original_x;
                return;
            }
        }
    }

    /// Resume gravity
    pub fn start(&mut self) {
        self.clock.start();
    }

    /// Suspend gravity; commands still apply while paused
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    /// Feed the current timestamp from the external scheduler
    ///
    /// Returns whether the simulation ran (callers use this to gate
    /// redraws). While paused nothing happens and nothing is consumed; the
    /// scheduler is expected to keep calling regardless.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        if !self.clock.is_playing() {
            return false;
        }
        if self.clock.advance(now_ms) {
            self.drop_active();
        }
        true
    }

    /// Apply one discrete command
    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::MoveLeft => self.shift(-1),
            Command::MoveRight => self.shift(1),
            Command::SoftDrop => self.drop_active(),
            Command::RotateCw => self.rotate_active(RotationDir::Cw),
            Command::RotateCcw => self.rotate_active(RotationDir::Ccw),
            Command::Start => self.start(),
            Command::Pause => self.pause(),
        }
    }

    /// Write the renderable state into a caller-owned snapshot
    ///
    /// This is the allocation-free path; callers can reuse one snapshot
    /// across frames.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = ActiveSnapshot::from(&self.player);
        out.score = self.score;
        out.playing = self.clock.is_playing();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
