//! TermScreen: flushes the game snapshot to a real terminal.
//!
//! Commands are queued into an internal byte buffer and written out in one
//! flush per frame, the usual crossterm pattern for tear-free drawing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Print, ResetColor, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::palette::cell_color;
use gridfall_core::GameSnapshot;
use gridfall_types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal columns per board cell (2x1 compensates for glyph aspect ratio)
const CELL_W: u16 = 2;

pub struct TermScreen {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TermScreen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame: bordered board with the active piece overlaid,
    /// score line, and a pause marker when the clock is stopped.
    pub fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        let grid = snap.composited();
        let inner_w = (BOARD_WIDTH as u16) * CELL_W;

        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;

        // Top border.
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(Print('+'))?;
        for _ in 0..inner_w {
            self.buf.queue(Print('-'))?;
        }
        self.buf.queue(Print('+'))?;

        // Board rows.
        for (y, row) in grid.iter().enumerate() {
            self.buf.queue(cursor::MoveTo(0, y as u16 + 1))?;
            self.buf.queue(Print('|'))?;
            for &cell in row.iter() {
                match cell_color(cell) {
                    Some(color) => {
                        self.buf.queue(SetBackgroundColor(color))?;
                        self.buf.queue(Print("  "))?;
                        self.buf.queue(ResetColor)?;
                    }
                    None => {
                        self.buf.queue(Print("  "))?;
                    }
                }
            }
            self.buf.queue(Print('|'))?;
        }

        // Bottom border.
        self.buf.queue(cursor::MoveTo(0, BOARD_HEIGHT as u16 + 1))?;
        self.buf.queue(Print('+'))?;
        for _ in 0..inner_w {
            self.buf.queue(Print('-'))?;
        }
        self.buf.queue(Print('+'))?;

        // Status line.
        self.buf.queue(cursor::MoveTo(0, BOARD_HEIGHT as u16 + 2))?;
        self.buf.queue(Print(format!("Score: {}", snap.score)))?;
        if !snap.playing {
            self.buf.queue(Print("  [paused]"))?;
        }

        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TermScreen {
    fn default() -> Self {
        Self::new()
    }
}
