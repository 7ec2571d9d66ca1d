//! Terminal gameplay runner (default binary).
//!
//! Owns the real clock: feeds monotonic millisecond timestamps into the
//! engine at a fixed frame cadence and forwards key presses as commands.
//! Redraws happen when the simulation ran, so a paused game holds its last
//! frame even while inputs keep mutating state.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{Game, GameSnapshot};
use gridfall::input::{handle_key_event, should_quit};
use gridfall::term::TermScreen;
use gridfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut screen = TermScreen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TermScreen) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut game = Game::new(seed);
    let mut snap = GameSnapshot::default();

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    game.snapshot_into(&mut snap);
    screen.draw(&snap)?;

    loop {
        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        game.apply(cmd);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if game.advance(started.elapsed().as_millis() as u64) {
                game.snapshot_into(&mut snap);
                screen.draw(&snap)?;
            }
        }
    }
}
