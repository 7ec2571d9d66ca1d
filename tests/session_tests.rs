//! End-to-end session behavior through the public API.

use gridfall::core::Game;
use gridfall::types::{Command, PieceKind, ALL_KINDS, DROP_INTERVAL_MS};

#[test]
fn every_kind_spawns_centered_at_the_top() {
    let mut game = Game::new(42);
    for kind in ALL_KINDS {
        game.reset_active_as(kind);
        let player = game.player();
        assert_eq!(player.kind, kind);
        assert_eq!(player.y, 0);
        assert_eq!(player.x, player.shape.spawn_x());
    }
}

#[test]
fn t_spawn_position_is_five_zero() {
    let mut game = Game::new(42);
    game.reset_active_as(PieceKind::T);
    assert_eq!((game.player().x, game.player().y), (5, 0));
}

#[test]
fn soft_drops_descend_then_lock_exactly_once() {
    let mut game = Game::new(42);
    game.reset_active_as(PieceKind::O);

    // Clear space below: every drop moves exactly one row and merges
    // nothing.
    let mut y = game.player().y;
    loop {
        game.apply(Command::SoftDrop);
        let now = game.player().y;
        if now == y + 1 {
            assert!(game.board().cells().iter().all(|&c| c == 0));
            y = now;
            continue;
        }
        // The lock: one merge (four cells), one respawn at the top.
        assert_eq!(now, 0);
        let locked = game.board().cells().iter().filter(|&&c| c != 0).count();
        assert_eq!(locked, 4);
        assert_eq!(game.drop_counter(), 0);
        break;
    }
    assert_eq!(y, 18, "an O rests with its top half on row 18");
}

#[test]
fn gravity_drops_once_per_interval() {
    let mut game = Game::new(42);
    let y0 = game.player().y;

    // Feed timestamps at a 100ms cadence.
    let mut now = 0;
    while game.player().y == y0 {
        now += 100;
        assert!(game.advance(now));
        assert!(now <= DROP_INTERVAL_MS + 100, "gravity never fired");
    }
    assert_eq!(game.player().y, y0 + 1);
    assert_eq!(game.drop_counter(), 0);
}

#[test]
fn pause_suspends_gravity_but_not_commands() {
    let mut game = Game::new(42);
    game.apply(Command::Pause);
    assert!(!game.is_playing());

    assert!(!game.advance(60_000));
    assert_eq!(game.player().y, 0);

    let x0 = game.player().x;
    game.apply(Command::MoveLeft);
    assert_eq!(game.player().x, x0 - 1);

    game.apply(Command::Start);
    assert!(game.is_playing());
}

#[test]
fn wall_blocked_moves_are_net_noops() {
    let mut game = Game::new(42);
    game.reset_active_as(PieceKind::O);

    for _ in 0..32 {
        game.apply(Command::MoveLeft);
    }
    let at_wall = game.player().x;
    game.apply(Command::MoveLeft);
    assert_eq!(game.player().x, at_wall);
}

#[test]
fn long_session_never_breaks_the_piece_invariants() {
    let mut game = Game::new(7);

    // Thousands of locks, several top-outs: the active piece must always
    // rest collision-free inside the horizontal bounds.
    for i in 0..5_000 {
        match i % 7 {
            0 => game.apply(Command::MoveLeft),
            1 => game.apply(Command::RotateCw),
            2 => game.apply(Command::MoveRight),
            3 => game.apply(Command::RotateCcw),
            _ => game.apply(Command::SoftDrop),
        }

        let player = game.player();
        let n = player.shape.size() as i8;
        assert!(player.x > -n && player.x < 12 + n);
        assert!(player.y >= 0 && player.y < 20 + n);
        assert!(!game.board().collides(&player.shape, player.x, player.y));
    }

    // Score only ever grows in steps of 10 and resets on top-out, so it
    // stays a multiple of 10 throughout.
    assert_eq!(game.score() % 10, 0);
}
