#![allow(dead_code)]

use shahmata::board::snapshot::{Snapshot, SnapshotEntry};
use shahmata::{Board, Player, SQ};

use std::sync::Once;

static INIT: Once = Once::new();

/// Routes the crate's tracing events to the test output. Filter with `RUST_LOG`.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds a board holding exactly the given pieces.
pub fn board_of(turn: Player, pieces: &[(char, SQ)]) -> Board {
    let entries: Vec<SnapshotEntry> = pieces
        .iter()
        .map(|&(glyph, sq)| SnapshotEntry::new(glyph, sq.file, sq.rank))
        .collect();
    Board::from_snapshot(&Snapshot { turn, entries })
}

/// Plays a sequence of moves, panicking on the first one refused.
pub fn play(board: &mut Board, moves: &[(SQ, SQ)]) {
    for &(src, dst) in moves.iter() {
        if let Err(e) = board.try_move(src, dst) {
            panic!("{}{} refused: {}", src, dst, e);
        }
    }
}
