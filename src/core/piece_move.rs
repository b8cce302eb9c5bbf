//! Module for the definition of a move to be played, and of what a played move did.
//!
//! A [`PieceMove`] is only an origin and a destination square. It carries no information
//! about legality; a `Board` decides that when the move is tried.
//!
//! [`MoveStatus`] is the set of flags a `Board` reports back for a committed move:
//!
//! ```md,ignore
//! 0001  ===> Capture
//! 0010  ===> Gives check
//! 0100  ===> Gives checkmate (the game is over)
//! ```
//!
//! [`PieceMove`]: struct.PieceMove.html
//! [`MoveStatus`]: struct.MoveStatus.html

use super::sq::SQ;

use std::fmt;

bitflags! {
    /// Flags describing the consequences of a committed move.
    ///
    /// An empty set means a quiet move that left the opponent out of check.
    pub struct MoveStatus: u8 {
        const CAPTURE   = 0b0001; // An opposing piece was removed
        const CHECK     = 0b0010; // The opponent's king is attacked
        const CHECKMATE = 0b0100; // The opponent is mated, game over
    }
}

impl MoveStatus {
    /// Returns if the move removed an opposing piece.
    #[inline]
    pub fn is_capture(self) -> bool {
        self.contains(MoveStatus::CAPTURE)
    }

    /// Returns if the move left the opponent in check. Also true for checkmate.
    #[inline]
    pub fn gives_check(self) -> bool {
        self.contains(MoveStatus::CHECK)
    }

    /// Returns if the move ended the game.
    #[inline]
    pub fn is_checkmate(self) -> bool {
        self.contains(MoveStatus::CHECKMATE)
    }
}

/// Represents a singular move, from one square to another.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct PieceMove {
    /// Origin square.
    pub src: SQ,
    /// Destination square.
    pub dst: SQ,
}

impl PieceMove {
    /// Creates a new move.
    #[inline(always)]
    pub const fn new(src: SQ, dst: SQ) -> PieceMove {
        PieceMove { src, dst }
    }

    /// Returns the source square.
    #[inline(always)]
    pub fn get_src(self) -> SQ {
        self.src
    }

    /// Returns the destination square.
    #[inline(always)]
    pub fn get_dest(self) -> SQ {
        self.dst
    }

    /// Returns the move in long algebraic notation, e.g. "e2e4".
    pub fn stringify(self) -> String {
        format!("{}{}", self.src, self.dst)
    }
}

impl fmt::Display for PieceMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.src, self.dst)
    }
}

impl From<(SQ, SQ)> for PieceMove {
    fn from(value: (SQ, SQ)) -> Self {
        PieceMove::new(value.0, value.1)
    }
}
