//! Contains the representation of a chessboard's square.
//!
//! A `SQ` is a zero-based `(file, rank)` pair. Files `0..8` map to `a..h`, ranks `0..8`
//! map to `1..8`:
//!
//! ```md,ignore
//! 8 | (0,7) (1,7) (2,7) (3,7) (4,7) (5,7) (6,7) (7,7)
//! 7 | (0,6) (1,6) ...
//!   ...
//! 2 | (0,1) (1,1) ...
//! 1 | (0,0) (1,0) (2,0) (3,0) (4,0) (5,0) (6,0) (7,0)
//!   -------------------------------------------------
//!       a     b     c     d     e     f     g     h
//! ```
//!
//! # Examples
//!
//! ```rust
//! use shahmata::core::sq::*;
//! let h1 = SQ::H1;
//! let h2 = SQ::H2;
//!
//! let g2 = SQ::new(6, 1);
//!
//! assert_eq!(h1.distance(h2), 1);
//! assert_eq!(h1.file(), h2.file());
//! assert_eq!(g2.rank(), h2.rank());
//! ```
//!
//! # Use of `NO_SQ`
//!
//! `NO_SQ` is used to signify the lack of a legal square, e.g. the location of a king that
//! isn't on the board. Any square outside of the `0..8` bounds compares unequal to every
//! real square, so callers must check `SQ::is_okay()` before relying on it.
//!
//! ```rust
//! use shahmata::core::sq::*;
//! let no_sq: SQ = NO_SQ;
//! let off_board = SQ::new(8, 0);
//!
//! assert!(!no_sq.is_okay());
//! assert!(!off_board.is_okay());
//! ```

use std::fmt;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: i8 = 8;

/// Represents a singular square of a chessboard.
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug)]
pub struct SQ {
    /// File index, `0` is the a-file.
    pub file: i8,
    /// Rank index, `0` is the first rank.
    pub rank: i8,
}

/// `SQ` representing no square available.
pub const NO_SQ: SQ = SQ { file: -1, rank: -1 };

impl Default for SQ {
    fn default() -> Self {
        NO_SQ
    }
}

impl SQ {
    /// A square that isn't on the board. Basically equivalent to `Option<SQ>` where the value is
    /// `None`.
    pub const NONE: SQ = NO_SQ;

    /// Creates a square from a file and rank index. The result is not checked for validity.
    #[inline(always)]
    pub const fn new(file: i8, rank: i8) -> SQ {
        SQ { file, rank }
    }

    /// Returns if a `SQ` is within the legal bounds of the board, i.e. both the file
    /// and rank lie inclusively between 0 - 7.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shahmata::SQ;
    ///
    /// assert!(SQ::new(7, 7).is_okay());
    /// assert!(!SQ::new(-1, 3).is_okay());
    /// ```
    #[inline(always)]
    pub const fn is_okay(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Returns the file index of a `SQ`.
    #[inline(always)]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Returns the rank index of a `SQ`.
    #[inline(always)]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Returns the square displaced by `(d_file, d_rank)`. May leave the board; coordinates
    /// wrap rather than overflow.
    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> SQ {
        SQ::new(self.file.wrapping_add(d_file), self.rank.wrapping_add(d_rank))
    }

    /// Returns distance between this square and another square. Distance is
    /// not in algebraic difference, but in king steps away.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shahmata::SQ;
    ///
    /// assert_eq!(SQ::A1.distance(SQ::A1), 0);
    /// assert_eq!(SQ::A1.distance(SQ::B2), 1);
    /// assert_eq!(SQ::A1.distance(SQ::B3), 2);
    /// ```
    #[inline]
    pub fn distance(self, sq_other: SQ) -> u8 {
        let x = (i16::from(self.file) - i16::from(sq_other.file)).unsigned_abs();
        let y = (i16::from(self.rank) - i16::from(sq_other.rank)).unsigned_abs();
        x.max(y).min(u16::from(u8::MAX)) as u8
    }

    /// Iterates over all 64 squares, rank by rank starting from a1.
    pub fn all() -> impl Iterator<Item = SQ> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| SQ::new(file, rank)))
    }
}

impl fmt::Display for SQ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_okay() {
            write!(f, "{}{}", (b'a' + self.file as u8) as char, self.rank + 1)
        } else {
            f.write_str("-")
        }
    }
}

impl From<(i8, i8)> for SQ {
    fn from(value: (i8, i8)) -> Self {
        SQ::new(value.0, value.1)
    }
}

impl_sq_consts! {
    A1 => (0, 0), B1 => (1, 0), C1 => (2, 0), D1 => (3, 0),
    E1 => (4, 0), F1 => (5, 0), G1 => (6, 0), H1 => (7, 0),
    A2 => (0, 1), B2 => (1, 1), C2 => (2, 1), D2 => (3, 1),
    E2 => (4, 1), F2 => (5, 1), G2 => (6, 1), H2 => (7, 1),
    A3 => (0, 2), B3 => (1, 2), C3 => (2, 2), D3 => (3, 2),
    E3 => (4, 2), F3 => (5, 2), G3 => (6, 2), H3 => (7, 2),
    A4 => (0, 3), B4 => (1, 3), C4 => (2, 3), D4 => (3, 3),
    E4 => (4, 3), F4 => (5, 3), G4 => (6, 3), H4 => (7, 3),
    A5 => (0, 4), B5 => (1, 4), C5 => (2, 4), D5 => (3, 4),
    E5 => (4, 4), F5 => (5, 4), G5 => (6, 4), H5 => (7, 4),
    A6 => (0, 5), B6 => (1, 5), C6 => (2, 5), D6 => (3, 5),
    E6 => (4, 5), F6 => (5, 5), G6 => (6, 5), H6 => (7, 5),
    A7 => (0, 6), B7 => (1, 6), C7 => (2, 6), D7 => (3, 6),
    E7 => (4, 6), F7 => (5, 6), G7 => (6, 6), H7 => (7, 6),
    A8 => (0, 7), B8 => (1, 7), C8 => (2, 7), D8 => (3, 7),
    E8 => (4, 7), F8 => (5, 7), G8 => (6, 7), H8 => (7, 7),
}
