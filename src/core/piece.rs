//! Contains [`Piece`], a chessman standing on the board, and [`PieceView`], the read-only
//! description of an occupied square handed to renderers.
//!
//! A `Piece` is a plain value: cloning one yields an independent copy with the same owner,
//! type and square. The only field that changes during a game is the square.
//!
//! [`Piece`]: struct.Piece.html
//! [`PieceView`]: struct.PieceView.html

use super::sq::SQ;
use super::{PieceType, Player};

use std::fmt;

/// A piece of a given type, owned by a player, standing on a square.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    /// Owner of the piece.
    pub player: Player,
    /// What kind of piece this is.
    pub kind: PieceType,
    /// Where the piece currently stands.
    pub sq: SQ,
}

impl Piece {
    /// Creates a new piece.
    #[inline]
    pub fn new(player: Player, kind: PieceType, sq: SQ) -> Piece {
        Piece { player, kind, sq }
    }

    /// Returns the display glyph of this piece: uppercase for White, lowercase for Black.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shahmata::core::piece::Piece;
    /// use shahmata::{PieceType, Player, SQ};
    ///
    /// assert_eq!(Piece::new(Player::White, PieceType::N, SQ::B1).glyph(), 'N');
    /// assert_eq!(Piece::new(Player::Black, PieceType::Q, SQ::D8).glyph(), 'q');
    /// ```
    #[inline]
    pub fn glyph(&self) -> char {
        match self.player {
            Player::White => self.kind.char_upper(),
            Player::Black => self.kind.char_lower(),
        }
    }

    /// Builds a piece from its glyph. The letter decides the type (case-insensitively) and
    /// the case decides the owner. Returns `None` for unrecognized letters.
    pub fn from_glyph(glyph: char, sq: SQ) -> Option<Piece> {
        let kind = PieceType::from_char(glyph)?;
        let player = if glyph.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Some(Piece::new(player, kind, sq))
    }

    /// Returns the read-only view of this piece.
    #[inline]
    pub fn view(&self) -> PieceView {
        PieceView {
            glyph: self.glyph(),
            player: self.player,
            kind: self.kind,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} on {}", self.player, self.kind, self.sq)
    }
}

/// What a caller gets back when asking about an occupied square.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PieceView {
    pub glyph: char,
    pub player: Player,
    pub kind: PieceType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALL_PIECE_TYPES;

    #[test]
    fn glyph_encodes_player_and_type() {
        for kind in ALL_PIECE_TYPES.iter() {
            let white = Piece::new(Player::White, *kind, SQ::A1);
            let black = Piece::new(Player::Black, *kind, SQ::A1);
            assert!(white.glyph().is_ascii_uppercase());
            assert!(black.glyph().is_ascii_lowercase());
            assert_eq!(Piece::from_glyph(white.glyph(), SQ::A1), Some(white));
            assert_eq!(Piece::from_glyph(black.glyph(), SQ::A1), Some(black));
        }
    }

    #[test]
    fn unknown_glyph() {
        assert_eq!(Piece::from_glyph('x', SQ::A1), None);
        assert_eq!(Piece::from_glyph('1', SQ::A1), None);
    }

    #[test]
    fn clone_is_independent() {
        let original = Piece::new(Player::White, PieceType::R, SQ::A1);
        let mut copy = original;
        copy.sq = SQ::A4;
        assert_eq!(original.sq, SQ::A1);
        assert_eq!(copy.kind, original.kind);
        assert_eq!(copy.player, original.player);
    }

    #[test]
    fn view() {
        let piece = Piece::new(Player::Black, PieceType::K, SQ::E8);
        let view = piece.view();
        assert_eq!(view.glyph, 'k');
        assert_eq!(view.player, Player::Black);
        assert_eq!(view.kind, PieceType::K);
    }
}
