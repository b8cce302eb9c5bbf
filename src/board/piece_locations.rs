//! Contains a structure that holds every piece on the board and answers occupancy queries.
//!
//! `PieceLocations` is the only thing the legality rules get to see of a board. The `Board`
//! lends it out immutably, so a rule can ask "who stands on this square?" but can never
//! move anything.

use crate::core::piece::Piece;
use crate::core::sq::{NO_SQ, SQ};
use crate::core::{PieceType, Player};

use std::slice;

/// An ordered collection of pieces.
///
/// At most one piece may stand on any square of a `Board`. The collection does not enforce
/// this itself; every committing path of the `Board` keeps it true. Only the scratch copies
/// built with [`shift`] while testing a move may hold a shared square.
///
/// [`shift`]: #method.shift
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PieceLocations {
    pieces: Vec<Piece>,
}

impl PieceLocations {
    /// Constructs a new `PieceLocations` with no pieces on the board.
    pub fn blank() -> PieceLocations {
        PieceLocations { pieces: Vec::new() }
    }

    /// Constructs the standard starting position.
    ///
    /// Pieces are ordered White back rank a-h, White pawns, Black back rank, Black pawns.
    pub fn start_pos() -> PieceLocations {
        const BACK_RANK: [PieceType; 8] = [
            PieceType::R,
            PieceType::N,
            PieceType::B,
            PieceType::Q,
            PieceType::K,
            PieceType::B,
            PieceType::N,
            PieceType::R,
        ];

        let mut locs = PieceLocations::blank();
        for player in [Player::White, Player::Black].iter() {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let sq = SQ::new(file as i8, player.back_rank());
                locs.place(Piece::new(*player, *kind, sq));
            }
            for file in 0..8 {
                let sq = SQ::new(file, player.pawn_start_rank());
                locs.place(Piece::new(*player, PieceType::P, sq));
            }
        }
        locs
    }

    /// Adds a piece at the end of the collection.
    #[inline]
    pub fn place(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    /// Removes the piece standing on a square, returning it. Does nothing if the square is empty.
    pub fn remove_at(&mut self, sq: SQ) -> Option<Piece> {
        let idx = self.index_of(sq)?;
        Some(self.pieces.remove(idx))
    }

    /// Moves whichever piece stands on `src` to `dst`, capturing anything already on `dst`.
    ///
    /// Returns the captured piece, if any. Does nothing if `src` is empty.
    pub fn relocate(&mut self, src: SQ, dst: SQ) -> Option<Piece> {
        if src == dst || self.index_of(src).is_none() {
            return None;
        }
        let captured = self.remove_at(dst);
        if let Some(idx) = self.index_of(src) {
            self.pieces[idx].sq = dst;
        }
        captured
    }

    /// Moves whichever piece stands on `src` to `dst` without capturing anything.
    ///
    /// A piece already on `dst` stays where it is, so the square ends up shared. The arriving
    /// piece is placed ahead of it, making it the one `piece_at(dst)` returns. Only speculative
    /// placements are built this way. Does nothing if `src` is empty.
    pub fn shift(&mut self, src: SQ, dst: SQ) {
        if src == dst {
            return;
        }
        let idx = match self.index_of(src) {
            Some(idx) => idx,
            None => return,
        };
        let mut mover = self.pieces.remove(idx);
        mover.sq = dst;
        match self.index_of(dst) {
            Some(resident) => self.pieces.insert(resident, mover),
            None => self.pieces.insert(idx, mover),
        }
    }

    /// Removes every piece.
    #[inline]
    pub fn clear(&mut self) {
        self.pieces.clear();
    }

    /// Returns the piece at a `SQ`, or None if the square is empty or off the board.
    #[inline]
    pub fn piece_at(&self, sq: SQ) -> Option<&Piece> {
        if !sq.is_okay() {
            return None;
        }
        self.pieces.iter().find(|p| p.sq == sq)
    }

    /// Returns the `Player` (if any) occupying a `SQ`.
    #[inline]
    pub fn player_at(&self, sq: SQ) -> Option<Player> {
        self.piece_at(sq).map(|p| p.player)
    }

    /// Returns if a square is empty.
    #[inline]
    pub fn is_empty_at(&self, sq: SQ) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns the square of the given player's king, or `NO_SQ` if that king isn't on the board.
    pub fn king_sq(&self, player: Player) -> SQ {
        self.pieces
            .iter()
            .find(|p| p.player == player && p.kind == PieceType::K)
            .map_or(NO_SQ, |p| p.sq)
    }

    /// Iterates over every piece in collection order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<Piece> {
        self.pieces.iter()
    }

    /// Iterates over the pieces of a single player.
    pub fn iter_player(&self, player: Player) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.player == player)
    }

    /// Number of pieces on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if there are no pieces at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    fn index_of(&self, sq: SQ) -> Option<usize> {
        if !sq.is_okay() {
            return None;
        }
        self.pieces.iter().position(|p| p.sq == sq)
    }
}

impl<'a> IntoIterator for &'a PieceLocations {
    type Item = &'a Piece;
    type IntoIter = slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}
