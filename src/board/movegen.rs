//! Per-piece move legality.
//!
//! [`is_legal_destination`] answers whether a piece could move to a square given the current
//! occupancy. It checks geometry, path clearance for sliding pieces, and that the destination
//! is empty or holds an opposing piece. It does NOT check whether the move would leave the
//! mover's own king attacked; that is the `Board`'s job, as it needs to look past a single
//! piece.
//!
//! | Piece  | Geometry                                         | Path must be clear |
//! |--------|--------------------------------------------------|--------------------|
//! | Pawn   | one forward onto empty, two from start rank, one diagonal capture | n/a |
//! | Knight | `(±1,±2)` or `(±2,±1)`                           | no                 |
//! | Bishop | `|Δfile| == |Δrank|`                             | yes                |
//! | Rook   | same file or same rank                           | yes                |
//! | Queen  | Rook or Bishop                                   | yes                |
//! | King   | any of the 8 neighbours                          | no                 |
//!
//! No castling, no en-passant, no promotion.
//!
//! [`is_legal_destination`]: fn.is_legal_destination.html

use super::piece_locations::PieceLocations;

use crate::core::piece::Piece;
use crate::core::sq::SQ;
use crate::core::PieceType;

/// Returns if `piece` may move to `dst` under its own movement rules.
///
/// A piece never moves to, or attacks, the square it stands on.
///
/// # Examples
///
/// ```rust
/// use shahmata::board::movegen::is_legal_destination;
/// use shahmata::board::piece_locations::PieceLocations;
/// use shahmata::SQ;
///
/// let locs = PieceLocations::start_pos();
/// let knight = *locs.piece_at(SQ::G1).unwrap();
///
/// assert!(is_legal_destination(&knight, SQ::F3, &locs));
/// assert!(!is_legal_destination(&knight, SQ::E2, &locs)); // own pawn
/// ```
pub fn is_legal_destination(piece: &Piece, dst: SQ, locs: &PieceLocations) -> bool {
    if !dst.is_okay() || !piece.sq.is_okay() || dst == piece.sq {
        return false;
    }
    match piece.kind {
        PieceType::P => pawn_move(piece, dst, locs),
        PieceType::N => knight_move(piece, dst) && enterable(piece, dst, locs),
        PieceType::B => {
            diagonal(piece.sq, dst) && path_clear(piece.sq, dst, locs) && enterable(piece, dst, locs)
        }
        PieceType::R => {
            straight(piece.sq, dst) && path_clear(piece.sq, dst, locs) && enterable(piece, dst, locs)
        }
        PieceType::Q => {
            (straight(piece.sq, dst) || diagonal(piece.sq, dst))
                && path_clear(piece.sq, dst, locs)
                && enterable(piece, dst, locs)
        }
        PieceType::K => king_move(piece.sq, dst) && enterable(piece, dst, locs),
    }
}

/// Returns if every square strictly between `src` and `dst` is empty.
///
/// Walks `max(|Δfile|, |Δrank|) - 1` squares from `src` toward `dst`, stepping by the sign of
/// each delta. Only meaningful for squares sharing a file, rank or diagonal. False if either
/// square is off the board.
pub fn path_clear(src: SQ, dst: SQ, locs: &PieceLocations) -> bool {
    if !src.is_okay() || !dst.is_okay() {
        return false;
    }
    let d_file = dst.file - src.file;
    let d_rank = dst.rank - src.rank;
    let steps = d_file.abs().max(d_rank.abs());
    let (step_file, step_rank) = (d_file.signum(), d_rank.signum());

    (1..steps).all(|i| locs.is_empty_at(src.offset(i * step_file, i * step_rank)))
}

/// Every on-board square this piece could move to, ignoring self-check.
pub fn pseudo_legal_destinations<'a>(
    piece: &'a Piece,
    locs: &'a PieceLocations,
) -> impl Iterator<Item = SQ> + 'a {
    SQ::all().filter(move |dst| is_legal_destination(piece, *dst, locs))
}

// The destination is empty or held by the other player.
#[inline]
fn enterable(piece: &Piece, dst: SQ, locs: &PieceLocations) -> bool {
    match locs.player_at(dst) {
        Some(player) => player != piece.player,
        None => true,
    }
}

fn pawn_move(pawn: &Piece, dst: SQ, locs: &PieceLocations) -> bool {
    let src = pawn.sq;
    let dir = pawn.player.pawn_push();

    if dst.file == src.file {
        if dst.rank == src.rank + dir {
            return locs.is_empty_at(dst);
        }
        return src.rank == pawn.player.pawn_start_rank()
            && dst.rank == src.rank + 2 * dir
            && locs.is_empty_at(dst)
            && locs.is_empty_at(src.offset(0, dir));
    }

    (dst.file - src.file).abs() == 1
        && dst.rank == src.rank + dir
        && locs.player_at(dst) == Some(pawn.player.other_player())
}

#[inline]
fn knight_move(knight: &Piece, dst: SQ) -> bool {
    let dx = (dst.file - knight.sq.file).abs();
    let dy = (dst.rank - knight.sq.rank).abs();
    (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
}

#[inline]
fn king_move(src: SQ, dst: SQ) -> bool {
    src != dst && src.distance(dst) <= 1
}

#[inline]
fn straight(src: SQ, dst: SQ) -> bool {
    src.file == dst.file || src.rank == dst.rank
}

#[inline]
fn diagonal(src: SQ, dst: SQ) -> bool {
    (dst.file - src.file).abs() == (dst.rank - src.rank).abs()
}
