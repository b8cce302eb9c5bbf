//! Contains various components and structures supporting the creation of a chessboard. This
//! includes `SQ`, `Player`, `PieceType`, `Piece`, `PieceMove` and `MoveList`.

#[macro_use]
mod macros;

pub mod move_list;
pub mod piece;
pub mod piece_move;
pub mod sq;

use std::fmt;
use std::ops::Not;

/// Array of all possible piece types, indexed by their enum value.
pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::P,
    PieceType::N,
    PieceType::B,
    PieceType::R,
    PieceType::Q,
    PieceType::K,
];

/// Array of both players, indexed by their enum value.
pub const ALL_PLAYERS: [Player; 2] = [Player::White, Player::Black];

/// Enum to represent the Players White & Black.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Returns the other player.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shahmata::core::Player;
    ///
    /// let b = Player::Black;
    /// assert_eq!(b.other_player(), Player::White);
    /// ```
    #[inline(always)]
    pub fn other_player(self) -> Player {
        !(self)
    }

    /// Gets the rank direction of a pawn push for a given player.
    #[inline(always)]
    pub fn pawn_push(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// The rank a player's pawns start on, and the only rank they may double-push from.
    #[inline(always)]
    pub fn pawn_start_rank(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// The rank a player's major pieces start on.
    #[inline(always)]
    pub fn back_rank(self) -> i8 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }

    /// Lowercase name of the player, as written in snapshots.
    pub fn name_lower(self) -> &'static str {
        match self {
            Player::White => "white",
            Player::Black => "black",
        }
    }
}

impl Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            if self == &Player::White {
                "White"
            } else {
                "Black"
            }
        )
    }
}

/// All possible Types of Pieces on a chessboard.
///
/// For a piece standing on the board, carrying its owner and square, see [`Piece`].
///
/// [`Piece`]: piece/struct.Piece.html
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum PieceType {
    P,
    N,
    B,
    R,
    Q,
    K,
}

impl PieceType {
    /// Returns true for the pieces whose moves must travel over empty squares.
    #[inline]
    pub fn is_slider(self) -> bool {
        matches!(self, PieceType::B | PieceType::R | PieceType::Q)
    }

    /// Return the lowercase character of a `PieceType`.
    #[inline]
    pub fn char_lower(self) -> char {
        match self {
            PieceType::P => 'p',
            PieceType::N => 'n',
            PieceType::B => 'b',
            PieceType::R => 'r',
            PieceType::Q => 'q',
            PieceType::K => 'k',
        }
    }

    /// Return the uppercase character of a `PieceType`.
    #[inline]
    pub fn char_upper(self) -> char {
        self.char_lower().to_ascii_uppercase()
    }

    /// Parses a piece letter, ignoring case. Returns `None` for anything but `PRNBQK`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shahmata::core::PieceType;
    ///
    /// assert_eq!(PieceType::from_char('n'), Some(PieceType::N));
    /// assert_eq!(PieceType::from_char('Q'), Some(PieceType::Q));
    /// assert_eq!(PieceType::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::P),
            'n' => Some(PieceType::N),
            'b' => Some(PieceType::B),
            'r' => Some(PieceType::R),
            'q' => Some(PieceType::Q),
            'k' => Some(PieceType::K),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            PieceType::P => "Pawn",
            PieceType::N => "Knight",
            PieceType::B => "Bishop",
            PieceType::R => "Rook",
            PieceType::Q => "Queen",
            PieceType::K => "King",
        };
        f.pad(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_flip() {
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::Black.other_player(), Player::White);
        for player in ALL_PLAYERS.iter() {
            assert_eq!(!!*player, *player);
        }
    }

    #[test]
    fn pawn_directions() {
        assert_eq!(Player::White.pawn_push(), 1);
        assert_eq!(Player::Black.pawn_push(), -1);
        assert_eq!(Player::White.pawn_start_rank(), 1);
        assert_eq!(Player::Black.pawn_start_rank(), 6);
    }

    #[test]
    fn piece_chars() {
        for kind in ALL_PIECE_TYPES.iter() {
            assert_eq!(PieceType::from_char(kind.char_upper()), Some(*kind));
            assert_eq!(PieceType::from_char(kind.char_lower()), Some(*kind));
        }
        assert_eq!(PieceType::from_char('z'), None);
        assert_eq!(format!("{}", PieceType::N), "Knight");
    }
}
