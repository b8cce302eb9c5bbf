//! This module contains [`Board`], the object representing the current state of a chessboard.
//! All modifications to the current state of the board is done through this object, as well as
//! gathering information about the current state of the board.
//!
//! This module also contains structures used by the board: [`PieceLocations`], the occupancy
//! view handed to the movement rules, the movement rules themselves in [`movegen`], and the
//! [`Snapshot`] used to save and restore a game.
//!
//! [`Board`]: struct.Board.html
//! [`PieceLocations`]: piece_locations/struct.PieceLocations.html
//! [`movegen`]: movegen/index.html
//! [`Snapshot`]: snapshot/struct.Snapshot.html

pub mod movegen;
pub mod piece_locations;
pub mod snapshot;

use self::movegen::{is_legal_destination, pseudo_legal_destinations};
use self::piece_locations::PieceLocations;
use self::snapshot::{Snapshot, SnapshotEntry};

use crate::core::move_list::MoveList;
use crate::core::piece::{Piece, PieceView};
use crate::core::piece_move::{MoveStatus, PieceMove};
use crate::core::sq::SQ;
use crate::core::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use std::collections::HashSet;
use std::slice;

/// The 8 king steps around a square.
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reasons a move is refused. A refused move never changes the `Board`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("the game is over")]
    GameOver,
    #[error("no piece on {sq}")]
    NoPiece { sq: SQ },
    #[error("the piece on {sq} belongs to {player}, who is not to move")]
    WrongPlayer { sq: SQ, player: Player },
    #[error("the piece on {src} cannot move to {dst}")]
    Geometry { src: SQ, dst: SQ },
    #[error("moving {src} to {dst} would leave the king in check")]
    SelfCheck { src: SQ, dst: SQ },
}

/// Represents inconsistencies found by [`Board::is_okay`].
///
/// [`Board::is_okay`]: struct.Board.html#method.is_okay
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("incorrect number of kings for {player}: {num}")]
    IncorrectKingNum { player: Player, num: usize },
    #[error("more than one piece on {sq}")]
    SharedSquare { sq: SQ },
}

/// How a player's king stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KingSafety {
    /// The king is on the board and no opposing piece can move onto its square.
    Safe,
    /// Some opposing piece can move onto the king's square.
    InCheck,
    /// The player has no king on the board. Treated as not being in check.
    NoKing,
}

/// Represents a Chessboard through a `Board`.
///
/// Board contains everything that needs to be known about the current state of the game: the
/// pieces, whose turn it is, and whether the game has ended by checkmate.
///
/// # Examples
///
/// ```
/// use shahmata::{Board, Player, SQ};
///
/// let mut chessboard = Board::start_pos();
///
/// assert!(chessboard.move_piece(SQ::E2, SQ::E4));
/// assert_eq!(chessboard.turn(), Player::Black);
///
/// assert!(!chessboard.move_piece(SQ::E4, SQ::E5)); // not White's turn
/// ```
///
/// # Rules
///
/// Moves follow the standard movement of each piece, see [`movegen`]. Castling, en-passant and
/// promotion do not exist. A move may never leave the mover's own king attacked, counting a
/// piece about to be captured as still attacking unless the king is the one taking it. After every
/// committed move the opponent is tested for checkmate, and the game ends if they are mated.
///
/// Checkmate only considers the mated king stepping to a neighbouring square. Capturing the
/// checking piece or blocking the check with another piece are not looked at, so some
/// positions are reported as mate even though a non-king move would escape. Stalemate is not
/// detected at all.
///
/// [`movegen`]: movegen/index.html
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    turn: Player,         // Current turn
    game_over: bool,      // Set once a checkmate is delivered, never unset by moves
    pieces: PieceLocations, // Every piece, at most one per square
}

impl Default for Board {
    fn default() -> Board {
        Board::start_pos()
    }
}

impl Board {
    /// Constructs a board from the starting position.
    ///
    /// # Examples
    ///
    /// ```
    /// use shahmata::{Board, Player};
    ///
    /// let chessboard = Board::start_pos();
    /// assert_eq!(chessboard.count_pieces_player(Player::White), 16);
    /// ```
    pub fn start_pos() -> Board {
        Board {
            turn: Player::White,
            game_over: false,
            pieces: PieceLocations::start_pos(),
        }
    }

    /// Constructs a board from a [`Snapshot`]. See [`Board::import_state`] for how entries
    /// are treated.
    ///
    /// [`Snapshot`]: snapshot/struct.Snapshot.html
    /// [`Board::import_state`]: #method.import_state
    pub fn from_snapshot(snapshot: &Snapshot) -> Board {
        let mut board = Board {
            turn: snapshot.turn,
            game_over: false,
            pieces: PieceLocations::blank(),
        };
        board.import_state(snapshot.turn, &snapshot.entries);
        board
    }

    /// Creates a `RandBoard` (Random Board Generator) for generation of `Board`s with random
    /// positions. See the `RandBoard` structure for more information.
    ///
    /// # Examples
    ///
    /// ```
    /// use shahmata::Board;
    ///
    /// let rand_board: Board = Board::random()
    ///     .pseudo_random(12455)
    ///     .min_moves(5)
    ///     .one();
    /// ```
    pub fn random() -> RandBoard {
        RandBoard::default()
    }

    /// Get the Player whose turn it is to move.
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns if a checkmate has ended the game.
    #[inline(always)]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns what stands on a square, if anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use shahmata::{Board, Player, SQ};
    ///
    /// let board = Board::start_pos();
    /// let view = board.piece_at_sq(SQ::D8).unwrap();
    /// assert_eq!(view.glyph, 'q');
    /// assert_eq!(view.player, Player::Black);
    /// assert!(board.piece_at_sq(SQ::D4).is_none());
    /// ```
    #[inline]
    pub fn piece_at_sq(&self, sq: SQ) -> Option<PieceView> {
        self.pieces.piece_at(sq).map(|p| p.view())
    }

    /// Returns the `Player` (if any) occupying a square.
    #[inline]
    pub fn player_at_sq(&self, sq: SQ) -> Option<Player> {
        self.pieces.player_at(sq)
    }

    /// Read-only access to the pieces, in board order.
    #[inline]
    pub fn piece_locations(&self) -> &PieceLocations {
        &self.pieces
    }

    /// Iterates over every piece on the board.
    #[inline]
    pub fn pieces(&self) -> slice::Iter<Piece> {
        self.pieces.iter()
    }

    /// Get the total number of pieces of a certain player and type.
    pub fn count_piece(&self, player: Player, kind: PieceType) -> usize {
        self.pieces
            .iter_player(player)
            .filter(|p| p.kind == kind)
            .count()
    }

    /// Get the total number of pieces a certain player has.
    pub fn count_pieces_player(&self, player: Player) -> usize {
        self.pieces.iter_player(player).count()
    }

    /// Get the total number of pieces on the board.
    #[inline]
    pub fn count_all_pieces(&self) -> usize {
        self.pieces.len()
    }

    /// Returns the square of the given player's king, or `NO_SQ` if there is no such king.
    #[inline]
    pub fn king_sq(&self, player: Player) -> SQ {
        self.pieces.king_sq(player)
    }

    /// Returns how the king of `player` stands: safe, in check, or missing.
    pub fn king_safety(&self, player: Player) -> KingSafety {
        king_safety_in(&self.pieces, player)
    }

    /// Returns if the king of `player` is attacked by any opposing piece.
    ///
    /// A player without a king is never in check.
    #[inline]
    pub fn in_check(&self, player: Player) -> bool {
        self.king_safety(player) == KingSafety::InCheck
    }

    /// Returns if `player` is checkmated.
    ///
    /// The player must be in check, and stepping the king to each neighbouring square that
    /// isn't held by one of its own pieces must leave it in check as well. Nothing but king
    /// steps is considered.
    ///
    /// A step onto an opposing piece is tested with that piece still on the board. It cannot
    /// attack the square it stands on, so the king escapes by capturing it unless another
    /// opposing piece covers the square.
    pub fn checkmate(&self, player: Player) -> bool {
        if self.king_safety(player) != KingSafety::InCheck {
            return false;
        }

        let king = self.king_sq(player);
        for &(d_file, d_rank) in KING_STEPS.iter() {
            let dst = king.offset(d_file, d_rank);
            if !dst.is_okay() || self.pieces.player_at(dst) == Some(player) {
                continue;
            }
            let scratch = self.simulate(king, dst);
            if king_safety_in(&scratch, player) != KingSafety::InCheck {
                return false;
            }
        }
        true
    }

    /// Tries to move the piece on `src` to `dst` for the side to move.
    ///
    /// Returns true if the move was committed. If false is returned, the board is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use shahmata::{Board, SQ};
    ///
    /// let mut board = Board::start_pos();
    /// assert!(board.move_piece(SQ::G1, SQ::F3));
    /// assert!(!board.move_piece(SQ::B8, SQ::B6));
    /// ```
    #[inline]
    pub fn move_piece(&mut self, src: SQ, dst: SQ) -> bool {
        self.try_move(src, dst).is_ok()
    }

    /// Tries to move the piece on `src` to `dst` for the side to move, reporting why the move
    /// was refused or what it did.
    ///
    /// The self-check test is made before the capture: a piece about to be taken still attacks
    /// the mover's king, unless the king itself is the one taking it. A check can therefore
    /// only be answered by moving the king or by blocking the line.
    ///
    /// On success, any opposing piece on `dst` is removed, the opponent is tested for
    /// checkmate (which ends the game) and check, and the turn passes to the opponent.
    ///
    /// # Examples
    ///
    /// ```
    /// use shahmata::{Board, IllegalMove, SQ};
    ///
    /// let mut board = Board::start_pos();
    /// assert_eq!(board.try_move(SQ::E2, SQ::E5), Err(IllegalMove::Geometry { src: SQ::E2, dst: SQ::E5 }));
    ///
    /// let status = board.try_move(SQ::E2, SQ::E4).unwrap();
    /// assert!(!status.is_capture());
    /// ```
    pub fn try_move(&mut self, src: SQ, dst: SQ) -> Result<MoveStatus, IllegalMove> {
        if let Err(reason) = self.check_move(src, dst) {
            debug!(%src, %dst, %reason, "move rejected");
            return Err(reason);
        }

        let mover = self.turn;
        let opponent = mover.other_player();
        let mut status = MoveStatus::empty();

        if let Some(captured) = self.pieces.relocate(src, dst) {
            status |= MoveStatus::CAPTURE;
            debug!(%src, %dst, captured = %captured.kind, "capture");
        }

        if self.checkmate(opponent) {
            self.game_over = true;
            status |= MoveStatus::CHECK | MoveStatus::CHECKMATE;
            info!(winner = %mover, "checkmate");
        } else if self.in_check(opponent) {
            status |= MoveStatus::CHECK;
            info!(player = %opponent, "check");
        }

        self.turn = opponent;
        debug!(%src, %dst, player = %mover, "move committed");
        Ok(status)
    }

    /// Returns if moving `mv.src` to `mv.dst` would be accepted right now. Never changes the board.
    pub fn legal_move(&self, mv: PieceMove) -> bool {
        self.check_move(mv.src, mv.dst).is_ok()
    }

    /// Get a List of every move the side to move could play.
    ///
    /// Each listed move would be committed by [`Board::try_move`]. The list is empty once the
    /// game is over.
    ///
    /// # Examples
    ///
    /// ```
    /// use shahmata::Board;
    ///
    /// let chessboard = Board::start_pos();
    /// let moves = chessboard.generate_moves();
    ///
    /// assert_eq!(moves.len(), 20);
    /// ```
    ///
    /// [`Board::try_move`]: #method.try_move
    pub fn generate_moves(&self) -> MoveList {
        let mut list = MoveList::default();
        if self.game_over {
            return list;
        }
        for piece in self.pieces.iter_player(self.turn) {
            for dst in pseudo_legal_destinations(piece, &self.pieces) {
                let scratch = self.simulate(piece.sq, dst);
                if king_safety_in(&scratch, piece.player) != KingSafety::InCheck {
                    list.push(PieceMove::new(piece.sq, dst));
                }
            }
        }
        list
    }

    /// Exports the side to move and every piece, in board order.
    ///
    /// # Examples
    ///
    /// ```
    /// use shahmata::Board;
    ///
    /// let board = Board::start_pos();
    /// let snapshot = board.export_state();
    /// assert_eq!(snapshot.entries.len(), 32);
    /// assert_eq!(Board::from_snapshot(&snapshot), board);
    /// ```
    pub fn export_state(&self) -> Snapshot {
        Snapshot {
            turn: self.turn,
            entries: self
                .pieces
                .iter()
                .map(|p| SnapshotEntry::new(p.glyph(), p.sq.file, p.sq.rank))
                .collect(),
        }
    }

    /// Replaces every piece on the board, sets the side to move and clears the game-over flag.
    ///
    /// Entries are placed in order. Entries whose glyph isn't one of `PRNBQK` (either case),
    /// whose square is off the board, or whose square is already taken by an earlier entry
    /// are skipped.
    pub fn import_state(&mut self, turn: Player, entries: &[SnapshotEntry]) {
        self.pieces.clear();
        self.turn = turn;
        self.game_over = false;

        for entry in entries.iter() {
            let sq = entry.sq();
            if !sq.is_okay() {
                warn!(glyph = %entry.glyph, file = entry.file, rank = entry.rank, "skipping off-board entry");
                continue;
            }
            let piece = match Piece::from_glyph(entry.glyph, sq) {
                Some(piece) => piece,
                None => {
                    warn!(glyph = %entry.glyph, %sq, "skipping unrecognized glyph");
                    continue;
                }
            };
            if !self.pieces.is_empty_at(sq) {
                warn!(glyph = %entry.glyph, %sq, "skipping entry on an occupied square");
                continue;
            }
            self.pieces.place(piece);
        }
        debug!(turn = %turn, pieces = self.pieces.len(), "state imported");
    }

    /// Checks the basic consistency of the board: one king per player and no shared squares.
    ///
    /// The board keeps playing on an inconsistent position; this is for callers that want to
    /// vet an imported game.
    pub fn is_okay(&self) -> Result<(), BoardError> {
        for player in ALL_PLAYERS.iter() {
            let num = self.count_piece(*player, PieceType::K);
            if num != 1 {
                return Err(BoardError::IncorrectKingNum {
                    player: *player,
                    num,
                });
            }
        }

        let mut seen: HashSet<SQ> = HashSet::with_capacity(self.pieces.len());
        for piece in self.pieces.iter() {
            if !seen.insert(piece.sq) {
                return Err(BoardError::SharedSquare { sq: piece.sq });
            }
        }
        Ok(())
    }

    //  ------- PRIVATE FUNCTIONS -------

    // Everything `try_move` refuses, without touching the board.
    fn check_move(&self, src: SQ, dst: SQ) -> Result<(), IllegalMove> {
        if self.game_over {
            return Err(IllegalMove::GameOver);
        }
        let piece = self
            .pieces
            .piece_at(src)
            .ok_or(IllegalMove::NoPiece { sq: src })?;
        if piece.player != self.turn {
            return Err(IllegalMove::WrongPlayer {
                sq: src,
                player: piece.player,
            });
        }
        if !is_legal_destination(piece, dst, &self.pieces) {
            return Err(IllegalMove::Geometry { src, dst });
        }
        let scratch = self.simulate(src, dst);
        if king_safety_in(&scratch, piece.player) == KingSafety::InCheck {
            return Err(IllegalMove::SelfCheck { src, dst });
        }
        Ok(())
    }

    // The pieces as they would stand with the mover on `dst` and any piece it would capture
    // still standing there too. The resident keeps attacking every square but its own.
    fn simulate(&self, src: SQ, dst: SQ) -> PieceLocations {
        let mut scratch = self.pieces.clone();
        scratch.shift(src, dst);
        scratch
    }
}

// Whether `player`'s king is attacked in the given placement.
fn king_safety_in(locs: &PieceLocations, player: Player) -> KingSafety {
    let king = locs.king_sq(player);
    if !king.is_okay() {
        return KingSafety::NoKing;
    }
    if attacked_by(locs, king, player.other_player()) {
        KingSafety::InCheck
    } else {
        KingSafety::Safe
    }
}

// Whether any piece of `attacker` may move onto `sq`.
fn attacked_by(locs: &PieceLocations, sq: SQ, attacker: Player) -> bool {
    locs.iter_player(attacker)
        .any(|p| is_legal_destination(p, sq, locs))
}

#[derive(Eq, PartialEq)]
enum RandGen {
    InCheck,
    NoCheck,
    All,
}

/// Longest random game played before starting over.
const RAND_MAX_PLIES: u16 = 120;

/// Random [`Board`] generator. Creates either one or many random boards with optional
/// parameters.
///
/// Boards are reached by playing uniformly random moves from the starting position, so every
/// generated board is a position the engine itself could arrive at.
///
/// # Examples
///
/// Create one [`Board`] with at least 5 moves played that is created in a pseudo-random
/// fashion.
///
/// ```
/// use shahmata::board::{Board, RandBoard};
///
/// let rand_board: Board = RandBoard::new()
///     .pseudo_random(12455)
///     .min_moves(5)
///     .one();
/// ```
///
/// Create a `Vec` of 10 random [`Board`]s that are guaranteed to not be in check.
///
/// ```
/// use shahmata::board::{Board, RandBoard};
///
/// let rand_boards: Vec<Board> = RandBoard::new()
///     .pseudo_random(12455)
///     .no_check()
///     .many(10);
/// ```
///
/// [`Board`]: struct.Board.html
pub struct RandBoard {
    gen_type: RandGen,
    minimum_move: u16,
    rng: StdRng,
}

impl Default for RandBoard {
    fn default() -> Self {
        RandBoard {
            gen_type: RandGen::All,
            minimum_move: 2,
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandBoard {
    /// Create a new `RandBoard` object.
    pub fn new() -> Self {
        RandBoard::default()
    }

    /// Creates a `Vec<Board>` full of `Boards` containing random positions. The
    /// `Vec` will be of size 'size'.
    pub fn many(mut self, size: usize) -> Vec<Board> {
        (0..size).map(|_| self.go()).collect()
    }

    /// Creates a singular `Board` with a random position.
    pub fn one(mut self) -> Board {
        self.go()
    }

    /// Turns PseudoRandom generation on. This allows for the same random `Board`s
    /// to be created from the same seed.
    pub fn pseudo_random(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sets the minimum moves a randomly generated `Board` must contain. Capped at half of
    /// the longest game played.
    pub fn min_moves(mut self, moves: u16) -> Self {
        self.minimum_move = moves.min(RAND_MAX_PLIES / 2);
        self
    }

    /// Guarantees that the boards returned have the side to move in check.
    pub fn in_check(mut self) -> Self {
        self.gen_type = RandGen::InCheck;
        self
    }

    /// Guarantees that the boards returned do not have the side to move in check.
    pub fn no_check(mut self) -> Self {
        self.gen_type = RandGen::NoCheck;
        self
    }

    /// This makes a board.
    fn go(&mut self) -> Board {
        loop {
            let mut board = Board::start_pos();
            let mut plies: u16 = 0;

            while plies < RAND_MAX_PLIES {
                if plies >= self.minimum_move && self.to_ret(&board) && self.rng.gen_ratio(1, 8) {
                    return board;
                }
                let moves = board.generate_moves();
                if moves.is_empty() {
                    break;
                }
                let mv = moves[self.rng.gen_range(0..moves.len())];
                if board.try_move(mv.src, mv.dst).is_err() {
                    break;
                }
                plies += 1;
            }
        }
    }

    fn to_ret(&self, board: &Board) -> bool {
        !board.is_game_over()
            && match self.gen_type {
                RandGen::All => true,
                RandGen::InCheck => board.in_check(board.turn()),
                RandGen::NoCheck => !board.in_check(board.turn()),
            }
    }
}
