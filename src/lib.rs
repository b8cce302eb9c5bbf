//! A chess rule engine.
//!
//! `shahmata` holds the state of a game of chess and referees it: it knows where every piece
//! stands and whose turn it is, decides whether a requested move is legal, applies it, and
//! tells when a player is in check or checkmated. It does not search, evaluate or play.
//!
//! # Usage
//!
//! Add `shahmata` to the dependencies in your project's `Cargo.toml`.
//!
//! The crate reports what it does through [`tracing`](https://docs.rs/tracing) events.
//! Install any subscriber to see them, e.g. `tracing_subscriber::fmt()` with `RUST_LOG=shahmata=debug`.
//!
//! # Examples
//!
//! You can create a [`Board`] with the starting position like so:
//!
//! ```
//! use shahmata::Board;
//! let board = Board::default();
//! ```
//!
//! Generating a list of moves (Contained inside a [`MoveList`]) can be done with:
//!
//! ```
//! # use shahmata::Board;
//! # let board = Board::default();
//! let list = board.generate_moves();
//! assert_eq!(list.len(), 20);
//! ```
//!
//! Moves are given as a pair of squares, and refused moves leave the board untouched:
//!
//! ```
//! use shahmata::{Board, SQ};
//!
//! let mut board = Board::default();
//! assert!(board.move_piece(SQ::F2, SQ::F3));
//! assert!(board.move_piece(SQ::E7, SQ::E5));
//! assert!(board.move_piece(SQ::G2, SQ::G4));
//! assert!(!board.move_piece(SQ::D8, SQ::D5)); // blocked by its own pawn
//!
//! let status = board.try_move(SQ::D8, SQ::H4).unwrap();
//! assert!(status.is_checkmate());
//! assert!(board.is_game_over());
//! ```
//!
//! A game can be saved and restored through a [`Snapshot`]:
//!
//! ```
//! use shahmata::Board;
//! use shahmata::board::snapshot::Snapshot;
//!
//! let board = Board::default();
//! let text = board.export_state().to_text();
//! let restored = Board::from_snapshot(&text.parse::<Snapshot>().unwrap());
//! assert_eq!(restored, board);
//! ```
//!
//! [`MoveList`]: core/move_list/struct.MoveList.html
//! [`Board`]: board/struct.Board.html
//! [`Snapshot`]: board/snapshot/struct.Snapshot.html

#![cfg_attr(test, allow(dead_code))]

#[macro_use]
extern crate bitflags;

pub mod core;
pub mod board;

#[doc(no_inline)]
pub use crate::board::{Board, IllegalMove, KingSafety};
#[doc(no_inline)]
pub use crate::core::piece_move::{MoveStatus, PieceMove};
#[doc(no_inline)]
pub use crate::core::move_list::MoveList;
#[doc(no_inline)]
pub use crate::core::sq::SQ;
#[doc(no_inline)]
pub use crate::core::{PieceType, Player};
