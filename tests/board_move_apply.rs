mod common;

use common::{board_of, play};

use shahmata::{Board, IllegalMove, PieceType, Player, SQ};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::collections::HashSet;

#[test]
fn pawn_double_step() {
    common::init_logging();
    let mut b = Board::start_pos();
    assert!(b.move_piece(SQ::E2, SQ::E4));
    assert!(b.piece_at_sq(SQ::E2).is_none());
    assert_eq!(b.piece_at_sq(SQ::E4).unwrap().glyph, 'P');
    assert_eq!(b.turn(), Player::Black);
    assert_eq!(b.count_all_pieces(), 32);
}

#[test]
fn turns_alternate() {
    let mut b = Board::start_pos();
    assert!(b.move_piece(SQ::G1, SQ::F3));
    assert!(!b.move_piece(SQ::F3, SQ::G5));
    assert!(b.move_piece(SQ::G8, SQ::F6));
    assert_eq!(b.turn(), Player::White);
    assert!(b.move_piece(SQ::F3, SQ::G5));
}

#[test]
fn capture_removes_one_piece() {
    let mut b = Board::start_pos();
    play(&mut b, &[(SQ::E2, SQ::E4), (SQ::D7, SQ::D5)]);
    let status = b.try_move(SQ::E4, SQ::D5).unwrap();
    assert!(status.is_capture());
    assert!(!status.gives_check());
    assert_eq!(b.count_all_pieces(), 31);
    assert_eq!(b.count_piece(Player::Black, PieceType::P), 7);
    assert_eq!(b.player_at_sq(SQ::D5), Some(Player::White));

    let status = b.try_move(SQ::D8, SQ::D5).unwrap();
    assert!(status.is_capture());
    assert_eq!(b.count_piece(Player::White, PieceType::P), 7);
    assert_eq!(b.count_all_pieces(), 30);
}

#[test]
fn own_pieces_cannot_be_captured() {
    let mut b = Board::start_pos();
    assert_eq!(
        b.try_move(SQ::D1, SQ::D2),
        Err(IllegalMove::Geometry {
            src: SQ::D1,
            dst: SQ::D2
        })
    );
    assert_eq!(b, Board::start_pos());
}

#[test]
fn pawn_moves() {
    let mut b = Board::start_pos();
    assert!(b.move_piece(SQ::A2, SQ::A3));
    assert!(b.move_piece(SQ::H7, SQ::H6));
    // no double step once the pawn has left its starting rank
    assert!(!b.move_piece(SQ::A3, SQ::A5));
    // no diagonal step onto an empty square
    assert!(!b.move_piece(SQ::A3, SQ::B4));
    assert!(b.move_piece(SQ::A3, SQ::A4));
    assert!(b.move_piece(SQ::B7, SQ::B5));
    // straight moves never capture
    play(&mut b, &[(SQ::B2, SQ::B4), (SQ::H6, SQ::H5)]);
    assert!(!b.move_piece(SQ::B4, SQ::B5));
    assert!(b.move_piece(SQ::A4, SQ::B5));
}

#[test]
fn sliders_are_blocked() {
    let mut b = Board::start_pos();
    assert!(!b.move_piece(SQ::A1, SQ::A3));
    assert!(!b.move_piece(SQ::C1, SQ::E3));
    assert!(!b.move_piece(SQ::D1, SQ::D3));
    assert!(b.move_piece(SQ::D2, SQ::D4));
    assert!(b.move_piece(SQ::A7, SQ::A6));
    assert!(b.move_piece(SQ::C1, SQ::G5));
    assert!(b.move_piece(SQ::A6, SQ::A5));
    assert!(b.move_piece(SQ::D1, SQ::D3));
    // knights jump
    assert!(b.move_piece(SQ::B8, SQ::C6));
}

#[test]
fn self_check_leaves_board_identical() {
    // the bishop on e2 shields its king from the rook on e8
    let mut b = board_of(
        Player::White,
        &[
            ('K', SQ::E1),
            ('B', SQ::E2),
            ('r', SQ::E8),
            ('k', SQ::H8),
        ],
    );
    let before = b.clone();
    assert_eq!(
        b.try_move(SQ::E2, SQ::D3),
        Err(IllegalMove::SelfCheck {
            src: SQ::E2,
            dst: SQ::D3
        })
    );
    assert_eq!(b, before);

    // the king may not step onto an attacked square either
    assert!(!b.move_piece(SQ::E1, SQ::E2));
    assert_eq!(
        b.try_move(SQ::E1, SQ::D2).map(|s| s.is_capture()),
        Ok(false)
    );
}

#[test]
fn kings_keep_their_distance() {
    let mut b = board_of(Player::White, &[('K', SQ::E4), ('k', SQ::E6)]);
    assert!(!b.move_piece(SQ::E4, SQ::E5));
    assert!(!b.move_piece(SQ::E4, SQ::D5));
    assert!(b.move_piece(SQ::E4, SQ::E3));
}

#[test]
fn generated_moves_match_move_piece() {
    let mut b = Board::start_pos();
    play(
        &mut b,
        &[(SQ::E2, SQ::E4), (SQ::E7, SQ::E5), (SQ::F1, SQ::C4)],
    );
    let moves = b.generate_moves();
    for mv in moves.iter() {
        let mut copy = b.clone();
        assert!(copy.move_piece(mv.src, mv.dst), "{} not playable", mv);
    }
    for src in SQ::all() {
        for dst in SQ::all() {
            let mut copy = b.clone();
            assert_eq!(copy.move_piece(src, dst), moves.contains_move(src, dst));
        }
    }
}

#[test]
fn random_moves() {
    common::init_logging();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..5 {
        let mut chess_board = Board::start_pos();
        let mut moves = chess_board.generate_moves();
        let mut i = 0;
        while i < 80 && !moves.is_empty() {
            let mover = chess_board.turn();
            let before = chess_board.count_all_pieces();
            let mv = moves[rng.gen_range(0..moves.len())];
            let status = chess_board.try_move(mv.src, mv.dst).unwrap();

            let after = chess_board.count_all_pieces();
            if status.is_capture() {
                assert_eq!(after + 1, before);
            } else {
                assert_eq!(after, before);
            }
            assert!(!chess_board.in_check(mover));
            assert_eq!(status.gives_check(), chess_board.in_check(!mover));
            assert_eq!(status.is_checkmate(), chess_board.is_game_over());
            assert_eq!(chess_board.turn(), !mover);

            let squares: HashSet<SQ> = chess_board.pieces().map(|p| p.sq).collect();
            assert_eq!(squares.len(), after);
            assert!(squares.iter().all(|sq| sq.is_okay()));

            moves = chess_board.generate_moves();
            i += 1;
        }
    }
}
