mod common;

use common::{board_of, play};

use shahmata::{Board, IllegalMove, KingSafety, Player, SQ};

#[test]
fn fools_mate() {
    common::init_logging();
    let mut b = Board::start_pos();
    play(
        &mut b,
        &[(SQ::F2, SQ::F3), (SQ::E7, SQ::E5), (SQ::G2, SQ::G4)],
    );
    assert!(!b.is_game_over());

    let status = b.try_move(SQ::D8, SQ::H4).unwrap();
    assert!(status.gives_check());
    assert!(status.is_checkmate());
    assert!(!status.is_capture());
    assert!(b.is_game_over());
    assert!(b.in_check(Player::White));
    assert!(b.checkmate(Player::White));
    assert_eq!(b.turn(), Player::White);

    let before = b.clone();
    assert_eq!(b.try_move(SQ::E1, SQ::F2), Err(IllegalMove::GameOver));
    assert!(!b.move_piece(SQ::A2, SQ::A3));
    assert_eq!(b, before);
    assert!(b.generate_moves().is_empty());
}

#[test]
fn check_without_mate() {
    let mut b = board_of(
        Player::Black,
        &[('K', SQ::E1), ('P', SQ::A2), ('r', SQ::H8), ('k', SQ::A8)],
    );
    let status = b.try_move(SQ::H8, SQ::E8).unwrap();
    assert!(status.gives_check());
    assert!(!status.is_checkmate());
    assert!(!b.is_game_over());
    assert_eq!(b.king_safety(Player::White), KingSafety::InCheck);

    // anything that leaves the king on the e-file is refused
    assert!(!b.move_piece(SQ::A2, SQ::A3));
    assert!(!b.move_piece(SQ::E1, SQ::E2));
    assert!(b.move_piece(SQ::E1, SQ::D2));
    assert_eq!(b.king_safety(Player::White), KingSafety::Safe);
}

#[test]
fn king_escapes_by_taking_an_undefended_checker() {
    // the queen stays on e2 while the step is tested, but cannot attack its own square
    let b = board_of(
        Player::White,
        &[('K', SQ::E1), ('q', SQ::E2), ('k', SQ::E8)],
    );
    assert!(b.in_check(Player::White));
    assert!(!b.checkmate(Player::White));

    // once the queen is protected, every king step fails
    let b = board_of(
        Player::White,
        &[('K', SQ::E1), ('q', SQ::E2), ('k', SQ::E3)],
    );
    assert!(b.checkmate(Player::White));

    // the same holds for Black's king
    let b = board_of(
        Player::Black,
        &[('k', SQ::E8), ('Q', SQ::E7), ('K', SQ::A1)],
    );
    assert!(!b.checkmate(Player::Black));
    let b = board_of(
        Player::Black,
        &[('k', SQ::E8), ('Q', SQ::E7), ('R', SQ::E1), ('K', SQ::A1)],
    );
    assert!(b.checkmate(Player::Black));
}

#[test]
fn other_pieces_cannot_take_the_checker() {
    common::init_logging();
    // the bishop on c8 reaches the queen, but the queen still gives check from d7
    let mut b = board_of(
        Player::Black,
        &[
            ('k', SQ::E8),
            ('b', SQ::C8),
            ('p', SQ::D8),
            ('p', SQ::F8),
            ('p', SQ::E7),
            ('p', SQ::F7),
            ('Q', SQ::D7),
            ('N', SQ::B6),
            ('K', SQ::A1),
        ],
    );
    assert!(b.in_check(Player::Black));
    let before = b.clone();
    assert_eq!(
        b.try_move(SQ::C8, SQ::D7),
        Err(IllegalMove::SelfCheck {
            src: SQ::C8,
            dst: SQ::D7
        })
    );
    assert_eq!(b, before);
    // the king cannot take either, the knight covers d7
    assert!(!b.move_piece(SQ::E8, SQ::D7));
    assert!(b.checkmate(Player::Black));
}

#[test]
fn back_rank_mate() {
    let mut b = board_of(
        Player::White,
        &[
            ('K', SQ::G1),
            ('R', SQ::A1),
            ('k', SQ::G8),
            ('p', SQ::F7),
            ('p', SQ::G7),
            ('p', SQ::H7),
        ],
    );
    let status = b.try_move(SQ::A1, SQ::A8).unwrap();
    assert!(status.is_checkmate());
    assert!(b.is_game_over());
    assert!(b.checkmate(Player::Black));
}

#[test]
fn missing_king_is_never_in_check() {
    let mut b = board_of(
        Player::White,
        &[('K', SQ::E1), ('Q', SQ::D1), ('r', SQ::H8)],
    );
    assert_eq!(b.king_safety(Player::Black), KingSafety::NoKing);
    assert_eq!(b.king_sq(Player::Black), SQ::NONE);

    let status = b.try_move(SQ::D1, SQ::D8).unwrap();
    assert!(!status.gives_check());
    assert!(!b.is_game_over());
    assert!(!b.checkmate(Player::Black));
    assert!(b.move_piece(SQ::H8, SQ::H1));
}

#[test]
fn only_king_steps_count_as_escapes() {
    // 1. e4 f6 2. Qh5+ could be answered by g6, but only king steps are tried.
    let mut b = Board::start_pos();
    play(&mut b, &[(SQ::E2, SQ::E4), (SQ::F7, SQ::F6)]);
    let status = b.try_move(SQ::D1, SQ::H5).unwrap();
    assert!(status.is_checkmate());
    assert!(b.is_game_over());
    assert_eq!(b.try_move(SQ::G7, SQ::G6), Err(IllegalMove::GameOver));
}
