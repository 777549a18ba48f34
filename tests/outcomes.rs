/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use chessboard::{ChessMatch, Outcome};

fn test_outcome_fen(fen: &str, expected: Option<Outcome>) {
    let game = ChessMatch::from_fen(fen).unwrap();
    assert_eq!(game.outcome(), expected, "Wrong outcome for {fen}");
}

#[cfg(test)]
mod checkmate {
    use crate::test_outcome_fen;
    use chessboard::Outcome;
    use chessie::Color;

    #[test]
    fn test_black_mated_by_back_rank() {
        test_outcome_fen(
            "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1",
            Some(Outcome::Checkmate {
                winner: Color::White,
            }),
        );
    }

    #[test]
    fn test_white_mated_by_fools_mate() {
        test_outcome_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
            Some(Outcome::Checkmate {
                winner: Color::Black,
            }),
        );
    }

    #[test]
    fn test_check_is_not_mate() {
        test_outcome_fen("R5k1/5pp1/8/8/8/8/8/6K1 b - - 0 1", None);
    }
}

#[cfg(test)]
mod draws {
    use crate::test_outcome_fen;
    use chessboard::Outcome;

    #[test]
    fn test_stalemate() {
        test_outcome_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", Some(Outcome::Stalemate));
    }

    #[test]
    fn test_lone_kings() {
        test_outcome_fen(
            "8/4k3/8/8/3K4/8/8/8 w - - 0 1",
            Some(Outcome::InsufficientMaterial),
        );
    }

    #[test]
    fn test_single_minor_piece() {
        test_outcome_fen(
            "8/4k3/8/8/3K4/8/5B2/8 w - - 0 1",
            Some(Outcome::InsufficientMaterial),
        );
        test_outcome_fen(
            "8/4k3/2n5/8/3K4/8/8/8 w - - 0 1",
            Some(Outcome::InsufficientMaterial),
        );
    }

    #[test]
    fn test_opposite_colored_bishops_play_on() {
        test_outcome_fen("8/3bk3/8/8/3K4/8/5B2/8 w - - 0 1", None);
    }

    #[test]
    fn test_two_bishops_on_one_colour() {
        test_outcome_fen(
            "8/4k3/8/8/3K4/8/4B3/5B2 w - - 0 1",
            Some(Outcome::InsufficientMaterial),
        );
        test_outcome_fen(
            "8/4k3/8/1b6/3K4/8/4B3/5B2 w - - 0 1",
            Some(Outcome::InsufficientMaterial),
        );
    }

    #[test]
    fn test_bishop_pair_plays_on() {
        test_outcome_fen("8/4k3/8/8/3K4/8/3B4/5B2 w - - 0 1", None);
    }

    #[test]
    fn test_seventy_five_move_rule() {
        test_outcome_fen(
            "8/4k3/8/8/3K4/8/R7/8 w - - 150 120",
            Some(Outcome::SeventyFiveMoveRule),
        );
    }

    #[test]
    fn test_fifty_move_rule_needs_a_claim() {
        test_outcome_fen("8/4k3/8/8/3K4/8/R7/8 w - - 100 100", None);
    }

    #[test]
    fn test_mate_beats_seventy_five_move_rule() {
        test_outcome_fen(
            "R5k1/5ppp/8/8/8/8/8/6K1 b - - 150 120",
            Some(Outcome::Checkmate {
                winner: chessie::Color::White,
            }),
        );
    }
}

#[cfg(test)]
mod moves {
    use chessboard::ChessMatch;
    use chessie::{PieceKind, Square};

    fn sq(uci: &str) -> Square {
        Square::from_uci(uci).unwrap()
    }

    #[test]
    fn test_start_position_has_twenty_moves() {
        assert_eq!(ChessMatch::new().legal_moves().len(), 20);
    }

    #[test]
    fn test_castling_by_king_move() {
        let mut game = ChessMatch::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();

        let short = game.find_move(sq("e1"), sq("g1")).unwrap();
        game.play(short);
        assert_eq!(game.piece_at(sq("g1")).unwrap().kind(), PieceKind::King);
        assert_eq!(game.piece_at(sq("f1")).unwrap().kind(), PieceKind::Rook);

        let long = game.find_move(sq("e8"), sq("c8")).unwrap();
        game.play(long);
        assert_eq!(game.piece_at(sq("c8")).unwrap().kind(), PieceKind::King);
        assert_eq!(game.piece_at(sq("d8")).unwrap().kind(), PieceKind::Rook);
    }

    #[test]
    fn test_en_passant() {
        let mut game = ChessMatch::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").unwrap();

        let mv = game.find_move(sq("d5"), sq("e6")).unwrap();
        game.play(mv);
        assert!(game.piece_at(sq("e5")).is_none());
        assert!(game.piece_at(sq("e6")).is_some());
    }

    #[test]
    fn test_capture_promotion_defaults_to_queen() {
        let mut game = ChessMatch::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();

        let mv = game.find_move(sq("a7"), sq("b8")).unwrap();
        assert_eq!(mv.promotion(), Some(PieceKind::Queen));
        game.play(mv);
        assert_eq!(game.piece_at(sq("b8")).unwrap().kind(), PieceKind::Queen);
    }

    #[test]
    fn test_moving_into_check_is_illegal() {
        let game = ChessMatch::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").unwrap();
        assert!(game.find_move(sq("e1"), sq("e2")).is_some());
        assert!(game.find_move(sq("e1"), sq("d2")).is_none());
        assert!(game.find_move(sq("e1"), sq("f2")).is_none());
    }

    #[test]
    fn test_wrong_side_cannot_move() {
        let game = ChessMatch::new();
        assert!(game.find_move(sq("e7"), sq("e5")).is_none());
    }
}
