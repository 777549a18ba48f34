/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{Context, Result};
use chessie::{Color, Game, Move, Piece, PieceKind, Square};

/// Half-move clock value at which the game is drawn without a claim.
const SEVENTY_FIVE_MOVE_PLIES: usize = 150;

/// Number of occurrences of a position at which the game is drawn without a claim.
const FIVEFOLD: usize = 5;

/// How a game of chess ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move is in check and has no legal moves.
    Checkmate { winner: Color },

    /// The side to move is not in check, but has no legal moves.
    Stalemate,

    /// Neither side can ever deliver mate.
    InsufficientMaterial,

    /// 75 moves by each side without a capture or a pawn move.
    SeventyFiveMoveRule,

    /// The same position occurred five times.
    FivefoldRepetition,
}

impl Outcome {
    /// The banner shown on the end screen.
    pub const fn banner(&self) -> &'static str {
        match self {
            Self::Checkmate {
                winner: Color::White,
            } => "White Wins!",
            Self::Checkmate {
                winner: Color::Black,
            } => "Black Wins!",
            Self::Stalemate | Self::InsufficientMaterial | Self::SeventyFiveMoveRule => "Draw!",
            Self::FivefoldRepetition => "Game Over",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.banner())
    }
}

/// A single game in progress.
///
/// All chess semantics are delegated to [`chessie::Game`]; this type only adds the
/// position history needed to detect repetitions, and a way of turning two clicked
/// squares into a legal [`Move`].
#[derive(Clone, Debug)]
pub struct ChessMatch {
    /// The current position, as known to the rules engine.
    game: Game,

    /// Repetition keys of every position reached so far, including the current one.
    history: Vec<String>,
}

impl ChessMatch {
    /// A new game from the standard starting position.
    pub fn new() -> Self {
        Self::from_game(Game::default())
    }

    /// A new game from the position described by `fen`.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let game = Game::from_fen(fen).with_context(|| format!("Invalid FEN {fen:?}"))?;
        Ok(Self::from_game(game))
    }

    fn from_game(game: Game) -> Self {
        Self {
            history: vec![repetition_key(&game)],
            game,
        }
    }

    /// The underlying rules engine state.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// The piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.game.piece_at(square)
    }

    /// Whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.game.side_to_move()
    }

    /// All legal moves in the current position.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.game.get_legal_moves().into_iter().collect()
    }

    /// Finds the legal move that takes the piece on `from` to `to`.
    ///
    /// Pawns reaching the last rank are promoted to a Queen, and castling is
    /// entered by moving the King two squares.
    pub fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        let uci = format!("{from}{to}");
        let promotion = format!("{uci}q");
        let moves = self.legal_moves();

        moves
            .iter()
            .find(|mv| **mv == uci)
            .or_else(|| moves.iter().find(|mv| **mv == promotion))
            .copied()
    }

    /// Applies `mv`, which must be legal in the current position.
    pub fn play(&mut self, mv: Move) {
        self.game.make_move(mv);
        self.history.push(repetition_key(&self.game));
    }

    /// Number of times the current position has occurred in this game.
    pub fn repetitions(&self) -> usize {
        // The last entry is always the current position
        let Some(current) = self.history.last() else {
            return 0;
        };

        self.history.iter().filter(|key| *key == current).count()
    }

    /// Classifies the current position, returning `None` while play continues.
    pub fn outcome(&self) -> Option<Outcome> {
        let no_moves = self.legal_moves().is_empty();

        if no_moves && self.game.is_in_check() {
            let winner = self.side_to_move().opponent();
            return Some(Outcome::Checkmate { winner });
        }

        if self.game.can_draw_by_insufficient_material() || bishops_on_one_colour(&self.game) {
            return Some(Outcome::InsufficientMaterial);
        }

        if no_moves {
            return Some(Outcome::Stalemate);
        }

        if self.game.halfmove() >= SEVENTY_FIVE_MOVE_PLIES {
            return Some(Outcome::SeventyFiveMoveRule);
        }

        if self.repetitions() >= FIVEFOLD {
            return Some(Outcome::FivefoldRepetition);
        }

        None
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if only Kings and Bishops remain, and every Bishop stands on the same square colour.
///
/// The rules engine already covers lone Kings and one Bishop a side; this adds the
/// cases with several Bishops, none of which can ever reach the other colour.
fn bishops_on_one_colour(game: &Game) -> bool {
    let others = game.kind(PieceKind::Pawn)
        | game.kind(PieceKind::Knight)
        | game.kind(PieceKind::Rook)
        | game.kind(PieceKind::Queen);
    if others.is_nonempty() {
        return false;
    }

    let mut bishops = game.kind(PieceKind::Bishop).into_iter();
    let Some(first) = bishops.next() else {
        return true;
    };

    bishops.all(|square| square.is_light() == first.is_light())
}

/// The parts of a FEN that identify a position for repetition purposes.
///
/// Move counters are excluded, so the same placement reached on different moves compares equal.
/// The en passant square only counts when an en passant capture is actually available.
fn repetition_key(game: &Game) -> String {
    let fen = game.to_fen();
    let mut fields = fen.split_ascii_whitespace().take(4).collect::<Vec<_>>();

    let can_capture_en_passant = game
        .get_legal_moves()
        .into_iter()
        .any(|mv| mv.is_en_passant());
    if !can_capture_en_passant {
        if let Some(ep) = fields.get_mut(3) {
            *ep = "-";
        }
    }

    fields.join(" ")
}
