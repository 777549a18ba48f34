/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use chessie::{Move, Square};
use tracing::{debug, info};

use crate::ChessMatch;

/// What a click on the board did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Click {
    /// An empty square was clicked with nothing selected.
    Ignored,

    /// The piece on this square is now selected.
    Selected(Square),

    /// The selected piece was moved.
    Moved(Move),

    /// The selected piece cannot move to the clicked square; the selection was dropped.
    Rejected,
}

/// A game being played through the mouse.
#[derive(Clone, Debug)]
pub struct Play {
    game: ChessMatch,

    /// Square of the piece picked up by the previous click, if any.
    selected: Option<Square>,
}

impl Play {
    pub fn new(game: ChessMatch) -> Self {
        Self {
            game,
            selected: None,
        }
    }

    pub const fn game(&self) -> &ChessMatch {
        &self.game
    }

    pub const fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Handles a click on `square`.
    ///
    /// The first click picks up a piece of either colour. The second click attempts to move it there,
    /// and the selection is cleared whether or not the move was legal.
    pub fn click(&mut self, square: Square) -> Click {
        let Some(from) = self.selected.take() else {
            if self.game.piece_at(square).is_none() {
                return Click::Ignored;
            }

            self.selected = Some(square);
            return Click::Selected(square);
        };

        match self.game.find_move(from, square) {
            Some(mv) => {
                info!(%mv, side = self.game.side_to_move().name(), "Move played");
                self.game.play(mv);
                Click::Moved(mv)
            }
            None => {
                debug!(%from, to = %square, "Move rejected");
                Click::Rejected
            }
        }
    }
}
