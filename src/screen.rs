/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use tracing::info;

use crate::{hit, BoardGeometry, ChessMatch, Outcome, Play};

/// The screen currently shown.
#[derive(Clone, Debug)]
pub enum Screen {
    /// Title screen with a "Start" button.
    Start,

    /// A game in progress.
    Playing(Play),

    /// A finished game, with a "Restart" button leading back to the title screen.
    Over(Outcome),
}

/// Moves between the title, game, and result screens in response to clicks.
///
/// This holds no rendering state, so every transition can be driven without a window.
#[derive(Clone, Debug)]
pub struct Flow {
    screen: Screen,
    geometry: BoardGeometry,

    /// Every new game starts from a copy of this.
    initial: ChessMatch,
}

impl Flow {
    pub fn new(geometry: BoardGeometry, initial: ChessMatch) -> Self {
        Self {
            screen: Screen::Start,
            geometry,
            initial,
        }
    }

    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    pub const fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Handles a left click at the pixel `(x, y)`.
    pub fn on_click(&mut self, x: f32, y: f32) {
        match self.screen {
            Screen::Start => {
                if hit(self.geometry.start_button(), x, y) {
                    info!("Starting a new game");
                    self.screen = Screen::Playing(Play::new(self.initial.clone()));
                }
            }

            Screen::Playing(ref mut play) => {
                // Clicks off the board leave any selection in place
                if let Some(square) = self.geometry.square_at(x, y) {
                    play.click(square);
                }
            }

            Screen::Over(_) => {
                if hit(self.geometry.restart_button(), x, y) {
                    info!("Returning to the title screen");
                    self.screen = Screen::Start;
                }
            }
        }
    }

    /// Called once per frame; ends the game if the current position is terminal.
    pub fn advance(&mut self) {
        let Screen::Playing(play) = &self.screen else {
            return;
        };

        if let Some(outcome) = play.game().outcome() {
            info!(%outcome, fen = %play.game().game().to_fen(), "Game over");
            self.screen = Screen::Over(outcome);
        }
    }
}
