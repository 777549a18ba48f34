/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use macroquad::{
    input::{is_mouse_button_pressed, mouse_position, MouseButton},
    window::next_frame,
};
use tracing::info;

use crate::{
    draw_play, draw_result, draw_title, Assets, ChessMatch, Cli, Flow, FrameLimiter, Screen,
};

/// The chess game window.
pub struct App {
    flow: Flow,
    assets: Assets,
    limiter: FrameLimiter,
}

impl App {
    /// Loads assets and prepares the title screen, with every game starting from `initial`.
    ///
    /// Must be called from inside the window's event loop.
    pub async fn new(cli: &Cli, initial: ChessMatch) -> Self {
        let flow = Flow::new(cli.geometry(), initial);
        let assets = Assets::load(&cli.assets).await;

        Self {
            flow,
            assets,
            limiter: FrameLimiter::new(cli.fps),
        }
    }

    /// Returns a string of the game's name and current version.
    pub fn name(&self) -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// Execute the main frame loop. Runs until the window is closed.
    pub async fn run(&mut self) {
        info!("{} ready", self.name());

        loop {
            if is_mouse_button_pressed(MouseButton::Left) {
                let (x, y) = mouse_position();
                self.flow.on_click(x, y);
            }
            self.flow.advance();

            self.draw();

            self.limiter.wait();
            next_frame().await;
        }
    }

    fn draw(&self) {
        let geometry = self.flow.geometry();

        match self.flow.screen() {
            Screen::Start => draw_title(geometry),
            Screen::Playing(play) => draw_play(play, &self.assets, geometry),
            Screen::Over(outcome) => draw_result(outcome, geometry),
        }
    }
}
