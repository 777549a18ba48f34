/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use chessie::{File, Rank, Square};
use macroquad::math::{vec2, Rect};

/// Number of squares along each edge of the board.
pub const BOARD_SQUARES: u8 = 8;

/// Maps between window pixels and board squares.
///
/// The board fills the window with its top-left corner at the origin and White at the bottom,
/// so `a8` is the top-left square and `h1` the bottom-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    square_size: f32,
}

impl BoardGeometry {
    pub const fn new(square_size: f32) -> Self {
        Self { square_size }
    }

    /// Edge length of a single square, in pixels.
    pub const fn square_size(&self) -> f32 {
        self.square_size
    }

    /// Edge length of the whole board, in pixels.
    pub fn board_size(&self) -> f32 {
        self.square_size * BOARD_SQUARES as f32
    }

    /// The square under the pixel `(x, y)`, or `None` if the pixel lies outside the board.
    pub fn square_at(&self, x: f32, y: f32) -> Option<Square> {
        if !(0.0..self.board_size()).contains(&x) || !(0.0..self.board_size()).contains(&y) {
            return None;
        }

        let file = (x / self.square_size) as u8;
        let row = (y / self.square_size) as u8;
        let rank = (BOARD_SQUARES - 1).checked_sub(row)?;

        Some(Square::new(File::new(file).ok()?, Rank::new(rank).ok()?))
    }

    /// Top-left pixel of `square`.
    pub fn square_origin(&self, square: Square) -> (f32, f32) {
        let file = square.file().index() as f32;
        let row = (BOARD_SQUARES as usize - 1 - square.rank().index()) as f32;
        (file * self.square_size, row * self.square_size)
    }

    /// The on-screen area covered by `square`.
    pub fn square_rect(&self, square: Square) -> Rect {
        let (x, y) = self.square_origin(square);
        Rect::new(x, y, self.square_size, self.square_size)
    }

    /// The "Start" button on the title screen.
    pub fn start_button(&self) -> Rect {
        self.centered_button()
    }

    /// The "Restart" button on the end screen.
    pub fn restart_button(&self) -> Rect {
        self.centered_button()
    }

    /// A button two and a half squares wide and one square tall, centered horizontally
    /// just above the middle of the board.
    fn centered_button(&self) -> Rect {
        let w = self.square_size * 2.5;
        let h = self.square_size;
        let x = (self.board_size() - w) / 2.0;
        let y = self.square_size * 3.75;
        Rect::new(x, y, w, h)
    }
}

/// Returns `true` if the pixel `(x, y)` lies inside `rect`.
pub fn hit(rect: Rect, x: f32, y: f32) -> bool {
    rect.contains(vec2(x, y))
}
