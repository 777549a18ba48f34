/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use chessie::Square;
use macroquad::{
    color::Color as Rgba,
    math::{vec2, Rect},
    shapes::draw_rectangle,
    text::{draw_text, measure_text},
    texture::{draw_texture_ex, DrawTextureParams, Texture2D},
    window::clear_background,
};

use crate::{Assets, BoardGeometry, ChessMatch, Outcome, Play};

const TEXT: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
const TITLE_BACKGROUND: Rgba = Rgba::new(0.0, 0.0, 0.196, 1.0);
const START_BUTTON: Rgba = Rgba::new(0.0, 0.784, 0.0, 1.0);
const RESULT_BACKGROUND: Rgba = Rgba::new(0.196, 0.0, 0.0, 1.0);
const RESTART_BUTTON: Rgba = Rgba::new(0.0, 0.588, 0.784, 1.0);
const SELECTION: Rgba = Rgba::new(1.0, 1.0, 0.0, 0.314);
const LIGHT_SQUARE: Rgba = Rgba::new(0.941, 0.851, 0.710, 1.0);
const DARK_SQUARE: Rgba = Rgba::new(0.710, 0.533, 0.388, 1.0);

/// Font size for titles and button labels, relative to the square size.
const FONT_SCALE: f32 = 0.75;

/// Title screen: heading and a "Start" button.
pub fn draw_title(geometry: &BoardGeometry) {
    clear_background(TITLE_BACKGROUND);
    draw_centered_text("Chess Game", geometry.square_size() * 1.875, geometry);
    draw_button(geometry.start_button(), "Start", START_BUTTON, geometry);
}

/// Result screen: the outcome and a "Restart" button.
pub fn draw_result(outcome: &Outcome, geometry: &BoardGeometry) {
    clear_background(RESULT_BACKGROUND);
    draw_centered_text(outcome.banner(), geometry.square_size() * 1.875, geometry);
    draw_button(geometry.restart_button(), "Restart", RESTART_BUTTON, geometry);
}

/// A game in progress: the board, its pieces, and the selected square.
pub fn draw_play(play: &Play, assets: &Assets, geometry: &BoardGeometry) {
    draw_board(assets, geometry);
    draw_pieces(play.game(), assets, geometry);

    if let Some(square) = play.selected() {
        let rect = geometry.square_rect(square);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, SELECTION);
    }
}

fn draw_board(assets: &Assets, geometry: &BoardGeometry) {
    if let Some(texture) = assets.board() {
        let size = geometry.board_size();
        draw_scaled(texture, 0.0, 0.0, size);
        return;
    }

    for square in Square::iter() {
        let color = if square.is_light() {
            LIGHT_SQUARE
        } else {
            DARK_SQUARE
        };
        let rect = geometry.square_rect(square);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }
}

fn draw_pieces(game: &ChessMatch, assets: &Assets, geometry: &BoardGeometry) {
    for square in Square::iter() {
        let Some(piece) = game.piece_at(square) else {
            continue;
        };

        // Pieces without a sprite are simply not drawn
        if let Some(texture) = assets.piece(piece) {
            let (x, y) = geometry.square_origin(square);
            draw_scaled(texture, x, y, geometry.square_size());
        }
    }
}

fn draw_scaled(texture: &Texture2D, x: f32, y: f32, size: f32) {
    let params = DrawTextureParams {
        dest_size: Some(vec2(size, size)),
        ..Default::default()
    };
    draw_texture_ex(texture, x, y, TEXT, params);
}

fn draw_button(rect: Rect, label: &str, color: Rgba, geometry: &BoardGeometry) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);

    let font_size = font_size(geometry);
    let dims = measure_text(label, None, font_size, 1.0);
    let x = rect.x + (rect.w - dims.width) / 2.0;
    let y = rect.y + (rect.h - dims.height) / 2.0 + dims.offset_y;
    draw_text(label, x, y, font_size as f32, TEXT);
}

fn draw_centered_text(text: &str, top: f32, geometry: &BoardGeometry) {
    let font_size = font_size(geometry);
    let dims = measure_text(text, None, font_size, 1.0);
    let x = (geometry.board_size() - dims.width) / 2.0;
    draw_text(text, x, top + dims.offset_y, font_size as f32, TEXT);
}

fn font_size(geometry: &BoardGeometry) -> u16 {
    (geometry.square_size() * FONT_SCALE) as u16
}
