/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{collections::HashMap, path::Path};

use chessie::{Color, Piece, PieceKind};
use macroquad::texture::{load_texture, FilterMode, Texture2D};
use tracing::{debug, warn};

/// File name (without extension) of the sprite for `piece`, such as `wK` or `bN`.
pub fn sprite_name(piece: Piece) -> String {
    let color = match piece.color() {
        Color::White => 'w',
        Color::Black => 'b',
    };
    let kind = match piece.kind() {
        PieceKind::Pawn => 'P',
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Rook => 'R',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
    };

    format!("{color}{kind}")
}

/// Images used to draw the board.
///
/// Every image is optional. A missing piece sprite means that piece is not drawn;
/// a missing board image is replaced by a plain checkerboard.
#[derive(Default)]
pub struct Assets {
    board: Option<Texture2D>,
    pieces: HashMap<String, Texture2D>,
}

impl Assets {
    /// Loads `board.png` and `pieces/<sprite>.png` from `dir`.
    pub async fn load(dir: &Path) -> Self {
        let board = load_image(&dir.join("board.png")).await;

        let mut pieces = HashMap::new();
        for piece in Piece::all() {
            let name = sprite_name(piece);
            let path = dir.join("pieces").join(format!("{name}.png"));
            if let Some(texture) = load_image(&path).await {
                pieces.insert(name, texture);
            }
        }

        debug!(
            dir = %dir.display(),
            board = board.is_some(),
            pieces = pieces.len(),
            "Loaded assets"
        );

        Self { board, pieces }
    }

    pub fn board(&self) -> Option<&Texture2D> {
        self.board.as_ref()
    }

    pub fn piece(&self, piece: Piece) -> Option<&Texture2D> {
        self.pieces.get(&sprite_name(piece))
    }
}

async fn load_image(path: &Path) -> Option<Texture2D> {
    let Some(path_str) = path.to_str() else {
        warn!(path = %path.display(), "Skipping image with a non UTF-8 path");
        return None;
    };

    if !path.exists() {
        warn!(path = path_str, "Image not found");
        return None;
    }

    match load_texture(path_str).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Linear);
            Some(texture)
        }
        Err(err) => {
            warn!(path = path_str, ?err, "Failed to load image");
            None
        }
    }
}
