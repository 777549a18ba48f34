/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use macroquad::window::Conf;

use crate::{BoardGeometry, ChessMatch, BOARD_SQUARES, DEFAULT_FPS, DEFAULT_SQUARE_SIZE};

/// A two-player chess game played with the mouse.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Directory containing `board.png` and a `pieces/` directory of sprites.
    #[arg(short, long, default_value = "assets")]
    pub assets: PathBuf,

    /// Edge length of a board square, in pixels. The window is eight squares wide and tall.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SQUARE_SIZE,
        value_parser = clap::value_parser!(u16).range(16..=256)
    )]
    pub square_size: u16,

    /// Frames drawn per second.
    #[arg(
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..=240)
    )]
    pub fps: u32,

    /// Start every game from this position instead of the standard one.
    #[arg(long)]
    pub fen: Option<String>,

    /// Log filter, used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Cli {
    /// The position every new game starts from.
    pub fn starting_match(&self) -> Result<ChessMatch> {
        match &self.fen {
            Some(fen) => ChessMatch::from_fen(fen),
            None => Ok(ChessMatch::new()),
        }
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.square_size as f32)
    }

    /// Window settings: a fixed square window exactly the size of the board.
    pub fn window_conf(&self) -> Conf {
        let size = i32::from(self.square_size) * i32::from(BOARD_SQUARES);

        Conf {
            window_title: String::from("Chess"),
            window_width: size,
            window_height: size,
            window_resizable: false,
            ..Default::default()
        }
    }
}
