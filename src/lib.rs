/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The window's frame loop.
mod app;

/// Loading piece and board images.
mod assets;

/// Command-line configuration.
mod cli;

/// Mapping between pixels and board squares.
mod geometry;

/// Selecting and moving pieces with the mouse.
mod play;

/// Draw calls for every screen.
mod render;

/// Thin layer over the rules engine: move lookup, repetitions, and game outcomes.
mod rules;

/// Title, game, and result screens.
mod screen;

/// Misc utility functions, constants, and types.
mod utils;

pub use app::*;
pub use assets::*;
pub use cli::*;
pub use geometry::*;
pub use play::*;
pub use render::*;
pub use rules::*;
pub use screen::*;
pub use utils::*;
