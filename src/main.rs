/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::Result;
use chessboard::{App, Cli};
use clap::Parser;
use macroquad::Window;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Reject a bad starting position before a window is ever opened
    let initial = cli.starting_match()?;

    Window::from_config(cli.window_conf(), async move {
        App::new(&cli, initial).await.run().await;
    });

    Ok(())
}
