/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    thread,
    time::{Duration, Instant},
};

/// Default edge length of a board square, in pixels.
pub const DEFAULT_SQUARE_SIZE: u16 = 80;

/// Default number of frames drawn per second.
pub const DEFAULT_FPS: u32 = 30;

/// Holds the frame loop to a fixed rate by sleeping off whatever is left of each frame.
#[derive(Debug)]
pub struct FrameLimiter {
    period: Duration,
    last: Instant,
}

impl FrameLimiter {
    /// A limiter for `fps` frames per second. A rate of 0 is treated as 1.
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    /// How long to sleep after a frame that took `elapsed`, if at all.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.period.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Blocks until the current frame has lasted a full period, then starts the next one.
    pub fn wait(&mut self) {
        if let Some(rest) = self.remaining(self.last.elapsed()) {
            thread::sleep(rest);
        }
        self.last = Instant::now();
    }
}
