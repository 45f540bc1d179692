//! refresh.rs
//!
//! Redraws the terminal forever: clear, draw a fresh frame, pause, repeat.
//! The loop only ends when the `shutdown` future resolves (Ctrl-C in the
//! binary).

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::sleep;
use tracing::{debug, trace};

/// ANSI: erase the display, then move the cursor to row 1, column 1.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Pause between frames.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(20);

pub struct RefreshDriver<W> {
    out: W,
    interval: Duration,
}

impl<W: Write> RefreshDriver<W> {
    pub fn new(out: W, interval: Duration) -> Self {
        Self { out, interval }
    }

    /// Draw frames produced by `frame` until `shutdown` completes, then hand
    /// the writer back.
    pub async fn run<F, S>(mut self, shutdown: S, mut frame: F) -> Result<W>
    where
        F: FnMut() -> String,
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut frames: u64 = 0;

        loop {
            // one buffer per frame keeps the clear and the redraw together
            let text = format!("{CLEAR_SCREEN}{}", frame());
            self.out
                .write_all(text.as_bytes())
                .context("failed to write frame")?;
            self.out.flush().context("failed to flush frame")?;
            frames += 1;
            trace!(frames, "frame drawn");

            tokio::select! {
                _ = &mut shutdown => break,
                _ = sleep(self.interval) => {}
            }
        }

        debug!(frames, "refresh loop stopped");
        Ok(self.out)
    }
}
