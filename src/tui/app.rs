//! The dashboard loop.
//!
//! Single logical thread: poll input, collect, render, display, then sleep
//! until the next tick or until a key cuts the sleep short. Exactly one
//! cycle is in flight at a time; the interval is a sleep after completion,
//! not a fixed-rate timer.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Local;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{self, Clear, ClearType};
use tracing::debug;

use crate::collector::SnapshotSource;
use crate::config::{MIN_RENDER_WIDTH, REFRESH_INTERVAL};
use crate::error::Result;
use crate::model::Command;

use super::input::InputPoller;
use super::render::render;

/// Scoped raw-mode handle.
///
/// Entering raw mode makes single keystrokes visible without echo; failure
/// (redirected stdin, dumb terminal) is non-fatal and just leaves keyboard
/// commands ineffective. Restoration runs on every exit path via `Drop` and
/// is idempotent.
pub struct TerminalModeGuard {
    active: bool,
}

impl TerminalModeGuard {
    pub fn enter() -> Self {
        let active = terminal::enable_raw_mode().is_ok();
        if !active {
            debug!("raw mode unavailable, keyboard commands disabled");
        }
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Restores the original terminal mode. Safe to call more than once and
    /// when entry failed.
    pub fn restore(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Interactive dashboard controller.
pub struct Dashboard {
    source: Box<dyn SnapshotSource>,
    poller: Box<dyn InputPoller>,
    interrupted: Arc<AtomicBool>,
    interval: Duration,
}

impl Dashboard {
    pub fn new(source: Box<dyn SnapshotSource>, poller: Box<dyn InputPoller>) -> Self {
        Self {
            source,
            poller,
            interrupted: Arc::new(AtomicBool::new(false)),
            interval: REFRESH_INTERVAL,
        }
    }

    #[cfg(test)]
    fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Runs the dashboard until quit or interrupt, then restores the
    /// terminal, clears the screen and prints a closing message.
    pub fn run(mut self) -> Result<()> {
        let interrupted = self.interrupted.clone();
        ctrlc::set_handler(move || {
            interrupted.store(true, Ordering::SeqCst);
        })?;

        let mut guard = TerminalModeGuard::enter();
        let mut stdout = io::stdout();
        let result = self.run_loop(&mut stdout);
        guard.restore();

        let mut stdout = io::stdout();
        queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(stdout, "sysglance closed.")?;
        stdout.flush()?;

        result?;
        Ok(())
    }

    /// The Running state. Separated from `run` so tests can drive it with
    /// scripted pollers and sources against an in-memory writer.
    fn run_loop(&mut self, out: &mut impl Write) -> io::Result<()> {
        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                break;
            }
            // A pending quit is honored before any further work.
            if let Some(Command::Quit) = self.poller.poll() {
                break;
            }

            let metrics = self.source.metrics();
            let network = self.source.network();
            let width = terminal::size().map(|(w, _)| w).unwrap_or(MIN_RENDER_WIDTH);
            let frame = render(&metrics, &network, width, Local::now());

            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            // Raw mode disables output post-processing, so newlines need an
            // explicit carriage return.
            out.write_all(frame.replace('\n', "\r\n").as_bytes())?;
            out.flush()?;

            // Sleep until the next tick; a refresh request cuts the sleep
            // short, a quit request ends the loop.
            match self.poller.wait(self.interval) {
                Some(Command::Quit) => break,
                Some(Command::Refresh) | None => {}
            }
        }
        Ok(())
    }
}
