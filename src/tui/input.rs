//! Non-blocking keyboard input.
//!
//! `crossterm::event` owns the platform split between the character-ready
//! descriptor check and the console keystroke buffer, so a single poller
//! implementation covers all targets and the loop never branches on
//! platform.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Command;

/// Pending-keystroke check for the dashboard loop.
pub trait InputPoller {
    /// Returns the next pending command without blocking. Failures to query
    /// input state count as "no input".
    fn poll(&mut self) -> Option<Command>;

    /// Blocks up to `timeout` for a command: the inter-cycle
    /// sleep-or-wake-early. Returns as soon as a recognized key arrives.
    fn wait(&mut self, timeout: Duration) -> Option<Command>;
}

/// Poller over the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPoller;

impl TerminalPoller {
    pub fn new() -> Self {
        Self
    }
}

impl InputPoller for TerminalPoller {
    fn poll(&mut self) -> Option<Command> {
        self.wait(Duration::ZERO)
    }

    fn wait(&mut self, timeout: Duration) -> Option<Command> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match event::poll(remaining) {
                Ok(true) => {
                    // Consume the event; unrecognized keys keep waiting.
                    if let Ok(Event::Key(key)) = event::read() {
                        if let Some(cmd) = map_key(key) {
                            return Some(cmd);
                        }
                    }
                }
                Ok(false) => return None,
                Err(_) => return None,
            }
            if Instant::now() >= deadline {
                return None;
            }
        }
    }
}

/// Maps a keystroke to a command: `q`/`Q` and Ctrl+C quit, `r`/`R`
/// refreshes, everything else is ignored.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Command::Quit)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Refresh),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_map_key_recognized() {
        assert_eq!(map_key(press('q')), Some(Command::Quit));
        assert_eq!(map_key(press('Q')), Some(Command::Quit));
        assert_eq!(map_key(press('r')), Some(Command::Refresh));
        assert_eq!(map_key(press('R')), Some(Command::Refresh));
    }

    #[test]
    fn test_map_key_ctrl_c() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Command::Quit));
    }

    #[test]
    fn test_map_key_ignores_everything_else() {
        assert_eq!(map_key(press('x')), None);
        assert_eq!(map_key(press(' ')), None);
        assert_eq!(map_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)), None);
        assert_eq!(map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_poll_returns_promptly_without_input() {
        // Non-interactive stdin: poll must come back within the call, not
        // block waiting for a keystroke.
        let mut poller = TerminalPoller::new();
        let start = Instant::now();
        let _ = poller.poll();
        assert!(start.elapsed() < Duration::from_millis(250));
    }
}
