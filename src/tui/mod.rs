//! Interactive dashboard: loop, input, rendering, theme.

pub mod app;
pub mod input;
pub mod render;
pub mod style;

pub use app::{Dashboard, TerminalModeGuard};
pub use input::{InputPoller, TerminalPoller};
