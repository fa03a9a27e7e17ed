//! sysglance - terminal dashboard for host metrics.
//!
//! This library provides the building blocks of the `sysglance` binary:
//! - `collector` - point-in-time system and network snapshots
//! - `tui` - the polling-render loop with non-blocking keyboard input
//! - `report` - one-shot reports behind the CLI info flags

pub mod collector;
pub mod config;
pub mod error;
pub mod fmt;
pub mod model;
pub mod public_ip;
pub mod report;
pub mod tui;
