//! Static configuration: refresh cadence, display caps, bar thresholds.

use std::time::Duration;

/// Delay between dashboard refresh cycles.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(1500);

/// Upper bound on connections kept in a network snapshot.
pub const MAX_CONNECTIONS: usize = 10;

/// Interfaces shown in the dashboard network section.
pub const MAX_INTERFACES_DISPLAY: usize = 5;

/// Connections shown in the dashboard network section.
pub const MAX_CONNECTIONS_DISPLAY: usize = 5;

/// Interfaces shown with cumulative IO counters.
pub const MAX_IO_COUNTERS_DISPLAY: usize = 3;

/// Progress bar width in cells.
pub const PROGRESS_BAR_LENGTH: usize = 30;

pub const PROGRESS_BAR_FILLED: char = '█';
pub const PROGRESS_BAR_EMPTY: char = '░';

/// Minimum width the dashboard lays out against, even on narrower terminals.
pub const MIN_RENDER_WIDTH: u16 = 80;

/// Warning/critical percentage boundaries for one progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

/// Each bar carries its own pair rather than reusing the CPU one.
pub const CPU_THRESHOLDS: Thresholds = Thresholds {
    warning: 70.0,
    critical: 90.0,
};

pub const MEMORY_THRESHOLDS: Thresholds = Thresholds {
    warning: 75.0,
    critical: 90.0,
};

pub const DISK_THRESHOLDS: Thresholds = Thresholds {
    warning: 75.0,
    critical: 90.0,
};

/// Per-attempt timeout for the public IP lookup.
pub const PUBLIC_IP_TIMEOUT: Duration = Duration::from_secs(3);
