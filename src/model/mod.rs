//! Snapshot value types.
//!
//! A snapshot is created fresh each poll cycle, consumed by exactly one
//! render, and discarded. Snapshots are never compared or merged. Absent
//! optional fields mean "could not be observed this cycle" and the renderer
//! degrades the affected section instead of showing a fake value.

use serde::{Deserialize, Serialize};

/// Virtual memory usage at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub percent: f64,
}

/// Swap usage. Absent when the platform has no swap configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwapUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

/// Usage of the primary volume. Absent when the probe fails or is denied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

/// Point-in-time system metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Global CPU utilization, 0-100. Defaults to 0 when sampling fails.
    pub cpu_percent: f32,
    pub cpu_count: Option<usize>,
    /// 1/5/15 minute run-queue averages. Absent on platforms without the concept.
    pub load_avg: Option<(f64, f64, f64)>,
    pub memory: MemoryUsage,
    pub swap: Option<SwapUsage>,
    pub disk: Option<DiskUsage>,
    pub process_count: Option<usize>,
    pub uptime_secs: Option<u64>,
    /// Human-readable diagnostics accumulated on partial failure.
    pub error: Option<String>,
}

/// One network interface with its primary IPv4 address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    pub ip: Option<String>,
    pub netmask: Option<String>,
    pub is_up: bool,
    /// Link speed in Mbit/s where the OS reports one.
    pub speed_mbps: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transport {
    Tcp,
    Udp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Family {
    V4,
    V6,
}

/// TCP socket states as reported by the kernel socket tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnState {
    Established,
    SynSent,
    SynRecv,
    FinWait1,
    FinWait2,
    TimeWait,
    Close,
    CloseWait,
    LastAck,
    Listen,
    Closing,
    Unknown,
}

impl ConnState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnState::Established => "ESTABLISHED",
            ConnState::SynSent => "SYN_SENT",
            ConnState::SynRecv => "SYN_RECV",
            ConnState::FinWait1 => "FIN_WAIT1",
            ConnState::FinWait2 => "FIN_WAIT2",
            ConnState::TimeWait => "TIME_WAIT",
            ConnState::Close => "CLOSE",
            ConnState::CloseWait => "CLOSE_WAIT",
            ConnState::LastAck => "LAST_ACK",
            ConnState::Listen => "LISTEN",
            ConnState::Closing => "CLOSING",
            ConnState::Unknown => "UNKNOWN",
        }
    }
}

/// One open connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub state: ConnState,
    pub local_address: String,
    pub remote_address: String,
    pub transport: Transport,
    pub family: Family,
}

/// Cumulative per-interface IO counters since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errin: u64,
    pub errout: u64,
    pub dropin: u64,
    pub dropout: u64,
}

/// Point-in-time network state.
///
/// An empty `connections` list can mean either "no connections" or
/// "enumeration denied under restricted privilege"; the two are rendered
/// the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub interfaces: Vec<Interface>,
    pub connections: Vec<Connection>,
    /// Interface name paired with its counters, in enumeration order.
    pub io_counters: Vec<(String, IoCounters)>,
}

impl NetworkSnapshot {
    /// True when no section of the snapshot has anything to show.
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty() && self.connections.is_empty() && self.io_counters.is_empty()
    }
}

/// Result of interpreting one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the dashboard loop and restore the terminal.
    Quit,
    /// Skip the remaining inter-cycle sleep and redraw immediately.
    Refresh,
}
