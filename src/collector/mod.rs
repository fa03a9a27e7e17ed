//! Point-in-time metric collection.
//!
//! `MetricsCollector` wraps the OS-metrics layer (`sysinfo` plus the
//! `/proc/net` tables) and returns immutable snapshots. Collection never
//! fails hard: a metric that cannot be obtained is omitted from the snapshot
//! and noted in its diagnostic string, and the renderer degrades the
//! affected section.

pub mod mock;
pub mod procnet;
pub mod traits;

use std::path::{Path, PathBuf};
use std::thread;

use sysinfo::{Disks, MINIMUM_CPU_UPDATE_INTERVAL, Networks, ProcessesToUpdate, System};
use tracing::debug;

use crate::config::MAX_CONNECTIONS;
use crate::fmt::format_netmask;
use crate::model::{
    Connection, DiskUsage, Family, Interface, IoCounters, MemoryUsage, MetricsSnapshot,
    NetworkSnapshot, SwapUsage, Transport,
};
use traits::{FileSystem, RealFs};

/// Something the dashboard loop can poll for fresh snapshots.
///
/// The loop only ever sees this trait, so tests can script a source that
/// counts calls or returns fixed data.
pub trait SnapshotSource {
    fn metrics(&mut self) -> MetricsSnapshot;
    fn network(&mut self) -> NetworkSnapshot;
}

/// Collector over the real OS. One instance is reused across cycles so CPU
/// deltas have a baseline, but every snapshot it hands out is independent.
pub struct MetricsCollector<F: FileSystem = RealFs> {
    sys: System,
    disks: Disks,
    networks: Networks,
    fs: F,
    proc_root: PathBuf,
    sys_class_net: PathBuf,
}

impl MetricsCollector<RealFs> {
    pub fn new() -> Self {
        Self::with_fs(RealFs::new(), "/proc")
    }
}

impl Default for MetricsCollector<RealFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> MetricsCollector<F> {
    /// Creates a collector reading kernel tables through `fs` under
    /// `proc_root`. Used with [`mock::MockFs`] in tests.
    pub fn with_fs(fs: F, proc_root: impl Into<PathBuf>) -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            fs,
            proc_root: proc_root.into(),
            sys_class_net: PathBuf::from("/sys/class/net"),
        }
    }

    /// Collects one system snapshot.
    ///
    /// Blocks briefly (the minimum CPU sampling window) so that the first
    /// reading after process start is meaningful rather than trivially zero.
    pub fn collect(&mut self) -> MetricsSnapshot {
        let mut errors: Vec<String> = Vec::new();

        // CPU usage needs two refreshes separated by a short window.
        self.sys.refresh_cpu_all();
        thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        self.sys.refresh_cpu_all();
        let cpu_percent = self.sys.global_cpu_usage().clamp(0.0, 100.0);

        let cpu_count = match self.sys.cpus().len() {
            0 => None,
            n => Some(n),
        };

        let load_avg = if cfg!(windows) {
            // No run-queue average concept; absence is not an error.
            None
        } else {
            let l = System::load_average();
            Some((l.one, l.five, l.fifteen))
        };

        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        let available = self.sys.available_memory();
        let used = total.saturating_sub(available);
        let memory = MemoryUsage {
            total,
            used,
            available,
            percent: percent_of(used, total),
        };

        let swap_total = self.sys.total_swap();
        let swap = if swap_total > 0 {
            let swap_used = self.sys.used_swap();
            Some(SwapUsage {
                total: swap_total,
                used: swap_used,
                free: self.sys.free_swap(),
                percent: percent_of(swap_used, swap_total),
            })
        } else {
            None
        };

        self.disks.refresh(false);
        let disk = match primary_disk_usage(&self.disks) {
            Some(d) => Some(d),
            None => {
                errors.push("disk usage unavailable".to_string());
                None
            }
        };

        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        let process_count = match self.sys.processes().len() {
            0 => None,
            n => Some(n),
        };

        let uptime_secs = match System::uptime() {
            0 => None,
            s => Some(s),
        };

        MetricsSnapshot {
            cpu_percent,
            cpu_count,
            load_avg,
            memory,
            swap,
            disk,
            process_count,
            uptime_secs,
            error: if errors.is_empty() {
                None
            } else {
                Some(errors.join("; "))
            },
        }
    }

    /// Collects one network snapshot.
    ///
    /// Connection enumeration may legitimately come back empty under
    /// restricted privilege or on platforms without `/proc`; that is
    /// indistinguishable from "no connections" in the snapshot itself.
    pub fn collect_network(&mut self) -> NetworkSnapshot {
        self.networks.refresh(true);

        let mut interfaces: Vec<Interface> = self
            .networks
            .list()
            .iter()
            .filter_map(|(name, data)| {
                // Only interfaces with an IPv4 address are listed, like the
                // dashboard's private-IP section expects.
                let ipv4 = data.ip_networks().iter().find(|n| n.addr.is_ipv4())?;
                Some(Interface {
                    name: name.clone(),
                    ip: Some(ipv4.addr.to_string()),
                    netmask: Some(format_netmask(ipv4.prefix)),
                    is_up: self.interface_is_up(name),
                    speed_mbps: self.interface_speed(name),
                })
            })
            .collect();
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));

        let mut connections = Vec::new();
        for (file, transport, family) in [
            ("net/tcp", Transport::Tcp, Family::V4),
            ("net/tcp6", Transport::Tcp, Family::V6),
            ("net/udp", Transport::Udp, Family::V4),
            ("net/udp6", Transport::Udp, Family::V6),
        ] {
            let path = self.proc_root.join(file);
            match self.fs.read_to_string(&path) {
                Ok(content) => {
                    connections.extend(procnet::parse_socket_table(&content, transport, family));
                }
                Err(e) => debug!("skipping {}: {}", path.display(), e),
            }
            if connections.len() >= MAX_CONNECTIONS {
                break;
            }
        }
        connections.truncate(MAX_CONNECTIONS);

        let io_counters = match self.fs.read_to_string(&self.proc_root.join("net/dev")) {
            Ok(content) => procnet::parse_net_dev(&content),
            Err(e) => {
                debug!("io counters unavailable: {}", e);
                Vec::new()
            }
        };

        NetworkSnapshot {
            interfaces,
            connections,
            io_counters,
        }
    }

    /// Operational state from `/sys/class/net/<name>/operstate`.
    ///
    /// Loopback and tunnel devices report "unknown" while carrying traffic,
    /// so only an explicit "down" counts as down. Missing file (non-Linux)
    /// falls back to up.
    fn interface_is_up(&self, name: &str) -> bool {
        let path = self.sys_class_net.join(name).join("operstate");
        match self.fs.read_to_string(&path) {
            Ok(state) => state.trim() != "down",
            Err(_) => true,
        }
    }

    /// Link speed in Mbit/s where the driver reports one.
    fn interface_speed(&self, name: &str) -> Option<u64> {
        let path = self.sys_class_net.join(name).join("speed");
        let content = self.fs.read_to_string(&path).ok()?;
        // Virtual devices report -1.
        content.trim().parse::<i64>().ok().filter(|s| *s > 0).map(|s| s as u64)
    }
}

impl<F: FileSystem> SnapshotSource for MetricsCollector<F> {
    fn metrics(&mut self) -> MetricsSnapshot {
        self.collect()
    }

    fn network(&mut self) -> NetworkSnapshot {
        self.collect_network()
    }
}

fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

/// Usage of the primary volume.
///
/// POSIX targets probe the root filesystem. Drive-letter targets probe the
/// boot drive first and substitute the first other volume only when that
/// probe fails; volumes are never aggregated.
fn primary_disk_usage(disks: &Disks) -> Option<DiskUsage> {
    let list = disks.list();
    let disk = if cfg!(windows) {
        let boot = Path::new("C:\\");
        list.iter()
            .find(|d| d.mount_point() == boot)
            .or_else(|| list.iter().find(|d| d.mount_point() != boot))
    } else {
        list.iter().find(|d| d.mount_point() == Path::new("/"))
    }?;

    let total = disk.total_space();
    let free = disk.available_space();
    let used = total.saturating_sub(free);
    Some(DiskUsage {
        total,
        used,
        free,
        percent: percent_of(used, total),
    })
}
