//! Frame rendering.
//!
//! `render` is a pure function from the two snapshots (plus terminal width
//! and wall-clock time) to the full frame text. It performs no IO; the loop
//! owns the screen.

use chrono::{DateTime, Local};

use crate::config::{
    CPU_THRESHOLDS, DISK_THRESHOLDS, MAX_CONNECTIONS_DISPLAY, MAX_INTERFACES_DISPLAY,
    MAX_IO_COUNTERS_DISPLAY, MEMORY_THRESHOLDS, MIN_RENDER_WIDTH, REFRESH_INTERVAL,
};
use crate::fmt::{format_bytes, format_uptime};
use crate::model::{ConnState, MetricsSnapshot, NetworkSnapshot};

use super::style::{Theme, bold, paint, progress_bar};

/// Renders one dashboard frame.
pub fn render(
    metrics: &MetricsSnapshot,
    network: &NetworkSnapshot,
    width: u16,
    now: DateTime<Local>,
) -> String {
    let width = width.max(MIN_RENDER_WIDTH) as usize;

    let mut frame = String::new();
    frame.push_str(&banner(width));
    frame.push('\n');
    frame.push_str(&section("System Information", '●', Theme::ACCENT, width, &system_section(metrics)));
    frame.push('\n');
    frame.push_str(&section("Network Information", '▲', Theme::INFO, width, &network_section(network)));
    frame.push('\n');
    frame.push_str(&footer(width, now));
    frame
}

/// Banner sized to the terminal width, never below the minimum.
fn banner(width: usize) -> String {
    let border = format!("◆{}◆", "━".repeat(width.saturating_sub(2)));
    let title = "S Y S G L A N C E";
    let subtitle = "Host Metrics Dashboard";
    format!(
        "{}\n{}\n{}\n{}\n",
        paint(&border, Theme::ACCENT),
        bold(paint(center(title, width), Theme::ACCENT)),
        paint(center(subtitle, width), Theme::DIM),
        paint(&border, Theme::ACCENT),
    )
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn section(title: &str, symbol: char, color: crossterm::style::Color, width: usize, content: &str) -> String {
    format!(
        "{} {}\n{}\n{}",
        paint(symbol, color),
        bold(title),
        paint("─".repeat(width), Theme::DIM),
        content,
    )
}

fn system_section(metrics: &MetricsSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "  {}\n    {}\n\n",
        bold("CPU Usage:"),
        progress_bar(metrics.cpu_percent as f64, 100.0, CPU_THRESHOLDS),
    ));

    out.push_str(&format!(
        "  {} {} / {}\n    {}\n\n",
        bold("Memory:"),
        format_bytes(metrics.memory.used),
        format_bytes(metrics.memory.total),
        progress_bar(
            metrics.memory.used as f64,
            metrics.memory.total as f64,
            MEMORY_THRESHOLDS
        ),
    ));

    match &metrics.disk {
        Some(disk) => out.push_str(&format!(
            "  {} {} / {}\n    {}\n\n",
            bold("Disk Usage:"),
            format_bytes(disk.used),
            format_bytes(disk.total),
            progress_bar(disk.used as f64, disk.total as f64, DISK_THRESHOLDS),
        )),
        None => out.push_str(&format!(
            "  {} {}\n\n",
            bold("Disk Usage:"),
            paint("not available", Theme::WARNING),
        )),
    }

    if let Some(uptime) = metrics.uptime_secs {
        out.push_str(&format!(
            "  {} {}\n",
            bold("Uptime:"),
            paint(format_uptime(uptime), Theme::INFO),
        ));
    }

    if let Some(count) = metrics.process_count {
        out.push_str(&format!(
            "  {} {}\n",
            bold("Running Processes:"),
            paint(count, Theme::INFO),
        ));
    }

    if let Some((one, five, fifteen)) = metrics.load_avg {
        out.push_str(&format!(
            "  {} {}\n",
            bold("Load Average:"),
            paint(format!("{:.2}, {:.2}, {:.2}", one, five, fifteen), Theme::INFO),
        ));
    }

    if let Some(error) = &metrics.error {
        out.push_str(&format!(
            "  {} {}\n",
            bold("Degraded:"),
            paint(error, Theme::WARNING),
        ));
    }

    out
}

fn network_section(network: &NetworkSnapshot) -> String {
    if network.is_empty() {
        return format!("  {}\n", paint("No network data available", Theme::WARNING));
    }

    let mut out = String::new();

    if !network.interfaces.is_empty() {
        out.push_str(&format!("  {}\n", bold("Network Interfaces:")));
        for iface in network.interfaces.iter().take(MAX_INTERFACES_DISPLAY) {
            let ip = iface.ip.as_deref().unwrap_or("N/A");
            let note = if iface.is_up && iface.name != "lo" {
                paint("  <- private IP", Theme::DIM)
            } else {
                String::new()
            };
            out.push_str(&format!(
                "    {} {}: {}{}\n",
                paint('●', Theme::ALERT),
                iface.name,
                paint(ip, Theme::INFO),
                note,
            ));
        }
    }

    if !network.connections.is_empty() {
        out.push_str(&format!(
            "  {} {}\n",
            bold("Active Connections:"),
            network.connections.len(),
        ));
        for conn in network.connections.iter().take(MAX_CONNECTIONS_DISPLAY) {
            let state_color = if conn.state == ConnState::Established {
                Theme::INFO
            } else {
                Theme::WARNING
            };
            out.push_str(&format!(
                "    {} {} -> {}\n",
                paint(conn.state.as_str(), state_color),
                conn.local_address,
                conn.remote_address,
            ));
        }
    }

    for (name, counters) in network.io_counters.iter().take(MAX_IO_COUNTERS_DISPLAY) {
        out.push_str(&format!(
            "  {} ↑ {} ↓ {}\n",
            bold(format!("{}:", name)),
            paint(format_bytes(counters.bytes_sent), Theme::ALERT),
            paint(format_bytes(counters.bytes_recv), Theme::INFO),
        ));
    }

    out
}

fn footer(width: usize, now: DateTime<Local>) -> String {
    let separator = paint("═".repeat(width), Theme::DIM);
    let help = format!(
        "Press 'q' to quit | 'r' to refresh | Auto-refresh every {:.1}s | {}",
        REFRESH_INTERVAL.as_secs_f64(),
        now.format("%H:%M:%S"),
    );
    format!(
        "{}\n{}\n{}\n",
        separator,
        paint(center(&help, width), Theme::INFO),
        separator,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, DiskUsage, Family, Interface, MemoryUsage, Transport};

    fn metrics() -> MetricsSnapshot {
        MetricsSnapshot {
            cpu_percent: 12.5,
            cpu_count: Some(8),
            load_avg: Some((0.5, 0.4, 0.3)),
            memory: MemoryUsage {
                total: 16 * 1024 * 1024 * 1024,
                used: 8 * 1024 * 1024 * 1024,
                available: 8 * 1024 * 1024 * 1024,
                percent: 50.0,
            },
            swap: None,
            disk: Some(DiskUsage {
                total: 500 * 1024 * 1024 * 1024,
                used: 50 * 1024 * 1024 * 1024,
                free: 450 * 1024 * 1024 * 1024,
                percent: 10.0,
            }),
            process_count: Some(312),
            uptime_secs: Some(2 * 86400 + 5 * 3600),
            error: None,
        }
    }

    #[test]
    fn test_render_contains_sections_and_footer() {
        let frame = render(&metrics(), &NetworkSnapshot::default(), 100, Local::now());
        assert!(frame.contains("System Information"));
        assert!(frame.contains("Network Information"));
        assert!(frame.contains("Press 'q' to quit"));
        assert!(frame.contains("2d 5h"));
        assert!(frame.contains("312"));
    }

    #[test]
    fn test_render_empty_network_has_explicit_message() {
        let frame = render(&metrics(), &NetworkSnapshot::default(), 100, Local::now());
        assert!(frame.contains("No network data available"));
    }

    #[test]
    fn test_render_zero_total_memory_is_zero_percent() {
        let mut m = metrics();
        m.memory = MemoryUsage::default();
        let frame = render(&m, &NetworkSnapshot::default(), 100, Local::now());
        assert!(frame.contains("0.0%"));
    }

    #[test]
    fn test_render_missing_disk_degrades() {
        let mut m = metrics();
        m.disk = None;
        let frame = render(&m, &NetworkSnapshot::default(), 100, Local::now());
        assert!(frame.contains("not available"));
    }

    #[test]
    fn test_render_error_string_is_displayed() {
        let mut m = metrics();
        m.error = Some("disk usage unavailable".to_string());
        let frame = render(&m, &NetworkSnapshot::default(), 100, Local::now());
        assert!(frame.contains("disk usage unavailable"));
    }

    #[test]
    fn test_render_network_sections() {
        let network = NetworkSnapshot {
            interfaces: vec![Interface {
                name: "eth0".to_string(),
                ip: Some("192.168.1.2".to_string()),
                netmask: Some("255.255.255.0".to_string()),
                is_up: true,
                speed_mbps: Some(1000),
            }],
            connections: vec![Connection {
                state: ConnState::Established,
                local_address: "192.168.1.2:41394".to_string(),
                remote_address: "34.216.184.93:443".to_string(),
                transport: Transport::Tcp,
                family: Family::V4,
            }],
            io_counters: vec![(
                "eth0".to_string(),
                crate::model::IoCounters {
                    bytes_sent: 31_457_280,
                    bytes_recv: 73_400_320,
                    ..Default::default()
                },
            )],
        };
        let frame = render(&metrics(), &network, 100, Local::now());
        assert!(frame.contains("eth0"));
        assert!(frame.contains("192.168.1.2"));
        assert!(frame.contains("ESTABLISHED"));
        assert!(frame.contains("34.216.184.93:443"));
        assert!(frame.contains("30.00 MB"));
        assert!(frame.contains("70.00 MB"));
        assert!(!frame.contains("No network data available"));
    }

    #[test]
    fn test_render_width_floor() {
        // A 20-column terminal still lays out against the minimum width.
        let narrow = render(&metrics(), &NetworkSnapshot::default(), 20, Local::now());
        let floor = render(
            &metrics(),
            &NetworkSnapshot::default(),
            MIN_RENDER_WIDTH,
            Local::now(),
        );
        assert_eq!(narrow.lines().count(), floor.lines().count());
    }
}
