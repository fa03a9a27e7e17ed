//! One-shot reports behind the CLI info flags.
//!
//! Each function is a pure snapshot-to-text formatter; the binary collects
//! once, prints the requested reports separated by blank lines, and exits
//! without entering the dashboard loop.

use crate::config::{CPU_THRESHOLDS, DISK_THRESHOLDS, MAX_CONNECTIONS, MEMORY_THRESHOLDS};
use crate::fmt::{format_bytes, format_percent, format_uptime};
use crate::model::{ConnState, MetricsSnapshot, NetworkSnapshot};
use crate::tui::style::{Theme, bold, paint, progress_bar};

fn heading(title: &str) -> String {
    format!(
        "{}\n{}",
        bold(paint(title, Theme::ACCENT)),
        paint("─".repeat(50), Theme::DIM),
    )
}

pub fn cpu(metrics: &MetricsSnapshot) -> String {
    let mut out = heading("CPU Information");
    out.push_str(&format!(
        "\nCPU Usage: {}",
        paint(format_percent(metrics.cpu_percent as f64), Theme::ALERT),
    ));
    match metrics.cpu_count {
        Some(count) => out.push_str(&format!("\nCPU Cores: {}", paint(count, Theme::INFO))),
        None => out.push_str("\nCPU Cores: N/A"),
    }
    if let Some((one, five, fifteen)) = metrics.load_avg {
        out.push_str(&format!(
            "\nLoad Average: {}",
            paint(format!("{:.2}, {:.2}, {:.2}", one, five, fifteen), Theme::INFO),
        ));
    }
    out.push_str(&format!(
        "\n\n{}",
        progress_bar(metrics.cpu_percent as f64, 100.0, CPU_THRESHOLDS),
    ));
    out
}

pub fn memory(metrics: &MetricsSnapshot) -> String {
    let mem = &metrics.memory;
    let mut out = heading("Memory Information");
    out.push_str(&format!(
        "\nTotal: {}\nUsed: {}\nAvailable: {}\n\n{}",
        paint(format_bytes(mem.total), Theme::INFO),
        paint(
            format!("{} ({})", format_bytes(mem.used), format_percent(mem.percent)),
            Theme::ALERT
        ),
        paint(format_bytes(mem.available), Theme::OK),
        progress_bar(mem.used as f64, mem.total as f64, MEMORY_THRESHOLDS),
    ));

    if let Some(swap) = &metrics.swap {
        out.push_str(&format!(
            "\n\n{}\nTotal: {}\nUsed: {}\nFree: {}",
            heading("Swap Memory"),
            paint(format_bytes(swap.total), Theme::INFO),
            paint(
                format!("{} ({})", format_bytes(swap.used), format_percent(swap.percent)),
                Theme::ALERT
            ),
            paint(format_bytes(swap.free), Theme::OK),
        ));
    }
    out
}

pub fn disk(metrics: &MetricsSnapshot) -> String {
    let mut out = heading("Disk Information");
    match &metrics.disk {
        Some(disk) => out.push_str(&format!(
            "\nTotal: {}\nUsed: {}\nFree: {}\n\n{}",
            paint(format_bytes(disk.total), Theme::INFO),
            paint(
                format!("{} ({})", format_bytes(disk.used), format_percent(disk.percent)),
                Theme::ALERT
            ),
            paint(format_bytes(disk.free), Theme::OK),
            progress_bar(disk.used as f64, disk.total as f64, DISK_THRESHOLDS),
        )),
        None => out.push_str(&format!(
            "\n{}",
            paint("Disk information not available", Theme::WARNING),
        )),
    }
    out
}

pub fn private_ip(network: &NetworkSnapshot) -> String {
    let mut out = heading("Private IP Addresses");
    if network.interfaces.is_empty() {
        out.push_str(&format!(
            "\n{}",
            paint("No network interfaces found", Theme::WARNING),
        ));
        return out;
    }
    for iface in &network.interfaces {
        let (status, color) = if iface.is_up {
            ("UP", Theme::OK)
        } else {
            ("DOWN", Theme::ALERT)
        };
        out.push_str(&format!(
            "\n{}: {} [{}]",
            iface.name,
            paint(iface.ip.as_deref().unwrap_or("N/A"), Theme::INFO),
            paint(status, color),
        ));
        if let Some(netmask) = &iface.netmask {
            out.push_str(&format!("\n  Netmask: {}", paint(netmask, Theme::DIM)));
        }
    }
    out
}

pub fn public_ip(address: Option<&str>) -> String {
    let mut out = heading("Public IP Address");
    match address {
        Some(ip) => out.push_str(&format!("\nPublic IP: {}", paint(ip, Theme::INFO))),
        None => out.push_str(&format!(
            "\n{}\n{}",
            paint("Could not retrieve public IP address", Theme::ALERT),
            paint("(check internet connection)", Theme::DIM),
        )),
    }
    out
}

pub fn network(network: &NetworkSnapshot) -> String {
    let mut out = heading("Network Information");

    if network.is_empty() {
        out.push_str(&format!(
            "\n{}",
            paint("No network data available", Theme::WARNING),
        ));
        return out;
    }

    if !network.interfaces.is_empty() {
        out.push_str(&format!("\n{}", bold("Interfaces:")));
        for iface in &network.interfaces {
            let (status, color) = if iface.is_up {
                ("UP", Theme::OK)
            } else {
                ("DOWN", Theme::ALERT)
            };
            out.push_str(&format!(
                "\n  {}: {} [{}]",
                iface.name,
                paint(iface.ip.as_deref().unwrap_or("N/A"), Theme::INFO),
                paint(status, color),
            ));
        }
    }

    if !network.connections.is_empty() {
        out.push_str(&format!(
            "\n{} {}",
            bold("Active Connections:"),
            network.connections.len(),
        ));
        for conn in network.connections.iter().take(MAX_CONNECTIONS) {
            let state_color = if conn.state == ConnState::Established {
                Theme::INFO
            } else {
                Theme::WARNING
            };
            out.push_str(&format!(
                "\n  {} {} -> {}",
                paint(conn.state.as_str(), state_color),
                conn.local_address,
                conn.remote_address,
            ));
        }
    }

    out
}

pub fn stats(metrics: &MetricsSnapshot) -> String {
    let mut out = heading("System Statistics");
    let cores = metrics
        .cpu_count
        .map(|c| c.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    out.push_str(&format!(
        "\nCPU: {} ({} cores)\nMemory: {} ({} / {})",
        paint(format_percent(metrics.cpu_percent as f64), Theme::ALERT),
        paint(cores, Theme::INFO),
        paint(format_percent(metrics.memory.percent), Theme::ALERT),
        format_bytes(metrics.memory.used),
        format_bytes(metrics.memory.total),
    ));
    if let Some(disk) = &metrics.disk {
        out.push_str(&format!(
            "\nDisk: {} ({} / {})",
            paint(format_percent(disk.percent), Theme::ALERT),
            format_bytes(disk.used),
            format_bytes(disk.total),
        ));
    }
    if let Some(uptime_secs) = metrics.uptime_secs {
        out.push_str(&format!(
            "\nUptime: {}",
            paint(format_uptime(uptime_secs), Theme::INFO),
        ));
    }
    if let Some(count) = metrics.process_count {
        out.push_str(&format!("\nProcesses: {}", paint(count, Theme::INFO)));
    }
    out
}

pub fn uptime(metrics: &MetricsSnapshot) -> String {
    let mut out = heading("System Uptime");
    match metrics.uptime_secs {
        Some(secs) => out.push_str(&format!(
            "\nUptime: {}",
            paint(format_uptime(secs), Theme::INFO),
        )),
        None => out.push_str(&format!(
            "\n{}",
            paint("Uptime information not available", Theme::WARNING),
        )),
    }
    out
}
