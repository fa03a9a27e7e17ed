//! sysglance - terminal dashboard for host metrics.
//!
//! Usage:
//!   sysglance              # interactive dashboard, 1.5s refresh
//!   sysglance -c           # CPU report only
//!   sysglance -c -m        # CPU and memory reports
//!   sysglance -p           # public IP (network lookup)
//!   sysglance --version    # print version and exit

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sysglance::collector::MetricsCollector;
use sysglance::tui::{Dashboard, TerminalPoller};
use sysglance::{public_ip, report};

/// Terminal dashboard for host metrics.
#[derive(Parser)]
#[command(name = "sysglance", version, about = "Host metrics dashboard")]
struct Args {
    /// Display CPU information only.
    #[arg(short = 'c', long = "cpu")]
    cpu: bool,

    /// Display memory information only.
    #[arg(short = 'm', long = "memory")]
    memory: bool,

    /// Display disk information only.
    #[arg(short = 'd', long = "disk")]
    disk: bool,

    /// Display private IP address(es).
    #[arg(short = 'i', long = "ip")]
    ip: bool,

    /// Display public IP address (requires internet).
    #[arg(short = 'p', long = "public-ip")]
    public_ip: bool,

    /// Display network interfaces and connections.
    #[arg(short = 'n', long = "network")]
    network: bool,

    /// Display system statistics summary.
    #[arg(short = 's', long = "stats")]
    stats: bool,

    /// Display system uptime.
    #[arg(short = 'u', long = "uptime")]
    uptime: bool,
}

impl Args {
    fn any_info_flag(&self) -> bool {
        self.cpu
            || self.memory
            || self.disk
            || self.ip
            || self.public_ip
            || self.network
            || self.stats
            || self.uptime
    }
}

fn main() {
    // Diagnostics go to stderr so they never corrupt the dashboard frame.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    if args.any_info_flag() {
        print_reports(&args);
        return;
    }

    let collector = MetricsCollector::new();
    let dashboard = Dashboard::new(Box::new(collector), Box::new(TerminalPoller::new()));
    if let Err(e) = dashboard.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Prints the requested one-shot reports in flag order, separated by blank
/// lines, without entering the loop.
fn print_reports(args: &Args) {
    let mut collector = MetricsCollector::new();

    let needs_metrics = args.cpu || args.memory || args.disk || args.stats || args.uptime;
    let metrics = if needs_metrics {
        collector.collect()
    } else {
        Default::default()
    };
    let network = if args.ip || args.network {
        collector.collect_network()
    } else {
        Default::default()
    };

    let mut reports: Vec<String> = Vec::new();
    if args.cpu {
        reports.push(report::cpu(&metrics));
    }
    if args.memory {
        reports.push(report::memory(&metrics));
    }
    if args.disk {
        reports.push(report::disk(&metrics));
    }
    if args.ip {
        reports.push(report::private_ip(&network));
    }
    if args.public_ip {
        let address = public_ip::lookup();
        reports.push(report::public_ip(address.as_deref()));
    }
    if args.network {
        reports.push(report::network(&network));
    }
    if args.stats {
        reports.push(report::stats(&metrics));
    }
    if args.uptime {
        reports.push(report::uptime(&metrics));
    }

    println!("{}", reports.join("\n\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_version_contains_configured_version() {
        let rendered = Args::command().render_version();
        assert!(rendered.contains(env!("CARGO_PKG_VERSION")));
        assert!(rendered.contains("sysglance"));
    }

    #[test]
    fn test_info_flags_combine() {
        let args = Args::parse_from(["sysglance", "-c", "-m"]);
        assert!(args.cpu && args.memory);
        assert!(args.any_info_flag());

        let args = Args::parse_from(["sysglance"]);
        assert!(!args.any_info_flag());
    }

    #[test]
    fn test_unknown_flag_is_a_parse_error() {
        assert!(Args::try_parse_from(["sysglance", "--bogus"]).is_err());
    }
}
