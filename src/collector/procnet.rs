//! Parsers for the kernel network tables under `/proc/net`.
//!
//! Pure functions over file content, designed to be testable with string
//! inputs. Malformed rows are skipped rather than failing the whole table:
//! the collector contract is degradation, not propagation.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::model::{ConnState, Connection, Family, IoCounters, Transport};

/// Error type for parse failures of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parses `/proc/net/dev` into per-interface cumulative IO counters.
///
/// The two header lines are skipped; each remaining row is
/// `name: rx_bytes rx_packets rx_errs rx_drop ... tx_bytes tx_packets tx_errs tx_drop ...`.
/// Rows that do not follow the layout are ignored.
pub fn parse_net_dev(content: &str) -> Vec<(String, IoCounters)> {
    let mut counters = Vec::new();

    for line in content.lines().skip(2) {
        let Some((name, rest)) = line.split_once(':') else {
            continue;
        };
        let fields: Vec<u64> = rest
            .split_whitespace()
            .map(|f| f.parse().unwrap_or(0))
            .collect();
        if fields.len() < 12 {
            continue;
        }
        counters.push((
            name.trim().to_string(),
            IoCounters {
                bytes_recv: fields[0],
                packets_recv: fields[1],
                errin: fields[2],
                dropin: fields[3],
                bytes_sent: fields[8],
                packets_sent: fields[9],
                errout: fields[10],
                dropout: fields[11],
            },
        ));
    }

    counters
}

/// Parses one of `/proc/net/{tcp,tcp6,udp,udp6}` into connections.
///
/// The header line is skipped; rows that fail to decode are dropped.
pub fn parse_socket_table(
    content: &str,
    transport: Transport,
    family: Family,
) -> Vec<Connection> {
    content
        .lines()
        .skip(1)
        .filter_map(|line| parse_socket_row(line, transport, family).ok())
        .collect()
}

/// Decodes a single socket table row.
///
/// Row layout: `sl local_address rem_address st tx_queue:rx_queue ...`
/// with addresses as kernel-endian hex and the state as a hex byte.
fn parse_socket_row(
    line: &str,
    transport: Transport,
    family: Family,
) -> Result<Connection, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ParseError::new("not enough fields in socket row"));
    }

    let local_address = parse_hex_endpoint(fields[1], family)?;
    let remote_address = parse_hex_endpoint(fields[2], family)?;
    let state_code = u8::from_str_radix(fields[3], 16)
        .map_err(|_| ParseError::new(format!("invalid state '{}'", fields[3])))?;

    Ok(Connection {
        state: conn_state_from_code(state_code),
        local_address,
        remote_address,
        transport,
        family,
    })
}

/// Decodes a `ADDR:PORT` hex endpoint into `ip:port` display form.
///
/// IPv4 addresses are one 32-bit word, IPv6 four, each printed by the
/// kernel in native byte order.
fn parse_hex_endpoint(field: &str, family: Family) -> Result<String, ParseError> {
    let (addr_hex, port_hex) = field
        .split_once(':')
        .ok_or_else(|| ParseError::new(format!("missing port in '{}'", field)))?;
    let port = u16::from_str_radix(port_hex, 16)
        .map_err(|_| ParseError::new(format!("invalid port '{}'", port_hex)))?;

    match family {
        Family::V4 => {
            if addr_hex.len() != 8 {
                return Err(ParseError::new(format!("bad v4 address '{}'", addr_hex)));
            }
            let word = u32::from_str_radix(addr_hex, 16)
                .map_err(|_| ParseError::new(format!("invalid v4 address '{}'", addr_hex)))?;
            let ip = Ipv4Addr::from(word.to_le_bytes());
            Ok(format!("{}:{}", ip, port))
        }
        Family::V6 => {
            if addr_hex.len() != 32 {
                return Err(ParseError::new(format!("bad v6 address '{}'", addr_hex)));
            }
            let mut octets = [0u8; 16];
            for (i, chunk) in addr_hex.as_bytes().chunks(8).enumerate() {
                let s = std::str::from_utf8(chunk)
                    .map_err(|_| ParseError::new("non-utf8 v6 address"))?;
                let word = u32::from_str_radix(s, 16)
                    .map_err(|_| ParseError::new(format!("invalid v6 word '{}'", s)))?;
                octets[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
            }
            let ip = Ipv6Addr::from(octets);
            Ok(format!("[{}]:{}", ip, port))
        }
    }
}

/// Maps the kernel TCP state byte to [`ConnState`].
fn conn_state_from_code(code: u8) -> ConnState {
    match code {
        0x01 => ConnState::Established,
        0x02 => ConnState::SynSent,
        0x03 => ConnState::SynRecv,
        0x04 => ConnState::FinWait1,
        0x05 => ConnState::FinWait2,
        0x06 => ConnState::TimeWait,
        0x07 => ConnState::Close,
        0x08 => ConnState::CloseWait,
        0x09 => ConnState::LastAck,
        0x0A => ConnState::Listen,
        0x0B => ConnState::Closing,
        _ => ConnState::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo: 1000000   10000    0    0    0     0          0         0  1000000   10000    0    0    0     0       0          0
  eth0: 5000000   40000    2    1    0     0          0         0  2500000   20000    3    4    0     0       0          0
";

    #[test]
    fn test_parse_net_dev() {
        let counters = parse_net_dev(NET_DEV);
        assert_eq!(counters.len(), 2);

        let (name, lo) = &counters[0];
        assert_eq!(name, "lo");
        assert_eq!(lo.bytes_recv, 1_000_000);
        assert_eq!(lo.bytes_sent, 1_000_000);

        let (name, eth0) = &counters[1];
        assert_eq!(name, "eth0");
        assert_eq!(eth0.bytes_recv, 5_000_000);
        assert_eq!(eth0.packets_recv, 40_000);
        assert_eq!(eth0.errin, 2);
        assert_eq!(eth0.dropin, 1);
        assert_eq!(eth0.bytes_sent, 2_500_000);
        assert_eq!(eth0.packets_sent, 20_000);
        assert_eq!(eth0.errout, 3);
        assert_eq!(eth0.dropout, 4);
    }

    #[test]
    fn test_parse_net_dev_skips_malformed() {
        let content = "header\nheader\ngarbage line without colon\n  eth1: 1 2\n";
        assert!(parse_net_dev(content).is_empty());
    }

    const TCP_TABLE: &str = "\
  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode
   0: 0100007F:1F90 00000000:0000 0A 00000000:00000000 00:00000000 00000000  1000        0 12345 1
   1: 0201A8C0:A1B2 5DB8D822:01BB 01 00000000:00000000 00:00000000 00000000  1000        0 12346 1
";

    #[test]
    fn test_parse_tcp_table() {
        let conns = parse_socket_table(TCP_TABLE, Transport::Tcp, Family::V4);
        assert_eq!(conns.len(), 2);

        assert_eq!(conns[0].state, ConnState::Listen);
        assert_eq!(conns[0].local_address, "127.0.0.1:8080");
        assert_eq!(conns[0].remote_address, "0.0.0.0:0");
        assert_eq!(conns[0].transport, Transport::Tcp);

        assert_eq!(conns[1].state, ConnState::Established);
        assert_eq!(conns[1].local_address, "192.168.1.2:41394");
        assert_eq!(conns[1].remote_address, "34.216.184.93:443");
    }

    #[test]
    fn test_parse_tcp6_loopback() {
        let content = "\
  sl  local_address                         remote_address                        st ...
   0: 00000000000000000000000001000000:1F90 00000000000000000000000000000000:0000 0A 00000000:00000000 00:00000000 00000000  1000 0 1 1
";
        let conns = parse_socket_table(content, Transport::Tcp, Family::V6);
        assert_eq!(conns.len(), 1);
        assert_eq!(conns[0].local_address, "[::1]:8080");
        assert_eq!(conns[0].family, Family::V6);
    }

    #[test]
    fn test_parse_socket_table_skips_bad_rows() {
        let content = "header\nnot a socket row\n   0: ZZZZZZZZ:0000 00000000:0000 01 x\n";
        assert!(parse_socket_table(content, Transport::Tcp, Family::V4).is_empty());
    }

    #[test]
    fn test_state_codes() {
        assert_eq!(conn_state_from_code(0x01), ConnState::Established);
        assert_eq!(conn_state_from_code(0x06), ConnState::TimeWait);
        assert_eq!(conn_state_from_code(0x0B), ConnState::Closing);
        assert_eq!(conn_state_from_code(0xFF), ConnState::Unknown);
    }
}
