//! Best-effort public IP lookup.
//!
//! Tries an ordered list of JSON echo services with a short per-attempt
//! timeout, short-circuiting on the first success. All services failing is
//! reported as absence, not as an error.

use serde_json::Value;
use tracing::debug;

use crate::config::PUBLIC_IP_TIMEOUT;

/// Services tried in order, with the JSON key carrying the address.
const SERVICES: [(&str, &str); 3] = [
    ("https://api.ipify.org?format=json", "ip"),
    ("https://httpbin.org/ip", "origin"),
    ("https://api.myip.com", "ip"),
];

/// Returns the external IP address, or `None` if every service failed.
pub fn lookup() -> Option<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(PUBLIC_IP_TIMEOUT)
        .build()
        .ok()?;

    for (url, key) in SERVICES {
        match client.get(url).send().and_then(|r| r.json::<Value>()) {
            Ok(body) => {
                if let Some(ip) = extract_ip(&body, key) {
                    return Some(ip);
                }
                debug!("{}: no '{}' field in response", url, key);
            }
            Err(e) => debug!("{}: {}", url, e),
        }
    }

    None
}

/// Pulls a non-empty string out of the given key.
fn extract_ip(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
