//! Fixed line patterns for nmcli's human-readable tables.
//!
//! Every scanning operation tests each output line against exactly one of
//! these. A line matches in full or is skipped; there is no fallback
//! pattern. Column boundaries are whitespace runs and every captured text
//! field is trimmed before it lands in a record.

use regex::{Captures, Regex};
use tracing::{debug, warn};

use super::types::{Connection, Device, Wifi};

lazy_static::lazy_static! {
    /// `GENERAL.STATE:` then the numeric state code, then a parenthesised
    /// label: `GENERAL.STATE:   100 (connected)`.
    pub static ref DEVICE_SHOW_STATE: Regex =
        Regex::new(r"^GENERAL\.STATE:\s+([0-9.]+)\s\(.+\)$").unwrap();

    /// `DEVICE TYPE STATE CONNECTION`. TYPE is `[a-z-]+`, STATE is one of
    /// `connected`, `disconnected`, `unmanaged`; CONNECTION is the rest of
    /// the line.
    pub static ref DEVICE_STATUS_ROW: Regex =
        Regex::new(r"^(.*)\s+([a-z-]+)\s+(connected|disconnected|unmanaged)\s+(.*)$").unwrap();

    /// `NAME UUID TYPE DEVICE` with UUID in 8-4-4-4-12 lowercase form.
    pub static ref ACTIVE_CONNECTION_ROW: Regex = Regex::new(
        r"^(.*)\s+([a-z0-9]{8}-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{12})\s+([a-z-]+)\s+(.*)$"
    )
    .unwrap();

    /// `IP4.DNS[1]:` then a dotted quad. Only index 1 is recognised.
    pub static ref DHCP_DNS_LINE: Regex =
        Regex::new(r"^IP4\.DNS\[1\]:\s+([0-9.]+)$").unwrap();

    /// `IN-USE BSSID SSID MODE CHAN RATE SIGNAL BARS SECURITY`:
    /// IN-USE is `*` or blank, BSSID is 17 chars of uppercase hex and colons,
    /// MODE is a capitalised word, CHAN 1-3 digits, RATE a number plus unit,
    /// SIGNAL 1-2 digits, BARS asterisks, SECURITY uppercase tokens and dots.
    pub static ref WIFI_LIST_ROW: Regex = Regex::new(
        r"^(\*?)\s+([A-Z0-9:]{17})\s+(.+)\s+([A-Z][a-z]+)\s+([0-9]{1,3})\s+([0-9]+\s[a-zA-Z/]+)\s+([0-9]{1,2})\s+(\**)\s+([A-Z0-9.\s]+)$"
    )
    .unwrap();
}

fn group(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Lines of `output` that match `pattern`, in order; the rest are skipped
fn scan<'a>(output: &'a str, pattern: &Regex, what: &str) -> Vec<Captures<'a>> {
    let mut skipped = 0usize;
    let rows: Vec<Captures<'a>> = output
        .lines()
        .filter_map(|line| {
            let caps = pattern.captures(line);
            if caps.is_none() {
                skipped += 1;
            }
            caps
        })
        .collect();

    debug!("{}: {} lines matched, {} skipped", what, rows.len(), skipped);
    rows
}

/// Numeric columns soft-fail to zero
fn number(caps: &Captures<'_>, index: usize, column: &str) -> i32 {
    let raw = group(caps, index);
    raw.parse::<i32>().unwrap_or_else(|e| {
        warn!("Unparseable {} column {:?}: {}", column, raw, e);
        0
    })
}

/// State of device `name` from `nmcli device show <name>`.
///
/// Only `name` and `state` are filled in; the first matching line wins.
pub fn parse_device_show(output: &str, name: &str) -> Option<Device> {
    scan(output, &DEVICE_SHOW_STATE, "device show")
        .into_iter()
        .next()
        .map(|caps| Device {
            name: name.trim().to_string(),
            state: group(&caps, 1),
            ..Default::default()
        })
}

/// First `nmcli device status` row whose TYPE column is `device_type`
pub fn parse_device_status(output: &str, device_type: &str) -> Option<Device> {
    scan(output, &DEVICE_STATUS_ROW, "device status")
        .into_iter()
        .find(|caps| caps.get(2).map(|m| m.as_str()) == Some(device_type))
        .map(|caps| Device {
            name: group(&caps, 1),
            device_type: group(&caps, 2),
            state: group(&caps, 3),
            connection: group(&caps, 4),
        })
}

/// Active connection of `connection_type`, optionally restricted to `name`.
///
/// The whole output is scanned and the last matching row wins.
pub fn parse_active_connection(
    output: &str,
    connection_type: &str,
    name: &str,
) -> Option<Connection> {
    let mut found = None;

    for caps in scan(output, &ACTIVE_CONNECTION_ROW, "active connections") {
        if group(&caps, 3) != connection_type {
            continue;
        }
        if !name.is_empty() && group(&caps, 1) != name {
            continue;
        }

        found = Some(Connection {
            name: group(&caps, 1),
            uuid: group(&caps, 2),
            connection_type: group(&caps, 3),
            device: group(&caps, 4),
        });
    }

    found
}

/// DNS servers from `nmcli c show <uuid>`, in output order
pub fn parse_dhcp_dns(output: &str) -> Vec<String> {
    scan(output, &DHCP_DNS_LINE, "connection dns")
        .into_iter()
        .map(|caps| group(&caps, 1))
        .collect()
}

/// Every well-formed row of `nmcli device wifi list`, in output order
pub fn parse_wifi_list(output: &str) -> Vec<Wifi> {
    scan(output, &WIFI_LIST_ROW, "wifi list")
        .into_iter()
        .map(|caps| Wifi {
            in_use: caps.get(1).map(|m| m.as_str()) == Some("*"),
            bssid: group(&caps, 2),
            ssid: group(&caps, 3),
            mode: group(&caps, 4),
            chan: number(&caps, 5, "CHAN"),
            rate: group(&caps, 6),
            signal: number(&caps, 7, "SIGNAL"),
            bars: group(&caps, 8),
            security: group(&caps, 9),
        })
        .collect()
}
