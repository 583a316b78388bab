use std::io::{self, Write};

use nexus_nmcli::{Connection, Device, Wifi};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

const GAP: usize = 2;

/// Pad `s` to `width` terminal columns (SSIDs may hold wide glyphs)
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Write rows as columns separated by a fixed gap, header first
fn table<W: Write>(out: &mut W, header: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    for row in std::iter::once(&header).chain(rows) {
        let last = row.len().saturating_sub(1);
        let line: String = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == last {
                    cell.clone()
                } else {
                    pad(cell, widths[i] + GAP)
                }
            })
            .collect();
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

pub fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn devices<W: Write>(out: &mut W, devices: &[Device]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = devices
        .iter()
        .map(|d| {
            vec![
                d.name.clone(),
                d.device_type.clone(),
                d.state.clone(),
                d.connection.clone(),
            ]
        })
        .collect();
    table(out, &["DEVICE", "TYPE", "STATE", "CONNECTION"], &rows)
}

pub fn connection<W: Write>(out: &mut W, conn: &Connection) -> io::Result<()> {
    let rows = vec![vec![
        conn.name.clone(),
        conn.uuid.clone(),
        conn.connection_type.clone(),
        conn.device.clone(),
    ]];
    table(out, &["NAME", "UUID", "TYPE", "DEVICE"], &rows)
}

pub fn wifis<W: Write>(out: &mut W, wifis: &[Wifi]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = wifis
        .iter()
        .map(|w| {
            vec![
                if w.in_use { "*".into() } else { String::new() },
                w.bssid.clone(),
                w.ssid.clone(),
                w.mode.clone(),
                w.chan.to_string(),
                w.rate.clone(),
                format!("{} ({})", w.signal, w.signal_level()),
                w.bars.clone(),
                w.security.clone(),
            ]
        })
        .collect();
    table(
        out,
        &[
            "IN-USE", "BSSID", "SSID", "MODE", "CHAN", "RATE", "SIGNAL", "BARS", "SECURITY",
        ],
        &rows,
    )
}

pub fn lines<W: Write, T: AsRef<str>>(out: &mut W, values: &[T]) -> io::Result<()> {
    for value in values {
        writeln!(out, "{}", value.as_ref())?;
    }
    Ok(())
}
