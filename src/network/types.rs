use std::fmt;

use serde::{Deserialize, Serialize};

/// A network device as reported by `nmcli device status` / `device show`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    /// Either the textual state (`connected`) from `device status` or the
    /// numeric NetworkManager state code (`100`) from `device show`
    pub state: String,
    pub connection: String,
}

/// One active connection row from `nmcli connection show --active`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub name: String,
    pub uuid: String,
    #[serde(rename = "type")]
    pub connection_type: String,
    pub device: String,
}

/// A visible access point from `nmcli device wifi list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wifi {
    pub in_use: bool,
    pub bssid: String,
    pub ssid: String,
    pub mode: String,
    pub chan: i32,
    pub rate: String,
    /// 0-100
    pub signal: i32,
    pub bars: String,
    pub security: String,
}

impl Wifi {
    pub fn signal_level(&self) -> SignalLevel {
        SignalLevel::from_percentage(self.signal)
    }
}

/// Signal strength level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignalLevel {
    None,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl SignalLevel {
    pub fn from_percentage(pct: i32) -> Self {
        match pct {
            i32::MIN..=19 => Self::None,
            20..=39 => Self::Weak,
            40..=59 => Self::Fair,
            60..=79 => Self::Good,
            _ => Self::Excellent,
        }
    }
}

impl fmt::Display for SignalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Weak => write!(f, "weak"),
            Self::Fair => write!(f, "fair"),
            Self::Good => write!(f, "good"),
            Self::Excellent => write!(f, "excellent"),
        }
    }
}

/// Radio frequency. `iwgetid -f` already reports hertz, so constructing and
/// reading back is the identity conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Frequency(f64);

impl Frequency {
    pub fn from_hertz(hz: f64) -> Self {
        Self(hz)
    }

    pub fn hertz(self) -> f64 {
        self.0
    }

    pub fn megahertz(self) -> f64 {
        self.0 / 1_000_000.0
    }

    pub fn band(self) -> FrequencyBand {
        match self.megahertz() {
            mhz if (2400.0..=2500.0).contains(&mhz) => FrequencyBand::TwoGhz,
            mhz if (5000.0..=5900.0).contains(&mhz) => FrequencyBand::FiveGhz,
            mhz if (5925.0..=7125.0).contains(&mhz) => FrequencyBand::SixGhz,
            _ => FrequencyBand::Unknown,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} GHz", self.0 / 1_000_000_000.0)
    }
}

/// Wi-Fi band a [`Frequency`] falls in; NaN and out-of-range values are `Unknown`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBand {
    TwoGhz,
    FiveGhz,
    SixGhz,
    Unknown,
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TwoGhz => "2.4 GHz band",
            Self::FiveGhz => "5 GHz band",
            Self::SixGhz => "6 GHz band",
            Self::Unknown => "unknown band",
        };
        f.write_str(label)
    }
}
