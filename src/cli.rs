use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ─── CLI Arguments (override layer) ─────────────────────────────────────
/// nexus-nmcli — query and drive NetworkManager through nmcli and iwgetid
#[derive(Parser, Debug, Clone)]
#[command(name = "nexus-nmcli", version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level filter (overrides config file)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// nmcli binary name or path (overrides config file)
    #[arg(long, global = true)]
    pub nmcli: Option<String>,

    /// iwgetid binary name or path (overrides config file)
    #[arg(long, global = true)]
    pub iwgetid: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Wireless details of the associated access point (iwgetid)
    Iw {
        #[command(subcommand)]
        query: IwQuery,

        /// Wireless interface (overrides config file)
        #[arg(short, long, global = true)]
        interface: Option<String>,
    },

    /// Device state (nmcli device)
    #[command(subcommand)]
    Device(DeviceCommand),

    /// Connection profiles (nmcli connection)
    #[command(subcommand)]
    #[command(visible_alias = "c")]
    Connection(ConnectionCommand),

    /// Access points (nmcli device wifi)
    #[command(subcommand)]
    Wifi(WifiCommand),

    /// Print the default config to stdout and exit
    PrintDefaultConfig,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IwQuery {
    /// SSID
    Ssid,
    /// Access point MAC address
    Ap,
    /// Channel number (0 when unknown)
    Channel,
    /// Frequency in Hz (0 when unknown)
    Frequency,
}

#[derive(Subcommand, Debug, Clone)]
pub enum DeviceCommand {
    /// State code of one device
    Show { name: String },
    /// First device of a type, e.g. `wifi` or `ethernet`
    Status {
        #[arg(value_name = "TYPE")]
        device_type: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConnectionCommand {
    /// Active connection of a type, optionally by name
    Show {
        #[arg(value_name = "TYPE")]
        connection_type: String,
        #[arg(default_value = "")]
        name: String,
    },
    /// Add a connection profile (its SSID is set to NAME)
    Add(AddArgs),
    /// Delete a connection profile
    Delete { name: String },
    /// Set one property of a connection profile
    Modify {
        name: String,
        option: String,
        value: String,
    },
    /// Activate a connection
    Up { name: String },
    /// Deactivate a connection
    Down { name: String },
    /// DHCP-provided DNS server of a connection
    Dns { uuid: String },
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    pub name: String,
    #[arg(value_name = "TYPE")]
    pub connection_type: String,
    pub ifname: String,
    /// Let NetworkManager bring the connection up automatically
    #[arg(long)]
    pub autoconnect: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum WifiCommand {
    /// Scan results
    List,
    /// Connect to a network
    Connect {
        ssid: String,
        #[arg(short, long)]
        password: String,
    },
}
