use tracing::{debug, info};

use crate::error::{NexusError, NexusResult};
use crate::exec::{CommandRunner, CommandOutput};
use crate::network::patterns;
use crate::network::types::*;

pub const NMCLI_BIN: &str = "nmcli";

/// High-level facade over the `nmcli` command-line tool.
///
/// Read-only operations report a bare execution failure when nmcli exits
/// non-zero. Mutating operations report nmcli's own stderr instead.
pub struct Nmcli<R> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> Nmcli<R> {
    pub fn new(runner: R) -> Self {
        Self::with_program(runner, NMCLI_BIN)
    }

    /// Use a specific binary name or path instead of `nmcli`
    pub fn with_program(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    // ── Invocation ────────────────────────────────────────────────────

    fn spawn(&self, args: &[&str]) -> NexusResult<CommandOutput> {
        let args = args.iter().map(|a| a.to_string()).collect();
        self.runner.run(&self.program, args)
    }

    /// Read-only command: stdout on success, generic failure otherwise
    fn query(&self, args: &[&str]) -> NexusResult<String> {
        let output = self.spawn(args)?;
        if !output.success() {
            return Err(NexusError::execution(&self.program, output.status_text()));
        }
        Ok(output.stdout)
    }

    /// Mutating command: success is exit status zero, failure carries stderr
    fn execute(&self, args: &[&str]) -> NexusResult<()> {
        let output = self.spawn(args)?;
        if !output.success() {
            return Err(NexusError::execution(&self.program, output.stderr));
        }
        Ok(())
    }

    // ── Device Operations ─────────────────────────────────────────────

    /// State code of a single device, `None` when nmcli reports no state
    pub fn device_show(&self, name: &str) -> NexusResult<Option<Device>> {
        let stdout = self.query(&["device", "show", name])?;
        Ok(patterns::parse_device_show(&stdout, name))
    }

    /// First device of the given type, `None` when there is none
    pub fn device_status(&self, device_type: &str) -> NexusResult<Option<Device>> {
        let stdout = self.query(&["device", "status"])?;
        let device = patterns::parse_device_status(&stdout, device_type);
        debug!("device status {}: {:?}", device_type, device);
        Ok(device)
    }

    // ── Connection Operations ─────────────────────────────────────────

    /// Active connection of the given type. An empty `name` accepts any
    /// name. When several rows qualify the last one listed is returned.
    pub fn connection_show(&self, connection_type: &str, name: &str) -> NexusResult<Connection> {
        let stdout = self.query(&["connection", "show", "--active"])?;
        patterns::parse_active_connection(&stdout, connection_type, name)
            .ok_or(NexusError::NoActiveConnection)
    }

    /// Create a connection profile. The profile's SSID is set to `name`.
    pub fn connection_add(
        &self,
        name: &str,
        connection_type: &str,
        ifname: &str,
        autoconnect: bool,
    ) -> NexusResult<()> {
        let autoconnect = if autoconnect { "yes" } else { "no" };
        info!("Adding {} connection {} on {}", connection_type, name, ifname);
        self.execute(&[
            "connection",
            "add",
            "type",
            connection_type,
            "ifname",
            ifname,
            "con-name",
            name,
            "autoconnect",
            autoconnect,
            "ssid",
            name,
        ])
    }

    pub fn connection_delete(&self, name: &str) -> NexusResult<()> {
        info!("Deleting connection {}", name);
        self.execute(&["connection", "delete", name])
    }

    pub fn connection_modify(&self, name: &str, option: &str, value: &str) -> NexusResult<()> {
        info!("Modifying connection {}: {}", name, option);
        self.execute(&["connection", "modify", name, option, value])
    }

    pub fn connection_up(&self, name: &str) -> NexusResult<()> {
        info!("Activating connection {}", name);
        self.execute(&["connection", "up", name])
    }

    pub fn connection_down(&self, name: &str) -> NexusResult<()> {
        info!("Deactivating connection {}", name);
        self.execute(&["connection", "down", name])
    }

    /// DNS server handed out for a connection. Only `IP4.DNS[1]` is read,
    /// so at most one address comes back per well-formed output.
    pub fn connection_dhcp_dns(&self, uuid: &str) -> NexusResult<Vec<String>> {
        let stdout = self.query(&["c", "show", uuid])?;
        Ok(patterns::parse_dhcp_dns(&stdout))
    }

    // ── WiFi Operations ───────────────────────────────────────────────

    pub fn wifi_list(&self) -> NexusResult<Vec<Wifi>> {
        let stdout = self.query(&["device", "wifi", "list"])?;
        Ok(patterns::parse_wifi_list(&stdout))
    }

    pub fn wifi_connect(&self, ssid: &str, password: &str) -> NexusResult<()> {
        info!("Connecting to WiFi network: {}", ssid);
        self.execute(&["device", "wifi", "connect", ssid, "password", password])
    }
}
