use tracing::warn;

use crate::error::{NexusError, NexusResult};
use crate::exec::CommandRunner;
use crate::network::types::Frequency;

pub const IWGETID_BIN: &str = "iwgetid";

/// Wireless details of an interface via `iwgetid`
pub struct Iwgetid<R> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> Iwgetid<R> {
    pub fn new(runner: R) -> Self {
        Self::with_program(runner, IWGETID_BIN)
    }

    pub fn with_program(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `iwgetid [intf] <flag>` and return trimmed stdout.
    /// An empty interface is left out of the argument list entirely.
    fn run(&self, intf: &str, flag: &str) -> NexusResult<String> {
        let mut args = Vec::with_capacity(2);
        if !intf.is_empty() {
            args.push(intf.to_string());
        }
        args.push(flag.to_string());

        let output = self.runner.run(&self.program, args)?;
        if !output.success() {
            return Err(NexusError::execution(&self.program, output.status_text()));
        }

        Ok(output.stdout.trim().to_string())
    }

    /// SSID the interface is associated with
    pub fn ssid(&self, intf: &str) -> NexusResult<String> {
        self.run(intf, "-r")
    }

    pub fn access_point_mac(&self, intf: &str) -> NexusResult<String> {
        self.run(intf, "-a")
    }

    /// Current channel. Output that is not an integer yields 0.
    pub fn channel(&self, intf: &str) -> NexusResult<i32> {
        let raw = self.run(intf, "-c")?;
        Ok(raw.parse::<i32>().unwrap_or_else(|e| {
            warn!("Unparseable channel {:?}: {}", raw, e);
            0
        }))
    }

    /// Current frequency in hertz. Output that is not a number yields 0.
    pub fn frequency(&self, intf: &str) -> NexusResult<f64> {
        let raw = self.run(intf, "-f")?;
        let hz = raw.parse::<f64>().unwrap_or_else(|e| {
            warn!("Unparseable frequency {:?}: {}", raw, e);
            0.0
        });
        Ok(Frequency::from_hertz(hz).hertz())
    }
}
