//! Typed wrappers around the `nmcli` and `iwgetid` command-line tools.
//!
//! Both wrappers spawn one short-lived process per call, block until it
//! exits and scrape its human-readable output into records. Nothing is
//! cached or shared between calls.

pub mod error;
pub mod exec;
pub mod network;

pub use error::{NexusError, NexusResult};
pub use exec::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use network::{Connection, Device, Iwgetid, Nmcli, Wifi};
