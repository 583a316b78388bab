mod cli;
mod config;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use nexus_nmcli::network::Frequency;
use nexus_nmcli::{Iwgetid, Nmcli, SystemCommandRunner};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command, ConnectionCommand, DeviceCommand, IwQuery, WifiCommand};
use crate::config::Config;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = CliArgs::parse();

    if let Command::PrintDefaultConfig = cli.command {
        print!("{}", config::default_config_toml());
        return Ok(ExitCode::SUCCESS);
    }

    let config = config::load(&cli).wrap_err("Failed to load configuration")?;

    init_logging(&config.general.log_level);
    info!("nexus-nmcli starting");
    debug!("{:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let found = run(&cli.command, &config, &mut out)?;
    out.flush()?;

    if found {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("nothing found");
        Ok(ExitCode::FAILURE)
    }
}

/// Execute one subcommand. Returns false when a lookup came back empty.
fn run<W: Write>(command: &Command, config: &Config, out: &mut W) -> Result<bool> {
    let json = config.output.json;
    let nm = Nmcli::with_program(SystemCommandRunner, &config.tools.nmcli);

    match command {
        Command::Iw { query, interface } => {
            let iw = Iwgetid::with_program(SystemCommandRunner, &config.tools.iwgetid);
            let intf = interface.as_deref().or(config.interface()).unwrap_or("");
            match query {
                IwQuery::Ssid => text_or_json(out, json, &iw.ssid(intf)?)?,
                IwQuery::Ap => text_or_json(out, json, &iw.access_point_mac(intf)?)?,
                IwQuery::Channel => {
                    let chan = iw.channel(intf)?;
                    if json {
                        render::json(out, &chan)?;
                    } else {
                        writeln!(out, "{chan}")?;
                    }
                }
                IwQuery::Frequency => {
                    let hz = iw.frequency(intf)?;
                    if json {
                        render::json(out, &hz)?;
                    } else {
                        let freq = Frequency::from_hertz(hz);
                        writeln!(out, "{} ({}, {})", hz, freq, freq.band())?;
                    }
                }
            }
        }

        Command::Device(DeviceCommand::Show { name }) => {
            let Some(device) = nm.device_show(name)? else {
                return Ok(false);
            };
            if json {
                render::json(out, &device)?;
            } else {
                render::devices(out, &[device])?;
            }
        }
        Command::Device(DeviceCommand::Status { device_type }) => {
            let Some(device) = nm.device_status(device_type)? else {
                return Ok(false);
            };
            if json {
                render::json(out, &device)?;
            } else {
                render::devices(out, &[device])?;
            }
        }

        Command::Connection(ConnectionCommand::Show {
            connection_type,
            name,
        }) => {
            let conn = nm.connection_show(connection_type, name)?;
            if json {
                render::json(out, &conn)?;
            } else {
                render::connection(out, &conn)?;
            }
        }
        Command::Connection(ConnectionCommand::Add(args)) => {
            nm.connection_add(
                &args.name,
                &args.connection_type,
                &args.ifname,
                args.autoconnect,
            )
            .wrap_err_with(|| format!("Failed to add connection {}", args.name))?;
        }
        Command::Connection(ConnectionCommand::Delete { name }) => {
            nm.connection_delete(name)
                .wrap_err_with(|| format!("Failed to delete connection {name}"))?;
        }
        Command::Connection(ConnectionCommand::Modify {
            name,
            option,
            value,
        }) => {
            nm.connection_modify(name, option, value)
                .wrap_err_with(|| format!("Failed to modify connection {name}"))?;
        }
        Command::Connection(ConnectionCommand::Up { name }) => {
            nm.connection_up(name)
                .wrap_err_with(|| format!("Failed to activate connection {name}"))?;
        }
        Command::Connection(ConnectionCommand::Down { name }) => {
            nm.connection_down(name)
                .wrap_err_with(|| format!("Failed to deactivate connection {name}"))?;
        }
        Command::Connection(ConnectionCommand::Dns { uuid }) => {
            let dns = nm.connection_dhcp_dns(uuid)?;
            if json {
                render::json(out, &dns)?;
            } else if dns.is_empty() {
                return Ok(false);
            } else {
                render::lines(out, &dns)?;
            }
        }

        Command::Wifi(WifiCommand::List) => {
            let wifis = nm.wifi_list()?;
            if json {
                render::json(out, &wifis)?;
            } else {
                render::wifis(out, &wifis)?;
            }
        }
        Command::Wifi(WifiCommand::Connect { ssid, password }) => {
            nm.wifi_connect(ssid, password)
                .wrap_err_with(|| format!("Failed to connect to {ssid}"))?;
        }

        Command::PrintDefaultConfig => unreachable!("handled before the config is loaded"),
    }

    Ok(true)
}

fn text_or_json<W: Write>(out: &mut W, json: bool, value: &str) -> Result<()> {
    if json {
        render::json(out, value)?;
    } else {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Initialize tracing to stderr so stdout stays parseable
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}
