// standard library
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// internal crates
use crate::errors::Error;
use crate::logs::{self, LogLevel};
use crate::models::{Device, NewTenant};
use crate::version;
use crate::{Configuration, InternalApiClient};

// external crates
use tracing::{error, info};

pub const USAGE: &str = "usage: deviceconnect-client <alive|health|provision-tenant|provision-device|\
delete-device|check-update|send-inventory> [--config=<path>] [--host=<url>] \
[--tenant-id=<id>] [--device-id=<id>] [--log-level=<level>] [--log-dir=<path>] [--version]";

/// Exit status of a usage error.
pub const USAGE_ERROR: u8 = 2;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Option<String>,
    pub flags: HashMap<String, String>,
}

impl Args {
    /// Parses `--key=value` flags, standalone `--flag`s and the first positional
    /// argument as the command. Arguments past the command are ignored.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        for arg in args {
            if let Some((key, value)) = arg.split_once('=') {
                let clean_key = key.trim_start_matches('-');
                parsed.flags.insert(clean_key.to_string(), value.to_string());
            } else if arg.starts_with("--") {
                let clean_key = arg.trim_start_matches('-');
                parsed.flags.insert(clean_key.to_string(), "true".to_string());
            } else if parsed.command.is_none() {
                parsed.command = Some(arg);
            }
        }
        parsed
    }

    pub fn flag(&self, key: &str) -> Option<&str> {
        self.flags.get(key).map(String::as_str)
    }
}

/// Runs a single command and maps the outcome to the process exit status: 0 on
/// success, 1 when the command or its setup fails and 2 on a usage error.
pub async fn run(args: Args) -> ExitCode {
    if args.flag("version").is_some() {
        println!("{:?}", version::build_info());
        return ExitCode::SUCCESS;
    }

    let Some(name) = args.command.as_deref() else {
        eprintln!("{USAGE}");
        return ExitCode::from(USAGE_ERROR);
    };
    let Some(command) = Command::parse(name) else {
        eprintln!("unknown command '{name}'\n{USAGE}");
        return ExitCode::from(USAGE_ERROR);
    };

    // retrieve the configuration
    let mut config = match args.flag("config") {
        Some(path) => match Configuration::read_file(Path::new(path)).await {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Unable to read configuration file ({}): {e}", e.kind());
                return ExitCode::FAILURE;
            }
        },
        None => Configuration::default(),
    };
    if let Some(host) = args.flag("host") {
        config = config.with_host(host);
    }
    if let Some(level) = args.flag("log-level") {
        config.log_level = LogLevel::parse(level);
    }

    // initialize the logging
    let _guard = logs::init(logs::Options {
        log_level: config.log_level.clone(),
        log_dir: args.flag("log-dir").map(PathBuf::from),
    });

    let client = match InternalApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create the client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tenant_id = args.flag("tenant-id").unwrap_or("");
    let device_id = args.flag("device-id").unwrap_or("");

    let result = match command {
        Command::Alive => client.alive().await,
        Command::Health => client.health().await,
        Command::ProvisionTenant => {
            client
                .provision_tenant(&NewTenant::new(tenant_id.to_string()))
                .await
        }
        Command::ProvisionDevice => {
            client
                .provision_device(tenant_id, &Device::new(device_id.to_string()))
                .await
        }
        Command::DeleteDevice => client.delete_device(tenant_id, device_id).await,
        Command::CheckUpdate => client.check_update(tenant_id, device_id).await,
        Command::SendInventory => client.send_inventory(tenant_id, device_id).await,
    };

    match result {
        Ok(()) => {
            info!("{} succeeded", name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(
                "{} failed ({}, request id: {}): {}",
                name,
                e.kind(),
                e.request_id().unwrap_or_else(|| "none".to_string()),
                e
            );
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Alive,
    Health,
    ProvisionTenant,
    ProvisionDevice,
    DeleteDevice,
    CheckUpdate,
    SendInventory,
}

impl Command {
    pub fn parse(name: &str) -> Option<Command> {
        match name {
            "alive" => Some(Command::Alive),
            "health" => Some(Command::Health),
            "provision-tenant" => Some(Command::ProvisionTenant),
            "provision-device" => Some(Command::ProvisionDevice),
            "delete-device" => Some(Command::DeleteDevice),
            "check-update" => Some(Command::CheckUpdate),
            "send-inventory" => Some(Command::SendInventory),
            _ => None,
        }
    }
}
