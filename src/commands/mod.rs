mod info;
mod install;
mod list;
mod status;
mod uninstall;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use crate::commands::{
    info::InfoArgs, install::InstallArgs, list::ListArgs, status::StatusArgs,
    uninstall::UninstallArgs,
};
use crate::config::{DefaultAppConfig, FirmwarePolicy};
use crate::services::DefaultAppService;

#[derive(Parser)]
#[command(about, version, author, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[arg(
        long,
        global = true,
        env = "NANOAPP_DEVICE_FILE",
        help = "Device file of the emulated device [default: device.json]"
    )]
    device_file: Option<String>,
    #[arg(
        long,
        global = true,
        env = "NANOAPP_APP_NAME",
        help = "Name of the app to manage [default: staRknet]"
    )]
    app_name: Option<String>,
    #[arg(
        long,
        global = true,
        env = "NANOAPP_PROVIDER",
        help = "Installer provider id, 4 is staging [default: 4]"
    )]
    provider: Option<u32>,
    #[arg(
        long,
        global = true,
        env = "NANOAPP_TIMEOUT_SECS",
        help = "Seconds to wait for the device to finish an install [default: 300]"
    )]
    timeout_secs: Option<u64>,
    #[arg(
        long,
        global = true,
        value_enum,
        env = "NANOAPP_FIRMWARE_POLICY",
        help = "How firmware is matched against the required version [default: exact]"
    )]
    firmware_policy: Option<FirmwarePolicy>,
}

impl SettingsArgs {
    pub fn into_app_config(self) -> DefaultAppConfig {
        DefaultAppConfig::new(
            self.device_file,
            self.app_name,
            self.provider,
            self.timeout_secs,
            self.firmware_policy,
        )
    }
}

#[derive(Subcommand)]
pub enum Commands {
    Info(InfoArgs),
    Install(InstallArgs),
    List(ListArgs),
    Status(StatusArgs),
    Uninstall(UninstallArgs),
}

pub async fn handle(command: &Commands, app_config: DefaultAppConfig) -> Result<()> {
    let app_service = DefaultAppService::from_config(app_config);

    match command {
        Commands::Info(_) => {
            info::handle(&app_service).await?;
        }
        Commands::Install(_) => {
            install::handle(&app_service).await?;
        }
        Commands::List(_) => {
            list::handle(&app_service).await?;
        }
        Commands::Status(_) => {
            status::handle(&app_service).await?;
        }
        Commands::Uninstall(_) => {
            uninstall::handle(&app_service).await?;
        }
    }

    Ok(())
}
