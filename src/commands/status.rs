use crate::error::DeviceError;
use crate::services::DefaultAppService;

use anyhow::Result;
use clap::Args;

#[derive(Args)]
#[command(
    about = "Show whether the app is installed and whether the device can install or uninstall it."
)]
pub struct StatusArgs {}

pub async fn handle(app_service: &DefaultAppService) -> Result<()> {
    let status = app_service.status().await?;

    println!(
        "Connected to your {} ({}, firmware {})",
        status.product_name, status.device_info.model_id, status.device_info.firmware_version
    );

    let installed = status.is_target_installed();
    if installed {
        println!("{} App is installed on your device", status.target_app_name);
    } else {
        println!("{} App is not installed on your device", status.target_app_name);
    }

    match &status.eligibility {
        Ok(required) => {
            println!("Device is ready for app management (firmware {}).", required);
            let command = if installed { "uninstall" } else { "install" };
            println!("To {} the app, use: nanoapp {}", command, command);
        }
        Err(e @ DeviceError::UnsupportedDevice { .. }) => {
            println!("App management unavailable: {}", e);
            println!("Supported devices:");
            for (model_id, required) in app_service.supported_devices() {
                println!("  {0: <12} firmware {1}", model_id, required);
            }
        }
        Err(e) => println!("App management unavailable: {}", e),
    }
    Ok(())
}
