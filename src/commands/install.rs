use crate::models::OperationKind;
use crate::services::{DefaultAppService, OperationOutcome};

use anyhow::Result;
use clap::Args;
use tracing::debug;

#[derive(Args)]
#[command(about = "Install the app on the connected device.")]
pub struct InstallArgs {}

pub async fn handle(app_service: &DefaultAppService) -> Result<()> {
    let app_name = app_service.target_app_name();
    debug!("Installing {}", app_name);

    match app_service.apply(OperationKind::Install).await? {
        OperationOutcome::Skipped { .. } => {
            println!("{} is already installed on your device.", app_name);
        }
        OperationOutcome::Completed { product_name, inventory } => {
            println!("{} installed on your {}.", app_name, product_name);
            debug!("Device now lists {} apps", inventory.len());
        }
    }
    Ok(())
}
