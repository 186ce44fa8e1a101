use crate::models::OperationKind;
use crate::services::{DefaultAppService, OperationOutcome};

use anyhow::Result;
use clap::Args;
use tracing::{debug, warn};

#[derive(Args)]
#[command(about = "Uninstall the app from the connected device.")]
pub struct UninstallArgs {}

pub async fn handle(app_service: &DefaultAppService) -> Result<()> {
    let app_name = app_service.target_app_name();
    debug!("Uninstalling {}", app_name);

    match app_service.apply(OperationKind::Uninstall).await? {
        OperationOutcome::Skipped { .. } => {
            println!("{} is not installed on your device.", app_name);
        }
        OperationOutcome::Completed { product_name, inventory } => {
            if inventory.contains(&app_name) {
                warn!("{} is still listed after uninstall", app_name);
            }
            println!("{} removed from your {}.", app_name, product_name);
        }
    }
    Ok(())
}
