use crate::services::DefaultAppService;

use anyhow::Result;
use clap::Args;

#[derive(Args)]
#[command(about = "Connect to the device and show its model and firmware version.")]
pub struct InfoArgs {}

pub async fn handle(app_service: &DefaultAppService) -> Result<()> {
    let session = app_service.open_session().await?;

    println!("Connected to your {}", session.product_name());
    if let Some(model_id) = session.model_id() {
        let note = if model_id.is_known() { "" } else { " (unrecognized model)" };
        println!("{0: <12} {1}{2}", "Model:", model_id, note);
    }
    if let Some(firmware_version) = session.firmware_version() {
        println!("{0: <12} {1}", "Firmware:", firmware_version);
    }
    Ok(())
}
