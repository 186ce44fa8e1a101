use crate::services::DefaultAppService;

use anyhow::Result;
use clap::Args;

#[derive(Args)]
#[command(about = "List the apps installed on the device, in device order.")]
pub struct ListArgs {}

pub async fn handle(app_service: &DefaultAppService) -> Result<()> {
    let session = app_service.open_session().await?;
    let inventory = app_service.installed_apps(&session).await?;

    if inventory.is_empty() {
        println!("No apps installed on your {}.", session.product_name());
        return Ok(());
    }

    println!("Installed apps on your {}:", session.product_name());
    println!("{0: <40} {1: <20}", "App", "Version");
    for app in inventory.iter() {
        println!("{0: <40} {1: <20}", app.name, app.get_version());
    }
    Ok(())
}
