use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::error::DeviceError;
use crate::models::{AppInventory, DeviceSession};
use crate::services::AppInstaller;

pub struct DefaultInventoryService {
    installer: Arc<dyn AppInstaller>,
}

impl DefaultInventoryService {
    pub fn new(installer: Arc<dyn AppInstaller>) -> Self {
        Self { installer }
    }
}

#[async_trait]
impl InventoryService for DefaultInventoryService {
    async fn list_installed(&self, session: &DeviceSession) -> Result<AppInventory, DeviceError> {
        let _permit = session.gate().try_acquire()?;
        let transport = session.transport();

        if !transport.is_connected() {
            return Err(DeviceError::TransportLost);
        }

        let apps = self
            .installer
            .get_all_app_installed(transport)
            .await
            .map_err(|e| {
                if transport.is_connected() {
                    DeviceError::query_failed(e)
                } else {
                    DeviceError::TransportLost
                }
            })?;

        debug!(
            "Device lists {} installed apps: {:?}",
            apps.len(),
            apps.iter().map(|app| app.name.as_str()).collect::<Vec<_>>()
        );
        Ok(AppInventory::new(apps))
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Snapshot of the installed apps. Stale after any install or uninstall.
    async fn list_installed(&self, session: &DeviceSession) -> Result<AppInventory, DeviceError>;
}
