use anyhow::Result;
use async_trait::async_trait;

use crate::models::{DeviceInfo, InstalledApp, ProviderId};
use crate::services::TransportHandle;

/// Device-side app management. Implementations own the wire protocol; callers only
/// see success or failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppInstaller: Send + Sync {
    async fn get_device_info(&self, transport: &TransportHandle) -> Result<DeviceInfo>;

    /// Installed apps in the order the device lists them.
    async fn get_all_app_installed(&self, transport: &TransportHandle) -> Result<Vec<InstalledApp>>;

    async fn install_app_by_name(
        &self,
        name: &str,
        transport: &TransportHandle,
        is_uninstall: bool,
        provider: ProviderId,
    ) -> Result<()>;
}
