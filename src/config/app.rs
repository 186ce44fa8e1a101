use crate::config::FirmwarePolicy;
use crate::models::ProviderId;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DEVICE_FILE_PATH: &str = "device.json";
pub const DEFAULT_TARGET_APP_NAME: &str = "staRknet";
/// The target app is only published on the staging provider.
pub const DEFAULT_PROVIDER_ID: u32 = 4;
pub const DEFAULT_INSTALLER_TIMEOUT_SECS: u64 = 300;

/// Application configuration settings
#[derive(Debug, Clone)]
pub struct DefaultAppConfig {
    /// NANOAPP_DEVICE_FILE environment variable
    device_file_path: String,
    /// NANOAPP_APP_NAME environment variable
    target_app_name: String,
    /// NANOAPP_PROVIDER environment variable
    provider_id: u32,
    /// NANOAPP_TIMEOUT_SECS environment variable
    installer_timeout_secs: u64,
    /// NANOAPP_FIRMWARE_POLICY environment variable
    firmware_policy: FirmwarePolicy,
}

impl DefaultAppConfig {
    pub fn new(
        device_file_path: Option<String>,
        target_app_name: Option<String>,
        provider_id: Option<u32>,
        installer_timeout_secs: Option<u64>,
        firmware_policy: Option<FirmwarePolicy>,
    ) -> DefaultAppConfig {
        DefaultAppConfig {
            device_file_path: device_file_path.unwrap_or(DEFAULT_DEVICE_FILE_PATH.to_string()),
            target_app_name: target_app_name.unwrap_or(DEFAULT_TARGET_APP_NAME.to_string()),
            provider_id: provider_id.unwrap_or(DEFAULT_PROVIDER_ID),
            installer_timeout_secs: installer_timeout_secs.unwrap_or(DEFAULT_INSTALLER_TIMEOUT_SECS),
            firmware_policy: firmware_policy.unwrap_or_default(),
        }
    }
}

impl Default for DefaultAppConfig {
    fn default() -> Self {
        DefaultAppConfig::new(None, None, None, None, None)
    }
}

#[cfg_attr(test, mockall::automock)]
impl AppConfig for DefaultAppConfig {
    fn get_device_file_path(&self) -> PathBuf {
        PathBuf::from(self.device_file_path.as_str())
    }

    fn get_target_app_name(&self) -> String {
        self.target_app_name.clone()
    }

    fn get_provider_id(&self) -> ProviderId {
        ProviderId(self.provider_id)
    }

    fn get_installer_timeout(&self) -> Duration {
        Duration::from_secs(self.installer_timeout_secs)
    }

    fn get_firmware_policy(&self) -> FirmwarePolicy {
        self.firmware_policy
    }
}

pub trait AppConfig: Send + Sync + 'static {
    fn get_device_file_path(&self) -> PathBuf;
    fn get_target_app_name(&self) -> String;
    fn get_provider_id(&self) -> ProviderId;
    fn get_installer_timeout(&self) -> Duration;
    fn get_firmware_policy(&self) -> FirmwarePolicy;
}
