use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::models::{DeviceDescriptor, DeviceInfo, InstalledApp, ModelId, ProviderId};
use crate::services::{AppInstaller, FileService, Transport, TransportHandle, TransportProvider};

fn default_connected() -> bool {
    true
}

/// Contents of the device file backing an emulated device, e.g.
///
/// ```json
/// {
///   "model": "nanoX",
///   "product_name": "Ledger Nano X",
///   "firmware_version": "2.1.0",
///   "apps": [{ "name": "Bitcoin", "version": "2.1.0" }],
///   "catalog": { "4": [{ "name": "staRknet", "version": "1.0.0" }] }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmulatedDeviceState {
    pub model: ModelId,
    pub product_name: String,
    pub firmware_version: String,
    #[serde(default = "default_connected")]
    pub connected: bool,
    #[serde(default)]
    pub apps: Vec<InstalledApp>,
    /// Apps each provider can install, keyed by provider id.
    #[serde(default)]
    pub catalog: BTreeMap<u32, Vec<InstalledApp>>,
    /// Simulated time the user takes to confirm an install on the device.
    #[serde(default)]
    pub confirm_delay_ms: u64,
}

#[derive(Clone)]
struct DeviceFile {
    path: PathBuf,
    file_service: Arc<dyn FileService>,
}

impl DeviceFile {
    fn load(&self) -> Result<EmulatedDeviceState> {
        if !self.file_service.file_exists(&self.path)? {
            bail!("No device found at {}", self.path.display());
        }
        let content = self.file_service.read_file(&self.path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse device file: {}", self.path.display()))
    }

    fn save(&self, state: &EmulatedDeviceState) -> Result<()> {
        let content = serde_json::to_string_pretty(state).with_context(|| {
            format!("Failed to serialize device file: {}", self.path.display())
        })?;
        self.file_service.write_file(&self.path, &content)
    }
}

struct EmulatedTransport {
    device_file: DeviceFile,
    descriptor: DeviceDescriptor,
}

impl Transport for EmulatedTransport {
    fn descriptor(&self) -> DeviceDescriptor {
        self.descriptor.clone()
    }

    fn is_connected(&self) -> bool {
        self.device_file
            .load()
            .map(|state| state.connected && state.model == self.descriptor.model_id)
            .unwrap_or(false)
    }
}

/// A device simulated by a JSON file. Stands in for USB hardware: the transport is
/// "unplugged" when the file disappears or sets `connected` to false.
pub struct EmulatedDevice {
    device_file: DeviceFile,
}

impl EmulatedDevice {
    pub fn new(device_file_path: &Path, file_service: Arc<dyn FileService>) -> Self {
        Self {
            device_file: DeviceFile {
                path: device_file_path.to_path_buf(),
                file_service,
            },
        }
    }

    fn load_connected(&self, transport: &TransportHandle) -> Result<EmulatedDeviceState> {
        if !transport.is_connected() {
            bail!("Device is disconnected");
        }
        self.device_file.load()
    }
}

#[async_trait]
impl TransportProvider for EmulatedDevice {
    async fn create_transport(&self) -> Result<TransportHandle> {
        let state = self.device_file.load()?;
        if !state.connected {
            bail!("Device at {} is not connected", self.device_file.path.display());
        }

        debug!("Opened emulated transport to {}", state.product_name);
        Ok(TransportHandle::new(Box::new(EmulatedTransport {
            device_file: self.device_file.clone(),
            descriptor: DeviceDescriptor::new(state.model, state.product_name),
        })))
    }
}

#[async_trait]
impl AppInstaller for EmulatedDevice {
    async fn get_device_info(&self, transport: &TransportHandle) -> Result<DeviceInfo> {
        let state = self.load_connected(transport)?;
        Ok(DeviceInfo::new(state.model, state.firmware_version))
    }

    async fn get_all_app_installed(&self, transport: &TransportHandle) -> Result<Vec<InstalledApp>> {
        let state = self.load_connected(transport)?;
        Ok(state.apps)
    }

    async fn install_app_by_name(
        &self,
        name: &str,
        transport: &TransportHandle,
        is_uninstall: bool,
        provider: ProviderId,
    ) -> Result<()> {
        let confirm_delay_ms = self.load_connected(transport)?.confirm_delay_ms;
        if confirm_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(confirm_delay_ms)).await;
        }

        // The device may have been unplugged while waiting for confirmation.
        let mut state = self.load_connected(transport)?;

        if is_uninstall {
            let Some(index) = state.apps.iter().position(|app| app.name == name) else {
                bail!("App {} is not installed", name);
            };
            state.apps.remove(index);
            self.device_file.save(&state)?;
            info!("Uninstalled {} from emulated device", name);
            return Ok(());
        }

        if state.apps.iter().any(|app| app.name == name) {
            bail!("App {} is already installed", name);
        }

        let app = state
            .catalog
            .get(&provider.0)
            .and_then(|apps| apps.iter().find(|app| app.name == name))
            .cloned()
            .with_context(|| format!("App {} is not available from provider {}", name, provider))?;

        state.apps.push(app);
        self.device_file.save(&state)?;
        info!("Installed {} on emulated device from provider {}", name, provider);
        Ok(())
    }
}
