use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::DeviceError;
use crate::models::{DeviceInfo, DeviceSession};
use crate::services::{AppInstaller, TransportProvider};

pub struct DefaultDeviceService {
    transport_provider: Arc<dyn TransportProvider>,
    installer: Arc<dyn AppInstaller>,
}

impl DefaultDeviceService {
    pub fn new(
        transport_provider: Arc<dyn TransportProvider>,
        installer: Arc<dyn AppInstaller>,
    ) -> Self {
        Self {
            transport_provider,
            installer,
        }
    }
}

#[async_trait]
impl DeviceService for DefaultDeviceService {
    async fn connect(&self) -> Result<DeviceSession, DeviceError> {
        debug!("Connecting to device");
        let transport = self
            .transport_provider
            .create_transport()
            .await
            .map_err(|e| DeviceError::TransportUnavailable {
                reason: format!("{:#}", e),
            })?;

        let session = DeviceSession::new(transport);
        info!("Connected to {}", session.product_name());
        Ok(session)
    }

    async fn query_info(&self, session: &DeviceSession) -> Result<DeviceInfo, DeviceError> {
        let _permit = session.gate().try_acquire()?;
        let transport = session.transport();

        if !transport.is_connected() {
            return Err(DeviceError::TransportLost);
        }

        debug!("Querying device info");
        let device_info = self
            .installer
            .get_device_info(transport)
            .await
            .map_err(|e| {
                if transport.is_connected() {
                    DeviceError::query_failed(e)
                } else {
                    DeviceError::TransportLost
                }
            })?;

        debug!(
            "Device reports model {} with firmware {}",
            device_info.model_id, device_info.firmware_version
        );
        Ok(device_info)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceService: Send + Sync {
    /// Acquires a transport. The returned session is not identified yet.
    async fn connect(&self) -> Result<DeviceSession, DeviceError>;

    /// Asks the device for its model and firmware. Does not modify the session.
    async fn query_info(&self, session: &DeviceSession) -> Result<DeviceInfo, DeviceError>;

    /// Connects and merges the queried info into the session snapshot.
    async fn open_session(&self) -> Result<DeviceSession, DeviceError> {
        let session = self.connect().await?;
        let device_info = self.query_info(&session).await?;
        Ok(session.with_info(device_info))
    }
}
