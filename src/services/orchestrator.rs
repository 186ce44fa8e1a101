use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::CompatibilityTable;
use crate::error::{DeviceError, InstallerFailure};
use crate::models::{DeviceSession, InstallRequest};
use crate::services::AppInstaller;

/// Gates install/uninstall requests on the compatibility table and runs at most one
/// of them per session at a time.
pub struct DefaultInstallOrchestrator {
    installer: Arc<dyn AppInstaller>,
    compatibility: CompatibilityTable,
    installer_timeout: Duration,
}

impl DefaultInstallOrchestrator {
    pub fn new(
        installer: Arc<dyn AppInstaller>,
        compatibility: CompatibilityTable,
        installer_timeout: Duration,
    ) -> Self {
        Self {
            installer,
            compatibility,
            installer_timeout,
        }
    }

    async fn delegate(
        &self,
        session: &DeviceSession,
        request: &InstallRequest,
    ) -> Result<(), DeviceError> {
        let transport = session.transport();
        if !transport.is_connected() {
            return Err(DeviceError::TransportLost);
        }

        debug!(
            "Delegating {} of {} to provider {}",
            request.kind, request.app_name, request.provider
        );
        let call = self.installer.install_app_by_name(
            &request.app_name,
            transport,
            request.kind.is_uninstall(),
            request.provider,
        );

        match timeout(self.installer_timeout, call).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(_)) if !transport.is_connected() => Err(DeviceError::TransportLost),
            Ok(Err(e)) => Err(DeviceError::installer_failed(e)),
            Err(_) => Err(DeviceError::InstallerFailed(InstallerFailure::Timeout(
                self.installer_timeout,
            ))),
        }
    }
}

#[async_trait]
impl InstallOrchestrator for DefaultInstallOrchestrator {
    fn check_eligibility(&self, session: &DeviceSession) -> Result<&'static str, DeviceError> {
        let device_info = session.info().ok_or(DeviceError::DeviceNotIdentified)?;
        self.compatibility
            .check(&device_info.model_id, &device_info.firmware_version)
    }

    async fn request(
        &self,
        session: &DeviceSession,
        request: &InstallRequest,
    ) -> Result<(), DeviceError> {
        let _permit = session.gate().try_acquire().inspect_err(|_| {
            warn!("Rejected {} of {}: device busy", request.kind, request.app_name);
        })?;

        let required = self.check_eligibility(session).inspect_err(|e| {
            warn!("Rejected {} of {}: {}", request.kind, request.app_name, e);
        })?;
        debug!(
            "Firmware {} satisfies required {} ({} policy)",
            session.firmware_version().unwrap_or_default(),
            required,
            self.compatibility.policy()
        );

        self.delegate(session, request).await?;
        info!("Finished {} of {}", request.kind, request.app_name);
        Ok(())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InstallOrchestrator: Send + Sync {
    /// Compatibility check only; does not touch the transport or the session state.
    fn check_eligibility(&self, session: &DeviceSession) -> Result<&'static str, DeviceError>;

    /// Runs one install or uninstall. The session is `Idle` again when this returns,
    /// whatever the outcome. Callers re-enumerate the inventory afterwards.
    async fn request(
        &self,
        session: &DeviceSession,
        request: &InstallRequest,
    ) -> Result<(), DeviceError>;
}
