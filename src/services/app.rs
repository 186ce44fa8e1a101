use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::{AppConfig, CompatibilityTable, DefaultAppConfig};
use crate::error::DeviceError;
use crate::models::{
    AppInventory, DeviceInfo, DeviceSession, InstallRequest, ModelId, OperationKind,
};
use crate::services::{
    DefaultDeviceService, DefaultFileService, DefaultInstallOrchestrator, DefaultInventoryService,
    DeviceService, EmulatedDevice, InstallOrchestrator, InventoryService,
};
use crate::ui::OperationManager;

/// What a connected device looks like with respect to the target app.
#[derive(Debug)]
pub struct DeviceStatus {
    pub product_name: String,
    pub device_info: DeviceInfo,
    pub inventory: AppInventory,
    pub target_app_name: String,
    /// Required firmware when eligible, otherwise the reason installs are refused.
    pub eligibility: Result<&'static str, DeviceError>,
}

impl DeviceStatus {
    pub fn is_target_installed(&self) -> bool {
        self.inventory.contains(&self.target_app_name)
    }
}

#[derive(Debug)]
pub enum OperationOutcome {
    /// Nothing to do: the target app was already in the requested state.
    Skipped { installed: bool },
    /// The operation ran; `inventory` is the re-enumerated app list.
    Completed {
        product_name: String,
        inventory: AppInventory,
    },
}

pub struct DefaultAppService {
    app_config: DefaultAppConfig,
    device_service: Box<dyn DeviceService>,
    inventory_service: Box<dyn InventoryService>,
    orchestrator: Box<dyn InstallOrchestrator>,
}

impl DefaultAppService {
    pub fn new(
        app_config: DefaultAppConfig,
        device_service: Box<dyn DeviceService>,
        inventory_service: Box<dyn InventoryService>,
        orchestrator: Box<dyn InstallOrchestrator>,
    ) -> Self {
        Self {
            app_config,
            device_service,
            inventory_service,
            orchestrator,
        }
    }

    /// Wires the services against the emulated device described by the config.
    pub fn from_config(app_config: DefaultAppConfig) -> Self {
        let device = Arc::new(EmulatedDevice::new(
            &app_config.get_device_file_path(),
            Arc::new(DefaultFileService),
        ));
        let compatibility = CompatibilityTable::new(app_config.get_firmware_policy());

        let device_service = DefaultDeviceService::new(device.clone(), device.clone());
        let inventory_service = DefaultInventoryService::new(device.clone());
        let orchestrator = DefaultInstallOrchestrator::new(
            device,
            compatibility,
            app_config.get_installer_timeout(),
        );

        Self::new(
            app_config,
            Box::new(device_service),
            Box::new(inventory_service),
            Box::new(orchestrator),
        )
    }

    /// Models that can manage apps, with the firmware each one requires.
    pub fn supported_devices(&self) -> Vec<(ModelId, &'static str)> {
        CompatibilityTable::new(self.app_config.get_firmware_policy())
            .rules()
            .iter()
            .map(|rule| (rule.model_id.clone(), rule.required_firmware))
            .collect()
    }

    pub fn target_app_name(&self) -> String {
        self.app_config.get_target_app_name()
    }

    pub async fn open_session(&self) -> Result<DeviceSession> {
        Ok(self.device_service.open_session().await?)
    }

    pub async fn installed_apps(&self, session: &DeviceSession) -> Result<AppInventory> {
        Ok(self.inventory_service.list_installed(session).await?)
    }

    pub async fn status(&self) -> Result<DeviceStatus> {
        let session = self.open_session().await?;
        let inventory = self.installed_apps(&session).await?;
        let eligibility = self.orchestrator.check_eligibility(&session);

        let device_info = session
            .info()
            .cloned()
            .ok_or(DeviceError::DeviceNotIdentified)?;

        Ok(DeviceStatus {
            product_name: session.product_name().to_string(),
            device_info,
            inventory,
            target_app_name: self.target_app_name(),
            eligibility,
        })
    }

    /// Installs or uninstalls the target app unless it is already in the requested state.
    pub async fn apply(&self, kind: OperationKind) -> Result<OperationOutcome> {
        let target_app_name = self.target_app_name();
        let session = self.open_session().await?;
        let inventory = self.installed_apps(&session).await?;

        let installed = inventory.contains(&target_app_name);
        let already_done = match kind {
            OperationKind::Install => installed,
            OperationKind::Uninstall => !installed,
        };
        if already_done {
            debug!(
                "Skipping {} of {}: installed = {}",
                kind, target_app_name, installed
            );
            return Ok(OperationOutcome::Skipped { installed });
        }

        let request = InstallRequest::new(
            kind,
            target_app_name.as_str(),
            self.app_config.get_provider_id(),
        );

        let operation_manager =
            OperationManager::new(kind, &target_app_name, session.product_name())?;
        let result = self.orchestrator.request(&session, &request).await;
        operation_manager.finish();
        debug!("Session is {:?} after {}", session.state(), kind);
        result?;

        let inventory = self.installed_apps(&session).await?;
        info!(
            "{} now lists {} apps after {}",
            session.product_name(),
            inventory.len(),
            kind
        );

        Ok(OperationOutcome::Completed {
            product_name: session.product_name().to_string(),
            inventory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceDescriptor, InstalledApp, ProviderId};
    use crate::services::{
        MockDeviceService, MockInstallOrchestrator, MockInventoryService, MockTransport,
        TransportHandle,
    };
    use std::sync::Mutex;

    fn identified_session() -> DeviceSession {
        let mut transport = MockTransport::new();
        transport
            .expect_descriptor()
            .returning(|| DeviceDescriptor::new(ModelId::NanoX, "Ledger Nano X"));
        transport.expect_is_connected().return_const(true);
        DeviceSession::new(TransportHandle::new(Box::new(transport)))
            .with_info(DeviceInfo::new(ModelId::NanoX, "2.1.0"))
    }

    fn device_service() -> MockDeviceService {
        let mut device_service = MockDeviceService::new();
        device_service
            .expect_open_session()
            .returning(|| Ok(identified_session()));
        device_service
    }

    /// Inventory whose snapshots are served in order, one per enumeration.
    fn inventory_service(snapshots: Vec<Vec<&'static str>>) -> MockInventoryService {
        let snapshots = Mutex::new(snapshots.into_iter());
        let mut inventory_service = MockInventoryService::new();
        inventory_service.expect_list_installed().returning(move |_| {
            let names = snapshots.lock().unwrap().next().unwrap_or_default();
            Ok(AppInventory::new(
                names.into_iter().map(InstalledApp::new).collect(),
            ))
        });
        inventory_service
    }

    fn service(
        inventory_service: MockInventoryService,
        orchestrator: MockInstallOrchestrator,
    ) -> DefaultAppService {
        DefaultAppService::new(
            DefaultAppConfig::default(),
            Box::new(device_service()),
            Box::new(inventory_service),
            Box::new(orchestrator),
        )
    }

    #[tokio::test]
    async fn test_apply_install_runs_request_and_reenumerates() {
        let mut orchestrator = MockInstallOrchestrator::new();
        orchestrator
            .expect_request()
            .withf(|_, request| {
                *request == InstallRequest::new(OperationKind::Install, "staRknet", ProviderId(4))
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let service = service(
            inventory_service(vec![vec!["btc"], vec!["btc", "staRknet"]]),
            orchestrator,
        );

        let outcome = service.apply(OperationKind::Install).await.unwrap();

        match outcome {
            OperationOutcome::Completed {
                product_name,
                inventory,
            } => {
                assert_eq!(product_name, "Ledger Nano X");
                assert!(inventory.contains("staRknet"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_apply_install_skips_when_already_installed() {
        let mut orchestrator = MockInstallOrchestrator::new();
        orchestrator.expect_request().never();
        let service = service(inventory_service(vec![vec!["staRknet"]]), orchestrator);

        let outcome = service.apply(OperationKind::Install).await.unwrap();

        assert!(matches!(
            outcome,
            OperationOutcome::Skipped { installed: true }
        ));
    }

    #[tokio::test]
    async fn test_apply_uninstall_skips_when_not_installed() {
        let mut orchestrator = MockInstallOrchestrator::new();
        orchestrator.expect_request().never();
        let service = service(inventory_service(vec![vec!["btc"]]), orchestrator);

        let outcome = service.apply(OperationKind::Uninstall).await.unwrap();

        assert!(matches!(
            outcome,
            OperationOutcome::Skipped { installed: false }
        ));
    }

    #[tokio::test]
    async fn test_apply_surfaces_typed_error() {
        let mut orchestrator = MockInstallOrchestrator::new();
        orchestrator.expect_request().returning(|_, _| {
            Err(DeviceError::FirmwareOutOfDate {
                required: "2.1.0".to_string(),
                actual: "2.0.0".to_string(),
            })
        });
        let service = service(inventory_service(vec![vec![]]), orchestrator);

        let error = service.apply(OperationKind::Install).await.unwrap_err();

        assert!(matches!(
            error.downcast_ref::<DeviceError>(),
            Some(DeviceError::FirmwareOutOfDate { .. })
        ));
    }

    #[tokio::test]
    async fn test_status_reports_target_and_eligibility() {
        let mut orchestrator = MockInstallOrchestrator::new();
        orchestrator
            .expect_check_eligibility()
            .returning(|_| Ok("2.1.0"));
        let service = service(inventory_service(vec![vec!["staRknet", "btc"]]), orchestrator);

        let status = service.status().await.unwrap();

        assert_eq!(status.product_name, "Ledger Nano X");
        assert_eq!(status.device_info, DeviceInfo::new(ModelId::NanoX, "2.1.0"));
        assert!(status.is_target_installed());
        assert_eq!(status.eligibility.unwrap(), "2.1.0");
    }

    #[test]
    fn test_supported_devices_lists_table() {
        let service = service(MockInventoryService::new(), MockInstallOrchestrator::new());

        let supported = service.supported_devices();

        assert_eq!(
            supported,
            vec![
                (ModelId::NanoX, "2.1.0"),
                (ModelId::NanoSP, "1.1.0"),
                (ModelId::NanoS, "2.1.0"),
            ]
        );
    }

    #[tokio::test]
    async fn test_open_session_surfaces_transport_unavailable() {
        let mut device_service = MockDeviceService::new();
        device_service.expect_open_session().returning(|| {
            Err(DeviceError::TransportUnavailable {
                reason: "no device".to_string(),
            })
        });
        let service = DefaultAppService::new(
            DefaultAppConfig::default(),
            Box::new(device_service),
            Box::new(MockInventoryService::new()),
            Box::new(MockInstallOrchestrator::new()),
        );

        let error = service.open_session().await.unwrap_err();

        assert!(matches!(
            error.downcast_ref::<DeviceError>(),
            Some(DeviceError::TransportUnavailable { .. })
        ));
    }
}
