mod app;
mod device;
mod emulator;
mod file;
mod installer;
mod inventory;
mod orchestrator;
mod transport;

pub use app::{DefaultAppService, OperationOutcome};
pub use device::{DefaultDeviceService, DeviceService};
pub use emulator::EmulatedDevice;
pub use file::{DefaultFileService, FileService};
pub use installer::AppInstaller;
pub use inventory::{DefaultInventoryService, InventoryService};
pub use orchestrator::{DefaultInstallOrchestrator, InstallOrchestrator};
pub use transport::{Transport, TransportHandle, TransportProvider};

#[cfg(test)]
pub use device::MockDeviceService;
#[cfg(test)]
pub use file::MockDefaultFileService;
#[cfg(test)]
pub use installer::MockAppInstaller;
#[cfg(test)]
pub use inventory::MockInventoryService;
#[cfg(test)]
pub use orchestrator::MockInstallOrchestrator;
#[cfg(test)]
pub use transport::{MockTransport, MockTransportProvider};
