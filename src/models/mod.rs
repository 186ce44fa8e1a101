mod app;
mod device;
mod operation;
mod session;

pub use app::{AppInventory, InstalledApp};
pub use device::{DeviceDescriptor, DeviceInfo, ModelId};
pub use operation::{InstallRequest, OperationGate, OperationKind, OperationState, ProviderId};
pub use session::DeviceSession;
