use crate::models::{DeviceInfo, ModelId, OperationGate, OperationState};
use crate::services::TransportHandle;

/// Live association with one connected device. Owns the transport; the queried
/// identity is a snapshot replaced as a whole by [`DeviceSession::with_info`].
#[derive(Debug)]
pub struct DeviceSession {
    transport: TransportHandle,
    product_name: String,
    info: Option<DeviceInfo>,
    gate: OperationGate,
}

impl DeviceSession {
    pub fn new(transport: TransportHandle) -> Self {
        let product_name = transport.descriptor().product_name;
        Self {
            transport,
            product_name,
            info: None,
            gate: OperationGate::new(),
        }
    }

    pub fn with_info(self, info: DeviceInfo) -> Self {
        Self {
            info: Some(info),
            ..self
        }
    }

    pub fn transport(&self) -> &TransportHandle {
        &self.transport
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn info(&self) -> Option<&DeviceInfo> {
        self.info.as_ref()
    }

    pub fn model_id(&self) -> Option<&ModelId> {
        self.info.as_ref().map(|info| &info.model_id)
    }

    pub fn firmware_version(&self) -> Option<&str> {
        self.info.as_ref().map(|info| info.firmware_version.as_str())
    }

    pub fn gate(&self) -> &OperationGate {
        &self.gate
    }

    pub fn state(&self) -> OperationState {
        self.gate.state()
    }
}
