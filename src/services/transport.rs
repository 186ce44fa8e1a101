use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

use crate::models::DeviceDescriptor;

/// Connection to one physical device.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    fn descriptor(&self) -> DeviceDescriptor;

    /// False once the device was unplugged or the connection was claimed elsewhere.
    fn is_connected(&self) -> bool;
}

/// Acquires a transport to the attached device.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransportProvider: Send + Sync {
    async fn create_transport(&self) -> Result<TransportHandle>;
}

/// Exclusively owned, opaque transport capability.
pub struct TransportHandle {
    inner: Box<dyn Transport>,
}

impl TransportHandle {
    pub fn new(inner: Box<dyn Transport>) -> Self {
        Self { inner }
    }

    pub fn descriptor(&self) -> DeviceDescriptor {
        self.inner.descriptor()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }
}

impl fmt::Debug for TransportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let descriptor = self.descriptor();
        f.debug_struct("TransportHandle")
            .field("model_id", &descriptor.model_id)
            .field("product_name", &descriptor.product_name)
            .field("connected", &self.is_connected())
            .finish()
    }
}
