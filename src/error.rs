use std::time::Duration;
use thiserror::Error;

/// Failures surfaced by the device session, inventory and install orchestration.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("No compatible device is reachable: {reason}. Plug in and unlock the device, then retry.")]
    TransportUnavailable { reason: String },

    #[error("Connection to the device was lost. Reconnect the device and start a new session.")]
    TransportLost,

    #[error("The device did not answer: {reason}")]
    DeviceQueryFailed { reason: String },

    #[error("Device model '{model}' is not supported for app installation.")]
    UnsupportedDevice { model: String },

    #[error("Another operation is already running on this device. Wait for it to finish.")]
    OperationInProgress,

    #[error(
        "Device firmware is not up to date: version {required} is required, but the device runs {actual}. Update the firmware and retry."
    )]
    FirmwareOutOfDate { required: String, actual: String },

    #[error("Device has not been identified yet. Query the device info before installing.")]
    DeviceNotIdentified,

    #[error("Installer failed: {0}")]
    InstallerFailed(InstallerFailure),
}

/// Cause carried by [`DeviceError::InstallerFailed`].
#[derive(Debug, Error)]
pub enum InstallerFailure {
    #[error("{0}")]
    Device(String),

    #[error("no answer from the device within {}s", .0.as_secs())]
    Timeout(Duration),
}

impl DeviceError {
    pub fn query_failed(error: anyhow::Error) -> Self {
        DeviceError::DeviceQueryFailed {
            reason: format!("{:#}", error),
        }
    }

    pub fn installer_failed(error: anyhow::Error) -> Self {
        DeviceError::InstallerFailed(InstallerFailure::Device(format!("{:#}", error)))
    }
}
