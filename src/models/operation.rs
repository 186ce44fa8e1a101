use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::DeviceError;

/// Mutating operation against the target app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Install,
    Uninstall,
}

impl OperationKind {
    pub fn is_uninstall(&self) -> bool {
        matches!(self, OperationKind::Uninstall)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Install => f.write_str("install"),
            OperationKind::Uninstall => f.write_str("uninstall"),
        }
    }
}

/// Installer backend channel, e.g. 4 for staging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderId(pub u32);

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub kind: OperationKind,
    pub app_name: String,
    pub provider: ProviderId,
}

impl InstallRequest {
    pub fn new(kind: OperationKind, app_name: impl Into<String>, provider: ProviderId) -> Self {
        Self {
            kind,
            app_name: app_name.into(),
            provider,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    Idle,
    Busy,
}

/// Single-flight guard of a device session. At most one permit exists at a time;
/// a second acquisition is rejected instead of queued.
#[derive(Debug, Default)]
pub struct OperationGate {
    busy: AtomicBool,
}

impl OperationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Result<OperationPermit<'_>, DeviceError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| DeviceError::OperationInProgress)?;
        Ok(OperationPermit { gate: self })
    }

    pub fn state(&self) -> OperationState {
        if self.busy.load(Ordering::Acquire) {
            OperationState::Busy
        } else {
            OperationState::Idle
        }
    }
}

/// Holds the gate busy until dropped, on every exit path.
#[derive(Debug)]
pub struct OperationPermit<'a> {
    gate: &'a OperationGate,
}

impl Drop for OperationPermit<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}
