use clap::ValueEnum;
use semver::Version;
use std::fmt;

use crate::error::DeviceError;
use crate::models::ModelId;

/// How the device firmware is compared to the version a model requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FirmwarePolicy {
    /// Firmware must equal the required version.
    #[default]
    Exact,
    /// Firmware must be the required version or newer.
    Minimum,
}

impl fmt::Display for FirmwarePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirmwarePolicy::Exact => f.write_str("exact"),
            FirmwarePolicy::Minimum => f.write_str("minimum"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityRule {
    pub model_id: ModelId,
    pub required_firmware: &'static str,
}

/// Firmware each model must run before the installer may talk to it.
/// Installer providers are staged per device family.
static DEFAULT_RULES: [CompatibilityRule; 3] = [
    CompatibilityRule {
        model_id: ModelId::NanoX,
        required_firmware: "2.1.0",
    },
    CompatibilityRule {
        model_id: ModelId::NanoSP,
        required_firmware: "1.1.0",
    },
    CompatibilityRule {
        model_id: ModelId::NanoS,
        required_firmware: "2.1.0",
    },
];

#[derive(Debug, Clone)]
pub struct CompatibilityTable {
    rules: &'static [CompatibilityRule],
    policy: FirmwarePolicy,
}

impl Default for CompatibilityTable {
    fn default() -> Self {
        CompatibilityTable::new(FirmwarePolicy::default())
    }
}

impl CompatibilityTable {
    pub fn new(policy: FirmwarePolicy) -> Self {
        Self {
            rules: &DEFAULT_RULES,
            policy,
        }
    }

    pub fn policy(&self) -> FirmwarePolicy {
        self.policy
    }

    pub fn rules(&self) -> &[CompatibilityRule] {
        self.rules
    }

    pub fn required_version(&self, model_id: &ModelId) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| &rule.model_id == model_id)
            .map(|rule| rule.required_firmware)
    }

    /// Checks a model/firmware pair and returns the required version when eligible.
    pub fn check(
        &self,
        model_id: &ModelId,
        firmware_version: &str,
    ) -> Result<&'static str, DeviceError> {
        let required = self
            .required_version(model_id)
            .ok_or_else(|| DeviceError::UnsupportedDevice {
                model: model_id.to_string(),
            })?;

        if self.is_accepted(required, firmware_version) {
            Ok(required)
        } else {
            Err(DeviceError::FirmwareOutOfDate {
                required: required.to_string(),
                actual: firmware_version.to_string(),
            })
        }
    }

    fn is_accepted(&self, required: &str, actual: &str) -> bool {
        match self.policy {
            FirmwarePolicy::Exact => actual == required,
            FirmwarePolicy::Minimum => match (Version::parse(actual), Version::parse(required)) {
                (Ok(actual), Ok(required)) => actual >= required,
                _ => false,
            },
        }
    }
}
