use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hardware model reported by the device. Identifiers follow the Ledger naming,
/// e.g. "nanoX" or "nanoSP".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ModelId {
    Blue,
    NanoS,
    NanoSP,
    NanoX,
    Stax,
    Europa,
    Unknown(String),
}

impl ModelId {
    pub fn as_str(&self) -> &str {
        match self {
            ModelId::Blue => "blue",
            ModelId::NanoS => "nanoS",
            ModelId::NanoSP => "nanoSP",
            ModelId::NanoX => "nanoX",
            ModelId::Stax => "stax",
            ModelId::Europa => "europa",
            ModelId::Unknown(id) => id,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ModelId::Unknown(_))
    }
}

impl From<&str> for ModelId {
    fn from(id: &str) -> Self {
        match id {
            "blue" => ModelId::Blue,
            "nanoS" => ModelId::NanoS,
            "nanoSP" => ModelId::NanoSP,
            "nanoX" => ModelId::NanoX,
            "stax" => ModelId::Stax,
            "europa" => ModelId::Europa,
            other => ModelId::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ModelId {
    fn from(id: String) -> Self {
        ModelId::from(id.as_str())
    }
}

impl From<ModelId> for String {
    fn from(model: ModelId) -> Self {
        model.as_str().to_string()
    }
}

impl FromStr for ModelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ModelId::from(s))
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// What the transport knows about the attached hardware before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub model_id: ModelId,
    pub product_name: String,
}

impl DeviceDescriptor {
    pub fn new(model_id: ModelId, product_name: impl Into<String>) -> Self {
        Self {
            model_id,
            product_name: product_name.into(),
        }
    }
}

/// Identity and firmware answered by the device itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub model_id: ModelId,
    pub firmware_version: String,
}

impl DeviceInfo {
    pub fn new(model_id: ModelId, firmware_version: impl Into<String>) -> Self {
        Self {
            model_id,
            firmware_version: firmware_version.into(),
        }
    }
}
