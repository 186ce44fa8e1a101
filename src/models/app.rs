use serde_derive::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An application installed on the device. Fields other than `name` are informational.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InstalledApp {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Value>,
}

impl InstalledApp {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            hash: None,
            metadata: BTreeMap::new(),
        }
    }

    #[allow(unused)]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn get_version(&self) -> &str {
        self.version.as_deref().unwrap_or("-")
    }
}

/// Point-in-time snapshot of the installed applications, in the order the device reported them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppInventory {
    apps: Vec<InstalledApp>,
}

impl AppInventory {
    pub fn new(apps: Vec<InstalledApp>) -> Self {
        Self { apps }
    }

    /// First app whose name matches exactly (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&InstalledApp> {
        self.apps.iter().find(|app| app.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstalledApp> {
        self.apps.iter()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl From<Vec<InstalledApp>> for AppInventory {
    fn from(apps: Vec<InstalledApp>) -> Self {
        AppInventory::new(apps)
    }
}
