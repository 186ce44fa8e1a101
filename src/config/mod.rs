mod app;
mod compatibility;

pub use app::{AppConfig, DefaultAppConfig};
pub use compatibility::{CompatibilityTable, FirmwarePolicy};

#[cfg(test)]
#[allow(unused)]
pub use app::MockDefaultAppConfig;
