//! Configuration is a single JSON document, embedded at build time and
//! optionally replaced by the file named in `APP_CONFIG_PATH`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

mod config_loader;
pub use config_loader::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub port: u16,
    pub address: String,
}

impl Server {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl From<&AppConfig> for Server {
    fn from(config: &AppConfig) -> Self {
        Self {
            port: config.server.port,
            address: config.server.host.clone(),
        }
    }
}

impl SwapiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
