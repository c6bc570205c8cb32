//! TOML file configuration structures.
//!
//! These structs directly map to the `letterdrop.toml` file format. Every
//! section and key is optional.

use letterdrop_sdk::client::DEFAULT_QR_SERVICE;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.letterdrop.ai";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub qr: QrConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote generation/order service section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the service (e.g., "http://localhost:8004").
    #[serde(default = "default_api_base")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_owned()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// QR image rendering section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrConfig {
    #[serde(default = "default_qr_service")]
    pub service_url: String,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            service_url: default_qr_service(),
        }
    }
}

fn default_qr_service() -> String {
    DEFAULT_QR_SERVICE.to_owned()
}

/// Terminal behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Copy every generated letter to the clipboard.
    #[serde(default)]
    pub copy_on_generate: bool,
}
