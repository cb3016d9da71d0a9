use serde::{Deserialize, Serialize};

fn default_timeout_secs() -> u64 {
    30
}

/// Connection settings for the practice-management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the PHP API, e.g. `https://api.clinic.example/v1`.
    pub base_url: String,
    /// Per-request timeout. Older configs without the field get 30s.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}
