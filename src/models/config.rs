use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub providers: ProviderSettings,
    pub network: NetworkSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            providers: ProviderSettings::default(),
            network: NetworkSettings::default(),
        }
    }
}

/// Credentials and identifiers for the third-party providers. Empty values
/// keep the owning widget on its fallback data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub openweather_api_key: String,
    pub youtube_api_key: String,
    pub youtube_channel_id: String,
    pub github_username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// Per-request timeout; every provider call is a single attempt.
    pub http_timeout_secs: u64,
    pub weather_ttl_mins: u64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            http_timeout_secs: 10,
            weather_ttl_mins: 15,
        }
    }
}
