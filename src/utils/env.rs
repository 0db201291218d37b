use crate::models::DashboardConfig;

const ENV_OPENWEATHER_KEY: &str = "OPENWEATHER_API_KEY";
const ENV_YOUTUBE_KEY: &str = "YOUTUBE_API_KEY";
const ENV_YOUTUBE_CHANNEL: &str = "YOUTUBE_CHANNEL_ID";
const ENV_GITHUB_USERNAME: &str = "GITHUB_USERNAME";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

fn var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Fills provider credentials left empty in the config from the environment.
/// Explicit config values always win.
pub fn apply_env_defaults(config: &mut DashboardConfig) {
    let providers = &mut config.providers;
    if providers.openweather_api_key.trim().is_empty() {
        providers.openweather_api_key = var(ENV_OPENWEATHER_KEY).unwrap_or_default();
    }
    if providers.youtube_api_key.trim().is_empty() {
        providers.youtube_api_key = var(ENV_YOUTUBE_KEY).unwrap_or_default();
    }
    if providers.youtube_channel_id.trim().is_empty() {
        providers.youtube_channel_id = var(ENV_YOUTUBE_CHANNEL).unwrap_or_default();
    }
    if providers.github_username.trim().is_empty() {
        providers.github_username = var(ENV_GITHUB_USERNAME).unwrap_or_default();
    }
}
