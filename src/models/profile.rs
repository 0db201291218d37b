use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Data URL or empty when the avatar falls back to initials.
    #[serde(default)]
    pub avatar_url: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Guest".to_string(),
            avatar_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub greeting: String,
    pub initials: String,
    pub avatar_url: String,
    pub streak_days: u32,
    pub streak_label: String,
}
