/// Constants and persisted user settings for Follower Pro
use serde::{Deserialize, Serialize};

/// chrome.storage.local key of the run record owned by the background runner
pub const TASK_STATE_KEY: &str = "taskState";

/// chrome.storage.local key of the popup's own preferences
pub const SETTINGS_KEY: &str = "followerSettings";

/// Profile URLs are this base joined with the handle
pub const PROFILE_BASE_URL: &str = "https://x.com/";

pub const NO_ACCOUNTS_MESSAGE: &str = "No accounts found on this page.";

pub const ENVIRONMENT_NOTICE: &str =
    "Build the project and load the dist folder into Chrome to use full features.";

/// Pacing preference forwarded to the runner with every START_TASK
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedMode {
    Fast,
    #[default]
    Medium,
    Slow,
}

impl SpeedMode {
    pub const ALL: [SpeedMode; 3] = [SpeedMode::Fast, SpeedMode::Medium, SpeedMode::Slow];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedMode::Fast => "fast",
            SpeedMode::Medium => "medium",
            SpeedMode::Slow => "slow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeedMode::Fast => "Fast",
            SpeedMode::Medium => "Medium",
            SpeedMode::Slow => "Slow (safest)",
        }
    }

    /// Parse the value of a `<select>` option; unknown values yield None
    pub fn parse(value: &str) -> Option<SpeedMode> {
        SpeedMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub speed_mode: SpeedMode,
}
