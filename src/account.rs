/// Data structures for Follower Pro
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handle::profile_url;

/// One candidate returned by the page extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedAccount {
    pub username: String,
    pub avatar: Option<String>,
}

/// Lifecycle of one account within a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Pending,
    Processing,
    Success,
    Skipped,
    Failed,
    Resting,
}

/// An account listed in the popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub url: String,
    pub selected: bool,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Account {
    /// Fresh list entry for a scanned handle: new id, selected, pending
    pub fn from_extracted(extracted: ExtractedAccount) -> Account {
        Account {
            id: Uuid::new_v4().to_string(),
            url: profile_url(&extracted.username),
            username: extracted.username,
            avatar: extracted.avatar.filter(|src| !src.is_empty()),
            selected: true,
            status: AccountStatus::Pending,
            error: None,
        }
    }
}

/// Aggregate counters pushed by the runner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    #[serde(default)]
    pub success: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_resting: Option<bool>,
}

impl TaskStats {
    pub fn completed(&self) -> u32 {
        self.success
            .saturating_add(self.skipped)
            .saturating_add(self.failed)
    }

    /// Completion in percent, 0 for an empty run
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = u64::from(self.completed()) * 100 / u64::from(self.total);
        percent.min(100) as u8
    }

    pub fn is_resting(&self) -> bool {
        self.is_resting.unwrap_or(false)
    }
}
