/// The persisted run record in chrome.storage.local
///
/// The background runner owns this record; the popup only reads it at mount.

use crate::account::{Account, TaskStats};
use serde::{Deserialize, Serialize};

/// Root storage structure stored under `taskState`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskState {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub is_processing: bool,
    #[serde(default = "no_current_index")]
    pub current_index: i32,
    #[serde(default)]
    pub stats: TaskStats,
}

fn no_current_index() -> i32 {
    -1
}

impl TaskState {
    pub fn new() -> Self {
        TaskState {
            accounts: Vec::new(),
            is_processing: false,
            current_index: no_current_index(),
            stats: TaskStats::default(),
        }
    }
}

impl Default for TaskState {
    fn default() -> Self {
        Self::new()
    }
}
