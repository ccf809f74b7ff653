/// Runtime messages exchanged with the background task runner
use serde::{Deserialize, Serialize};

use crate::account::{Account, TaskStats};
use crate::config::SpeedMode;

/// Popup → runner
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutboundMessage {
    StartTask {
        accounts: Vec<Account>,
        speed: SpeedMode,
    },
    StopTask,
}

/// Runner → popup. Anything else arriving on the runtime channel is `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InboundMessage {
    #[serde(rename_all = "camelCase")]
    UpdateProgress {
        accounts: Vec<Account>,
        current_index: i32,
        stats: TaskStats,
    },
    TaskComplete {
        accounts: Vec<Account>,
        stats: TaskStats,
    },
    Error {
        message: String,
    },
    #[serde(other)]
    Unrecognized,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountStatus;
    use serde_json::json;

    fn create_test_account(id: &str, username: &str) -> Account {
        Account {
            id: id.to_string(),
            username: username.to_string(),
            avatar: None,
            url: format!("https://x.com/{}", username),
            selected: true,
            status: AccountStatus::Pending,
            error: None,
        }
    }

    #[test]
    fn test_start_task_wire_format() {
        let message = OutboundMessage::StartTask {
            accounts: vec![create_test_account("a1", "alice")],
            speed: SpeedMode::Fast,
        };

        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["type"], "START_TASK");
        assert_eq!(value["speed"], "fast");
        assert_eq!(value["accounts"][0]["username"], "alice");
        assert_eq!(value["accounts"][0]["status"], "pending");
    }

    #[test]
    fn test_stop_task_wire_format() {
        let value = serde_json::to_value(&OutboundMessage::StopTask).unwrap();
        assert_eq!(value, json!({ "type": "STOP_TASK" }));
    }

    #[test]
    fn test_parse_update_progress() {
        let value = json!({
            "type": "UPDATE_PROGRESS",
            "accounts": [{
                "id": "a1",
                "username": "alice",
                "url": "https://x.com/alice",
                "selected": true,
                "status": "processing"
            }],
            "currentIndex": 0,
            "stats": { "success": 0, "skipped": 0, "failed": 0, "total": 1 }
        });

        let message: InboundMessage = serde_json::from_value(value).unwrap();

        match message {
            InboundMessage::UpdateProgress {
                accounts,
                current_index,
                stats,
            } => {
                assert_eq!(accounts[0].status, AccountStatus::Processing);
                assert_eq!(current_index, 0);
                assert_eq!(stats.total, 1);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_parse_task_complete() {
        let value = json!({
            "type": "TASK_COMPLETE",
            "accounts": [],
            "stats": { "success": 3, "skipped": 1, "failed": 0, "total": 4 }
        });

        let message: InboundMessage = serde_json::from_value(value).unwrap();

        assert_eq!(
            message,
            InboundMessage::TaskComplete {
                accounts: Vec::new(),
                stats: TaskStats {
                    success: 3,
                    skipped: 1,
                    failed: 0,
                    total: 4,
                    is_resting: None,
                },
            }
        );
    }

    #[test]
    fn test_parse_error() {
        let message: InboundMessage =
            serde_json::from_value(json!({ "type": "ERROR", "message": "Not logged in" })).unwrap();

        assert_eq!(
            message,
            InboundMessage::Error {
                message: "Not logged in".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unrelated_message() {
        let message: InboundMessage =
            serde_json::from_value(json!({ "type": "ACCOUNTS_EXTRACTED", "accounts": [] })).unwrap();

        assert_eq!(message, InboundMessage::Unrecognized);
    }
}
