/// Popup view state and the transitions that may change it
use std::rc::Rc;

use yew::functional::Reducible;

use crate::account::{Account, ExtractedAccount, TaskStats};
use crate::config::NO_ACCOUNTS_MESSAGE;
use crate::error::BridgeError;
use crate::messages::InboundMessage;
use crate::storage::TaskState;

/// Everything the popup renders from
#[derive(Debug, Clone, PartialEq)]
pub struct PopupState {
    pub accounts: Vec<Account>,
    pub is_processing: bool,
    pub current_index: i32,
    pub stats: TaskStats,
    pub error_msg: Option<String>,
    pub has_scanned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    /// Persisted record found at mount
    Restore(TaskState),
    ProgressUpdated {
        accounts: Vec<Account>,
        current_index: i32,
        stats: TaskStats,
    },
    TaskCompleted {
        accounts: Vec<Account>,
        stats: TaskStats,
    },
    RunnerFailed(String),
    /// Result of one page scan; empty when nothing was found or the scan failed
    ScanCompleted(Vec<ExtractedAccount>),
    ToggleAll,
    ToggleAccount(String),
    RunStarted,
    RunStopped,
}

impl PopupAction {
    /// Map a runner push event to its transition; unrelated messages map to None
    pub fn from_inbound(message: InboundMessage) -> Option<PopupAction> {
        match message {
            InboundMessage::UpdateProgress {
                accounts,
                current_index,
                stats,
            } => Some(PopupAction::ProgressUpdated {
                accounts,
                current_index,
                stats,
            }),
            InboundMessage::TaskComplete { accounts, stats } => {
                Some(PopupAction::TaskCompleted { accounts, stats })
            }
            InboundMessage::Error { message } => Some(PopupAction::RunnerFailed(message)),
            InboundMessage::Unrecognized => None,
        }
    }

    /// Map the outcome of a page scan to its transition
    ///
    /// No tab or no bridge leaves the popup untouched; any other failure
    /// counts as a scan that found nothing.
    pub fn from_scan(result: Result<Vec<ExtractedAccount>, BridgeError>) -> Option<PopupAction> {
        match result {
            Ok(extracted) => Some(PopupAction::ScanCompleted(extracted)),
            Err(BridgeError::NoActiveTab | BridgeError::Unavailable) => None,
            Err(_) => Some(PopupAction::ScanCompleted(Vec::new())),
        }
    }
}

impl PopupState {
    pub fn new() -> Self {
        PopupState {
            accounts: Vec::new(),
            is_processing: false,
            current_index: -1,
            stats: TaskStats::default(),
            error_msg: None,
            has_scanned: false,
        }
    }

    pub fn apply(&mut self, action: PopupAction) {
        match action {
            PopupAction::Restore(record) => {
                self.accounts = record.accounts;
                self.is_processing = record.is_processing;
                self.current_index = record.current_index;
                self.stats = record.stats;
                self.has_scanned = true;
            }
            PopupAction::ProgressUpdated {
                accounts,
                current_index,
                stats,
            } => {
                self.accounts = accounts;
                self.current_index = current_index;
                self.stats = stats;
                self.is_processing = true;
            }
            PopupAction::TaskCompleted { accounts, stats } => {
                self.is_processing = false;
                self.stats = stats;
                self.accounts = accounts;
            }
            PopupAction::RunnerFailed(message) => {
                self.error_msg = Some(message);
                self.is_processing = false;
            }
            PopupAction::ScanCompleted(extracted) => {
                self.has_scanned = true;
                if extracted.is_empty() {
                    self.accounts.clear();
                    self.error_msg = Some(NO_ACCOUNTS_MESSAGE.to_string());
                } else {
                    self.accounts = extracted.into_iter().map(Account::from_extracted).collect();
                    self.error_msg = None;
                }
            }
            PopupAction::ToggleAll => {
                let selected = !self.all_selected();
                for account in &mut self.accounts {
                    account.selected = selected;
                }
            }
            PopupAction::ToggleAccount(id) => {
                if let Some(account) = self.accounts.iter_mut().find(|a| a.id == id) {
                    account.selected = !account.selected;
                }
            }
            PopupAction::RunStarted => {
                self.error_msg = None;
                self.is_processing = true;
            }
            PopupAction::RunStopped => {
                self.is_processing = false;
            }
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.accounts.is_empty() && self.accounts.iter().all(|a| a.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.accounts.iter().filter(|a| a.selected).count()
    }

    /// Accounts to send with START_TASK, or None when a run must not start
    pub fn start_batch(&self, bridge_available: bool) -> Option<Vec<Account>> {
        if !bridge_available {
            return None;
        }
        let selected: Vec<Account> = self.accounts.iter().filter(|a| a.selected).cloned().collect();
        if selected.is_empty() { None } else { Some(selected) }
    }

    pub fn shows_stats(&self) -> bool {
        self.is_processing || self.stats.total > 0
    }

    pub fn is_current(&self, index: usize) -> bool {
        usize::try_from(self.current_index).is_ok_and(|current| current == index)
    }
}

impl Default for PopupState {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducible for PopupState {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: PopupAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
