/// Failures talking to the extension host through the JS bridge
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BridgeError {
    #[error("extension APIs are not available")]
    Unavailable,
    #[error("no active tab to scan")]
    NoActiveTab,
    #[error("{operation} failed: {detail}")]
    Host {
        operation: &'static str,
        detail: String,
    },
    #[error("failed to parse {what}: {detail}")]
    Decode { what: &'static str, detail: String },
    #[error("failed to serialize {what}: {detail}")]
    Encode { what: &'static str, detail: String },
}
