/// Typed access to the chrome.* APIs exposed by popup.js

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::account::ExtractedAccount;
use crate::config::{SETTINGS_KEY, Settings, TASK_STATE_KEY};
use crate::error::BridgeError;
use crate::messages::{InboundMessage, OutboundMessage};
use crate::storage::TaskState;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    fn hasExtensionApi() -> bool;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn sendRuntimeMessage(message: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn executeExtractor() -> Result<JsValue, JsValue>;

    fn addMessageListener(listener: &js_sys::Function);

    fn removeMessageListener(listener: &js_sys::Function);
}

/// True when running as a loaded extension (chrome.runtime.id is set)
pub fn is_available() -> bool {
    hasExtensionApi()
}

fn host_error(operation: &'static str) -> impl FnOnce(JsValue) -> BridgeError {
    move |e| BridgeError::Host {
        operation,
        detail: format!("{:?}", e),
    }
}

fn decode<T: DeserializeOwned>(what: &'static str, value: JsValue) -> Result<T, BridgeError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| BridgeError::Decode {
        what,
        detail: e.to_string(),
    })
}

fn encode<T: Serialize>(what: &'static str, value: &T) -> Result<JsValue, BridgeError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| BridgeError::Encode {
        what,
        detail: e.to_string(),
    })
}

async fn load_record<T: DeserializeOwned>(key: &'static str) -> Result<Option<T>, BridgeError> {
    if !is_available() {
        return Err(BridgeError::Unavailable);
    }

    let value = getStorage(key).await.map_err(host_error("storage read"))?;
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }

    decode(key, value).map(Some)
}

/// The runner's persisted record; None if nothing was ever stored
pub async fn load_task_state() -> Result<Option<TaskState>, BridgeError> {
    load_record(TASK_STATE_KEY).await
}

pub async fn load_settings() -> Result<Settings, BridgeError> {
    Ok(load_record(SETTINGS_KEY).await?.unwrap_or_default())
}

pub async fn save_settings(settings: &Settings) -> Result<(), BridgeError> {
    if !is_available() {
        return Err(BridgeError::Unavailable);
    }

    let value = encode(SETTINGS_KEY, settings)?;
    setStorage(SETTINGS_KEY, value)
        .await
        .map_err(host_error("storage write"))
}

/// Fire-and-forget send to the background runner
pub async fn send_message(message: &OutboundMessage) -> Result<(), BridgeError> {
    if !is_available() {
        return Err(BridgeError::Unavailable);
    }

    let value = encode("runtime message", message)?;
    sendRuntimeMessage(value)
        .await
        .map_err(host_error("runtime message"))
}

/// Inject the content script into the active tab and collect its result
///
/// A missing or null script result is reported as an empty list.
pub async fn run_extractor() -> Result<Vec<ExtractedAccount>, BridgeError> {
    if !is_available() {
        return Err(BridgeError::Unavailable);
    }

    let value = executeExtractor()
        .await
        .map_err(host_error("script injection"))?;

    if value.is_undefined() {
        return Err(BridgeError::NoActiveTab);
    }
    if value.is_null() {
        return Ok(Vec::new());
    }

    decode("extracted accounts", value)
}

/// A live registration on chrome.runtime.onMessage
///
/// Dropping the subscription removes the listener; events already queued
/// behind the removal are discarded.
pub struct MessageSubscription {
    listener: Closure<dyn Fn(JsValue)>,
    active: Rc<Cell<bool>>,
}

impl MessageSubscription {
    pub fn register(on_message: impl Fn(InboundMessage) + 'static) -> MessageSubscription {
        let active = Rc::new(Cell::new(true));

        let listener = {
            let active = active.clone();
            Closure::wrap(Box::new(move |raw: JsValue| {
                if !active.get() {
                    return;
                }
                match serde_wasm_bindgen::from_value::<InboundMessage>(raw) {
                    Ok(InboundMessage::Unrecognized) => {
                        log::debug!("ignoring unrelated runtime message");
                    }
                    Ok(message) => on_message(message),
                    Err(e) => log::debug!("ignoring malformed runtime message: {}", e),
                }
            }) as Box<dyn Fn(JsValue)>)
        };

        addMessageListener(listener.as_ref().unchecked_ref());

        MessageSubscription { listener, active }
    }
}

impl Drop for MessageSubscription {
    fn drop(&mut self) {
        self.active.set(false);
        removeMessageListener(self.listener.as_ref().unchecked_ref());
    }
}
