/// Follower Pro - Chrome Extension for bulk-following X profiles
/// Built with Rust + WASM + Yew

mod account;
mod config;
mod dom;
mod error;
mod extractor;
mod handle;
mod messages;
mod state;
mod storage;
pub mod ui;

pub use account::{Account, AccountStatus, ExtractedAccount, TaskStats};
pub use extractor::{PageAnchor, PageDocument};

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

/// Scan the current page for profile links; called by the injected content script
#[wasm_bindgen]
pub fn extract_accounts() -> Result<JsValue, JsValue> {
    let page = dom::PageDom::current().ok_or_else(|| JsValue::from_str("no document"))?;
    let accounts = scan_page(&page);
    log::info!("Extracted {} accounts from page", accounts.len());
    // Plain objects with null avatars so the result survives structured cloning
    accounts
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Run the extractor against any page implementation
pub fn scan_page<D: PageDocument>(page: &D) -> Vec<ExtractedAccount> {
    extractor::extract_accounts(page)
}

/// Run the extractor against a live document
pub fn scan_document(document: web_sys::Document) -> Vec<ExtractedAccount> {
    scan_page(&dom::PageDom::new(document))
}
