//! Browser host. Discovers the page hooks, wires DOM events into
//! [`Message`]s and carries out the resulting [`crate::app::Effect`]s.

mod dom;
mod listeners;
mod logging;
mod runtime;

use crate::app::Message;
use crate::config::load_config;
use dom::PageDom;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use web_sys::Document;

const CONFIG_SCRIPT_ID: &str = "portfolio-config";

static STARTED: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_SET: OnceCell<()> = OnceCell::new();

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    init_panic_hook();
    let reload_handle = logging::init_tracing();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let inline = inline_config(&document);
    let config = load_config(inline.as_deref());
    logging::set_log_level(&reload_handle, config.log_level.as_filter_str());

    if document.ready_state() == "loading" {
        let ready = Closure::once_into_js(move || {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                boot(config, document);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())?;
    } else {
        boot(config, document);
    }
    Ok(())
}

/// Open the content modal for `id`, as a card click would.
#[wasm_bindgen]
pub fn open_content(id: &str) {
    runtime::with_app(|app| app.open_content(id));
}

/// Close the content modal if it is showing.
#[wasm_bindgen]
pub fn close_content() {
    runtime::with_app(|app| app.close_content());
}

fn boot(config: crate::config::PageConfig, document: Document) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let dom = PageDom::discover(window, document);
    let outline = dom.outline();
    info!(
        nav_links = outline.nav_links.len(),
        animated = outline.animated_elements,
        loaded = outline.loaded,
        "Page hooks discovered"
    );
    runtime::install(config, dom.clone());
    listeners::register(&dom);
    runtime::dispatch(Message::Ready(outline));
}

fn inline_config(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

fn init_panic_hook() {
    PANIC_HOOK_SET.get_or_init(|| {
        std::panic::set_hook(Box::new(|info| {
            web_sys::console::error_1(&JsValue::from_str(&info.to_string()));
        }));
    });
}
