//! Browser Entry Point
//!
//! Compiled to wasm with the `web` feature. On page-ready it reads the
//! optional `<script type="application/json" id="site-config">` block, then
//! starts the gallery and the section navigator independently.

pub mod bridge;
pub mod fetch;
pub mod gallery;
pub mod logging;
pub mod navigation;

use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::SiteConfig;

const CONFIG_ELEMENT_ID: &str = "site-config";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::init();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let (window, doc) = (window.clone(), document.clone());
        let on_ready = Closure::<dyn FnMut()>::new(move || run(&window, &doc));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        run(&window, &document);
    }

    Ok(())
}

fn run(window: &Window, document: &Document) {
    let config = read_config(document);
    gallery::start(window, document, &config);
    navigation::start(document, &config);
}

fn read_config(document: &Document) -> SiteConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|e| e.text_content())
    else {
        return SiteConfig::default();
    };

    SiteConfig::from_json(&json).unwrap_or_else(|e| {
        warn!("Ignoring #{}: {:#}", CONFIG_ELEMENT_ID, e);
        SiteConfig::default()
    })
}
