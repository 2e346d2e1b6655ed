#![allow(warnings)]
//! Manong Admin Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use log::{Level, LevelFilter};
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    if rolling_logger::init(rolling_logger::DEFAULT_CAPACITY, LevelFilter::Debug, Box::new(console_sink)).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    mount_to_body(App);
}

/// Forward log lines to the browser console at the matching level
fn console_sink(level: Level, line: &str) {
    let message = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&message),
        Level::Warn => web_sys::console::warn_1(&message),
        Level::Info => web_sys::console::info_1(&message),
        _ => web_sys::console::log_1(&message),
    }
}
