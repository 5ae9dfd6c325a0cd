//! ToDo Widget Frontend Entry Point

mod app;
mod components;
mod config;
mod store;

use app::App;
use leptos::prelude::*;
use rolling_logger::RollingLogger;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_warning) = config::load_config();
    if let Err(e) = RollingLogger::init(config.level_filter(), config.log_capacity) {
        web_sys::console::error_1(&format!("[APP] Logger not installed: {}", e).into());
    }
    if let Some(warning) = config_warning {
        log::warn!("{}", warning);
    }

    log::info!("mounting todo widget (seed: {:?})", config.seed_source());
    mount_to_body(move || view! { <App config=config /> });
}
