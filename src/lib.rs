use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod components;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
#[cfg(target_arch = "wasm32")]
pub mod presentation;

/// Entry point: install logging, read the page configuration and mount the
/// landing page into `<body>`.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    let config = infrastructure::config::load_portfolio_config();
    log_info!(LogComponent::Page("Initialize"), "Mounting portfolio page for {}", config.logo.name);

    leptos::mount_to_body(move || leptos::view! { <App config=config /> });
}
