//! Browser client for the Money Manager personal finance API.

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod format;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod screen;
pub mod session;

pub use api::{ApiClient, BrowserClient};
pub use config::AppConfig;
pub use error::{ApiError, ValidationError};

/// Initialises logging and mounts the application on `<body>`.
pub fn run() {
    let config = AppConfig::from_env();
    logging::init(&config.log_level);
    tracing::info!(api = %config.api_base_url, "starting money manager");
    yew::Renderer::<components::App>::new().render();
}
