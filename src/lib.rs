//! Library exports for reuse in integration tests.
/// Application directory helpers.
pub mod app_dirs;
/// Persistent TOML configuration.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Form parameter and model-selection state.
pub mod form;
/// Shared HTTP client configuration.
pub mod http_client;
/// Logging setup.
pub mod logging;
/// Scoring-service client and result contract.
pub mod scoring;
