//! Shared egui UI modules.

/// Form controller bridging state to the scoring client.
pub mod controller;
/// State types consumed by the renderer.
pub mod state;
/// egui renderer.
pub mod ui;
/// Conversion from domain data to render-ready views.
pub mod view_model;
