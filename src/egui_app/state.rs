//! Shared state types for the egui UI.

use egui::Color32;

use crate::egui_app::ui::style;
use crate::form::{ModelSelection, SampleSize};
use crate::scoring::ScoreReport;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub status: StatusBarState,
    pub form: FormState,
    pub results: ResultsPanelState,
}

/// Editable form inputs: the author count and the model toggles.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub sample_size: SampleSize,
    pub selection: ModelSelection,
}

/// Result area state: the in-flight flag and the last stored report.
///
/// `report` starts absent, is replaced wholesale by every submission, and is
/// never merged with a previous value.
#[derive(Clone, Debug, Default)]
pub struct ResultsPanelState {
    pub in_flight: bool,
    pub report: Option<ScoreReport>,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        let (badge_label, badge_color) = style::status_badge(style::StatusTone::Idle);
        Self {
            text: "Configure a run and request scores".into(),
            badge_label,
            badge_color,
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::idle()
    }
}
