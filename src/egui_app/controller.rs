//! Maintains form state and bridges the scoring client to the egui UI.

mod jobs;

use crate::config::AppConfig;
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::{self, StatusTone};
use crate::form::ModelId;
use crate::scoring::{ScoreReport, ScoreRequest};
use jobs::{ControllerJobs, JobMessage, ScoreJob};

/// Owns the form state and drives score submissions.
///
/// Everything mutates on the UI thread: widgets call the setters below, and
/// the one outstanding network request reports back through the job channel
/// drained by [`EguiController::poll_background_jobs`] each frame.
pub struct EguiController {
    pub ui: UiState,
    config: AppConfig,
    jobs: ControllerJobs,
}

impl EguiController {
    /// Create a controller around injected configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            ui: UiState::default(),
            config,
            jobs: ControllerJobs::new(),
        }
    }

    /// Address the score request is POSTed to.
    pub fn scoring_endpoint(&self) -> &str {
        &self.config.scoring.endpoint
    }

    /// Store a new author count; both the drag field and the slider call this.
    pub fn set_sample_size(&mut self, raw: i64) {
        self.ui.form.sample_size.set(raw);
    }

    /// Flip one model's selection flag, leaving the others untouched.
    pub fn toggle_model(&mut self, id: ModelId) {
        self.ui.form.selection.toggle(id);
    }

    /// Validate the form and dispatch a single score request.
    ///
    /// A no-op while a request is outstanding. Without a selected model the
    /// submission aborts with a status-bar warning and no network traffic.
    pub fn submit_scores(&mut self) {
        if self.ui.results.in_flight {
            return;
        }
        if !self.ui.form.selection.any_selected() {
            self.set_status(
                "Select at least one model for analysis",
                StatusTone::Warning,
            );
            return;
        }

        let request = ScoreRequest {
            num_authors: self.ui.form.sample_size.get(),
            models: self
                .ui
                .form
                .selection
                .selected_ids()
                .into_iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        };
        tracing::info!(
            "Submitting score request: {} authors, models {:?}",
            request.num_authors,
            request.models
        );
        self.ui.results.in_flight = true;
        self.set_status(
            format!("Scoring {} models…", request.models.len()),
            StatusTone::Busy,
        );
        self.jobs.begin_score_request(ScoreJob {
            endpoint: self.config.scoring.endpoint.clone(),
            request,
        });
    }

    /// Drain finished background work and fold it into the UI state.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => break,
            };

            match message {
                JobMessage::ScoreFinished(outcome) => {
                    self.jobs.clear_score_request();
                    self.ui.results.in_flight = false;
                    match outcome.result {
                        Ok(report) => {
                            self.set_status("Scores received", StatusTone::Info);
                            self.ui.results.report = Some(report);
                        }
                        Err(err) => {
                            tracing::warn!("Score request failed: {err}");
                            self.set_status(
                                format!("Score request failed: {err}"),
                                StatusTone::Error,
                            );
                            self.ui.results.report = Some(ScoreReport::failure());
                        }
                    }
                }
            }
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = style::status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
    }
}
