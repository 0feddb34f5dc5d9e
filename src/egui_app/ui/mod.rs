//! egui renderer for the application UI.

mod form_panel;
mod results_panel;
pub mod style;

use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

use crate::config;
use crate::egui_app::controller::EguiController;

/// Smallest window size the layout stays readable at.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(560.0, 680.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let config =
            config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self {
            controller: EguiController::new(config),
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(10, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Scribeval").color(palette.text_primary));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Authorship model scoring").color(palette.text_muted),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        egui::Stroke::new(1.0, palette.panel_outline),
                        StrokeKind::Inside,
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                });
            });
    }

    fn render_center(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.add_space(6.0);
        ui.label(
            RichText::new(
                "Adjust the number of authors and pick the models to analyze, \
                 then press Get results to see each model's accuracy.",
            )
            .color(palette.text_muted),
        );
        ui.add_space(10.0);
        self.render_form(ui);
        ui.add_space(14.0);
        ui.separator();
        ui.add_space(10.0);
        self.render_results(ui);
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .show(ui, |ui| self.render_center(ui));
        });
        if self.controller.ui.results.in_flight {
            // Keep repainting so the job channel is drained promptly.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
