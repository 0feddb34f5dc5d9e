//! Result area: placeholder, error, and metric-card presentations.

use eframe::egui::{self, Frame, Margin, RichText, Stroke};

use super::{EguiApp, style};
use crate::egui_app::view_model::{self, MetricCardView, ParamCardView, ResultsView};

const CARD_MIN_SIZE: egui::Vec2 = egui::vec2(150.0, 68.0);

impl EguiApp {
    pub(super) fn render_results(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(RichText::new("Accuracy").color(palette.text_primary));
        ui.add_space(6.0);

        let view = view_model::results_view(
            self.controller.ui.results.in_flight,
            self.controller.ui.results.report.as_ref(),
        );
        match view {
            ResultsView::Empty => {
                ui.label(
                    RichText::new(view_model::EMPTY_STATE_MESSAGE).color(palette.text_muted),
                );
            }
            ResultsView::Loading { placeholders } => {
                ui.horizontal_wrapped(|ui| {
                    for _ in 0..placeholders {
                        loading_card(ui, &palette);
                    }
                });
            }
            ResultsView::Error { message } => {
                ui.label(RichText::new(message).color(palette.warning));
            }
            ResultsView::Report {
                metrics,
                best_params,
            } => {
                render_metric_cards(ui, &palette, &metrics);
                if !best_params.is_empty() {
                    ui.add_space(10.0);
                    ui.label(
                        RichText::new("Best SVM parameters").color(palette.text_primary),
                    );
                    ui.add_space(6.0);
                    render_param_cards(ui, &palette, &best_params);
                }
            }
        }
    }
}

fn render_metric_cards(ui: &mut egui::Ui, palette: &style::Palette, cards: &[MetricCardView]) {
    ui.horizontal_wrapped(|ui| {
        for card in cards {
            result_card(ui, palette, card.label, &card.value, palette.accent);
        }
    });
}

fn render_param_cards(ui: &mut egui::Ui, palette: &style::Palette, cards: &[ParamCardView]) {
    ui.horizontal_wrapped(|ui| {
        for card in cards {
            result_card(ui, palette, &card.name, &card.value, palette.text_primary);
        }
    });
}

fn result_card(
    ui: &mut egui::Ui,
    palette: &style::Palette,
    title: &str,
    value: &str,
    value_color: egui::Color32,
) {
    card_frame(palette).show(ui, |ui| {
        ui.set_min_size(CARD_MIN_SIZE);
        ui.vertical(|ui| {
            ui.label(RichText::new(title).color(palette.text_muted).small());
            ui.add_space(4.0);
            ui.label(RichText::new(value).color(value_color).heading());
        });
    });
}

fn loading_card(ui: &mut egui::Ui, palette: &style::Palette) {
    card_frame(palette).show(ui, |ui| {
        ui.set_min_size(CARD_MIN_SIZE);
        ui.centered_and_justified(|ui| {
            ui.add(egui::Spinner::new().size(20.0));
        });
    });
}

fn card_frame(palette: &style::Palette) -> Frame {
    Frame::new()
        .fill(palette.bg_tertiary)
        .stroke(Stroke::new(1.0, palette.panel_outline))
        .inner_margin(Margin::symmetric(12, 10))
}
