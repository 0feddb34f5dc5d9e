//! Form widgets: author count, model toggles, submit control.

use eframe::egui::{self, RichText, SliderClamping};

use super::{EguiApp, style};
use crate::form::{AUTHOR_STEP, MAX_AUTHORS, MIN_AUTHORS, ModelId};

impl EguiApp {
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();

        ui.label(RichText::new("Number of authors").color(palette.text_primary));
        ui.label(
            RichText::new(format!(
                "Choose a value between {MIN_AUTHORS} and {MAX_AUTHORS}."
            ))
            .color(palette.text_muted),
        );
        ui.add_space(4.0);
        // Both surfaces feed the same setter so they can never diverge.
        let mut authors = self.controller.ui.form.sample_size.get() as i64;
        ui.horizontal(|ui| {
            let field = egui::DragValue::new(&mut authors)
                .range(MIN_AUTHORS as i64..=MAX_AUTHORS as i64)
                .speed(AUTHOR_STEP as f64 / 4.0);
            if ui.add(field).changed() {
                self.controller.set_sample_size(authors);
            }
            let slider = egui::Slider::new(&mut authors, MIN_AUTHORS as i64..=MAX_AUTHORS as i64)
                .step_by(AUTHOR_STEP as f64)
                .clamping(SliderClamping::Always)
                .show_value(false);
            if ui.add(slider).changed() {
                self.controller.set_sample_size(authors);
            }
        });

        ui.add_space(10.0);
        ui.label(RichText::new("Models").color(palette.text_primary));
        ui.add_space(2.0);
        for id in ModelId::ALL {
            if !id.available() {
                continue;
            }
            let mut checked = self.controller.ui.form.selection.is_selected(id);
            if ui.checkbox(&mut checked, id.label()).changed() {
                self.controller.toggle_model(id);
            }
        }

        ui.add_space(12.0);
        let in_flight = self.controller.ui.results.in_flight;
        ui.horizontal(|ui| {
            let label = if in_flight { "Scoring…" } else { "Get results" };
            let button = egui::Button::new(RichText::new(label).color(palette.text_primary))
                .min_size(egui::vec2(160.0, 28.0));
            if ui.add_enabled(!in_flight, button).clicked() {
                self.controller.submit_scores();
            }
            if in_flight {
                ui.add(egui::Spinner::new().size(18.0));
            }
        });
    }
}
