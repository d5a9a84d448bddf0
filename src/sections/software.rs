//! Software reliability growth models and human reliability analysis.

use eframe::egui;

use crate::data;
use crate::theme;

pub fn show(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("Software & Human Reliability")
            .size(24.0)
            .strong(),
    );
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        for (ui, model) in columns.iter_mut().zip(&data::GROWTH_MODELS) {
            ui.group(|ui| {
                ui.label(
                    egui::RichText::new(model.name)
                        .size(16.0)
                        .strong()
                        .color(model.color),
                );
                ui.label(egui::RichText::new(model.summary).size(12.0));
                ui.add_space(4.0);
                ui.code(model.formula);
                ui.add_space(4.0);
                for term in &model.terms {
                    ui.label(egui::RichText::new(format!("• {term}")).size(12.0));
                }
            });
        }
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Human Reliability Analysis")
                .size(16.0)
                .strong(),
        );
        ui.add_space(8.0);
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.label(
                    egui::RichText::new("THERP (Technique for Human Error Rate Prediction)")
                        .size(14.0)
                        .strong()
                        .color(theme::EMERALD),
                );
                ui.label(
                    egui::RichText::new(
                        "Event-tree approach built on basic human error probabilities",
                    )
                    .size(12.0),
                );
                ui.add_space(6.0);
                egui::Grid::new("therp_grid")
                    .num_columns(2)
                    .spacing([24.0, 4.0])
                    .show(ui, |ui| {
                        for (task, probability) in &data::THERP_PROBABILITIES {
                            ui.label(egui::RichText::new(*task).size(12.0));
                            ui.label(
                                egui::RichText::new(format!("{probability}"))
                                    .monospace()
                                    .size(12.0),
                            );
                            ui.end_row();
                        }
                    });
            });

            columns[1].group(|ui| {
                ui.label(
                    egui::RichText::new("HEART (Human Error Assessment and Reduction)")
                        .size(14.0)
                        .strong()
                        .color(theme::AMBER),
                );
                ui.label(
                    egui::RichText::new(
                        "Multiplier-based approach weighing error-producing conditions",
                    )
                    .size(12.0),
                );
                ui.add_space(6.0);
                ui.code("HEP = Nominal × Π(EPCᵢ)");
            });
        });
    });
}
