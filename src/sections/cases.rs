//! Case studies and the classical vs data-driven comparison.

use eframe::egui;

use crate::data;

pub fn show(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("Case Studies").size(24.0).strong());
    ui.add_space(8.0);

    ui.columns(3, |columns| {
        for (ui, study) in columns.iter_mut().zip(&data::CASE_STUDIES) {
            ui.group(|ui| {
                ui.label(egui::RichText::new(study.industry).size(11.0).weak());
                ui.label(
                    egui::RichText::new(study.title)
                        .size(16.0)
                        .strong()
                        .color(study.color),
                );
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Approach:").size(12.0).weak());
                    ui.label(egui::RichText::new(study.approach).size(12.0));
                });
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Improvement:").size(12.0).weak());
                    ui.label(
                        egui::RichText::new(study.improvement)
                            .size(12.0)
                            .strong()
                            .color(study.color),
                    );
                });
            });
        }
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Classical vs Data-Driven Approaches")
                .size(16.0)
                .strong(),
        );
        ui.add_space(6.0);
        egui::Grid::new("approach_comparison")
            .num_columns(3)
            .striped(true)
            .spacing([32.0, 6.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Aspect").strong());
                ui.label(egui::RichText::new("Classical approach").strong());
                ui.label(egui::RichText::new("Data-driven approach").strong());
                ui.end_row();

                for row in &data::APPROACH_COMPARISON {
                    ui.label(egui::RichText::new(row.aspect).strong());
                    ui.label(row.classical);
                    ui.label(row.data_driven);
                    ui.end_row();
                }
            });
    });
}
