//! Reliability modeling: series/parallel structures and availability figures.

use eframe::egui;

use crate::data;
use crate::theme;

pub fn show(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("Reliability Modeling & Availability")
            .size(24.0)
            .strong(),
    );
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.label(egui::RichText::new("Series System").size(16.0).strong());
            ui.label("All components must work for system success");
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for (i, name) in ["C1", "C2", "C3"].iter().enumerate() {
                    if i > 0 {
                        ui.label("-");
                    }
                    ui.add_sized(
                        [56.0, 56.0],
                        egui::Button::new(egui::RichText::new(*name).strong().color(theme::BLUE))
                            .fill(theme::BLUE.gamma_multiply(0.2)),
                    );
                }
            });
            ui.add_space(6.0);
            ui.code("R_sys = R₁ × R₂ × R₃");
        });

        columns[1].group(|ui| {
            ui.label(
                egui::RichText::new("Parallel System (Redundancy)")
                    .size(16.0)
                    .strong(),
            );
            ui.label("At least one component must work");
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                for name in ["C1", "C2", "C3"] {
                    ui.add_sized(
                        [56.0, 32.0],
                        egui::Button::new(
                            egui::RichText::new(name).strong().color(theme::EMERALD),
                        )
                        .fill(theme::EMERALD.gamma_multiply(0.2)),
                    );
                }
            });
            ui.add_space(6.0);
            ui.code("R_sys = 1 - (1-R₁)(1-R₂)(1-R₃)");
        });
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Availability Analysis")
                .size(16.0)
                .strong(),
        );
        ui.add_space(8.0);
        ui.columns(3, |columns| {
            for (ui, figure) in columns.iter_mut().zip(&data::AVAILABILITY_FIGURES) {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(figure.value)
                            .size(26.0)
                            .strong()
                            .color(figure.color),
                    );
                    ui.label(egui::RichText::new(figure.label).size(12.0));
                    ui.code(figure.note);
                });
            }
        });
    });
}
