//! Risk analysis: FMEA worksheet, fault tree and bow-tie overview.

use eframe::egui;

use crate::data::{self, RiskLevel};
use crate::theme;

pub fn show(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("Risk Analysis").size(24.0).strong());
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.label(
            egui::RichText::new("FMEA (Failure Mode and Effects Analysis)")
                .size(16.0)
                .strong(),
        );
        ui.add_space(6.0);
        egui::Grid::new("fmea_grid")
            .num_columns(6)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for header in [
                    "Component",
                    "Failure mode",
                    "Severity (S)",
                    "Occurrence (O)",
                    "Detection (D)",
                    "RPN",
                ] {
                    ui.label(egui::RichText::new(header).strong());
                }
                ui.end_row();

                for row in &data::FMEA_ROWS {
                    let rpn = row.rpn();
                    ui.label(egui::RichText::new(row.component).strong());
                    ui.label(row.failure_mode);
                    ui.label(row.severity.to_string());
                    ui.label(row.occurrence.to_string());
                    ui.label(row.detection.to_string());
                    ui.label(theme::badge(
                        &rpn.to_string(),
                        RiskLevel::for_rpn(rpn).color(),
                    ));
                    ui.end_row();
                }
            });
    });

    ui.add_space(12.0);
    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.label(
                egui::RichText::new("Fault Tree Analysis (FTA)")
                    .size(16.0)
                    .strong()
                    .color(theme::BLUE),
            );
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(theme::badge("Top event: System Failure", theme::RED));
                ui.label(egui::RichText::new("OR").strong());
                ui.horizontal(|ui| {
                    for (event, probability) in &data::FAULT_TREE_EVENTS {
                        ui.vertical(|ui| {
                            ui.label(theme::badge(event, theme::AMBER));
                            ui.label(
                                egui::RichText::new(format!("P = {probability}"))
                                    .size(12.0)
                                    .weak(),
                            );
                        });
                    }
                });
                ui.add_space(8.0);
                ui.label(egui::RichText::new("System failure probability").size(12.0));
                ui.label(
                    egui::RichText::new(format!("{:.4}", data::fault_tree_top_probability()))
                        .size(24.0)
                        .strong()
                        .color(theme::BLUE),
                );
            });
        });

        columns[1].group(|ui| {
            ui.label(
                egui::RichText::new("Bow-Tie Analysis")
                    .size(16.0)
                    .strong()
                    .color(theme::VIOLET),
            );
            ui.add_space(6.0);
            ui.columns(3, |columns| {
                columns[0].vertical(|ui| {
                    for threat in ["Threat 1", "Threat 2", "Threat 3"] {
                        ui.label(theme::badge(threat, theme::YELLOW));
                        ui.add_space(4.0);
                    }
                });
                columns[1].vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(theme::badge("HAZARD", theme::RED));
                });
                columns[2].vertical(|ui| {
                    for consequence in ["Consequence 1", "Consequence 2", "Consequence 3"] {
                        ui.label(theme::badge(consequence, theme::EMERALD));
                        ui.add_space(4.0);
                    }
                });
            });
        });
    });
}
