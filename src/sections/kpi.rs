//! KPI dashboard: indicator cards, health metrics and failure predictions.

use eframe::egui;

use crate::data;

pub fn show(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("KPI Dashboard").size(24.0).strong());
    ui.add_space(8.0);

    ui.columns(4, |columns| {
        for (ui, kpi) in columns.iter_mut().zip(&data::KPIS) {
            ui.group(|ui| {
                ui.label(egui::RichText::new(kpi.name).size(12.0));
                ui.label(
                    egui::RichText::new(kpi.value)
                        .size(24.0)
                        .strong()
                        .color(kpi.color),
                );
                ui.label(egui::RichText::new(kpi.unit).size(10.0).weak());
                ui.add_space(4.0);
                ui.add(
                    egui::ProgressBar::new(0.75)
                        .desired_height(6.0)
                        .fill(kpi.color),
                );
            });
        }
    });

    ui.add_space(12.0);
    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.label(
                egui::RichText::new("System Health Metrics")
                    .size(16.0)
                    .strong(),
            );
            ui.add_space(6.0);
            for metric in &data::HEALTH_METRICS {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(metric.name).size(12.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{}%", metric.percent))
                                .size(12.0)
                                .strong(),
                        );
                    });
                });
                ui.add(
                    egui::ProgressBar::new(f32::from(metric.percent) / 100.0)
                        .desired_height(8.0)
                        .fill(metric.color),
                );
                ui.add_space(6.0);
            }
        });

        columns[1].group(|ui| {
            ui.label(
                egui::RichText::new("Failure Prediction Timeline")
                    .size(16.0)
                    .strong(),
            );
            ui.add_space(6.0);
            egui::Grid::new("prediction_timeline")
                .num_columns(3)
                .spacing([32.0, 8.0])
                .show(ui, |ui| {
                    for prediction in &data::FAILURE_PREDICTIONS {
                        ui.label(egui::RichText::new(prediction.component).size(12.0));
                        ui.label(
                            egui::RichText::new(format!("{} days", prediction.days_to_failure))
                                .size(12.0),
                        );
                        ui.label(crate::theme::badge(
                            prediction.risk.label(),
                            prediction.risk.color(),
                        ));
                        ui.end_row();
                    }
                });
        });
    });
}
