//! Predictive maintenance: model benchmark and strategy evolution charts.

use eframe::egui;
use egui_plot::{Bar, BarChart, Corner, Legend, Plot};

use crate::data;
use crate::theme;

pub fn show(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("Predictive Maintenance")
            .size(24.0)
            .strong(),
    );
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.label(
            egui::RichText::new("ML Model Performance Comparison")
                .size(16.0)
                .strong(),
        );
        let accuracy: Vec<Bar> = data::MODEL_SCORES
            .iter()
            .enumerate()
            .map(|(i, score)| {
                Bar::new(i as f64 - 0.17, score.accuracy)
                    .name(format!("{} accuracy: {}%", score.model, score.accuracy))
                    .width(0.3)
            })
            .collect();
        let f1: Vec<Bar> = data::MODEL_SCORES
            .iter()
            .enumerate()
            .map(|(i, score)| {
                Bar::new(i as f64 + 0.17, score.f1)
                    .name(format!("{} F1: {}%", score.model, score.f1))
                    .width(0.3)
            })
            .collect();
        Plot::new("model_scores")
            .width(ui.available_width() - 20.0)
            .height(260.0)
            .allow_zoom(false)
            .allow_drag(false)
            .include_y(0.0)
            .include_y(100.0)
            .y_axis_label("Score (%)")
            .x_axis_formatter(|mark, _| {
                let index = mark.value.round();
                if (mark.value - index).abs() > 0.01 || index < 0.0 {
                    return String::new();
                }
                data::MODEL_SCORES
                    .get(index as usize)
                    .map_or_else(String::new, |score| score.model.to_owned())
            })
            .legend(Legend::default().position(Corner::RightTop))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Accuracy", accuracy).color(theme::BLUE));
                plot_ui.bar_chart(BarChart::new("F1 score", f1).color(theme::VIOLET));
            });

        ui.add_space(8.0);
        egui::Grid::new("model_scores_table")
            .num_columns(5)
            .striped(true)
            .spacing([28.0, 4.0])
            .show(ui, |ui| {
                for header in ["Model", "Accuracy", "Precision", "Recall", "F1 score"] {
                    ui.label(egui::RichText::new(header).strong());
                }
                ui.end_row();
                for score in &data::MODEL_SCORES {
                    ui.label(egui::RichText::new(score.model).strong());
                    ui.label(format!("{}%", score.accuracy));
                    ui.label(format!("{}%", score.precision));
                    ui.label(format!("{}%", score.recall));
                    ui.label(format!("{}%", score.f1));
                    ui.end_row();
                }
            });
    });

    ui.add_space(12.0);
    ui.columns(2, |columns| {
        for (ui, approach) in columns.iter_mut().zip(&data::ML_APPROACHES) {
            ui.group(|ui| {
                ui.label(
                    egui::RichText::new(approach.name)
                        .size(16.0)
                        .strong()
                        .color(approach.color),
                );
                ui.add_space(4.0);
                for point in &approach.points {
                    ui.label(egui::RichText::new(format!("• {point}")).size(12.0));
                }
            });
        }
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Maintenance Strategy Evolution")
                .size(16.0)
                .strong(),
        );
        let months = &data::MAINTENANCE_BY_MONTH;
        let strategy = |offset: f64, pick: fn(&data::MaintenanceMonth) -> u32| -> Vec<Bar> {
            months
                .iter()
                .enumerate()
                .map(|(i, month)| {
                    Bar::new(i as f64 + offset, f64::from(pick(month)))
                        .name(month.month)
                        .width(0.22)
                })
                .collect()
        };
        let corrective = strategy(-0.25, |m| m.corrective);
        let preventive = strategy(0.0, |m| m.preventive);
        let predictive = strategy(0.25, |m| m.predictive);

        Plot::new("maintenance_evolution")
            .width(ui.available_width() - 20.0)
            .height(260.0)
            .allow_zoom(false)
            .allow_drag(false)
            .y_axis_label("Interventions")
            .x_axis_formatter(|mark, _| {
                let index = mark.value.round();
                if (mark.value - index).abs() > 0.01 || index < 0.0 {
                    return String::new();
                }
                data::MAINTENANCE_BY_MONTH
                    .get(index as usize)
                    .map_or_else(String::new, |month| month.month.to_owned())
            })
            .legend(Legend::default().position(Corner::RightTop))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Corrective", corrective).color(theme::RED));
                plot_ui.bar_chart(BarChart::new("Preventive", preventive).color(theme::AMBER));
                plot_ui.bar_chart(BarChart::new("Predictive", predictive).color(theme::EMERALD));
            });
    });
}
