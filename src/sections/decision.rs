//! Data-driven decisions: risk heatmap, resource allocation and cost-benefit.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use crate::data;
use crate::theme;

pub fn show(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("Data-Driven Decision Making")
            .size(24.0)
            .strong(),
    );
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.label(egui::RichText::new("Risk Heatmap").size(16.0).strong());
        ui.add_space(6.0);
        egui::Grid::new("risk_heatmap")
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for severity in 1..=5u32 {
                    for probability in 1..=5u32 {
                        let risk = severity * probability;
                        ui.add_sized(
                            [48.0, 48.0],
                            egui::Button::new(egui::RichText::new(risk.to_string()).strong())
                                .fill(data::risk_matrix_color(risk).gamma_multiply(0.4)),
                        );
                    }
                    ui.end_row();
                }
            });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("← Lower probability").size(12.0).weak());
            ui.add_space(60.0);
            ui.label(
                egui::RichText::new("Higher probability →")
                    .size(12.0)
                    .weak(),
            );
        });
    });

    ui.add_space(12.0);
    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.label(
                egui::RichText::new("Resource Allocation")
                    .size(16.0)
                    .strong()
                    .color(theme::BLUE),
            );
            let bars: Vec<Bar> = data::RESOURCE_ALLOCATION
                .iter()
                .enumerate()
                .map(|(i, share)| {
                    Bar::new(i as f64, f64::from(share.percent))
                        .name(format!("{}: {}%", share.label, share.percent))
                        .fill(share.color)
                        .width(0.6)
                })
                .collect();
            Plot::new("resource_allocation")
                .width(ui.available_width() - 20.0)
                .height(220.0)
                .allow_zoom(false)
                .allow_drag(false)
                .y_axis_label("Budget (%)")
                .x_axis_formatter(|mark, _| {
                    let index = mark.value.round();
                    if (mark.value - index).abs() > 0.01 || index < 0.0 {
                        return String::new();
                    }
                    data::RESOURCE_ALLOCATION
                        .get(index as usize)
                        .map_or_else(String::new, |share| share.label.to_owned())
                })
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new("Resource allocation", bars));
                });
        });

        columns[1].group(|ui| {
            ui.label(
                egui::RichText::new("Cost-Benefit Analysis")
                    .size(16.0)
                    .strong()
                    .color(theme::VIOLET),
            );
            ui.add_space(6.0);
            egui::Grid::new("cost_benefit")
                .num_columns(2)
                .spacing([40.0, 6.0])
                .show(ui, |ui| {
                    for line in &data::COST_BENEFIT_LINES {
                        ui.label(egui::RichText::new(line.label).size(12.0));
                        ui.label(
                            egui::RichText::new(line.amount)
                                .strong()
                                .color(line.color),
                        );
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            ui.separator();
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("5-Year Net Benefit").size(12.0).weak());
                ui.label(
                    egui::RichText::new(data::FIVE_YEAR_NET_BENEFIT)
                        .size(26.0)
                        .strong()
                        .color(theme::EMERALD),
                );
            });
        });
    });
}
