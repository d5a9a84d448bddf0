//! Failure analysis: category tallies and failure-mode distribution.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use crate::data;

pub fn show(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("Failure Analysis").size(24.0).strong());
    ui.add_space(8.0);

    ui.columns(3, |columns| {
        for (ui, cat) in columns.iter_mut().zip(&data::FAILURE_CATEGORIES) {
            ui.group(|ui| {
                ui.label(
                    egui::RichText::new(cat.label)
                        .size(16.0)
                        .strong()
                        .color(cat.color),
                );
                ui.label(
                    egui::RichText::new(cat.count.to_string())
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(4.0);
                for example in &cat.examples {
                    ui.label(egui::RichText::new(format!("• {example}")).size(12.0));
                }
            });
        }
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Failure Mode Distribution")
                .size(16.0)
                .strong(),
        );
        let bars: Vec<Bar> = data::FAILURE_MODE_SHARES
            .iter()
            .enumerate()
            .map(|(i, share)| {
                Bar::new(i as f64, f64::from(share.percent))
                    .name(format!("{}: {}%", share.label, share.percent))
                    .fill(share.color)
                    .width(0.6)
            })
            .collect();
        Plot::new("failure_modes")
            .width(ui.available_width() - 20.0)
            .height(260.0)
            .allow_zoom(false)
            .allow_drag(false)
            .y_axis_label("Share (%)")
            .x_axis_formatter(|mark, _| {
                let index = mark.value.round();
                if (mark.value - index).abs() > 0.01 || index < 0.0 {
                    return String::new();
                }
                data::FAILURE_MODE_SHARES
                    .get(index as usize)
                    .map_or_else(String::new, |share| share.label.to_owned())
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Failure modes", bars));
            });
    });
}
