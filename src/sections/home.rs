//! Landing page: hero card, headline KPIs and the reliability overview.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::data;
use crate::theme;
use crate::weibull::SampleSeries;

pub fn show(ui: &mut egui::Ui, series: &SampleSeries) {
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Reliability Engineering & Predictive Maintenance")
                .size(24.0)
                .strong()
                .color(theme::BLUE),
        );
        ui.label(
            "Advanced project on system reliability, safety analysis and \
             data-driven maintenance strategies",
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(theme::badge("Dependability", theme::BLUE));
            ui.label(theme::badge("Predictive Maintenance", theme::VIOLET));
            ui.label(theme::badge("Risk Analysis", theme::EMERALD));
        });
    });

    ui.add_space(12.0);
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
            });
        }
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("System Reliability Over Time")
                .size(16.0)
                .strong(),
        );
        let points: PlotPoints = series.reliability_points().into_iter().collect();
        Plot::new("home_reliability")
            .width(ui.available_width() - 20.0)
            .height(280.0)
            .allow_zoom(true)
            .allow_drag(true)
            .x_axis_label("Time (hours)")
            .y_axis_label("Reliability (%)")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Reliability (%)", points)
                        .color(theme::BLUE)
                        .width(2.5)
                        .fill(0.0),
                );
            });
    });
}
