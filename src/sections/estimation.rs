//! Statistical estimation: lifetime distributions and the interactive
//! Weibull explorer with linked reliability/hazard plots.

use eframe::egui;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

use crate::data;
use crate::theme;
use crate::weibull::{self, SampleSeries, WeibullParams};

pub fn show(ui: &mut egui::Ui, params: &mut WeibullParams, series: &mut SampleSeries) {
    let shown_params = *params;

    ui.label(
        egui::RichText::new("Statistical Estimation")
            .size(24.0)
            .strong(),
    );
    ui.add_space(8.0);

    ui.columns(3, |columns| {
        for (ui, dist) in columns.iter_mut().zip(&data::DISTRIBUTIONS) {
            ui.group(|ui| {
                ui.label(
                    egui::RichText::new(dist.name)
                        .size(16.0)
                        .strong()
                        .color(theme::BLUE),
                );
                ui.label(egui::RichText::new(dist.summary).size(12.0));
                ui.add_space(4.0);
                ui.code(dist.density);
            });
        }
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Interactive Weibull Analysis")
                .size(16.0)
                .strong(),
        );
        ui.add_space(6.0);

        ui.add(
            egui::Slider::new(&mut params.shape, WeibullParams::SHAPE_RANGE)
                .step_by(0.1)
                .text("Shape (β)")
                .custom_formatter(|n, _| format!("{n:.2}")),
        );
        ui.label(
            egui::RichText::new(weibull::trend_label(params.shape))
                .size(12.0)
                .weak(),
        );
        ui.add_space(4.0);

        ui.add(
            egui::Slider::new(&mut params.scale, WeibullParams::SCALE_RANGE)
                .step_by(100.0)
                .text("Scale (η)")
                .custom_formatter(|n, _| format!("{n:.0}")),
        );
        ui.label(
            egui::RichText::new("Characteristic lifetime of the component")
                .size(12.0)
                .weak(),
        );
        ui.add_space(8.0);

        // Resample in the same frame a slider moved, so the plots below
        // always show the current parameters.
        if *params != shown_params {
            *series = weibull::sample_series(*params);
        }

        // Two stacked plots standing in for a dual-axis chart; the x axes
        // and cursors stay linked so the curves read as one figure.
        let link = ui.id().with("weibull_axes");
        let plot_width = ui.available_width() - 20.0;

        Plot::new("estimation_reliability")
            .width(plot_width)
            .height(200.0)
            .allow_zoom(true)
            .allow_drag(true)
            .link_axis(link, [true, false])
            .link_cursor(link, [true, false])
            .y_axis_label("Reliability (%)")
            .legend(Legend::default().position(Corner::RightTop))
            .show(ui, |plot_ui| {
                let points: PlotPoints = series.reliability_points().into_iter().collect();
                plot_ui.line(
                    Line::new("Reliability (%)", points)
                        .color(theme::BLUE)
                        .width(2.0),
                );
            });

        Plot::new("estimation_hazard")
            .width(plot_width)
            .height(200.0)
            .allow_zoom(true)
            .allow_drag(true)
            .link_axis(link, [true, false])
            .link_cursor(link, [true, false])
            .x_axis_label("Time (hours)")
            .y_axis_label("Hazard rate")
            .legend(Legend::default().position(Corner::RightTop))
            .show(ui, |plot_ui| {
                let points: PlotPoints = series.hazard_points().into_iter().collect();
                plot_ui.line(
                    Line::new("Hazard rate", points)
                        .color(theme::RED)
                        .width(2.0),
                );
            });

    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Python Code Example")
                .size(16.0)
                .strong(),
        );
        ui.add_space(4.0);
        let snippet = format!(
            "import numpy as np\n\
             from scipy.special import gamma\n\
             from scipy.stats import weibull_min\n\
             \n\
             # Weibull parameters\n\
             beta = {:.2}  # shape\n\
             eta = {:.0}   # scale\n\
             \n\
             t = np.linspace(0, 2000, 100)\n\
             reliability = weibull_min.sf(t, beta, scale=eta)\n\
             hazard = (beta / eta) * (t / eta) ** (beta - 1)\n\
             \n\
             mtbf = eta * gamma(1 + 1 / beta)\n\
             print(f\"MTBF: {{mtbf:.2f}} hours\")",
            params.shape, params.scale
        );
        ui.label(egui::RichText::new(snippet).monospace().size(12.0));
    });
}
