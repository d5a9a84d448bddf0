use chrono::Utc;
use eframe::egui;
use log::error;
use rfd;

use crate::report::{self, ExportRequest};
use crate::sections::{self, Section};
use crate::theme;
use crate::viewer::DocumentViewer;
use crate::weibull::{sample_series, SampleSeries, WeibullParams};

pub struct DashboardApp {
    dark_mode: bool,
    sidebar_open: bool,
    section: Section,
    params: WeibullParams,
    series: SampleSeries,
    viewer: DocumentViewer,
}

impl Default for DashboardApp {
    fn default() -> Self {
        let params = WeibullParams::default();
        Self {
            dark_mode: true,
            sidebar_open: true,
            section: Section::default(),
            params,
            series: sample_series(params),
            viewer: DocumentViewer::default(),
        }
    }
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self::default();
        theme::apply(&cc.egui_ctx, app.dark_mode);
        app
    }

    fn handle_export(&self, request: ExportRequest) {
        match request {
            ExportRequest::Pdf => {
                let default_name = format!(
                    "reliability_report_{}.pdf",
                    Utc::now().format("%Y-%m-%d_%H-%M-%S")
                );
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("PDF Files", &["pdf"])
                    .set_file_name(&default_name)
                    .save_file()
                {
                    if let Err(err) =
                        report::export_pdf(&path.to_string_lossy(), self.params, &self.series)
                    {
                        error!("PDF export error: {err:#}");
                    }
                }
            }
            ExportRequest::Csv => {
                if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                    if let Err(err) = report::export_csv(&dir.to_string_lossy(), &self.series) {
                        error!("CSV export error: {err:#}");
                    }
                }
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header")
            .exact_height(56.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let toggle = if self.sidebar_open { "✖" } else { "☰" };
                    if ui.button(toggle).clicked() {
                        self.sidebar_open = !self.sidebar_open;
                    }
                    ui.label(
                        egui::RichText::new("Reliability Engineering Portfolio")
                            .size(22.0)
                            .strong()
                            .color(theme::BLUE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let icon = if self.dark_mode { "☀" } else { "🌙" };
                        if ui.button(icon).clicked() {
                            self.dark_mode = !self.dark_mode;
                            theme::apply(ctx, self.dark_mode);
                        }
                    });
                });
            });

        if self.sidebar_open {
            egui::SidePanel::left("nav")
                .min_width(230.0)
                .max_width(230.0)
                .show(ctx, |ui| {
                    ui.add_space(6.0);
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        for section in Section::ALL {
                            let text = format!("{} {}", section.icon(), section.label());
                            if ui
                                .selectable_label(self.section == section, text)
                                .clicked()
                            {
                                self.section = section;
                            }
                            ui.add_space(2.0);
                        }
                    });
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                match self.section {
                    Section::Home => sections::home::show(ui, &self.series),
                    Section::Estimation => {
                        sections::estimation::show(ui, &mut self.params, &mut self.series);
                    }
                    Section::Modeling => sections::modeling::show(ui),
                    Section::Failure => sections::failure::show(ui),
                    Section::Software => sections::software::show(ui),
                    Section::Risk => sections::risk::show(ui),
                    Section::Predictive => sections::predictive::show(ui),
                    Section::Kpi => sections::kpi::show(ui),
                    Section::Decision => sections::decision::show(ui),
                    Section::Cases => sections::cases::show(ui),
                    Section::Resources => sections::resources::show(ui),
                    Section::Annexes => {
                        if let Some(request) = sections::annexes::show(ui, &mut self.viewer) {
                            self.handle_export(request);
                        }
                    }
                }
                ui.add_space(15.0);
            });
        });
    }
}
