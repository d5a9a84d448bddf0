mod data;
mod gui;
mod report;
mod sections;
mod theme;
mod viewer;
mod weibull;

use crate::gui::DashboardApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1500.0, 1000.0])
            .with_min_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Reliability Engineering Portfolio",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
