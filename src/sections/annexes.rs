//! Annexes: script listings, datasets and the technical document viewer.

use eframe::egui;

use crate::data;
use crate::report::ExportRequest;
use crate::theme;
use crate::viewer::{DocumentState, DocumentViewer};

pub fn show(ui: &mut egui::Ui, viewer: &mut DocumentViewer) -> Option<ExportRequest> {
    let mut export = None;

    ui.label(
        egui::RichText::new("Annexes & Resources")
            .size(24.0)
            .strong(),
    );
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.label(egui::RichText::new("Analysis Export").size(16.0).strong());
        ui.label(
            egui::RichText::new("Export the current Weibull analysis and worksheets")
                .size(12.0)
                .weak(),
        );
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Export PDF report").clicked() {
                export = Some(ExportRequest::Pdf);
            }
            if ui.button("Export CSVs").clicked() {
                export = Some(ExportRequest::Csv);
            }
        });
    });

    ui.add_space(12.0);
    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.label(
                egui::RichText::new("Python Code Repository")
                    .size(16.0)
                    .strong(),
            );
            ui.add_space(4.0);
            for file in data::PYTHON_SCRIPTS {
                ui.label(egui::RichText::new(format!("⬇ {file}")).monospace().size(12.0));
            }
        });
        columns[1].group(|ui| {
            ui.label(egui::RichText::new("MATLAB Scripts").size(16.0).strong());
            ui.add_space(4.0);
            for file in data::MATLAB_SCRIPTS {
                ui.label(egui::RichText::new(format!("⬇ {file}")).monospace().size(12.0));
            }
        });
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(egui::RichText::new("Datasets").size(16.0).strong());
        ui.add_space(4.0);
        ui.columns(3, |columns| {
            for (ui, dataset) in columns.iter_mut().zip(&data::DATASETS) {
                ui.group(|ui| {
                    ui.label(egui::RichText::new(dataset.name).strong().size(13.0));
                    ui.label(egui::RichText::new(dataset.summary).size(11.0).weak());
                    ui.label(
                        egui::RichText::new(dataset.size)
                            .monospace()
                            .size(11.0)
                            .color(theme::EMERALD),
                    );
                });
            }
        });
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Documentation & References")
                .size(16.0)
                .strong(),
        );
        ui.add_space(4.0);
        for reference in data::REFERENCE_DOCS {
            ui.label(egui::RichText::new(format!("• {reference}")).size(12.0));
        }
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Document Viewer - Technical Documents")
                .size(16.0)
                .strong(),
        );
        ui.add_space(6.0);
        show_document_panel(ui, viewer);
    });

    export
}

fn show_document_panel(ui: &mut egui::Ui, viewer: &mut DocumentViewer) {
    ui.horizontal(|ui| {
        for (index, slot) in data::DOCUMENT_SLOTS.iter().enumerate() {
            let selected = viewer.selected() == index;
            let text = egui::RichText::new(format!("{}\n{}", slot.title, slot.subtitle));
            if ui.selectable_label(selected, text).clicked() {
                viewer.select(index);
            }
        }
    });
    ui.add_space(6.0);

    viewer.ensure_loaded();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(viewer.can_go_prev(), egui::Button::new("← Previous page"))
            .clicked()
        {
            viewer.prev_page();
        }
        let pages = viewer
            .page_count()
            .map_or_else(String::new, |count| format!(" of {count}"));
        ui.label(format!("Page {}{pages}", viewer.page()));
        if ui
            .add_enabled(viewer.can_go_next(), egui::Button::new("Next page →"))
            .clicked()
        {
            viewer.next_page();
        }
    });
    ui.add_space(6.0);

    match viewer.state() {
        DocumentState::NotLoaded => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("Loading document...").size(12.0).weak());
            });
        }
        DocumentState::Ready(doc) => {
            let text = doc.page_text(viewer.page());
            egui::ScrollArea::vertical()
                .id_salt("document_page")
                .max_height(420.0)
                .show(ui, |ui| {
                    if text.trim().is_empty() {
                        ui.label(
                            egui::RichText::new("(no extractable text on this page)")
                                .italics()
                                .weak(),
                        );
                    } else {
                        ui.label(egui::RichText::new(text).monospace().size(12.0));
                    }
                });
        }
        DocumentState::Failed(message) => {
            let path = data::DOCUMENT_SLOTS[viewer.selected()].path;
            ui.label(
                egui::RichText::new("Failed to load the document")
                    .strong()
                    .color(theme::RED),
            );
            ui.label(egui::RichText::new(message.as_str()).size(12.0).weak());
            ui.label(
                egui::RichText::new(format!(
                    "Make sure {path} exists in the project directory."
                ))
                .size(12.0),
            );
            ui.add_space(4.0);
            if ui.button("Retry").clicked() {
                viewer.retry();
            }
        }
    }
}
