//! Reference material: books, standards, recent papers and tooling.

use eframe::egui;

use crate::data;
use crate::theme;

pub fn show(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("Resources & Reference Articles")
            .size(24.0)
            .strong(),
    );
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Foundational Publications")
                .size(16.0)
                .strong(),
        );
        ui.add_space(6.0);
        for book in &data::FOUNDATIONAL_BOOKS {
            ui.group(|ui| {
                ui.label(
                    egui::RichText::new(book.title)
                        .size(14.0)
                        .strong()
                        .color(theme::BLUE),
                );
                ui.label(
                    egui::RichText::new(format!("{} • {} • {}", book.authors, book.venue, book.year))
                        .size(12.0),
                );
                ui.label(egui::RichText::new(book.summary).size(12.0).weak());
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for topic in book.topics {
                        ui.label(theme::badge(topic, theme::BLUE));
                    }
                });
            });
            ui.add_space(4.0);
        }
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("International Standards")
                .size(16.0)
                .strong(),
        );
        ui.add_space(6.0);
        ui.columns(2, |columns| {
            for (i, standard) in data::STANDARDS.iter().enumerate() {
                columns[i % 2].group(|ui| {
                    ui.label(
                        egui::RichText::new(standard.code)
                            .size(14.0)
                            .strong()
                            .color(theme::VIOLET),
                    );
                    ui.label(egui::RichText::new(standard.title).strong().size(12.0));
                    ui.label(egui::RichText::new(standard.summary).size(12.0).weak());
                    ui.add_space(4.0);
                    ui.horizontal_wrapped(|ui| {
                        for tag in standard.tags {
                            ui.label(theme::badge(tag, theme::VIOLET));
                        }
                    });
                });
                columns[i % 2].add_space(4.0);
            }
        });
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Recent Research Articles")
                .size(16.0)
                .strong(),
        );
        ui.add_space(6.0);
        for paper in &data::RECENT_PAPERS {
            ui.group(|ui| {
                ui.label(
                    egui::RichText::new(paper.title)
                        .size(14.0)
                        .strong()
                        .color(theme::EMERALD),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "{} • {} • {} • Impact factor: {}",
                        paper.authors, paper.venue, paper.year, paper.impact_factor
                    ))
                    .size(12.0),
                );
                ui.label(egui::RichText::new(paper.summary).size(12.0).weak());
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for keyword in paper.keywords {
                        ui.label(theme::badge(keyword, theme::EMERALD));
                    }
                });
            });
            ui.add_space(4.0);
        }
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("Reliability Tools & Software")
                .size(16.0)
                .strong(),
        );
        ui.add_space(6.0);
        for row in data::RELIABILITY_TOOLS.chunks(3) {
            ui.columns(3, |columns| {
                for (ui, tool) in columns.iter_mut().zip(row) {
                    ui.group(|ui| {
                        ui.label(
                            egui::RichText::new(tool.name)
                                .size(14.0)
                                .strong()
                                .color(theme::AMBER),
                        );
                        ui.label(egui::RichText::new(tool.category).size(11.0).weak());
                        ui.add_space(4.0);
                        for feature in &tool.features {
                            ui.label(egui::RichText::new(format!("• {feature}")).size(11.0));
                        }
                    });
                }
            });
            ui.add_space(4.0);
        }
    });
}
