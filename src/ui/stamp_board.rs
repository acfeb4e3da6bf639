// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Attendance stamp board shown above the notebook grid.

use crate::sim::stamps::Stamp;

/// Display the stamp board: achieved count plus a 5-column stamp grid.
pub fn show(ui: &mut egui::Ui, stamps: &[Stamp]) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⭐ 출석 체크").strong().small());
                let achieved = stamps.iter().filter(|s| s.achieved).count();
                ui.label(
                    egui::RichText::new(format!("{} / {}", achieved, stamps.len()))
                        .weak()
                        .small(),
                );
            });

            egui::Grid::new("stamp_board").spacing([6.0, 6.0]).show(ui, |ui| {
                for (i, stamp) in stamps.iter().enumerate() {
                    stamp_cell(ui, stamp);
                    if (i + 1) % 5 == 0 {
                        ui.end_row();
                    }
                }
            });
        });
    });
}

fn stamp_cell(ui: &mut egui::Ui, stamp: &Stamp) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(26.0, 26.0), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let center = rect.center();
    if stamp.achieved {
        let red = egui::Color32::from_rgb(239, 68, 68);
        painter.circle_stroke(center, 11.0, egui::Stroke::new(2.0, red));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "✔",
            egui::FontId::proportional(12.0),
            red,
        );
        if let Some(date) = &stamp.date {
            response.on_hover_text(date);
        }
    } else {
        let gray = egui::Color32::from_gray(170);
        painter.circle_stroke(center, 11.0, egui::Stroke::new(1.0, gray));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            stamp.id.to_string(),
            egui::FontId::proportional(10.0),
            gray,
        );
    }
}
