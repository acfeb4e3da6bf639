// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Notebook detail view: toolbar plus the ink canvas.

use crate::models::notebook::Notebook;
use crate::models::surface::DrawingSurface;
use crate::ui::canvas;

/// Result of detail view interaction.
pub enum DetailAction {
    None,
    Back,
    Clear,
}

/// Display the detail view for one notebook.
pub fn show(ui: &mut egui::Ui, notebook: &Notebook, surface: &mut DrawingSurface) -> DetailAction {
    let mut action = DetailAction::None;

    ui.horizontal(|ui| {
        if ui.button("🏠 Home").clicked() {
            action = DetailAction::Back;
        }

        ui.separator();
        ui.label(
            egui::RichText::new(format!("🖊 {}", notebook.title))
                .strong()
                .size(15.0),
        );
        ui.label(
            egui::RichText::new(format!("최근 수정: {}", notebook.last_edited))
                .weak()
                .small(),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🧽 지우기").clicked() {
                action = DetailAction::Clear;
            }
        });
    });
    ui.separator();

    canvas::show(ui, surface);

    action
}
