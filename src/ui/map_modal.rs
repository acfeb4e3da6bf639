// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Light map overlay: simulated students as glowing dots on a night map.

use crate::sim::users::UserLocation;

/// Result of map overlay interaction.
pub enum MapAction {
    None,
    Close,
}

/// Display the light map overlay above whatever view is active.
pub fn show(ctx: &egui::Context, users: &[UserLocation]) -> MapAction {
    let mut action = MapAction::None;

    egui::Window::new("📍 Study Signal Map")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "지금 {}명의 친구들이 각자의 책상에서 불을 밝히고 있어요.",
                        users.len() + 1
                    ))
                    .weak()
                    .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✖").clicked() {
                        action = MapAction::Close;
                    }
                });
            });
            ui.separator();

            let (response, painter) =
                ui.allocate_painter(egui::vec2(620.0, 380.0), egui::Sense::hover());
            let rect = response.rect;

            // Night sky backdrop.
            painter.rect_filled(rect, 8.0, egui::Color32::from_rgb(15, 23, 42));

            for user in users {
                let pos = rect.min
                    + egui::vec2(
                        user.x / 100.0 * rect.width(),
                        user.y / 100.0 * rect.height(),
                    );

                if user.active {
                    let glow = egui::Color32::from_rgba_unmultiplied(250, 204, 21, 40);
                    painter.circle_filled(pos, 8.0, glow);
                    painter.circle_filled(pos, 3.0, egui::Color32::from_rgb(250, 204, 21));
                } else {
                    painter.circle_filled(pos, 2.5, egui::Color32::from_gray(90));
                }

                if let Some(message) = &user.message {
                    painter.text(
                        pos + egui::vec2(0.0, -8.0),
                        egui::Align2::CENTER_BOTTOM,
                        message,
                        egui::FontId::proportional(10.0),
                        egui::Color32::from_gray(220),
                    );
                }
            }
        });

    action
}
