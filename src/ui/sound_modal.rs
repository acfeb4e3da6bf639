// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ambient sound player overlay.
//!
//! Renders a vinyl decoration, transport controls, and the track list. The
//! player is simulated state; nothing here touches an audio device.

use crate::sim::sound::{Player, SOUND_TRACKS};

/// Result of sound overlay interaction.
pub enum SoundAction {
    None,
    Close,
}

/// Display the sound player overlay anchored to the bottom-right corner.
pub fn show(ctx: &egui::Context, player: &mut Player) -> SoundAction {
    let mut action = SoundAction::None;

    egui::Window::new("sound_player")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
        .show(ctx, |ui| {
            ui.set_width(240.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if ui.button("✖").clicked() {
                    action = SoundAction::Close;
                }
            });

            vinyl(ui, player);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(player.track().label).strong().size(16.0));
                ui.label(egui::RichText::new("FOCUS SOUNDSCAPE").weak().small());
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    ui.add_space(70.0);
                    let toggle_icon = if player.is_playing() { "⏸" } else { "▶" };
                    if ui.button(egui::RichText::new(toggle_icon).size(20.0)).clicked() {
                        player.toggle();
                    }
                    if ui.button(egui::RichText::new("⏭").size(20.0)).clicked() {
                        player.skip();
                    }
                });
            });

            ui.separator();
            ui.label(egui::RichText::new("TRACK LIST").weak().small());
            for track in &SOUND_TRACKS {
                let selected = player.current() == track.kind;
                let text = format!("{} {}", track.icon, track.label);
                if ui.selectable_label(selected, text).clicked() {
                    player.play(track.kind);
                }
            }
        });

    action
}

/// Decorative record disc; spins in spirit only.
fn vinyl(ui: &mut egui::Ui, player: &Player) {
    let (response, painter) = ui.allocate_painter(egui::vec2(240.0, 130.0), egui::Sense::hover());
    let rect = response.rect;
    let center = rect.center();

    painter.rect_filled(rect, 8.0, egui::Color32::from_rgb(31, 41, 55));
    painter.circle_filled(center, 55.0, egui::Color32::BLACK);
    for radius in [46.0, 38.0, 30.0] {
        painter.circle_stroke(
            center,
            radius,
            egui::Stroke::new(1.0, egui::Color32::from_gray(40)),
        );
    }
    painter.circle_filled(center, 18.0, egui::Color32::from_rgb(202, 138, 4));
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        player.track().icon,
        egui::FontId::proportional(14.0),
        egui::Color32::WHITE,
    );
}
