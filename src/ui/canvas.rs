// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Freehand ink canvas.
//!
//! This module hosts the drawing surface inside an egui region: it attaches
//! the surface to the allocated rect, translates the unified pointer stream
//! (egui folds mouse and touch into one) into surface-local down/move/up
//! events, and paints the stroke session.

use crate::models::surface::DrawingSurface;

/// Fixed ink style, matching a felt-tip pen on paper.
const INK_WIDTH: f32 = 2.5;
const INK_COLOR: egui::Color32 = egui::Color32::BLACK;

/// Fill the remaining space with the drawable page and route pointer input
/// into the surface.
pub fn show(ui: &mut egui::Ui, surface: &mut DrawingSurface) {
    let available = ui.available_size();
    let (response, painter) = ui.allocate_painter(available, egui::Sense::drag());
    let rect = response.rect;

    // Re-attach every frame; the surface discards ink only on size change.
    surface.attach(rect.width(), rect.height());

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            surface.on_pointer_down(pos.x - rect.min.x, pos.y - rect.min.y);
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            if rect.contains(pos) {
                surface.on_pointer_move(pos.x - rect.min.x, pos.y - rect.min.y);
            } else if surface.is_drawing() {
                // Mid-stroke exit terminates the stroke; re-entry starts fresh.
                surface.on_pointer_leave();
            }
        }
    }
    if response.drag_stopped() {
        surface.on_pointer_up();
    }

    // Paper background, then ink.
    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);

    let stroke = egui::Stroke::new(INK_WIDTH, INK_COLOR);
    for path in surface.paths() {
        let points: Vec<egui::Pos2> = path
            .iter()
            .map(|p| rect.min + egui::vec2(p.x, p.y))
            .collect();

        if let [single] = points.as_slice() {
            // A tap with no movement still leaves a dot.
            painter.circle_filled(*single, INK_WIDTH / 2.0, INK_COLOR);
        } else if points.len() > 1 {
            painter.add(egui::Shape::line(points, stroke));
        }
    }
}
