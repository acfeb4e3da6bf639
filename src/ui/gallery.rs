// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gallery view: sidebar with document tabs and the notebook grid.
//!
//! The grid renders one card per notebook plus a trailing "new notebook"
//! card. Card clicks are reported back to the app as actions; the gallery
//! never mutates the store itself.

use crate::app::Tab;
use crate::models::notebook::{CoverColor, GalleryStore, Notebook};
use crate::sim::stamps::Stamp;
use crate::ui::stamp_board;

/// Result of gallery interaction.
pub enum GalleryAction {
    None,
    Select(String),
    Create,
}

/// Display the sidebar: app title, document tabs, and the daily quote.
pub fn sidebar(ui: &mut egui::Ui, tab: &mut Tab, quote: &str) {
    ui.add_space(8.0);
    ui.heading("📖 Study Signal");
    ui.label(
        egui::RichText::new("오늘도 당신의 불빛을 밝혀주세요.")
            .weak()
            .small(),
    );
    ui.add_space(16.0);

    if ui.selectable_label(*tab == Tab::My, "📄 나의 문서").clicked() {
        *tab = Tab::My;
    }
    if ui.selectable_label(*tab == Tab::Shared, "🔗 공유 문서").clicked() {
        *tab = Tab::Shared;
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(format!("\"{}\"", quote)).italics().weak().small());
        ui.label(egui::RichText::new("오늘의 명언").small());
        ui.separator();
    });
}

/// Display the main gallery content for the active tab.
pub fn show(ui: &mut egui::Ui, store: &GalleryStore, tab: Tab, stamps: &[Stamp]) -> GalleryAction {
    let mut action = GalleryAction::None;

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        stamp_board::show(ui, stamps);
    });
    ui.add_space(8.0);

    match tab {
        Tab::My => {
            ui.heading("최근 학습 노트");
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(24.0, 24.0);

                    for notebook in store.list() {
                        if notebook_card(ui, Some(notebook)).clicked() {
                            action = GalleryAction::Select(notebook.id.clone());
                        }
                    }

                    let new_card = notebook_card(ui, None).on_hover_text("새 노트 만들기");
                    if new_card.clicked() {
                        action = GalleryAction::Create;
                    }
                });

                if store.list().is_empty() {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("아직 노트가 없습니다. 첫 노트를 만들어보세요!")
                                .weak(),
                        );
                    });
                }
            });
        }
        Tab::Shared => {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("📂 아직 공유된 문서가 없습니다.").weak());
            });
        }
    }

    action
}

/// One card in the grid. `None` renders the dashed "new notebook" card.
fn notebook_card(ui: &mut egui::Ui, notebook: Option<&Notebook>) -> egui::Response {
    let size = egui::vec2(120.0, 152.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    let cover_rect = egui::Rect::from_min_size(rect.min, egui::vec2(size.x, 104.0));

    match notebook {
        Some(nb) => {
            painter.rect_filled(cover_rect, 6.0, cover_fill(nb.cover));
            let border = if response.hovered() {
                egui::Stroke::new(2.0, egui::Color32::from_gray(120))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(200))
            };
            painter.rect_stroke(cover_rect, 6.0, border);

            painter.text(
                egui::pos2(rect.min.x + 2.0, cover_rect.max.y + 8.0),
                egui::Align2::LEFT_TOP,
                &nb.title,
                egui::FontId::proportional(14.0),
                ui.visuals().strong_text_color(),
            );
            painter.text(
                egui::pos2(rect.min.x + 2.0, cover_rect.max.y + 28.0),
                egui::Align2::LEFT_TOP,
                &nb.last_edited,
                egui::FontId::proportional(11.0),
                ui.visuals().weak_text_color(),
            );
        }
        None => {
            painter.rect_stroke(
                cover_rect,
                6.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(180)),
            );
            painter.text(
                cover_rect.center(),
                egui::Align2::CENTER_CENTER,
                "+",
                egui::FontId::proportional(32.0),
                egui::Color32::from_gray(150),
            );
            painter.text(
                egui::pos2(rect.min.x + 2.0, cover_rect.max.y + 8.0),
                egui::Align2::LEFT_TOP,
                "새 노트",
                egui::FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
        }
    }

    response
}

/// Pastel fills for the cover tags.
fn cover_fill(cover: CoverColor) -> egui::Color32 {
    match cover {
        CoverColor::Blue => egui::Color32::from_rgb(191, 219, 254),
        CoverColor::Indigo => egui::Color32::from_rgb(199, 210, 254),
        CoverColor::Green => egui::Color32::from_rgb(187, 247, 208),
    }
}
