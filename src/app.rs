// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the session state container and the simulated data
//! sources, renders the active view each frame, and applies the actions the
//! UI components report back.

use crate::models::nav::{OverlayKind, View};
use crate::models::notebook::CoverColor;
use crate::models::session::Session;
use crate::sim::sound::Player;
use crate::sim::stamps::{self, Stamp};
use crate::sim::users::{SimulatedUsers, UserLocation, UserProvider};
use crate::ui::{detail, gallery, map_modal, sound_modal};

/// Which document tab is active in the gallery sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    My,
    Shared,
}

/// Main application state.
pub struct StudyApp {
    /// Gallery store, navigation, and stroke session in one container
    session: Session,

    /// Active sidebar tab
    tab: Tab,

    /// Mock attendance record
    stamps: Vec<Stamp>,

    /// Simulated ambient sound player
    player: Player,

    /// Presence source queried each time the map opens
    presence: Box<dyn UserProvider>,

    /// Last batch of simulated users shown on the map
    map_users: Vec<UserLocation>,

    /// Sidebar quote for this run
    quote: &'static str,
}

impl Default for StudyApp {
    fn default() -> Self {
        Self::new()
    }
}

impl StudyApp {
    /// Create a new Study Signal application instance.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            tab: Tab::My,
            stamps: stamps::initial_stamps(),
            player: Player::new(),
            presence: Box::new(SimulatedUsers::new()),
            map_users: Vec::new(),
            quote: stamps::pick_quote(),
        }
    }

    /// Fetch a fresh crowd and open the light map.
    fn open_map(&mut self) {
        self.map_users = self.presence.users();
        self.session.open_overlay(OverlayKind::Map);
        log::info!("Opened light map with {} simulated users", self.map_users.len());
    }

    fn show_gallery(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .default_width(200.0)
            .show(ctx, |ui| {
                gallery::sidebar(ui, &mut self.tab, self.quote);
            });

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                gallery::show(ui, self.session.store(), self.tab, &self.stamps)
            })
            .inner;

        match action {
            gallery::GalleryAction::Select(id) => {
                self.session.select_notebook(&id);
            }
            gallery::GalleryAction::Create => {
                self.session.create_notebook("새로운 과목", CoverColor::Green);
            }
            gallery::GalleryAction::None => {}
        }

        // Floating overlay triggers.
        egui::Area::new(egui::Id::new("map_fab"))
            .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -16.0))
            .show(ctx, |ui| {
                if ui.button(egui::RichText::new("🗺 불빛 지도").size(16.0)).clicked() {
                    self.open_map();
                }
            });
        egui::Area::new(egui::Id::new("sound_fab"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                if ui.button(egui::RichText::new("💿 ASMR").size(16.0)).clicked() {
                    self.session.open_overlay(OverlayKind::Sound);
                }
            });
    }

    fn show_detail(&mut self, ctx: &egui::Context, id: &str) {
        let Some(notebook) = self.session.current_notebook().cloned() else {
            // reconcile() runs before rendering, so this should not happen.
            return;
        };

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| detail::show(ui, &notebook, self.session.surface_mut()))
            .inner;

        match action {
            detail::DetailAction::Back => {
                self.session.go_back();
                log::info!("Left notebook {}", id);
            }
            detail::DetailAction::Clear => {
                self.session.surface_mut().clear();
                log::info!("Cleared ink in notebook {}", id);
            }
            detail::DetailAction::None => {}
        }
    }
}

impl eframe::App for StudyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Detail views must never reference a notebook that no longer exists.
        self.session.reconcile();

        let view = self.session.nav().view().clone();
        match view {
            View::Gallery => self.show_gallery(ctx),
            View::Detail(id) => self.show_detail(ctx, &id),
        }

        // Overlays render above whichever base view is active.
        match self.session.nav().overlay() {
            Some(OverlayKind::Map) => {
                if let map_modal::MapAction::Close = map_modal::show(ctx, &self.map_users) {
                    self.session.close_overlay();
                }
            }
            Some(OverlayKind::Sound) => {
                if let sound_modal::SoundAction::Close = sound_modal::show(ctx, &mut self.player) {
                    self.session.close_overlay();
                }
            }
            None => {}
        }
    }
}
