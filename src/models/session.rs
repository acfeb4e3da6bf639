// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The owned state container for one application run.
//!
//! `Session` wires the gallery store, navigation state, and drawing surface
//! together and owns the side effects between them: entering a notebook's
//! detail view starts a fresh stroke session, and leaving it discards the
//! ink. Everything here lives from process start to exit; nothing is
//! persisted.

use crate::models::nav::{NavState, OverlayKind, View};
use crate::models::notebook::{CoverColor, GalleryStore};
use crate::models::surface::DrawingSurface;

pub struct Session {
    store: GalleryStore,
    nav: NavState,
    surface: DrawingSurface,
}

impl Session {
    /// Start a session with the seeded gallery.
    pub fn new() -> Self {
        Self {
            store: GalleryStore::seeded(),
            nav: NavState::new(),
            surface: DrawingSurface::new(),
        }
    }

    pub fn store(&self) -> &GalleryStore {
        &self.store
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface {
        &mut self.surface
    }

    /// Append a new notebook and return its id.
    pub fn create_notebook(&mut self, title: &str, cover: CoverColor) -> String {
        self.store.create(title, cover)
    }

    /// Open the detail view for `id` with a fresh stroke session.
    /// Unknown ids are ignored.
    pub fn select_notebook(&mut self, id: &str) -> bool {
        if self.nav.select_notebook(id, &self.store) {
            self.surface.clear();
            true
        } else {
            false
        }
    }

    /// Return to the gallery, discarding the stroke session.
    pub fn go_back(&mut self) {
        self.nav.go_back();
        self.surface.clear();
    }

    pub fn open_overlay(&mut self, kind: OverlayKind) {
        self.nav.open_overlay(kind);
    }

    pub fn close_overlay(&mut self) {
        self.nav.close_overlay();
    }

    /// Repair the navigation invariant: a detail view whose notebook no
    /// longer exists falls back to the gallery, dropping its ink.
    pub fn reconcile(&mut self) {
        if self.nav.reconcile(&self.store) {
            self.surface.clear();
        }
    }

    /// The notebook shown by the current detail view, if any.
    pub fn current_notebook(&self) -> Option<&crate::models::notebook::Notebook> {
        match self.nav.view() {
            View::Detail(id) => self.store.get(id),
            View::Gallery => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::surface::Point;

    #[test]
    fn draw_then_back_discards_the_stroke_session() {
        let mut session = Session::new();
        assert!(session.select_notebook("1"));

        session.surface_mut().attach(800.0, 600.0);
        session.surface_mut().on_pointer_down(10.0, 10.0);
        session.surface_mut().on_pointer_move(20.0, 20.0);
        session.surface_mut().on_pointer_up();

        assert_eq!(session.surface().paths().len(), 1);
        assert_eq!(
            session.surface().paths()[0],
            vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)]
        );

        session.go_back();
        assert_eq!(*session.nav().view(), View::Gallery);

        // Reopening the same notebook yields an empty session.
        assert!(session.select_notebook("1"));
        assert!(session.surface().paths().is_empty());
    }

    #[test]
    fn selecting_unknown_notebook_keeps_gallery_and_ink() {
        let mut session = Session::new();
        assert!(!session.select_notebook("99"));
        assert_eq!(*session.nav().view(), View::Gallery);
    }

    #[test]
    fn reentering_a_notebook_starts_a_fresh_session() {
        let mut session = Session::new();
        session.select_notebook("2");
        session.surface_mut().attach(100.0, 100.0);
        session.surface_mut().on_pointer_down(1.0, 1.0);
        session.surface_mut().on_pointer_up();

        // Entering detail again (even for another notebook) starts clean.
        session.select_notebook("1");
        assert!(session.surface().paths().is_empty());
    }

    #[test]
    fn created_notebook_is_selectable() {
        let mut session = Session::new();
        let id = session.create_notebook("새로운 과목", CoverColor::Green);
        assert!(session.select_notebook(&id));
        assert_eq!(session.current_notebook().unwrap().title, "새로운 과목");
    }

    #[test]
    fn overlays_toggle_from_any_view() {
        let mut session = Session::new();
        session.open_overlay(OverlayKind::Map);
        session.select_notebook("1");
        session.open_overlay(OverlayKind::Sound);
        assert_eq!(session.nav().overlay(), Some(OverlayKind::Sound));
        session.close_overlay();
        assert_eq!(session.nav().overlay(), None);
    }
}
