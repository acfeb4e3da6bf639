// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top-level navigation state machine.
//!
//! Two independent axes: the base view (gallery or one notebook's detail
//! page) and an optional overlay modal rendered above whichever base view is
//! active. Transitions that reference a notebook are validated against the
//! gallery store so the detail view can never point at a notebook that does
//! not exist.

use crate::models::notebook::GalleryStore;

/// Mutually exclusive base views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Gallery,
    Detail(String),
}

/// Overlay modals. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Map,
    Sound,
}

/// Navigation state: base view plus overlay flag.
pub struct NavState {
    view: View,
    overlay: Option<OverlayKind>,
}

impl NavState {
    /// Initial state: gallery, no overlay.
    pub fn new() -> Self {
        Self {
            view: View::Gallery,
            overlay: None,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn overlay(&self) -> Option<OverlayKind> {
        self.overlay
    }

    /// Enter the detail view for `id` if it exists in the store.
    /// Returns whether the transition happened; unknown ids are a no-op.
    pub fn select_notebook(&mut self, id: &str, store: &GalleryStore) -> bool {
        if !store.contains(id) {
            log::warn!("Ignoring selection of unknown notebook {}", id);
            return false;
        }
        self.view = View::Detail(id.to_string());
        log::info!("Opened notebook {}", id);
        true
    }

    /// Return to the gallery from wherever we are.
    pub fn go_back(&mut self) {
        self.view = View::Gallery;
    }

    /// Open an overlay. Last writer wins: opening one closes any other.
    pub fn open_overlay(&mut self, kind: OverlayKind) {
        self.overlay = Some(kind);
    }

    /// Close the overlay if one is open.
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Fall back to the gallery if the detail view references a notebook
    /// that no longer exists. Returns whether a fallback happened.
    pub fn reconcile(&mut self, store: &GalleryStore) -> bool {
        if let View::Detail(id) = &self.view {
            if !store.contains(id) {
                log::warn!("Notebook {} vanished, falling back to gallery", id);
                self.view = View::Gallery;
                return true;
            }
        }
        false
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notebook::GalleryStore;

    #[test]
    fn starts_in_gallery_with_no_overlay() {
        let nav = NavState::new();
        assert_eq!(*nav.view(), View::Gallery);
        assert_eq!(nav.overlay(), None);
    }

    #[test]
    fn select_existing_notebook_enters_detail() {
        let store = GalleryStore::seeded();
        let mut nav = NavState::new();
        assert!(nav.select_notebook("1", &store));
        assert_eq!(*nav.view(), View::Detail("1".to_string()));
    }

    #[test]
    fn select_unknown_notebook_is_a_no_op() {
        let store = GalleryStore::seeded();
        let mut nav = NavState::new();
        assert!(!nav.select_notebook("99", &store));
        assert_eq!(*nav.view(), View::Gallery);
    }

    #[test]
    fn go_back_returns_to_gallery() {
        let store = GalleryStore::seeded();
        let mut nav = NavState::new();
        nav.select_notebook("2", &store);
        nav.go_back();
        assert_eq!(*nav.view(), View::Gallery);
    }

    #[test]
    fn opening_an_overlay_closes_the_other() {
        let mut nav = NavState::new();
        nav.open_overlay(OverlayKind::Map);
        nav.open_overlay(OverlayKind::Sound);
        assert_eq!(nav.overlay(), Some(OverlayKind::Sound));
        nav.close_overlay();
        assert_eq!(nav.overlay(), None);
    }

    #[test]
    fn overlay_is_independent_of_base_view() {
        let store = GalleryStore::seeded();
        let mut nav = NavState::new();
        nav.open_overlay(OverlayKind::Map);
        nav.select_notebook("1", &store);
        assert_eq!(nav.overlay(), Some(OverlayKind::Map));
        nav.go_back();
        assert_eq!(nav.overlay(), Some(OverlayKind::Map));
    }

    #[test]
    fn reconcile_falls_back_when_notebook_is_gone() {
        let store = GalleryStore::seeded();
        let mut nav = NavState::new();
        nav.select_notebook("1", &store);

        let empty = GalleryStore::new();
        assert!(nav.reconcile(&empty));
        assert_eq!(*nav.view(), View::Gallery);

        // Already in the gallery: nothing to do.
        assert!(!nav.reconcile(&empty));
    }
}
