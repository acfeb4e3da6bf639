// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Notebook records and the gallery store.
//!
//! This module defines the notebook data structure and the in-memory,
//! append-only collection backing the gallery view. Notebooks are never
//! updated or deleted; state lives only for the current session.

use time::OffsetDateTime;

/// Opaque cover style tag for a notebook. The UI layer decides how each
/// tag is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverColor {
    Blue,
    Indigo,
    Green,
}

/// A single notebook entry in the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    pub id: String,
    pub title: String,
    pub cover: CoverColor,
    /// Date of last edit, formatted YYYY-MM-DD.
    pub last_edited: String,
}

/// In-memory, insertion-ordered collection of notebooks.
pub struct GalleryStore {
    notebooks: Vec<Notebook>,
    next_id: u64,
}

impl GalleryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            notebooks: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated with the default study notebooks.
    pub fn seeded() -> Self {
        Self {
            notebooks: vec![
                Notebook {
                    id: "1".to_string(),
                    title: "확률과 통계".to_string(),
                    cover: CoverColor::Blue,
                    last_edited: "2023-10-25".to_string(),
                },
                Notebook {
                    id: "2".to_string(),
                    title: "인공지능".to_string(),
                    cover: CoverColor::Indigo,
                    last_edited: "2023-10-26".to_string(),
                },
            ],
            next_id: 3,
        }
    }

    /// Append a new notebook with a fresh unique id and today's date.
    /// Returns the id of the new notebook.
    pub fn create(&mut self, title: &str, cover: CoverColor) -> String {
        let mut id = self.next_id.to_string();
        while self.contains(&id) {
            self.next_id += 1;
            id = self.next_id.to_string();
        }
        self.next_id += 1;

        self.notebooks.push(Notebook {
            id: id.clone(),
            title: title.to_string(),
            cover,
            last_edited: today(),
        });
        log::info!("Created notebook {} ({}), total: {}", id, title, self.notebooks.len());
        id
    }

    /// All notebooks in insertion order.
    pub fn list(&self) -> &[Notebook] {
        &self.notebooks
    }

    /// Look up a notebook by id.
    pub fn get(&self, id: &str) -> Option<&Notebook> {
        self.notebooks.iter().find(|n| n.id == id)
    }

    /// Whether a notebook with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl Default for GalleryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Current local date formatted YYYY-MM-DD.
fn today() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let date = now.date();
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_initial_notebooks_in_order() {
        let store = GalleryStore::seeded();
        let titles: Vec<&str> = store.list().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["확률과 통계", "인공지능"]);
        assert!(store.contains("1"));
        assert!(store.contains("2"));
    }

    #[test]
    fn create_appends_with_unique_id() {
        let mut store = GalleryStore::seeded();
        let id = store.create("새로운 과목", CoverColor::Green);

        assert_eq!(store.list().len(), 3);
        assert_ne!(id, "1");
        assert_ne!(id, "2");

        let last = store.list().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.title, "새로운 과목");
        assert_eq!(last.cover, CoverColor::Green);
    }

    #[test]
    fn create_skips_ids_already_taken() {
        let mut store = GalleryStore::new();
        let a = store.create("a", CoverColor::Blue);
        let b = store.create("b", CoverColor::Blue);
        assert_ne!(a, b);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn list_is_re_enumerable() {
        let store = GalleryStore::seeded();
        let first: Vec<&str> = store.list().iter().map(|n| n.id.as_str()).collect();
        let second: Vec<&str> = store.list().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let store = GalleryStore::seeded();
        assert!(store.get("99").is_none());
    }

    #[test]
    fn today_is_iso_date() {
        let d = today();
        assert_eq!(d.len(), 10);
        assert_eq!(&d[4..5], "-");
        assert_eq!(&d[7..8], "-");
    }
}
