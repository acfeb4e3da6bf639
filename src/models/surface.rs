// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Freehand drawing surface state.
//!
//! This module tracks the stroke session for one notebook visit: an ordered
//! list of paths, each path the points between one pointer-down and the
//! matching pointer-up. The surface is purely in-memory state; rendering and
//! event translation live in the UI layer. Mouse and touch input are already
//! unified into a single pointer stream before they reach this type.

/// A point in surface-local coordinates (pixels from the surface origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Captures pointer input over a bounded region as connected ink strokes.
///
/// Resizing the region discards all drawn content and aborts any stroke in
/// progress. This is deliberate: the ink is scratch-pad state scoped to one
/// visit at one size, never persisted.
pub struct DrawingSurface {
    width: f32,
    height: f32,
    paths: Vec<Vec<Point>>,
    drawing: bool,
}

impl DrawingSurface {
    /// Create a surface with no drawable region attached yet.
    pub fn new() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            paths: Vec::new(),
            drawing: false,
        }
    }

    /// (Re)initialize the drawable region to the given pixel dimensions.
    ///
    /// Called on first mount and on every resize of the containing viewport.
    /// A size change discards all ink; attaching at the current size is a
    /// no-op, so this is safe to call every frame.
    pub fn attach(&mut self, width: f32, height: f32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        if !self.paths.is_empty() || self.drawing {
            log::debug!("surface resized to {}x{}, ink discarded", width, height);
        }
        self.width = width;
        self.height = height;
        self.paths.clear();
        self.drawing = false;
    }

    /// Begin a new path at `(x, y)`. Ignored if a path is already active,
    /// so stray duplicate down-events cannot split a stroke.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        if self.drawing {
            return;
        }
        self.drawing = true;
        self.paths.push(vec![Point::new(x, y)]);
    }

    /// Append `(x, y)` to the active path. Ignored when no path is active.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if !self.drawing {
            return;
        }
        if let Some(path) = self.paths.last_mut() {
            path.push(Point::new(x, y));
        }
    }

    /// End the active path. Ignored when no path is active.
    pub fn on_pointer_up(&mut self) {
        self.drawing = false;
    }

    /// End the active path when the pointer leaves the surface. Re-entry
    /// with a new down-event starts a fresh path, never resumes the old one.
    pub fn on_pointer_leave(&mut self) {
        self.on_pointer_up();
    }

    /// Discard all ink and any active stroke. Idempotent.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.drawing = false;
    }

    /// All paths drawn so far, including the one in progress.
    pub fn paths(&self) -> &[Vec<Point>] {
        &self.paths
    }

    /// Whether a stroke is currently in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Current drawable region size in pixels.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> DrawingSurface {
        let mut s = DrawingSurface::new();
        s.attach(800.0, 600.0);
        s
    }

    #[test]
    fn one_path_per_down_up_pair_in_order() {
        let mut s = surface();
        s.on_pointer_down(10.0, 10.0);
        s.on_pointer_move(20.0, 20.0);
        s.on_pointer_up();
        s.on_pointer_down(30.0, 30.0);
        s.on_pointer_move(40.0, 40.0);
        s.on_pointer_move(50.0, 50.0);
        s.on_pointer_up();

        assert_eq!(s.paths().len(), 2);
        assert_eq!(s.paths()[0], vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)]);
        assert_eq!(
            s.paths()[1],
            vec![Point::new(30.0, 30.0), Point::new(40.0, 40.0), Point::new(50.0, 50.0)]
        );
    }

    #[test]
    fn duplicate_down_events_are_ignored() {
        let mut s = surface();
        s.on_pointer_down(1.0, 1.0);
        s.on_pointer_down(2.0, 2.0);
        s.on_pointer_move(3.0, 3.0);
        s.on_pointer_up();

        assert_eq!(s.paths().len(), 1);
        assert_eq!(s.paths()[0], vec![Point::new(1.0, 1.0), Point::new(3.0, 3.0)]);
    }

    #[test]
    fn move_and_up_without_active_stroke_are_no_ops() {
        let mut s = surface();
        s.on_pointer_move(5.0, 5.0);
        s.on_pointer_up();
        assert!(s.paths().is_empty());
        assert!(!s.is_drawing());
    }

    #[test]
    fn leave_terminates_stroke_and_reentry_starts_fresh() {
        let mut s = surface();
        s.on_pointer_down(1.0, 1.0);
        s.on_pointer_move(2.0, 2.0);
        s.on_pointer_leave();
        assert!(!s.is_drawing());

        s.on_pointer_move(9.0, 9.0); // still outside, ignored
        s.on_pointer_down(3.0, 3.0);
        s.on_pointer_up();

        assert_eq!(s.paths().len(), 2);
        assert_eq!(s.paths()[0], vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        assert_eq!(s.paths()[1], vec![Point::new(3.0, 3.0)]);
    }

    #[test]
    fn clear_empties_session_and_is_idempotent() {
        let mut s = surface();
        s.on_pointer_down(1.0, 1.0);
        s.on_pointer_move(2.0, 2.0);
        s.clear();
        assert!(s.paths().is_empty());
        assert!(!s.is_drawing());
        s.clear();
        assert!(s.paths().is_empty());
    }

    #[test]
    fn resize_discards_ink_and_aborts_active_stroke() {
        let mut s = surface();
        s.on_pointer_down(1.0, 1.0);
        s.on_pointer_move(2.0, 2.0);
        s.attach(400.0, 300.0);

        assert!(s.paths().is_empty());
        assert!(!s.is_drawing());
        assert_eq!(s.size(), (400.0, 300.0));
    }

    #[test]
    fn attach_at_same_size_preserves_ink() {
        let mut s = surface();
        s.on_pointer_down(1.0, 1.0);
        s.on_pointer_up();
        s.attach(800.0, 600.0);
        assert_eq!(s.paths().len(), 1);
    }

    #[test]
    fn out_of_bounds_points_are_kept_without_error() {
        let mut s = surface();
        s.on_pointer_down(-50.0, 9000.0);
        s.on_pointer_up();
        assert_eq!(s.paths()[0], vec![Point::new(-50.0, 9000.0)]);
    }
}
