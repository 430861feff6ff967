//! Shape centers and the animated selection position.
//!
//! Both indicator variants lay their shapes out on a [`ShapeRow`] and move a
//! single highlight along it; this module owns that state.

use crate::easing::{lerp, EasingType};
use crate::geometry::{Point, ShapeRow};

#[derive(Debug, Clone, Default)]
pub struct ShapeTrack {
    row: ShapeRow,
    page_count: usize,
    centers: Vec<Point>,
    selection_x: f32,
    current_index: usize,
}

impl ShapeTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and rebuild the centers for `page_count` pages.
    ///
    /// With one page or fewer nothing is laid out. The selection snaps to the
    /// current index, clamped into the new range.
    pub fn rebuild(&mut self, row: ShapeRow, page_count: usize) {
        self.centers.clear();
        self.row = row;
        self.page_count = page_count;

        if page_count > 1 {
            self.centers = row.centers(page_count);
            self.current_index = self.current_index.min(page_count - 1);
            self.selection_x = self.centers[self.current_index].x;
        }
    }

    /// Forget the current index so the next rebuild starts at the first page
    pub fn reset_selection(&mut self) {
        self.current_index = 0;
        self.selection_x = 0.0;
    }

    /// Move the centers onto a new row, keeping the selection at the same
    /// fractional position between shapes.
    pub fn relayout(&mut self, row: ShapeRow) {
        // A zero step collapses every center, only the index survives it
        let fraction = if self.row.step == 0.0 {
            self.current_index as f32
        } else {
            self.row.index_of(self.selection_x)
        };
        self.row = row;
        if self.centers.is_empty() {
            return;
        }
        self.centers = row.centers(self.page_count);
        self.selection_x = row.x_at(fraction);
    }

    /// Interpolate the selection between `position` and the page after it.
    ///
    /// Both indices are clamped to the last center; the next page wraps to
    /// the first. Returns false when there is nothing laid out.
    pub fn scroll(&mut self, position: usize, offset: f32, easing: EasingType) -> bool {
        if self.centers.is_empty() {
            return false;
        }
        let last = self.centers.len() - 1;
        let current = self.centers[position.min(last)];
        let next = self.centers[(position % self.page_count + 1) % self.page_count];
        self.selection_x = lerp(current.x, next.x, easing.apply(offset));
        true
    }

    /// Snap the selection onto the center at `position` (clamped).
    pub fn select(&mut self, position: usize) -> bool {
        if self.centers.is_empty() {
            return false;
        }
        let index = position.min(self.centers.len() - 1);
        if index != position {
            tracing::debug!(
                "Selected page {} out of range, clamped to {}",
                position,
                index
            );
        }
        self.current_index = index;
        self.selection_x = self.centers[index].x;
        true
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[inline]
    pub fn centers(&self) -> &[Point] {
        &self.centers
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    #[inline]
    pub fn selection_x(&self) -> f32 {
        self.selection_x
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn row(&self) -> ShapeRow {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ShapeRow {
        ShapeRow::new(Point::new(45.0, 10.0), 90.0)
    }

    #[test]
    fn test_rebuild_hides_single_page() {
        let mut track = ShapeTrack::new();
        track.rebuild(row(), 1);
        assert!(track.is_empty());
        assert_eq!(track.page_count(), 1);

        track.rebuild(row(), 0);
        assert!(track.is_empty());
    }

    #[test]
    fn test_rebuild_replaces_previous_centers() {
        let mut track = ShapeTrack::new();
        track.rebuild(row(), 3);
        track.rebuild(row(), 1);
        track.rebuild(row(), 5);
        assert_eq!(track.centers().len(), 5);
        assert_eq!(track.selection_x(), 45.0);
    }

    #[test]
    fn test_scroll_wraps_last_page_to_first() {
        let mut track = ShapeTrack::new();
        track.rebuild(row(), 3);
        assert!(track.scroll(2, 0.5, EasingType::Linear));
        assert_eq!(track.selection_x(), (225.0 + 45.0) / 2.0);
    }

    #[test]
    fn test_scroll_clamps_position() {
        let mut track = ShapeTrack::new();
        track.rebuild(row(), 3);
        track.scroll(7, 0.0, EasingType::Linear);
        assert_eq!(track.selection_x(), 225.0);
    }

    #[test]
    fn test_empty_track_ignores_callbacks() {
        let mut track = ShapeTrack::new();
        assert!(!track.scroll(0, 0.5, EasingType::Linear));
        assert!(!track.select(1));
        assert_eq!(track.selection_x(), 0.0);
    }

    #[test]
    fn test_select_clamps_and_tracks_index() {
        let mut track = ShapeTrack::new();
        track.rebuild(row(), 4);
        track.select(9);
        assert_eq!(track.current_index(), 3);
        assert_eq!(track.selection_x(), 45.0 + 3.0 * 90.0);
    }

    #[test]
    fn test_rebuild_clamps_current_index() {
        let mut track = ShapeTrack::new();
        track.rebuild(row(), 5);
        track.select(4);
        track.rebuild(row(), 2);
        assert_eq!(track.current_index(), 1);
        assert_eq!(track.selection_x(), 135.0);
    }

    #[test]
    fn test_scroll_with_huge_position_does_not_overflow() {
        let mut track = ShapeTrack::new();
        track.rebuild(row(), 3);
        assert!(track.scroll(usize::MAX, 0.5, EasingType::Linear));
        // usize::MAX clamps to page 2, whose next page is (MAX + 1) mod 3 = 1
        assert_eq!(track.selection_x(), (225.0 + 135.0) / 2.0);
    }

    #[test]
    fn test_relayout_through_zero_step_keeps_index() {
        let mut track = ShapeTrack::new();
        track.rebuild(ShapeRow::new(Point::new(10.0, 10.0), 20.0), 4);
        track.select(3);

        track.relayout(ShapeRow::new(Point::new(0.0, 0.0), 0.0));
        track.relayout(ShapeRow::new(Point::new(10.0, 10.0), 20.0));
        assert_eq!(track.current_index(), 3);
        assert_eq!(track.selection_x(), 70.0);
    }

    #[test]
    fn test_relayout_keeps_fractional_selection() {
        let mut track = ShapeTrack::new();
        track.rebuild(row(), 3);
        track.scroll(0, 0.5, EasingType::Linear);

        track.relayout(ShapeRow::new(Point::new(10.0, 10.0), 20.0));
        assert_eq!(track.centers()[2].x, 50.0);
        assert!((track.selection_x() - 20.0).abs() < 1e-4);
    }
}
