//! The contract a paging host drives.
//!
//! Call order from the host:
//! 1. `init_indicator_count` once the page count is known (and again on every
//!    data-set change)
//! 2. `surface` / `placement` to insert the indicator into the host's tree
//! 3. `on_page_scrolled` / `on_page_selected` / `on_page_scroll_state_changed`
//!    as the pager moves
//!
//! Every callback is a silent no-op while there are no shape centers, since
//! scroll events may arrive before the page count is known.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::geometry::{Margins, MeasureSpec, Point, Size};

/// Whether the surface takes part in layout and drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Hidden and takes no space
    Gone,
}

/// Scroll state reported by the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    #[default]
    Idle,
    /// The user is dragging
    Dragging,
    /// The pager is animating to its final position
    Settling,
}

/// Work the surface asked the host to do since the last drain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Invalidation {
    pub layout: bool,
    pub redraw: bool,
}

impl Invalidation {
    pub fn is_empty(&self) -> bool {
        !self.layout && !self.redraw
    }

    pub(crate) fn request_layout(&mut self) {
        self.layout = true;
        self.redraw = true;
    }

    pub(crate) fn request_redraw(&mut self) {
        self.redraw = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f32,
    pub y: f32,
}

impl TouchEvent {
    pub fn new(action: TouchAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }
}

/// Alignment rule relative to the parent container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRule {
    AlignParentTop,
    AlignParentBottom,
    AlignParentLeft,
    AlignParentRight,
    CenterHorizontal,
    CenterVertical,
    CenterInParent,
}

/// Bottom-aligned, horizontally centered
pub fn default_placement_rules() -> Vec<PlacementRule> {
    vec![PlacementRule::AlignParentBottom, PlacementRule::CenterHorizontal]
}

/// Where the surface sits inside its parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementParams {
    pub rules: Vec<PlacementRule>,
    pub left_margin: i32,
    pub top_margin: i32,
    pub right_margin: i32,
    pub bottom_margin: i32,
}

impl PlacementParams {
    /// Build params from rules and float margins (truncated toward zero)
    pub fn new(rules: &[PlacementRule], margins: &Margins) -> Self {
        Self {
            rules: rules.to_vec(),
            left_margin: margins.left as i32,
            top_margin: margins.top as i32,
            right_margin: margins.right as i32,
            bottom_margin: margins.bottom as i32,
        }
    }

    pub fn has_rule(&self, rule: PlacementRule) -> bool {
        self.rules.contains(&rule)
    }
}

/// Listener for taps on a single indicator shape
pub trait PositionClickListener {
    fn position_click(&mut self, index: usize);
}

impl<F: FnMut(usize)> PositionClickListener for F {
    fn position_click(&mut self, index: usize) {
        self(index)
    }
}

/// A drawable, measurable unit the host inserts into its tree
pub trait Surface {
    /// Size the surface wants under the given constraints
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Draw onto `canvas` in surface coordinates
    fn draw(&mut self, canvas: &mut dyn Canvas);

    fn visibility(&self) -> Visibility;

    /// Handle a pointer event; returns whether it was consumed
    fn on_touch_event(&mut self, _event: TouchEvent) -> bool {
        false
    }

    /// Drain pending layout/redraw requests
    fn take_invalidation(&mut self) -> Invalidation;
}

/// Page-position display synchronized to a pager's scroll state
pub trait Indicator {
    /// (Re)build the shape centers for `page_count` pages
    fn init_indicator_count(&mut self, page_count: usize);

    /// The unit to insert into the host's tree
    fn surface(&mut self) -> &mut dyn Surface;

    /// Placement computed fresh from the current config
    fn placement(&self) -> PlacementParams;

    /// Called continuously while a page scroll is in progress
    fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_pixels: i32);

    /// Called when a page becomes the settled selection
    fn on_page_selected(&mut self, position: usize);

    fn on_page_scroll_state_changed(&mut self, _state: ScrollState) {}

    /// Page count from the last `init_indicator_count`
    fn page_count(&self) -> usize;

    fn shape_centers(&self) -> &[Point];

    /// x coordinate the highlight is drawn at
    fn selection_x(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_params_truncate_margins() {
        let margins = Margins { left: 1.9, top: 2.0, right: -0.5, bottom: 12.7 };
        let params = PlacementParams::new(&default_placement_rules(), &margins);
        assert_eq!(params.left_margin, 1);
        assert_eq!(params.top_margin, 2);
        assert_eq!(params.right_margin, 0);
        assert_eq!(params.bottom_margin, 12);
        assert!(params.has_rule(PlacementRule::AlignParentBottom));
        assert!(params.has_rule(PlacementRule::CenterHorizontal));
        assert!(!params.has_rule(PlacementRule::AlignParentTop));
    }

    #[test]
    fn test_closure_is_click_listener() {
        let mut clicked = Vec::new();
        {
            let mut listener = |index: usize| clicked.push(index);
            listener.position_click(3);
        }
        assert_eq!(clicked, vec![3]);
    }

    #[test]
    fn test_invalidation_flags() {
        let mut inv = Invalidation::default();
        assert!(inv.is_empty());
        inv.request_redraw();
        assert!(inv.redraw && !inv.layout);
        inv.request_layout();
        assert!(inv.layout && inv.redraw);
    }
}
