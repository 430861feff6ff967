//! Line indicator: a row of rounded tracks, one per page, with a highlight
//! bar that slides between track centers.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::easing::EasingType;
use crate::geometry::{Insets, Margins, MeasureSpec, Point, RectF, ShapeRow, Size};
use crate::indicator::{
    Indicator, Invalidation, PlacementParams, PlacementRule, Surface, Visibility,
};
use crate::config::LineStyle;
use crate::track::ShapeTrack;

#[derive(Debug, Clone)]
pub struct LineIndicator {
    style: LineStyle,
    track: ShapeTrack,
    visibility: Visibility,
    invalidation: Invalidation,
    /// Style changed since the centers were computed
    stale: bool,
}

impl Default for LineIndicator {
    fn default() -> Self {
        Self::new(LineStyle::default())
    }
}

impl LineIndicator {
    pub fn new(style: LineStyle) -> Self {
        Self {
            style,
            track: ShapeTrack::new(),
            visibility: Visibility::Gone,
            invalidation: Invalidation::default(),
            stale: false,
        }
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    fn shape_row(&self) -> ShapeRow {
        let slot = self.style.slot_width();
        let origin = Point::new(
            self.style.padding.left + slot / 2.0,
            self.style.padding.top + self.style.height / 2.0,
        );
        ShapeRow::new(origin, slot + self.style.spacing)
    }

    /// Recompute centers if the style changed since the last layout
    fn ensure_layout(&mut self) {
        if self.stale {
            self.stale = false;
            self.track.relayout(self.shape_row());
            tracing::trace!("Line indicator relayout: {} centers", self.track.centers().len());
        }
    }

    /// Apply a style change that affects geometry
    fn restyle(&mut self, change: impl FnOnce(&mut LineStyle)) -> &mut Self {
        change(&mut self.style);
        self.stale = true;
        self.invalidation.request_layout();
        self
    }

    /// Apply a style change that only affects colors
    fn recolor(&mut self, change: impl FnOnce(&mut LineStyle)) -> &mut Self {
        change(&mut self.style);
        self.invalidation.request_redraw();
        self
    }

    /// Replace the whole style
    pub fn set_style(&mut self, style: LineStyle) -> &mut Self {
        self.restyle(|s| *s = style)
    }

    pub fn set_corner_radius(&mut self, radius: f32) -> &mut Self {
        self.restyle(|s| s.corner_radius = radius)
    }

    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.restyle(|s| s.width = width)
    }

    pub fn set_selected_width(&mut self, width: f32) -> &mut Self {
        self.restyle(|s| s.selected_width = Some(width))
    }

    pub fn set_height(&mut self, height: f32) -> &mut Self {
        self.restyle(|s| s.height = height)
    }

    pub fn set_selected_height(&mut self, height: f32) -> &mut Self {
        self.restyle(|s| s.selected_height = Some(height))
    }

    /// Gap between adjacent tracks
    pub fn set_spacing(&mut self, spacing: f32) -> &mut Self {
        self.restyle(|s| s.spacing = spacing)
    }

    pub fn set_padding(&mut self, padding: Insets) -> &mut Self {
        self.restyle(|s| s.padding = padding)
    }

    pub fn set_color(&mut self, color: Rgba) -> &mut Self {
        self.recolor(|s| s.color = color)
    }

    pub fn set_selected_color(&mut self, color: Rgba) -> &mut Self {
        self.recolor(|s| s.selected_color = color)
    }

    pub fn set_follow_scroll(&mut self, enable: bool) -> &mut Self {
        self.style.follow_scroll = enable;
        self
    }

    pub fn set_easing(&mut self, easing: EasingType) -> &mut Self {
        self.style.easing = easing;
        self
    }

    pub fn set_margin(&mut self, margin: f32) -> &mut Self {
        self.restyle(|s| s.margins = Margins::uniform(margin))
    }

    pub fn set_margin_left(&mut self, left: f32) -> &mut Self {
        self.restyle(|s| s.margins.left = left)
    }

    pub fn set_margin_top(&mut self, top: f32) -> &mut Self {
        self.restyle(|s| s.margins.top = top)
    }

    pub fn set_margin_right(&mut self, right: f32) -> &mut Self {
        self.restyle(|s| s.margins.right = right)
    }

    pub fn set_margin_bottom(&mut self, bottom: f32) -> &mut Self {
        self.restyle(|s| s.margins.bottom = bottom)
    }

    /// Replace the placement rules
    pub fn set_placement_rules(&mut self, rules: &[PlacementRule]) -> &mut Self {
        self.restyle(|s| s.placement = rules.to_vec())
    }

    fn desired_width(&self) -> u32 {
        let count = self.track.page_count() as i64;
        let padding = &self.style.padding;
        let width = padding.left as i64
            + count * self.style.slot_width() as i64
            + (count - 1).max(0) * self.style.spacing as i64
            + padding.right as i64;
        width.max(0) as u32
    }

    fn desired_height(&self) -> u32 {
        let padding = &self.style.padding;
        let height = padding.top as i64 + self.style.height as i64 + padding.bottom as i64;
        height.max(0) as u32
    }
}

impl Surface for LineIndicator {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.ensure_layout();
        if self.visibility == Visibility::Gone {
            return Size::default();
        }
        Size::new(
            width.resolve(self.desired_width()),
            height.resolve(self.desired_height()),
        )
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        self.ensure_layout();
        if self.track.is_empty() {
            return;
        }

        let style = &self.style;
        for center in self.track.centers() {
            let rect = RectF::from_center(*center, style.width, style.height);
            canvas.fill_round_rect(rect, style.corner_radius, style.color);
        }

        // Highlight last so it covers the tracks it passes over
        let center = Point::new(self.track.selection_x(), self.track.row().origin.y);
        let rect = RectF::from_center(center, style.selected_width(), style.selected_height());
        canvas.fill_round_rect(rect, style.corner_radius, style.selected_color);
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }
}

impl Indicator for LineIndicator {
    fn init_indicator_count(&mut self, page_count: usize) {
        self.stale = false;
        self.track.reset_selection();
        self.track.rebuild(self.shape_row(), page_count);
        self.visibility = if page_count > 1 {
            Visibility::Visible
        } else {
            Visibility::Gone
        };
        tracing::debug!(
            "Line indicator initialized with {} pages ({:?})",
            page_count,
            self.visibility
        );
        self.invalidation.request_layout();
    }

    fn surface(&mut self) -> &mut dyn Surface {
        self
    }

    fn placement(&self) -> PlacementParams {
        PlacementParams::new(&self.style.placement, &self.style.margins)
    }

    fn on_page_scrolled(&mut self, position: usize, offset: f32, _offset_pixels: i32) {
        if !self.style.follow_scroll {
            return;
        }
        self.ensure_layout();
        if self.track.scroll(position, offset, self.style.easing) {
            self.invalidation.request_redraw();
        }
    }

    fn on_page_selected(&mut self, position: usize) {
        if self.style.follow_scroll {
            return;
        }
        self.ensure_layout();
        if self.track.select(position) {
            self.invalidation.request_redraw();
        }
    }

    fn page_count(&self) -> usize {
        self.track.page_count()
    }

    fn shape_centers(&self) -> &[Point] {
        self.track.centers()
    }

    fn selection_x(&self) -> f32 {
        self.track.selection_x()
    }
}
