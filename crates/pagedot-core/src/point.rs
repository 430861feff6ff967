//! Point indicator: a row of circles, one per page, with a highlight circle
//! that slides between them. Circles can be tapped to pick a page.
//!
//! Rings are drawn as two concentric fills (ring color at full radius, fill
//! color at `radius - stroke`) rather than as a stroked outline.

use std::fmt;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::PointStyle;
use crate::easing::EasingType;
use crate::geometry::{Insets, Margins, MeasureSpec, Point, ShapeRow, Size};
use crate::indicator::{
    Indicator, Invalidation, PlacementParams, PlacementRule, PositionClickListener, Surface,
    TouchAction, TouchEvent, Visibility,
};
use crate::track::ShapeTrack;

pub struct PointIndicator {
    style: PointStyle,
    track: ShapeTrack,
    visibility: Visibility,
    invalidation: Invalidation,
    stale: bool,
    click_listener: Option<Box<dyn PositionClickListener>>,
}

impl fmt::Debug for PointIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointIndicator")
            .field("style", &self.style)
            .field("track", &self.track)
            .field("visibility", &self.visibility)
            .field("has_click_listener", &self.click_listener.is_some())
            .finish()
    }
}

impl Default for PointIndicator {
    fn default() -> Self {
        Self::new(PointStyle::default())
    }
}

impl PointIndicator {
    pub fn new(style: PointStyle) -> Self {
        Self {
            style: style.resolved(),
            track: ShapeTrack::new(),
            visibility: Visibility::Gone,
            invalidation: Invalidation::default(),
            stale: false,
            click_listener: None,
        }
    }

    pub fn style(&self) -> &PointStyle {
        &self.style
    }

    /// Page whose circle the highlight last settled on
    pub fn current_index(&self) -> usize {
        self.track.current_index()
    }

    fn shape_row(&self) -> ShapeRow {
        let radius = self.style.radius;
        let origin = Point::new(
            self.style.padding.left + radius,
            self.style.padding.top + radius,
        );
        ShapeRow::new(origin, radius * 2.0 + self.style.spacing())
    }

    fn ensure_layout(&mut self) {
        if self.stale {
            self.stale = false;
            self.track.relayout(self.shape_row());
            tracing::trace!("Point indicator relayout: {} centers", self.track.centers().len());
        }
    }

    fn restyle(&mut self, change: impl FnOnce(&mut PointStyle)) -> &mut Self {
        change(&mut self.style);
        self.stale = true;
        self.invalidation.request_layout();
        self
    }

    fn recolor(&mut self, change: impl FnOnce(&mut PointStyle)) -> &mut Self {
        change(&mut self.style);
        self.invalidation.request_redraw();
        self
    }

    pub fn set_style(&mut self, style: PointStyle) -> &mut Self {
        self.restyle(|s| *s = style.resolved())
    }

    pub fn set_radius(&mut self, radius: f32) -> &mut Self {
        self.restyle(|s| s.radius = radius)
    }

    pub fn set_selected_radius(&mut self, radius: f32) -> &mut Self {
        self.restyle(|s| s.selected_radius = Some(radius))
    }

    /// Gap between adjacent circles
    pub fn set_spacing(&mut self, spacing: f32) -> &mut Self {
        self.restyle(|s| s.spacing = Some(spacing))
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

    pub fn set_stroke(&mut self, width: f32) -> &mut Self {
        self.recolor(|s| s.stroke = width)
    }

    pub fn set_stroke_color(&mut self, color: Rgba) -> &mut Self {
        self.recolor(|s| s.stroke_color = Some(color))
    }

    pub fn set_selected_stroke(&mut self, width: f32) -> &mut Self {
        self.recolor(|s| s.selected_stroke = width)
    }

    pub fn set_selected_stroke_color(&mut self, color: Rgba) -> &mut Self {
        self.recolor(|s| s.selected_stroke_color = Some(color))
    }

    pub fn set_follow_scroll(&mut self, enable: bool) -> &mut Self {
        self.style.follow_scroll = enable;
        self
    }

    pub fn set_easing(&mut self, easing: EasingType) -> &mut Self {
        self.style.easing = easing;
        self
    }

    pub fn set_click_enable(&mut self, enable: bool) -> &mut Self {
        self.style.click_enable = enable;
        self
    }

    /// Register the tap listener; this also enables clicking
    pub fn set_position_click_listener(
        &mut self,
        listener: impl PositionClickListener + 'static,
    ) -> &mut Self {
        self.style.click_enable = true;
        self.click_listener = Some(Box::new(listener));
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

    pub fn set_placement_rules(&mut self, rules: &[PlacementRule]) -> &mut Self {
        self.restyle(|s| s.placement = rules.to_vec())
    }

    fn desired_width(&self) -> u32 {
        let count = self.track.page_count() as i64;
        let padding = &self.style.padding;
        let width = padding.left as i64
            + count * self.style.radius as i64 * 2
            + (count - 1).max(0) * self.style.spacing() as i64
            + padding.right as i64;
        width.max(0) as u32
    }

    fn desired_height(&self) -> u32 {
        let padding = &self.style.padding;
        ((self.style.radius * 2.0 + padding.top + padding.bottom) as i64).max(0) as u32
    }

    /// Fire the listener for every circle whose horizontal band contains `x`.
    ///
    /// The vertical position is not checked, and overlapping bands all fire.
    fn dispatch_click(&mut self, x: f32) -> bool {
        let Some(listener) = self.click_listener.as_mut() else {
            return false;
        };
        let radius = self.style.radius;
        let mut hit = false;
        for (index, center) in self.track.centers().iter().enumerate() {
            if x >= center.x - radius && x <= center.x + radius {
                tracing::debug!("Indicator position {} clicked", index);
                listener.position_click(index);
                hit = true;
            }
        }
        hit
    }
}

/// Draw a circle with an optional ring as two concentric fills
fn fill_ringed_circle(
    canvas: &mut dyn Canvas,
    center: Point,
    radius: f32,
    stroke: f32,
    stroke_color: Rgba,
    color: Rgba,
) {
    if stroke > 0.0 {
        canvas.fill_circle(center, radius, stroke_color);
    }
    canvas.fill_circle(center, radius - stroke, color);
}

impl Surface for PointIndicator {
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
            fill_ringed_circle(
                canvas,
                *center,
                style.radius,
                style.stroke,
                style.stroke_color(),
                style.color,
            );
        }

        let center = Point::new(self.track.selection_x(), self.track.row().origin.y);
        fill_ringed_circle(
            canvas,
            center,
            style.selected_radius(),
            style.selected_stroke,
            style.selected_stroke_color(),
            style.selected_color,
        );
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn on_touch_event(&mut self, event: TouchEvent) -> bool {
        if !self.style.click_enable {
            return false;
        }
        match event.action {
            TouchAction::Down => true,
            TouchAction::Up => {
                self.ensure_layout();
                self.dispatch_click(event.x)
            }
            TouchAction::Move | TouchAction::Cancel => false,
        }
    }

    fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }
}

impl Indicator for PointIndicator {
    fn init_indicator_count(&mut self, page_count: usize) {
        self.stale = false;
        self.track.rebuild(self.shape_row(), page_count);
        self.visibility = if page_count > 1 {
            Visibility::Visible
        } else {
            Visibility::Gone
        };
        tracing::debug!(
            "Point indicator initialized with {} pages ({:?})",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, Recorder};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Touching circles of radius 10: centers at 10, 30, 50, ...
    fn touching(pages: usize) -> PointIndicator {
        let mut indicator = PointIndicator::new(PointStyle::default().with_spacing(0.0));
        indicator.init_indicator_count(pages);
        indicator
    }

    fn click_log(indicator: &mut PointIndicator) -> Rc<RefCell<Vec<usize>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        indicator.set_position_click_listener(move |index| sink.borrow_mut().push(index));
        log
    }

    fn tap(indicator: &mut PointIndicator, x: f32) {
        let surface = indicator.surface();
        surface.on_touch_event(TouchEvent::new(TouchAction::Down, x, 0.0));
        surface.on_touch_event(TouchEvent::new(TouchAction::Up, x, 0.0));
    }

    #[test]
    fn test_single_page_is_hidden() {
        let mut indicator = touching(1);
        assert_eq!(indicator.surface().visibility(), Visibility::Gone);
        assert!(indicator.shape_centers().is_empty());
        assert_eq!(
            indicator.surface().measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            Size::default()
        );
    }

    #[test]
    fn test_centers_for_four_pages() {
        let indicator = touching(4);
        let centers = indicator.shape_centers();
        assert_eq!(
            centers,
            &[
                Point::new(10.0, 10.0),
                Point::new(30.0, 10.0),
                Point::new(50.0, 10.0),
                Point::new(70.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_default_spacing_is_radius() {
        let mut indicator = PointIndicator::new(PointStyle::default().with_radius(4.0));
        indicator.init_indicator_count(3);
        let centers = indicator.shape_centers();
        assert_eq!(centers[1].x - centers[0].x, 12.0);
        assert_eq!(centers[2].x - centers[1].x, 12.0);
    }

    #[test]
    fn test_default_spacing_is_fixed_at_construction() {
        let mut indicator = PointIndicator::default();
        assert_eq!(indicator.style().spacing, Some(10.0));
        indicator.init_indicator_count(3);

        indicator.set_radius(5.0);
        indicator
            .surface()
            .measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        let centers = indicator.shape_centers();
        // 2 * 5 + 10, the gap keeps the radius it was built with
        assert_eq!(centers[1].x - centers[0].x, 20.0);
    }

    #[test]
    fn test_reinit_is_idempotent() {
        let mut indicator = touching(4);
        let first = indicator.shape_centers().to_vec();
        indicator.init_indicator_count(4);
        assert_eq!(indicator.shape_centers(), first.as_slice());
        assert_eq!(indicator.shape_centers().len(), 4);
    }

    #[test]
    fn test_tap_fires_listener_for_hit_circle() {
        let mut indicator = touching(4);
        let log = click_log(&mut indicator);
        tap(&mut indicator, 32.0);
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn test_tap_between_circles_fires_nothing() {
        // Centers at 10, 40, 70, 100 leave 10-unit gaps
        let mut indicator = PointIndicator::new(PointStyle::default().with_spacing(10.0));
        indicator.init_indicator_count(4);
        let log = click_log(&mut indicator);
        tap(&mut indicator, 25.0);
        tap(&mut indicator, 101.0 + 10.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_overlapping_circles_all_fire() {
        let mut indicator = PointIndicator::new(PointStyle::default().with_spacing(-10.0));
        indicator.init_indicator_count(3);
        // Centers at 10, 20, 30 with radius 10
        let log = click_log(&mut indicator);
        tap(&mut indicator, 15.0);
        assert_eq!(*log.borrow(), vec![0, 1]);
    }

    #[test]
    fn test_touch_ignored_when_click_disabled() {
        let mut indicator = touching(4);
        assert!(!indicator
            .surface()
            .on_touch_event(TouchEvent::new(TouchAction::Down, 10.0, 10.0)));

        indicator.set_click_enable(true);
        assert!(indicator
            .surface()
            .on_touch_event(TouchEvent::new(TouchAction::Down, 10.0, 10.0)));
    }

    #[test]
    fn test_click_enable_without_listener_is_harmless() {
        let mut indicator = PointIndicator::new(
            PointStyle::default().with_spacing(10.0).with_click_enable(true),
        );
        indicator.init_indicator_count(4);
        assert!(!indicator
            .surface()
            .on_touch_event(TouchEvent::new(TouchAction::Up, 10.0, 10.0)));
    }

    #[test]
    fn test_scroll_midpoint_and_wrap() {
        let mut indicator = touching(4);
        indicator.on_page_scrolled(1, 0.5, 0);
        assert_eq!(indicator.selection_x(), 40.0);

        indicator.on_page_scrolled(3, 1.0, 0);
        assert_eq!(indicator.selection_x(), 10.0);
    }

    #[test]
    fn test_selected_updates_current_index_without_follow() {
        let mut indicator =
            PointIndicator::new(PointStyle::default().with_spacing(0.0).with_follow_scroll(false));
        indicator.init_indicator_count(4);

        indicator.on_page_scrolled(0, 0.5, 0);
        assert_eq!(indicator.selection_x(), 10.0);

        indicator.on_page_selected(2);
        assert_eq!(indicator.current_index(), 2);
        assert_eq!(indicator.selection_x(), 50.0);

        // Out of range clamps to the last circle
        indicator.on_page_selected(42);
        assert_eq!(indicator.current_index(), 3);
        assert_eq!(indicator.selection_x(), 70.0);
    }

    #[test]
    fn test_reinit_keeps_current_index_in_range() {
        let mut indicator =
            PointIndicator::new(PointStyle::default().with_spacing(0.0).with_follow_scroll(false));
        indicator.init_indicator_count(4);
        indicator.on_page_selected(3);

        indicator.init_indicator_count(2);
        assert_eq!(indicator.current_index(), 1);
        assert_eq!(indicator.selection_x(), 30.0);

        indicator.init_indicator_count(1);
        indicator.init_indicator_count(5);
        assert_eq!(indicator.shape_centers().len(), 5);
    }

    #[test]
    fn test_measure_wraps_content() {
        let mut indicator = PointIndicator::new(
            PointStyle::default()
                .with_spacing(10.0)
                .with_padding(Insets { left: 1.0, top: 2.0, right: 3.0, bottom: 4.0 }),
        );
        indicator.init_indicator_count(4);
        let size = indicator
            .surface()
            .measure(MeasureSpec::AtMost(10), MeasureSpec::Unspecified);
        assert_eq!(size, Size::new(1 + 4 * 20 + 3 * 10 + 3, 20 + 2 + 4));
    }

    #[test]
    fn test_draw_rings_as_concentric_fills() {
        let style = PointStyle::default()
            .with_spacing(10.0)
            .with_colors(Rgba::WHITE, Rgba::RED)
            .with_stroke(2.0, Rgba::GRAY);
        let mut indicator = PointIndicator::new(style);
        indicator.init_indicator_count(2);

        let mut canvas = Recorder::new();
        indicator.surface().draw(&mut canvas);
        let ops = canvas.into_ops();

        // Two circles with rings, then the highlight without one
        assert_eq!(ops.len(), 5);
        assert_eq!(
            ops[0],
            DrawOp::Circle { center: Point::new(10.0, 10.0), radius: 10.0, color: Rgba::GRAY }
        );
        assert_eq!(
            ops[1],
            DrawOp::Circle { center: Point::new(10.0, 10.0), radius: 8.0, color: Rgba::WHITE }
        );
        assert_eq!(
            ops[4],
            DrawOp::Circle { center: Point::new(10.0, 10.0), radius: 10.0, color: Rgba::RED }
        );
    }

    #[test]
    fn test_selected_radius_only_affects_highlight() {
        let mut indicator = PointIndicator::new(
            PointStyle::default().with_spacing(10.0).with_selected_radius(6.0),
        );
        indicator.init_indicator_count(2);
        let mut canvas = Recorder::new();
        indicator.surface().draw(&mut canvas);

        assert_eq!(indicator.shape_centers()[1].x, 40.0);
        assert!(matches!(
            canvas.ops().last(),
            Some(DrawOp::Circle { radius, .. }) if *radius == 6.0
        ));
    }

    #[test]
    fn test_radius_change_applies_on_next_layout_pass() {
        let mut indicator = touching(3);
        indicator.set_radius(5.0);
        assert_eq!(indicator.shape_centers()[1].x, 30.0);

        indicator
            .surface()
            .measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(indicator.shape_centers()[1].x, 15.0);
    }
}
