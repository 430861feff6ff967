//! Pager host: owns the page position and drives an [`Indicator`] with the
//! scroll callbacks a carousel would emit.
//!
//! Positions are tracked on a continuous page axis. A value `p` maps to the
//! callback `on_page_scrolled(floor(p) mod n, fract(p), ...)`, so wrapping from
//! the last page to the first (or back) interpolates through the
//! `(position + 1) mod n` segment.
//!
//! # Usage
//!
//! ```ignore
//! let mut pager = Pager::new(Box::new(PointIndicator::default()), PagerConfig::default());
//! pager.set_page_count(5);
//! pager.next();
//!
//! // In main loop
//! pager.update();
//! ```

use std::time::{Duration, Instant};

use pagedot_core::{lerp, EasingType, Indicator, ScrollState};

/// Timing of page transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerConfig {
    pub duration: Duration,
    pub easing: EasingType,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: EasingType::Cubic,
        }
    }
}

/// Active page transition
#[derive(Debug, Clone, Copy)]
struct Transition {
    /// Set on the first update after the transition was requested
    start: Option<Instant>,
    from: f32,
    to: f32,
}

pub struct Pager {
    indicator: Box<dyn Indicator>,
    config: PagerConfig,
    page_count: usize,
    current: usize,
    /// Continuous position currently shown
    position: f32,
    transition: Option<Transition>,
    state: ScrollState,
    /// Width of one page in host pixels, reported as `offset_pixels`
    page_width: u32,
}

impl std::fmt::Debug for Pager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("page_count", &self.page_count)
            .field("current", &self.current)
            .field("position", &self.position)
            .field("state", &self.state)
            .finish()
    }
}

impl Pager {
    pub fn new(indicator: Box<dyn Indicator>, config: PagerConfig) -> Self {
        Self {
            indicator,
            config,
            page_count: 0,
            current: 0,
            position: 0.0,
            transition: None,
            state: ScrollState::Idle,
            page_width: 0,
        }
    }

    pub fn indicator(&self) -> &dyn Indicator {
        self.indicator.as_ref()
    }

    pub fn indicator_mut(&mut self) -> &mut dyn Indicator {
        self.indicator.as_mut()
    }

    /// Swap in another indicator and bring it up to date
    pub fn set_indicator(&mut self, indicator: Box<dyn Indicator>) {
        self.indicator = indicator;
        self.indicator.init_indicator_count(self.page_count);
        self.sync_indicator();
    }

    pub fn set_config(&mut self, config: PagerConfig) {
        self.config = config;
    }

    pub fn set_page_width(&mut self, width: u32) {
        self.page_width = width;
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Settled page (the target page while a transition runs)
    pub fn current(&self) -> usize {
        self.current
    }

    /// Page and fractional offset currently shown
    pub fn visible_position(&self) -> (usize, f32) {
        self.split(self.position)
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Change the number of pages (e.g. after a data-set change)
    pub fn set_page_count(&mut self, count: usize) {
        self.page_count = count;
        self.current = self.current.min(count.saturating_sub(1));
        self.position = self.current as f32;
        self.transition = None;
        self.set_state(ScrollState::Idle);
        self.indicator.init_indicator_count(count);
        self.sync_indicator();
        tracing::debug!("Pager has {} pages, current {}", count, self.current);
    }

    /// Start a transition to the next page, wrapping to the first
    pub fn next(&mut self) {
        if self.page_count < 2 {
            return;
        }
        let target = (self.current + 1) % self.page_count;
        self.start_transition(self.current as f32 + 1.0, target);
    }

    /// Start a transition to the previous page, wrapping to the last
    pub fn prev(&mut self) {
        if self.page_count < 2 {
            return;
        }
        let target = (self.current + self.page_count - 1) % self.page_count;
        self.start_transition(self.current as f32 - 1.0, target);
    }

    /// Start a transition straight to `page` (clamped)
    pub fn go_to(&mut self, page: usize) {
        if self.page_count == 0 {
            return;
        }
        let target = page.min(self.page_count - 1);
        if target == self.current && self.transition.is_none() {
            return;
        }
        self.start_transition(target as f32, target);
    }

    /// Move the page by a manual drag of `delta` pages
    pub fn drag_by(&mut self, delta: f32) {
        if self.page_count < 2 {
            return;
        }
        self.transition = None;
        self.set_state(ScrollState::Dragging);
        // Never drag more than one page away from the settled page
        let anchor = self.current as f32;
        self.position = (self.position + delta).clamp(anchor - 1.0, anchor + 1.0);
        self.emit_scrolled();
    }

    /// End a drag and settle on the nearest page
    pub fn release(&mut self) {
        if self.state != ScrollState::Dragging {
            return;
        }
        let nearest = self.position.round();
        let target = (nearest as i64).rem_euclid(self.page_count as i64) as usize;
        self.start_transition(nearest, target);
    }

    /// Advance the running transition; call once per frame
    ///
    /// Returns true while a transition is still running.
    pub fn update(&mut self) -> bool {
        self.update_at(Instant::now())
    }

    pub fn update_at(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        let start = *transition.start.get_or_insert(now);
        let (from, to) = (transition.from, transition.to);

        let progress = if self.config.duration.is_zero() {
            1.0
        } else {
            now.saturating_duration_since(start).as_secs_f32() / self.config.duration.as_secs_f32()
        };

        if progress >= 1.0 {
            self.transition = None;
            self.position = self.current as f32;
            self.emit_scrolled();
            self.set_state(ScrollState::Idle);
            return false;
        }

        self.position = lerp(from, to, self.config.easing.apply(progress));
        self.emit_scrolled();
        true
    }

    fn start_transition(&mut self, to: f32, target: usize) {
        self.transition = Some(Transition {
            start: None,
            from: self.position,
            to,
        });
        self.set_state(ScrollState::Settling);
        if target != self.current {
            self.current = target;
            self.indicator.on_page_selected(target);
        }
        if self.config.duration.is_zero() {
            self.update_at(Instant::now());
        }
    }

    fn split(&self, position: f32) -> (usize, f32) {
        if self.page_count == 0 {
            return (0, 0.0);
        }
        let floor = position.floor();
        let page = (floor as i64).rem_euclid(self.page_count as i64) as usize;
        (page, position - floor)
    }

    fn emit_scrolled(&mut self) {
        let (page, offset) = self.split(self.position);
        let pixels = (offset * self.page_width as f32).round() as i32;
        self.indicator.on_page_scrolled(page, offset, pixels);
    }

    fn set_state(&mut self, state: ScrollState) {
        if self.state != state {
            self.state = state;
            self.indicator.on_page_scroll_state_changed(state);
        }
    }

    /// Put a freshly initialized indicator on the current page in both modes
    fn sync_indicator(&mut self) {
        self.emit_scrolled();
        self.indicator.on_page_selected(self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedot_core::{
        LineIndicator, LineStyle, Point, PointIndicator, PointStyle, PlacementParams, Surface,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every callback the pager emits
    #[derive(Default)]
    struct Probe {
        log: Rc<RefCell<Vec<String>>>,
        inner: PointIndicator,
    }

    impl Indicator for Probe {
        fn init_indicator_count(&mut self, page_count: usize) {
            self.log.borrow_mut().push(format!("init {}", page_count));
            self.inner.init_indicator_count(page_count);
        }

        fn surface(&mut self) -> &mut dyn Surface {
            self.inner.surface()
        }

        fn placement(&self) -> PlacementParams {
            self.inner.placement()
        }

        fn on_page_scrolled(&mut self, position: usize, offset: f32, offset_pixels: i32) {
            self.log
                .borrow_mut()
                .push(format!("scrolled {} {:.2} {}", position, offset, offset_pixels));
            self.inner.on_page_scrolled(position, offset, offset_pixels);
        }

        fn on_page_selected(&mut self, position: usize) {
            self.log.borrow_mut().push(format!("selected {}", position));
            self.inner.on_page_selected(position);
        }

        fn on_page_scroll_state_changed(&mut self, state: ScrollState) {
            self.log.borrow_mut().push(format!("state {:?}", state));
        }

        fn page_count(&self) -> usize {
            self.inner.page_count()
        }

        fn shape_centers(&self) -> &[Point] {
            self.inner.shape_centers()
        }

        fn selection_x(&self) -> f32 {
            self.inner.selection_x()
        }
    }

    fn linear(ms: u64) -> PagerConfig {
        PagerConfig {
            duration: Duration::from_millis(ms),
            easing: EasingType::Linear,
        }
    }

    fn probe_pager(pages: usize, config: PagerConfig) -> (Pager, Rc<RefCell<Vec<String>>>) {
        let probe = Probe {
            inner: PointIndicator::new(PointStyle::default().with_spacing(0.0)),
            ..Default::default()
        };
        let log = Rc::clone(&probe.log);
        let mut pager = Pager::new(Box::new(probe), config);
        pager.set_page_width(100);
        pager.set_page_count(pages);
        log.borrow_mut().clear();
        (pager, log)
    }

    #[test]
    fn test_next_emits_selected_scroll_and_states() {
        let (mut pager, log) = probe_pager(4, linear(100));
        let t0 = Instant::now();

        pager.next();
        assert!(pager.update_at(t0));
        assert!(pager.update_at(t0 + Duration::from_millis(50)));
        assert!(!pager.update_at(t0 + Duration::from_millis(100)));

        assert_eq!(
            *log.borrow(),
            vec![
                "state Settling",
                "selected 1",
                "scrolled 0 0.00 0",
                "scrolled 0 0.50 50",
                "scrolled 1 0.00 0",
                "state Idle",
            ]
        );
        assert_eq!(pager.current(), 1);
        assert_eq!(pager.indicator().selection_x(), 30.0);
    }

    #[test]
    fn test_prev_from_first_wraps_through_last_segment() {
        let (mut pager, log) = probe_pager(3, linear(100));
        let t0 = Instant::now();

        pager.prev();
        pager.update_at(t0);
        pager.update_at(t0 + Duration::from_millis(25));
        let (page, offset) = pager.visible_position();
        assert_eq!(page, 2);
        assert!((offset - 0.75).abs() < 1e-3);
        // Highlight sits between the last and the first circle
        assert!((pager.indicator().selection_x() - 20.0).abs() < 1e-2);

        pager.update_at(t0 + Duration::from_millis(200));
        assert_eq!(pager.current(), 2);
        assert_eq!(pager.indicator().selection_x(), 50.0);
        assert!(log.borrow().contains(&"selected 2".to_string()));
    }

    #[test]
    fn test_next_from_last_wraps_to_first() {
        let (mut pager, _log) = probe_pager(3, linear(0));
        pager.go_to(2);
        pager.next();
        assert_eq!(pager.current(), 0);
        assert_eq!(pager.visible_position(), (0, 0.0));
        assert_eq!(pager.indicator().selection_x(), 10.0);
        assert!(!pager.is_animating());
    }

    #[test]
    fn test_zero_duration_jumps_immediately() {
        let (mut pager, log) = probe_pager(5, linear(0));
        pager.go_to(3);
        assert_eq!(pager.current(), 3);
        assert_eq!(pager.state(), ScrollState::Idle);
        assert_eq!(
            *log.borrow(),
            vec!["state Settling", "selected 3", "scrolled 3 0.00 0", "state Idle"]
        );
    }

    #[test]
    fn test_drag_and_release_settles_on_nearest() {
        let (mut pager, log) = probe_pager(4, linear(0));
        pager.drag_by(0.3);
        pager.drag_by(0.4);
        assert_eq!(pager.state(), ScrollState::Dragging);
        let (page, offset) = pager.visible_position();
        assert_eq!(page, 0);
        assert!((offset - 0.7).abs() < 1e-4);

        pager.release();
        assert_eq!(pager.current(), 1);
        assert_eq!(pager.state(), ScrollState::Idle);
        assert_eq!(log.borrow()[0], "state Dragging");
    }

    #[test]
    fn test_drag_is_limited_to_one_page() {
        let (mut pager, _log) = probe_pager(4, linear(0));
        pager.go_to(2);
        pager.drag_by(-5.0);
        assert_eq!(pager.visible_position(), (1, 0.0));
        pager.release();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn test_release_without_drag_is_noop() {
        let (mut pager, log) = probe_pager(4, linear(0));
        pager.release();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_single_page_ignores_navigation() {
        let (mut pager, log) = probe_pager(1, linear(0));
        pager.next();
        pager.prev();
        pager.drag_by(0.5);
        assert!(log.borrow().is_empty());
        assert_eq!(pager.current(), 0);
    }

    #[test]
    fn test_page_count_change_clamps_and_reinits() {
        let (mut pager, log) = probe_pager(5, linear(0));
        pager.go_to(4);
        log.borrow_mut().clear();

        pager.set_page_count(2);
        assert_eq!(pager.current(), 1);
        assert_eq!(log.borrow()[0], "init 2");
        assert_eq!(pager.indicator().shape_centers().len(), 2);
    }

    #[test]
    fn test_swapped_indicator_is_synced_to_current_page() {
        let (mut pager, _log) = probe_pager(3, linear(0));
        pager.go_to(2);

        let line = LineIndicator::new(LineStyle::default().with_follow_scroll(false));
        pager.set_indicator(Box::new(line));
        assert_eq!(pager.indicator().page_count(), 3);
        assert_eq!(pager.indicator().selection_x(), 225.0);
    }
}
