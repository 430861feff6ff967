use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use pagedot_core::{
    AppConfig, Indicator, IndicatorKind, LineIndicator, PointIndicator, TouchAction, TouchEvent,
};
use ratatui::layout::Rect;

use crate::input::Action;
use crate::pager::{Pager, PagerConfig};
use crate::theme::{load_theme, Theme};

/// Largest page count the demo lets you grow to
const MAX_PAGES: usize = 20;

/// Fraction of a page moved by one drag key press
const DRAG_STEP: f32 = 0.1;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Clicks reported by the indicator, drained once per event
type ClickQueue = Rc<RefCell<Vec<usize>>>;

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    pub theme: Theme,
    /// Page host driving the indicator
    pub pager: Pager,
    /// Indicator variant on screen
    pub kind: IndicatorKind,
    pub follow_scroll: bool,
    pub auto_advance: bool,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Last shape index the user clicked
    pub last_click: Option<usize>,
    /// Cells covered by the indicator in the last frame
    pub indicator_rect: Option<Rect>,
    clicks: ClickQueue,
    /// A press landed on the indicator and waits for its release
    touch_active: bool,
    last_advance: Instant,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let kind = config.demo.style;
        let follow_scroll = match kind {
            IndicatorKind::Line => config.line.follow_scroll,
            IndicatorKind::Point => config.point.follow_scroll,
        };
        let clicks = ClickQueue::default();
        let indicator = build_indicator(kind, &config, follow_scroll, &clicks);
        let mut pager = Pager::new(indicator, pager_config(&config));
        pager.set_page_count(config.demo.pages);

        Self {
            theme: load_theme(&config.theme),
            auto_advance: config.demo.auto_advance_secs > 0,
            config,
            pager,
            kind,
            follow_scroll,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            last_click: None,
            indicator_rect: None,
            clicks,
            touch_active: false,
            last_advance: Instant::now(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Apply a user action
    pub fn handle_action(&mut self, action: Action) {
        if action != Action::None {
            self.clear_status();
        }
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextPage => {
                self.pager.next();
                self.last_advance = Instant::now();
            }
            Action::PrevPage => {
                self.pager.prev();
                self.last_advance = Instant::now();
            }
            Action::FirstPage => self.pager.go_to(0),
            Action::LastPage => self.pager.go_to(self.pager.page_count().saturating_sub(1)),
            Action::DragLeft => self.pager.drag_by(-DRAG_STEP),
            Action::DragRight => self.pager.drag_by(DRAG_STEP),
            Action::Release => self.pager.release(),
            Action::AddPage => {
                let count = self.pager.page_count();
                if count >= MAX_PAGES {
                    self.set_status(format!("At most {} pages", MAX_PAGES));
                } else {
                    self.pager.set_page_count(count + 1);
                }
            }
            Action::RemovePage => {
                let count = self.pager.page_count();
                self.pager.set_page_count(count.saturating_sub(1));
            }
            Action::ToggleStyle => {
                self.kind = self.kind.toggled();
                self.rebuild_indicator();
                self.set_status(format!("Switched to {} indicator", self.kind));
            }
            Action::ToggleFollowScroll => {
                self.follow_scroll = !self.follow_scroll;
                self.rebuild_indicator();
            }
            Action::ToggleAutoAdvance => {
                if self.config.demo.auto_advance_secs == 0 {
                    self.set_status("Set demo.auto_advance_secs to enable auto advance");
                } else {
                    self.auto_advance = !self.auto_advance;
                    self.last_advance = Instant::now();
                }
            }
            Action::ShowHelp => self.mode = Mode::Help,
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}
        }
    }

    /// Forward mouse events over the indicator as touch events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.handle_action(Action::NextPage),
            MouseEventKind::ScrollUp => self.handle_action(Action::PrevPage),
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(rect) = self.indicator_rect else {
                    return;
                };
                if !contains(rect, mouse.column, mouse.row) {
                    return;
                }
                let event = self.touch_event(TouchAction::Down, rect, mouse.column, mouse.row);
                self.touch_active = self.pager.indicator_mut().surface().on_touch_event(event);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if !std::mem::take(&mut self.touch_active) {
                    return;
                }
                let Some(rect) = self.indicator_rect else {
                    return;
                };
                let event = self.touch_event(TouchAction::Up, rect, mouse.column, mouse.row);
                self.pager.indicator_mut().surface().on_touch_event(event);
                self.drain_clicks();
            }
            _ => {}
        }
    }

    /// Advance animations and the auto-advance timer; call on every tick
    pub fn tick(&mut self) {
        self.pager.update();

        let secs = self.config.demo.auto_advance_secs;
        if self.auto_advance
            && secs > 0
            && !self.pager.is_animating()
            && self.last_advance.elapsed() >= Duration::from_secs(secs)
        {
            self.pager.next();
            self.last_advance = Instant::now();
        }
    }

    /// Map a terminal cell to the center of its upper sub-pixel in surface units
    fn touch_event(&self, action: TouchAction, rect: Rect, column: u16, row: u16) -> TouchEvent {
        let scale = if self.config.demo.scale > 0.0 {
            self.config.demo.scale
        } else {
            1.0
        };
        let x = (column as f32 - rect.x as f32 + 0.5) * scale;
        let y = ((row as f32 - rect.y as f32) * 2.0 + 0.5) * scale;
        TouchEvent::new(action, x, y)
    }

    fn drain_clicks(&mut self) {
        let clicks: Vec<usize> = self.clicks.borrow_mut().drain(..).collect();
        // Overlapping dots may report several indices, the last one wins
        if let Some(&index) = clicks.last() {
            tracing::debug!("Jumping to clicked page {}", index);
            self.last_click = Some(index);
            self.pager.go_to(index);
            self.last_advance = Instant::now();
        }
    }

    fn rebuild_indicator(&mut self) {
        let indicator = build_indicator(self.kind, &self.config, self.follow_scroll, &self.clicks);
        self.pager.set_indicator(indicator);
        self.indicator_rect = None;
        self.touch_active = false;
    }
}

/// Build the configured indicator variant.
///
/// The point variant reports taps into `clicks`.
pub fn build_indicator(
    kind: IndicatorKind,
    config: &AppConfig,
    follow_scroll: bool,
    clicks: &Rc<RefCell<Vec<usize>>>,
) -> Box<dyn Indicator> {
    match kind {
        IndicatorKind::Line => {
            let mut indicator = LineIndicator::new(config.line.clone());
            indicator.set_follow_scroll(follow_scroll);
            Box::new(indicator)
        }
        IndicatorKind::Point => {
            let mut indicator = PointIndicator::new(config.point.clone());
            indicator.set_follow_scroll(follow_scroll);
            let queue = Rc::clone(clicks);
            indicator.set_position_click_listener(move |index: usize| {
                queue.borrow_mut().push(index);
            });
            Box::new(indicator)
        }
    }
}

fn pager_config(config: &AppConfig) -> PagerConfig {
    PagerConfig {
        duration: Duration::from_millis(config.demo.transition_ms),
        easing: config.demo.transition_easing,
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
