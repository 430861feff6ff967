use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;
use crate::widgets::IndicatorWidget;

pub struct CarouselWidget;

impl CarouselWidget {
    /// Render the sliding banner pages with the indicator on top
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        app.pager.set_page_width(area.width as u32);

        let count = app.pager.page_count();
        if count == 0 {
            let empty = Paragraph::new("No pages (press + to add one)")
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.muted).bg(app.theme.background));
            frame.render_widget(empty, area);
        } else {
            let (page, offset) = app.pager.visible_position();
            let (left, right) = split_slide(area, offset);
            Self::render_page(frame, left, page, count, &app.theme);
            if right.width > 0 {
                Self::render_page(frame, right, (page + 1) % count, count, &app.theme);
            }
        }

        app.indicator_rect =
            IndicatorWidget::render(frame, area, app.pager.indicator_mut(), app.config.demo.scale);
    }

    fn render_page(frame: &mut Frame, area: Rect, page: usize, count: usize, theme: &Theme) {
        let background = theme.page_color(page);
        let block = Block::default().style(Style::default().bg(background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let top = inner.height.saturating_sub(3) / 2;
        let mut lines = vec![Line::from(""); top as usize];
        lines.push(Line::from(Span::styled(
            format!("Page {}", page + 1),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} of {}", page + 1, count),
            Style::default().fg(theme.muted),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(background));
        frame.render_widget(paragraph, inner);
    }
}

/// Split `area` between the outgoing page (left) and the incoming page (right)
fn split_slide(area: Rect, offset: f32) -> (Rect, Rect) {
    let shift = ((offset.clamp(0.0, 1.0) * area.width as f32).round() as u16).min(area.width);
    let left = Rect::new(area.x, area.y, area.width - shift, area.height);
    let right = Rect::new(area.x + area.width - shift, area.y, shift, area.height);
    (left, right)
}
