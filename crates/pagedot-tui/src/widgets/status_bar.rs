use pagedot_core::ScrollState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => match app.pager.state() {
                ScrollState::Idle => "IDLE",
                ScrollState::Dragging => "DRAGGING",
                ScrollState::Settling => "SETTLING",
            },
            Mode::Help => "HELP",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let page = if app.pager.page_count() == 0 {
                "-".to_string()
            } else {
                format!("{}/{}", app.pager.current() + 1, app.pager.page_count())
            };
            let click = app
                .last_click
                .map(|index| (index + 1).to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                " {} | {} | Page: {} | Follow: {} | Auto: {} | Click: {}",
                mode_str,
                app.kind,
                page,
                on_off(app.follow_scroll),
                on_off(app.auto_advance),
                click
            )
        };

        let help_hint = " q:quit h/l:page s:style f:follow ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.foreground).bg(theme.status),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.status)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.status)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
