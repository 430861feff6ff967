use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

const BINDINGS: &[(&str, &str)] = &[
    ("h / l, ← / →", "previous / next page"),
    ("g / G", "first / last page"),
    ("H / L", "drag toward previous / next page"),
    ("space", "release drag"),
    ("+ / -", "add / remove a page"),
    ("s", "switch line / point indicator"),
    ("f", "toggle follow scroll"),
    ("a", "toggle auto advance"),
    ("click", "jump to a dot (point style)"),
    ("q", "quit"),
];

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        let width = 52u16.min(area.width.saturating_sub(4));
        let height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(width, height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.banner));

        let mut lines = vec![Line::from("")];
        for (keys, description) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:<14}", keys),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(theme.foreground)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
