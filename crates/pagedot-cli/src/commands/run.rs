use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Terminal,
};

use pagedot_core::AppConfig;
use pagedot_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{CarouselWidget, HelpWidget, StatusBarWidget},
};

pub fn run(config: AppConfig) -> Result<()> {
    let event_handler = EventHandler::new(config.demo.tick_rate_ms);
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("pagedot"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(app.theme.background)),
                size,
            );

            // Main layout: carousel + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            CarouselWidget::render(frame, main_layout[0], app);
            StatusBarWidget::render(frame, main_layout[1], app);

            if app.mode == Mode::Help {
                HelpWidget::render(frame, &app.theme);
            }
        })?;

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    app.handle_action(action);
                }
                AppEvent::Mouse(mouse) => {
                    if app.mode == Mode::Normal {
                        app.handle_mouse(mouse);
                    }
                }
                AppEvent::Resize(width, height) => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                }
                AppEvent::Tick => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
