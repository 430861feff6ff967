use std::fs::File;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

use pagedot_core::{AppConfig, IndicatorKind};

mod commands;

#[derive(Parser)]
#[command(name = "pagedot")]
#[command(author, version, about = "Page indicators for terminal carousels")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive carousel demo
    Run {
        /// Indicator style (defaults to demo.style from the config)
        #[arg(short = 's', long, value_enum)]
        style: Option<StyleArg>,
        /// Number of pages (defaults to demo.pages from the config)
        #[arg(short = 'p', long)]
        pages: Option<usize>,
    },
    /// Print the computed indicator layout as JSON
    Layout {
        #[arg(short = 's', long, value_enum, default_value_t = StyleArg::Point)]
        style: StyleArg,
        #[arg(short = 'p', long, default_value_t = 3)]
        pages: usize,
        /// Measure with an exact width instead of the desired width
        #[arg(short = 'w', long)]
        width: Option<u32>,
        /// Page to select before reporting
        #[arg(long, default_value_t = 0)]
        select: usize,
        /// Scroll offset from the selected page towards the next one
        #[arg(long, default_value_t = 0.0)]
        offset: f32,
        /// Include the draw operations
        #[arg(short = 'd', long)]
        draw: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Line,
    Point,
}

impl From<StyleArg> for IndicatorKind {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Line => IndicatorKind::Line,
            StyleArg::Point => IndicatorKind::Point,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    let tui = uses_terminal(&cli.command);
    let writer = if tui {
        log_file_writer()
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(!tui)
                .with_writer(writer),
        )
        .init();

    match cli.command {
        Some(Commands::Run { style, pages }) => {
            let mut config = config;
            if let Some(style) = style {
                config.demo.style = style.into();
            }
            if let Some(pages) = pages {
                config.demo.pages = pages;
            }
            commands::run::run(config)
        }
        None => commands::run::run(config),
        Some(Commands::Layout {
            style,
            pages,
            width,
            select,
            offset,
            draw,
        }) => commands::layout::run(
            &config,
            commands::layout::LayoutArgs {
                kind: style.into(),
                pages,
                width,
                select,
                offset,
                draw,
            },
        ),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(force),
            ConfigAction::Path => commands::config::path(),
        },
    }
}

/// Whether the command takes over the terminal with the demo
fn uses_terminal(command: &Option<Commands>) -> bool {
    matches!(command, None | Some(Commands::Run { .. }))
}

/// Log to a file so output never lands on the alternate screen
fn log_file_writer() -> BoxMakeWriter {
    let path = AppConfig::log_path();
    let file = path
        .parent()
        .map(std::fs::create_dir_all)
        .transpose()
        .and_then(|_| File::create(&path));
    match file {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(std::io::sink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Option<Commands> {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_demo_commands_log_to_file() {
        assert!(uses_terminal(&command(&["pagedot"])));
        assert!(uses_terminal(&command(&["pagedot", "run", "--style", "line"])));
    }

    #[test]
    fn test_plain_commands_log_to_stderr() {
        assert!(!uses_terminal(&command(&["pagedot", "layout", "--pages", "4"])));
        assert!(!uses_terminal(&command(&["pagedot", "config", "path"])));
    }
}
