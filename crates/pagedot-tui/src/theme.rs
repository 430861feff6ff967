//! Demo color theme with user overrides

use pagedot_core::config::{ThemeColorOverrides, ThemeConfig};
use pagedot_core::{parse_hex_color, Rgba};
use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub banner: Color,
    pub status: Color,
    pub accent: Color,
    /// Banner backgrounds cycled per page
    pub pages: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xd4, 0xbe, 0x98),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            banner: Color::Rgb(0x32, 0x30, 0x2f),
            status: Color::Rgb(0x45, 0x40, 0x3d),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            pages: vec![
                Color::Rgb(0x45, 0x40, 0x3d),
                Color::Rgb(0x3a, 0x46, 0x3a),
                Color::Rgb(0x45, 0x3a, 0x3a),
                Color::Rgb(0x3a, 0x40, 0x48),
            ],
        }
    }
}

impl Theme {
    /// Banner background for a page
    pub fn page_color(&self, page: usize) -> Color {
        if self.pages.is_empty() {
            self.banner
        } else {
            self.pages[page % self.pages.len()]
        }
    }
}

fn nord() -> Theme {
    Theme {
        background: Color::Rgb(0x2e, 0x34, 0x40),
        foreground: Color::Rgb(0xec, 0xef, 0xf4),
        muted: Color::Rgb(0x5e, 0x68, 0x7a),
        banner: Color::Rgb(0x3b, 0x42, 0x52),
        status: Color::Rgb(0x43, 0x4c, 0x5e),
        accent: Color::Rgb(0x88, 0xc0, 0xd0),
        pages: vec![
            Color::Rgb(0x3b, 0x42, 0x52),
            Color::Rgb(0x43, 0x4c, 0x5e),
            Color::Rgb(0x4c, 0x56, 0x6a),
        ],
    }
}

fn dracula() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2a, 0x36),
        foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
        muted: Color::Rgb(0x62, 0x72, 0xa4),
        banner: Color::Rgb(0x44, 0x47, 0x5a),
        status: Color::Rgb(0x44, 0x47, 0x5a),
        accent: Color::Rgb(0xbd, 0x93, 0xf9),
        pages: vec![
            Color::Rgb(0x44, 0x47, 0x5a),
            Color::Rgb(0x3c, 0x34, 0x50),
            Color::Rgb(0x34, 0x44, 0x4c),
        ],
    }
}

/// Convert an indicator color to a terminal color; transparent maps to None
pub fn to_color(color: Rgba) -> Option<Color> {
    if color.is_transparent() {
        None
    } else {
        Some(Color::Rgb(color.0, color.1, color.2))
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "nord" => nord(),
        "dracula" => dracula(),
        "default" | "gruvbox" | "gruvbox-dark" => Theme::default(),
        other => {
            tracing::warn!(
                "Unknown theme '{}', using default (available: {})",
                other,
                available_themes().join(", ")
            );
            Theme::default()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots = [
        (&overrides.background, &mut theme.background),
        (&overrides.foreground, &mut theme.foreground),
        (&overrides.banner, &mut theme.banner),
        (&overrides.status, &mut theme.status),
        (&overrides.accent, &mut theme.accent),
    ];
    for (hex, slot) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex).and_then(to_color) {
            Some(color) => *slot = color,
            None => tracing::warn!("Invalid theme color override: '{}'", hex),
        }
    }
    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["default", "nord", "dracula"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(Rgba::rgb(1, 2, 3)), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(to_color(Rgba::TRANSPARENT), None);
    }

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert_eq!(theme.background, Color::Rgb(0x28, 0x28, 0x28));
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#ff0000".to_string()),
                banner: Some("bogus".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
        assert_eq!(theme.banner, nord().banner);
    }

    #[test]
    fn test_page_color_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.page_color(0), theme.page_color(theme.pages.len()));
    }
}
