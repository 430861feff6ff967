use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::Rgba;
use crate::easing::EasingType;
use crate::geometry::{Insets, Margins};
use crate::indicator::{default_placement_rules, PlacementRule};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub line: LineStyle,
    #[serde(default)]
    pub point: PointStyle,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Style of the line indicator: one rounded track per page plus a sliding
/// highlight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Track width
    #[serde(default = "default_line_width")]
    pub width: f32,
    /// Track height
    #[serde(default = "default_line_height")]
    pub height: f32,
    /// Highlight width (defaults to `width`)
    #[serde(default)]
    pub selected_width: Option<f32>,
    /// Highlight height (defaults to `height`)
    #[serde(default)]
    pub selected_height: Option<f32>,
    /// Corner radius of tracks and highlight
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,
    /// Gap between adjacent tracks
    #[serde(default)]
    pub spacing: f32,
    #[serde(default = "default_track_color")]
    pub color: Rgba,
    #[serde(default = "default_selected_color")]
    pub selected_color: Rgba,
    /// Track the scroll offset continuously instead of snapping on settle
    #[serde(default = "default_true")]
    pub follow_scroll: bool,
    #[serde(default = "default_placement_rules")]
    pub placement: Vec<PlacementRule>,
    #[serde(default)]
    pub easing: EasingType,
    #[serde(default)]
    pub padding: Insets,
    #[serde(default)]
    pub margins: Margins,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: default_line_width(),
            height: default_line_height(),
            selected_width: None,
            selected_height: None,
            corner_radius: default_corner_radius(),
            spacing: 0.0,
            color: default_track_color(),
            selected_color: default_selected_color(),
            follow_scroll: default_true(),
            padding: Insets::default(),
            margins: Margins::default(),
            placement: default_placement_rules(),
            easing: EasingType::default(),
        }
    }
}

impl LineStyle {
    pub fn selected_width(&self) -> f32 {
        self.selected_width.unwrap_or(self.width)
    }

    pub fn selected_height(&self) -> f32 {
        self.selected_height.unwrap_or(self.height)
    }

    /// Width of one layout slot: the wider of track and highlight
    pub fn slot_width(&self) -> f32 {
        self.width.max(self.selected_width())
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_selected_width(mut self, width: f32) -> Self {
        self.selected_width = Some(width);
        self
    }

    pub fn with_selected_height(mut self, height: f32) -> Self {
        self.selected_height = Some(height);
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_colors(mut self, color: Rgba, selected_color: Rgba) -> Self {
        self.color = color;
        self.selected_color = selected_color;
        self
    }

    pub fn with_follow_scroll(mut self, enable: bool) -> Self {
        self.follow_scroll = enable;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_placement(mut self, rules: &[PlacementRule]) -> Self {
        self.placement = rules.to_vec();
        self
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }
}

/// Style of the point indicator: one circle per page plus a sliding highlight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Highlight radius (defaults to `radius`)
    #[serde(default)]
    pub selected_radius: Option<f32>,
    /// Gap between adjacent circles. Unset means `radius`, fixed once the
    /// indicator is built so later radius changes keep the gap.
    #[serde(default)]
    pub spacing: Option<f32>,
    #[serde(default = "default_fill_color")]
    pub color: Rgba,
    #[serde(default = "default_selected_color")]
    pub selected_color: Rgba,
    /// Ring width drawn in `stroke_color`; 0 disables the ring
    #[serde(default)]
    pub stroke: f32,
    #[serde(default)]
    pub selected_stroke: f32,
    /// Ring color (defaults to `color`)
    #[serde(default)]
    pub stroke_color: Option<Rgba>,
    /// Highlight ring color (defaults to `selected_color`)
    #[serde(default)]
    pub selected_stroke_color: Option<Rgba>,
    #[serde(default = "default_true")]
    pub follow_scroll: bool,
    /// Report taps on circles to the position click listener
    #[serde(default)]
    pub click_enable: bool,
    #[serde(default = "default_placement_rules")]
    pub placement: Vec<PlacementRule>,
    #[serde(default)]
    pub easing: EasingType,
    #[serde(default)]
    pub padding: Insets,
    #[serde(default)]
    pub margins: Margins,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            selected_radius: None,
            spacing: None,
            color: default_fill_color(),
            selected_color: default_selected_color(),
            stroke: 0.0,
            selected_stroke: 0.0,
            stroke_color: None,
            selected_stroke_color: None,
            follow_scroll: default_true(),
            click_enable: false,
            padding: Insets::default(),
            margins: Margins::default(),
            placement: default_placement_rules(),
            easing: EasingType::default(),
        }
    }
}

impl PointStyle {
    pub fn selected_radius(&self) -> f32 {
        self.selected_radius.unwrap_or(self.radius)
    }

    pub fn spacing(&self) -> f32 {
        self.spacing.unwrap_or(self.radius)
    }

    /// Pin an unset spacing to the current radius
    pub fn resolved(mut self) -> Self {
        self.spacing.get_or_insert(self.radius);
        self
    }

    pub fn stroke_color(&self) -> Rgba {
        self.stroke_color.unwrap_or(self.color)
    }

    pub fn selected_stroke_color(&self) -> Rgba {
        self.selected_stroke_color.unwrap_or(self.selected_color)
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_selected_radius(mut self, radius: f32) -> Self {
        self.selected_radius = Some(radius);
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn with_colors(mut self, color: Rgba, selected_color: Rgba) -> Self {
        self.color = color;
        self.selected_color = selected_color;
        self
    }

    pub fn with_stroke(mut self, width: f32, color: Rgba) -> Self {
        self.stroke = width;
        self.stroke_color = Some(color);
        self
    }

    pub fn with_selected_stroke(mut self, width: f32, color: Rgba) -> Self {
        self.selected_stroke = width;
        self.selected_stroke_color = Some(color);
        self
    }

    pub fn with_follow_scroll(mut self, enable: bool) -> Self {
        self.follow_scroll = enable;
        self
    }

    pub fn with_click_enable(mut self, enable: bool) -> Self {
        self.click_enable = enable;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_placement(mut self, rules: &[PlacementRule]) -> Self {
        self.placement = rules.to_vec();
        self
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }
}

/// Which indicator variant to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Line,
    #[default]
    Point,
}

impl IndicatorKind {
    pub fn toggled(self) -> Self {
        match self {
            IndicatorKind::Line => IndicatorKind::Point,
            IndicatorKind::Point => IndicatorKind::Line,
        }
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndicatorKind::Line => f.write_str("line"),
            IndicatorKind::Point => f.write_str("point"),
        }
    }
}

/// Settings for the terminal carousel demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub style: IndicatorKind,
    /// Number of banner pages
    #[serde(default = "default_pages")]
    pub pages: usize,
    /// Page transition duration in milliseconds (0 = jump)
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Easing of the pager's own page transition
    #[serde(default = "default_transition_easing")]
    pub transition_easing: EasingType,
    /// Advance to the next page every N seconds (0 = disabled)
    #[serde(default)]
    pub auto_advance_secs: u64,
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Indicator units per terminal sub-pixel
    #[serde(default = "default_scale")]
    pub scale: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            style: IndicatorKind::default(),
            pages: default_pages(),
            transition_ms: default_transition_ms(),
            transition_easing: default_transition_easing(),
            auto_advance_secs: 0,
            tick_rate_ms: default_tick_rate(),
            scale: default_scale(),
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "default", "nord", "dracula")
    #[serde(default = "default_theme_name")]
    pub name: String,
    /// Optional color overrides
    #[serde(default)]
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Screen background
    pub background: Option<String>,
    /// Primary text
    pub foreground: Option<String>,
    /// Banner page background
    pub banner: Option<String>,
    /// Status bar background
    pub status: Option<String>,
    /// Accent color
    pub accent: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_line_width() -> f32 {
    90.0
}

fn default_line_height() -> f32 {
    20.0
}

fn default_corner_radius() -> f32 {
    10.0
}

fn default_radius() -> f32 {
    10.0
}

fn default_track_color() -> Rgba {
    Rgba::GRAY
}

fn default_fill_color() -> Rgba {
    Rgba::TRANSPARENT
}

fn default_selected_color() -> Rgba {
    Rgba::RED
}

fn default_pages() -> usize {
    5
}

fn default_transition_ms() -> u64 {
    300
}

fn default_transition_easing() -> EasingType {
    EasingType::Cubic
}

fn default_tick_rate() -> u64 {
    16
}

fn default_scale() -> f32 {
    5.0
}

fn default_theme_name() -> String {
    "default".to_string()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagedot/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagedot")
            .join("config.toml")
    }

    /// Log file used while the terminal demo owns the screen
    pub fn log_path() -> PathBuf {
        Self::config_path().with_file_name("pagedot.log")
    }
}
