pub mod canvas;
pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod indicator;
pub mod line;
pub mod point;
pub mod track;

pub use canvas::{Canvas, DrawOp, Recorder};
pub use color::{parse_hex_color, Rgba};
pub use config::{AppConfig, DemoConfig, IndicatorKind, LineStyle, PointStyle};
pub use easing::{lerp, EasingType};
pub use error::{Error, Result};
pub use geometry::{Insets, Margins, MeasureSpec, Point, RectF, ShapeRow, Size};
pub use indicator::{
    Indicator, Invalidation, PlacementParams, PlacementRule, PositionClickListener, ScrollState,
    Surface, TouchAction, TouchEvent, Visibility,
};
pub use line::LineIndicator;
pub use point::PointIndicator;
