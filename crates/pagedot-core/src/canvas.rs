//! Drawing seam between indicators and whatever toolkit renders them.

use serde::Serialize;

use crate::color::Rgba;
use crate::geometry::{Point, RectF};

/// Minimal 2D fill API an indicator draws through
pub trait Canvas {
    /// Fill a rectangle with rounded corners
    fn fill_round_rect(&mut self, rect: RectF, corner_radius: f32, color: Rgba);

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);
}

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    RoundRect {
        rect: RectF,
        corner_radius: f32,
        color: Rgba,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Rgba,
    },
}

/// Canvas that records operations in draw order
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for Recorder {
    fn fill_round_rect(&mut self, rect: RectF, corner_radius: f32, color: Rgba) {
        self.ops.push(DrawOp::RoundRect { rect, corner_radius, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle { center, radius, color });
    }
}
