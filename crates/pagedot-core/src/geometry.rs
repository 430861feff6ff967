//! Plain geometry types shared by the indicators and their hosts.

use serde::{Deserialize, Serialize};

/// A 2D point in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned float rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Point, width: f32, height: f32) -> Self {
        Self {
            left: center.x - width / 2.0,
            top: center.y - height / 2.0,
            right: center.x + width / 2.0,
            bottom: center.y + height / 2.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Padding inside a surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub right: f32,
    #[serde(default)]
    pub bottom: f32,
}

impl Insets {
    pub const fn uniform(value: f32) -> Self {
        Self { left: value, top: value, right: value, bottom: value }
    }
}

/// Margins around a surface, relative to its parent
pub type Margins = Insets;

/// Measured surface size in whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Constraint handed to a surface by its parent during measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The parent decided the size
    Exactly(u32),
    /// The surface may be up to this size
    AtMost(u32),
    /// No constraint
    Unspecified,
}

impl MeasureSpec {
    /// Pick the final size given the size the surface wants.
    ///
    /// `AtMost` is not clamped: the surface reports its desired size and the
    /// parent decides what to do with it.
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => desired,
        }
    }
}

/// The row every shape center lies on: `origin + i * step` along x
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeRow {
    /// Center of the first shape
    pub origin: Point,
    /// Distance between adjacent centers
    pub step: f32,
}

impl ShapeRow {
    pub fn new(origin: Point, step: f32) -> Self {
        Self { origin, step }
    }

    /// Center of shape `index`
    pub fn center(&self, index: usize) -> Point {
        Point::new(self.origin.x + index as f32 * self.step, self.origin.y)
    }

    /// All `count` centers, in page order
    pub fn centers(&self, count: usize) -> Vec<Point> {
        (0..count).map(|i| self.center(i)).collect()
    }

    /// Fractional index of `x` on this row
    pub fn index_of(&self, x: f32) -> f32 {
        if self.step == 0.0 {
            0.0
        } else {
            (x - self.origin.x) / self.step
        }
    }

    /// x coordinate of a fractional index
    pub fn x_at(&self, index: f32) -> f32 {
        self.origin.x + index * self.step
    }
}
