use crate::foundation::error::{AdError, AdResult};

/// Integer pixel dimensions of a canvas or overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PxSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PxSize {
    /// Create a size with both axes non-zero.
    pub fn new(width: u32, height: u32) -> AdResult<Self> {
        if width == 0 || height == 0 {
            return Err(AdError::validation(format!(
                "size {width}x{height} must be non-zero on both axes"
            )));
        }
        Ok(Self { width, height })
    }

    /// Grow a fractional extent to whole pixels (never below 1x1).
    pub fn ceil_from(width: f32, height: f32) -> Self {
        fn ceil_px(v: f32) -> u32 {
            if !v.is_finite() || v <= 1.0 {
                1
            } else {
                v.ceil() as u32
            }
        }
        Self {
            width: ceil_px(width),
            height: ceil_px(height),
        }
    }
}

impl std::fmt::Display for PxSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left pixel coordinate. Negative values place an overlay partly off-canvas.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PxPoint {
    /// Horizontal offset from the canvas left edge.
    pub x: i32,
    /// Vertical offset from the canvas top edge.
    pub y: i32,
}

impl PxPoint {
    /// Create a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift the point, saturating at the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PxRect {
    /// Top-left corner.
    pub origin: PxPoint,
    /// Extent from the origin.
    pub size: PxSize,
}

impl PxRect {
    /// Create a rectangle from its origin and size.
    pub fn new(origin: PxPoint, size: PxSize) -> Self {
        Self { origin, size }
    }

    /// Exclusive right edge.
    pub fn right(self) -> i64 {
        i64::from(self.origin.x) + i64::from(self.size.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> i64 {
        i64::from(self.origin.y) + i64::from(self.size.height)
    }

    /// Return `true` when the two rectangles share at least one pixel.
    pub fn intersects(self, other: PxRect) -> bool {
        i64::from(self.origin.x) < other.right()
            && i64::from(other.origin.x) < self.right()
            && i64::from(self.origin.y) < other.bottom()
            && i64::from(other.origin.y) < self.bottom()
    }

    /// The same rectangle in kurbo coordinates.
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.origin.x),
            f64::from(self.origin.y),
            self.right() as f64,
            self.bottom() as f64,
        )
    }
}
