use serde::{Deserialize, Serialize};

use crate::foundation::core::{PxPoint, PxSize};
use crate::foundation::math::floor_div2;

/// Gap kept between an anchored overlay and the canvas edge.
pub const DEFAULT_MARGIN: u32 = 10;

/// One of the nine named anchor points of a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    /// `top-left`
    TopLeft,
    /// `top-center`
    TopCenter,
    /// `top-right`
    TopRight,
    /// `middle-left`
    MiddleLeft,
    /// `middle-center` (also `center`)
    MiddleCenter,
    /// `middle-right`
    MiddleRight,
    /// `bottom-left`
    BottomLeft,
    /// `bottom-center`
    BottomCenter,
    /// `bottom-right`
    BottomRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Horizontal {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Vertical {
    Top,
    Middle,
    Bottom,
}

impl Position {
    /// Every anchor, row by row from the top-left.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::MiddleCenter,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Kebab-case name used in campaign files.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::MiddleLeft => "middle-left",
            Position::MiddleCenter => "middle-center",
            Position::MiddleRight => "middle-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    fn axes(self) -> (Horizontal, Vertical) {
        use Horizontal::*;
        use Vertical::*;
        match self {
            Position::TopLeft => (Left, Top),
            Position::TopCenter => (Center, Top),
            Position::TopRight => (Right, Top),
            Position::MiddleLeft => (Left, Middle),
            Position::MiddleCenter => (Center, Middle),
            Position::MiddleRight => (Right, Middle),
            Position::BottomLeft => (Left, Bottom),
            Position::BottomCenter => (Center, Bottom),
            Position::BottomRight => (Right, Bottom),
        }
    }

    /// Top-left pixel at which an `overlay`-sized box sits for this anchor on `canvas`.
    ///
    /// Centered axes use floor division, so an overlay larger than the canvas gets a negative
    /// offset rather than being shifted back on-canvas.
    pub fn anchor(self, canvas: PxSize, overlay: PxSize, margin: u32) -> PxPoint {
        let (h, v) = self.axes();
        let free_w = i64::from(canvas.width) - i64::from(overlay.width);
        let free_h = i64::from(canvas.height) - i64::from(overlay.height);
        let m = i64::from(margin);

        let x = match h {
            Horizontal::Left => m,
            Horizontal::Center => floor_div2(free_w),
            Horizontal::Right => free_w - m,
        };
        let y = match v {
            Vertical::Top => m,
            Vertical::Middle => floor_div2(free_h),
            Vertical::Bottom => free_h - m,
        };
        PxPoint::new(clamp_i32(x), clamp_i32(y))
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        if key == "center" {
            return Ok(Position::MiddleCenter);
        }
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| {
                format!(
                    "unknown position \"{s}\" (expected one of: {}, center)",
                    Position::ALL.map(Position::as_str).join(", ")
                )
            })
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Where an overlay goes: a named anchor, or an absolute pixel offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Placement {
    /// Anchored to the canvas, keeping the margin.
    Anchor(Position),
    /// Top-left corner at an absolute offset.
    Fixed(PxPoint),
}

impl Placement {
    /// Stacked layout: call to action.
    pub const STACK_CTA: Placement = Placement::Fixed(PxPoint::new(50, 50));
    /// Stacked layout: description.
    pub const STACK_DESCRIPTION: Placement = Placement::Fixed(PxPoint::new(50, 150));
    /// Stacked layout: logo.
    pub const STACK_LOGO: Placement = Placement::Fixed(PxPoint::new(50, 250));

    /// Top-left pixel of an `overlay`-sized box on `canvas`.
    pub fn resolve(self, canvas: PxSize, overlay: PxSize, margin: u32) -> PxPoint {
        match self {
            Placement::Anchor(p) => p.anchor(canvas, overlay, margin),
            Placement::Fixed(pt) => pt,
        }
    }

    /// The named anchor, if any.
    pub fn anchor(self) -> Option<Position> {
        match self {
            Placement::Anchor(p) => Some(p),
            Placement::Fixed(_) => None,
        }
    }

    /// Short label used in plan listings and output metadata.
    pub fn label(self) -> String {
        match self {
            Placement::Anchor(p) => p.as_str().to_string(),
            Placement::Fixed(pt) => format!("@{},{}", pt.x, pt.y),
        }
    }
}

impl From<Position> for Placement {
    fn from(p: Position) -> Self {
        Placement::Anchor(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
