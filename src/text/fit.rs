use crate::foundation::core::PxSize;
use crate::foundation::error::{AdError, AdResult};

/// Laid-out extent of a single line of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Advance width of the line.
    pub width: f32,
    /// Line height.
    pub height: f32,
}

impl TextExtent {
    /// `true` when both axes are within `bounds`.
    pub fn fits_in(self, bounds: FitBounds) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }
}

/// Anything that can report the extent of `text` at a given font size.
pub trait TextMeasure {
    /// Extent of `text` laid out on one line at `size_px`.
    fn measure(&mut self, text: &str, size_px: f32) -> AdResult<TextExtent>;
}

/// Box the text has to fit in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitBounds {
    /// Maximum width in pixels.
    pub width: f32,
    /// Maximum height in pixels.
    pub height: f32,
}

impl FitBounds {
    /// Bounds expressed as percentages (1..=100) of the canvas; never smaller than 1x1 px.
    pub fn fraction_of(canvas: PxSize, width_pct: u8, height_pct: u8) -> AdResult<Self> {
        for (name, pct) in [("width", width_pct), ("height", height_pct)] {
            if !(1..=100).contains(&pct) {
                return Err(AdError::validation(format!(
                    "fit {name} percentage must be in 1..=100, got {pct}"
                )));
            }
        }
        Ok(Self {
            width: (canvas.width as f32 * f32::from(width_pct) / 100.0).max(1.0),
            height: (canvas.height as f32 * f32::from(height_pct) / 100.0).max(1.0),
        })
    }
}

/// Inclusive font size range scanned by [`fit_font_size`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FitLimits {
    /// Smallest size tried; also the fallback when nothing fits.
    pub min: u32,
    /// Largest size tried.
    pub max: u32,
}

impl Default for FitLimits {
    fn default() -> Self {
        Self { min: 1, max: 400 }
    }
}

/// Result of [`fit_font_size`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOutcome {
    /// Chosen font size.
    pub size_px: u32,
    /// Extent of the text at `size_px`.
    pub extent: TextExtent,
    /// Set when even `limits.min` overflowed and the minimum was used anyway.
    pub clamped: bool,
}

/// Grow the font size one pixel at a time until the text overflows `bounds`, and return the
/// last size that fit.
pub fn fit_font_size(
    measure: &mut dyn TextMeasure,
    text: &str,
    bounds: FitBounds,
    limits: FitLimits,
) -> AdResult<FitOutcome> {
    if limits.min == 0 || limits.min > limits.max {
        return Err(AdError::validation(format!(
            "invalid font size limits {}..={}",
            limits.min, limits.max
        )));
    }
    if text.is_empty() {
        return Ok(FitOutcome {
            size_px: limits.min,
            extent: TextExtent::default(),
            clamped: false,
        });
    }

    let mut best: Option<(u32, TextExtent)> = None;
    for size in limits.min..=limits.max {
        let extent = measure.measure(text, size as f32)?;
        if !extent.fits_in(bounds) {
            break;
        }
        best = Some((size, extent));
    }

    match best {
        Some((size_px, extent)) => Ok(FitOutcome {
            size_px,
            extent,
            clamped: false,
        }),
        None => {
            tracing::warn!(
                text,
                bounds_w = bounds.width,
                bounds_h = bounds.height,
                "text does not fit even at the minimum font size"
            );
            let extent = measure.measure(text, limits.min as f32)?;
            Ok(FitOutcome {
                size_px: limits.min,
                extent,
                clamped: true,
            })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
