use image::RgbaImage;
use image::imageops::{self, FilterType};
use serde::{Deserialize, Serialize};

use crate::foundation::core::PxSize;

/// How a base image is brought to an ad size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMode {
    /// Resize to exactly the target dimensions; aspect ratio is not kept.
    #[default]
    Exact,
    /// Thumbnail: shrink (never enlarge) keeping aspect ratio so the image fits in the target.
    Fit,
}

/// Output dimensions for `src` under `mode`.
pub fn target_dimensions(src: PxSize, target: PxSize, mode: ResizeMode) -> PxSize {
    match mode {
        ResizeMode::Exact => target,
        ResizeMode::Fit => {
            if src.width <= target.width && src.height <= target.height {
                return src;
            }
            let sx = f64::from(target.width) / f64::from(src.width);
            let sy = f64::from(target.height) / f64::from(src.height);
            let s = sx.min(sy);
            let w = ((f64::from(src.width) * s).round() as u32).clamp(1, target.width);
            let h = ((f64::from(src.height) * s).round() as u32).clamp(1, target.height);
            PxSize {
                width: w,
                height: h,
            }
        }
    }
}

/// Resize `src` for `target` using a Lanczos3 filter.
pub fn resize_image(src: &RgbaImage, target: PxSize, mode: ResizeMode) -> RgbaImage {
    let src_size = PxSize {
        width: src.width(),
        height: src.height(),
    };
    let out = target_dimensions(src_size, target, mode);
    if out == src_size {
        return src.clone();
    }
    imageops::resize(src, out.width, out.height, FilterType::Lanczos3)
}
