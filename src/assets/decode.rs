use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{AdError, AdResult};

/// A decoded input image held in straight-alpha RGBA8.
#[derive(Clone, Debug)]
pub struct SourceImage {
    /// Campaign-relative path the image was loaded from.
    pub source: String,
    /// Decoded pixels, shared between workers.
    pub pixels: Arc<RgbaImage>,
}

/// Decode encoded image bytes (PNG, JPEG, ...) into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> AdResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode a campaign-relative image.
pub(crate) fn load_image(root: &Path, source: &str) -> AdResult<SourceImage> {
    let bytes = super::read_bytes(root, source)?;
    let pixels = decode_image(&bytes)
        .map_err(|e| AdError::asset(format!("failed to decode image '{source}': {e}")))?;
    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(AdError::asset(format!("image '{source}' is empty")));
    }
    Ok(SourceImage {
        source: super::normalize_rel_path(source)?,
        pixels: Arc::new(pixels),
    })
}

/// Encode straight-alpha RGBA8 pixels as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> AdResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| AdError::export(format!("encode png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
