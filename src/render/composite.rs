use image::RgbaImage;

use crate::foundation::core::{PxPoint, PxSize};
use crate::foundation::error::{AdError, AdResult};
use crate::foundation::math::{
    add_sat_u8, mul_div255_u8, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place,
};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over for one pixel, with the source scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let op = opacity_u16(opacity);
    if op == 0 || src[3] == 0 {
        return dst;
    }

    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

fn opacity_u16(opacity: f32) -> u16 {
    if !opacity.is_finite() {
        return 0;
    }
    ((opacity.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16
}

/// Working surface in premultiplied RGBA8.
#[derive(Clone, Debug)]
pub(crate) struct PremulCanvas {
    pub(crate) size: PxSize,
    pub(crate) data: Vec<u8>,
}

impl PremulCanvas {
    pub(crate) fn from_straight(img: &RgbaImage) -> Self {
        let mut data = img.as_raw().clone();
        premultiply_rgba8_in_place(&mut data);
        Self {
            size: PxSize {
                width: img.width(),
                height: img.height(),
            },
            data,
        }
    }

    /// Blend a same-sized premultiplied layer over the whole canvas.
    pub(crate) fn over_layer(&mut self, layer: &[u8]) -> AdResult<()> {
        if layer.len() != self.data.len() || !layer.len().is_multiple_of(4) {
            return Err(AdError::render(
                "over_layer expects equal-length rgba8 buffers",
            ));
        }
        for (d, s) in self.data.chunks_exact_mut(4).zip(layer.chunks_exact(4)) {
            if s[3] == 0 {
                continue;
            }
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], 1.0);
            d.copy_from_slice(&out);
        }
        Ok(())
    }

    /// Blend a premultiplied image at `at`, clipped to the canvas.
    pub(crate) fn paste(
        &mut self,
        src: &[u8],
        src_size: PxSize,
        at: PxPoint,
        opacity: f32,
    ) -> AdResult<()> {
        let expected = (src_size.width as usize)
            .saturating_mul(src_size.height as usize)
            .saturating_mul(4);
        if src.len() != expected {
            return Err(AdError::render("paste source byte len mismatch"));
        }
        if opacity_u16(opacity) == 0 {
            return Ok(());
        }

        let cw = i64::from(self.size.width);
        let ch = i64::from(self.size.height);
        let x0 = i64::from(at.x).max(0);
        let y0 = i64::from(at.y).max(0);
        let x1 = (i64::from(at.x) + i64::from(src_size.width)).min(cw);
        let y1 = (i64::from(at.y) + i64::from(src_size.height)).min(ch);
        if x0 >= x1 || y0 >= y1 {
            return Ok(());
        }

        let sw = src_size.width as usize;
        for y in y0..y1 {
            let sy = (y - i64::from(at.y)) as usize;
            for x in x0..x1 {
                let sx = (x - i64::from(at.x)) as usize;
                let si = (sy * sw + sx) * 4;
                let s = [src[si], src[si + 1], src[si + 2], src[si + 3]];
                if s[3] == 0 {
                    continue;
                }
                let di = ((y as usize) * (cw as usize) + (x as usize)) * 4;
                let d = [
                    self.data[di],
                    self.data[di + 1],
                    self.data[di + 2],
                    self.data[di + 3],
                ];
                self.data[di..di + 4].copy_from_slice(&over(d, s, opacity));
            }
        }
        Ok(())
    }

    pub(crate) fn into_straight(self) -> AdResult<RgbaImage> {
        let mut data = self.data;
        unpremultiply_rgba8_in_place(&mut data);
        RgbaImage::from_raw(self.size.width, self.size.height, data)
            .ok_or_else(|| AdError::render("canvas buffer does not match its size"))
    }
}

/// Alpha-composite `src` onto `dst` at `at` (straight alpha in and out), clipped to `dst`.
pub fn composite_over(
    dst: &mut RgbaImage,
    src: &RgbaImage,
    at: PxPoint,
    opacity: f32,
) -> AdResult<()> {
    let mut canvas = PremulCanvas::from_straight(dst);
    let mut src_premul = src.as_raw().clone();
    premultiply_rgba8_in_place(&mut src_premul);
    canvas.paste(
        &src_premul,
        PxSize {
            width: src.width(),
            height: src.height(),
        },
        at,
        opacity,
    )?;
    *dst = canvas.into_straight()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
