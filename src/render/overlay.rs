use image::RgbaImage;
use image::imageops::{self, FilterType};
use kurbo::Shape;

use crate::assets::store::{PreparedCampaign, PreparedLogo, RenderSettings};
use crate::campaign::model::{BoxShape, LogoSize, Palette};
use crate::catalog::AdSize;
use crate::foundation::core::{PxPoint, PxRect, PxSize};
use crate::foundation::error::{AdError, AdResult};
use crate::foundation::math::premultiply_rgba8_in_place;
use crate::layout::resize::resize_image;
use crate::plan::{CreativeJob, RoleSizing, TextSlot};
use crate::render::composite::PremulCanvas;
use crate::text::fit::{FitBounds, FitLimits, fit_font_size};
use crate::text::layout::{TextBrushRgba8, TextLayoutEngine};

/// Where a text overlay ended up and how it was styled.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBox {
    /// Text as drawn.
    pub text: String,
    /// Box including padding; the text starts at `rect.origin + padding`.
    pub rect: PxRect,
    /// Font size in pixels.
    pub font_size: u32,
    /// Text and box colors.
    pub palette: Palette,
    /// The text did not fit its bounds even at the minimum size.
    pub clamped: bool,
}

/// Where the logo ended up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoBox {
    /// Logo bounds at its drawn size.
    pub rect: PxRect,
    /// Opacity in `0..=1`.
    pub opacity: f32,
}

/// Resolved layout of one creative.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayGeometry {
    /// Size of the resized base image.
    pub canvas: PxSize,
    /// Text box outline.
    pub shape: BoxShape,
    /// Horizontal and vertical text padding.
    pub padding: (u32, u32),
    /// CTA box; `None` for blank text.
    pub cta: Option<TextBox>,
    /// Description box; `None` for blank text.
    pub description: Option<TextBox>,
    /// Logo box; `None` without a logo.
    pub logo: Option<LogoBox>,
}

impl OverlayGeometry {
    /// Text boxes in draw order (CTA first).
    pub fn text_boxes(&self) -> impl Iterator<Item = &TextBox> {
        self.cta.iter().chain(self.description.iter())
    }
}

/// A rendered creative in straight-alpha RGBA8.
#[derive(Clone, Debug)]
pub struct Creative {
    /// Position in the plan.
    pub index: usize,
    /// Output file name.
    pub file_name: String,
    /// Requested ad size.
    pub size: AdSize,
    /// Final pixels.
    pub image: RgbaImage,
    /// Layout used to draw `image`.
    pub geometry: OverlayGeometry,
}

/// Undrawn pieces of a creative: the resized base, the sized logo and the geometry.
///
/// The browser editor starts from these instead of the flattened raster.
#[derive(Clone, Debug)]
pub struct CreativeLayers {
    /// Resized base image with nothing drawn on it.
    pub base: RgbaImage,
    /// Logo at its drawn size.
    pub logo: Option<RgbaImage>,
    /// Layout the overlays would be drawn with.
    pub geometry: OverlayGeometry,
}

struct LaidOutText {
    layout: parley::Layout<TextBrushRgba8>,
    text_origin: PxPoint,
}

/// Renders jobs of one prepared campaign. Holds the text engine, so keep one per thread.
pub struct CreativeRenderer {
    engine: Option<TextLayoutEngine>,
}

impl CreativeRenderer {
    /// Build the text engine when the campaign has a font.
    pub fn new(prepared: &PreparedCampaign) -> AdResult<Self> {
        let engine = match &prepared.font {
            Some(font) => {
                let engine = TextLayoutEngine::new(font)?;
                tracing::debug!(family = engine.family_name(), "text engine ready");
                Some(engine)
            }
            None => None,
        };
        Ok(Self { engine })
    }

    /// Resize, lay out and composite one job.
    #[tracing::instrument(skip(self, job, prepared), fields(file = %job.file_name))]
    pub fn render(&mut self, job: &CreativeJob, prepared: &PreparedCampaign) -> AdResult<Creative> {
        let (layers, texts) = self.build_layers(job, prepared)?;

        let mut canvas = PremulCanvas::from_straight(&layers.base);
        if !texts.is_empty() {
            let layer = self.draw_text_layer(&layers.geometry, &texts)?;
            canvas.over_layer(&layer)?;
        }
        if let (Some(logo), Some(logo_box)) = (&layers.logo, layers.geometry.logo) {
            let mut premul = logo.as_raw().clone();
            premultiply_rgba8_in_place(&mut premul);
            canvas.paste(&premul, logo_box.rect.size, logo_box.rect.origin, logo_box.opacity)?;
        }
        let image = canvas.into_straight()?;

        tracing::debug!(
            canvas = %layers.geometry.canvas,
            cta_size = layers.geometry.cta.as_ref().map(|t| t.font_size),
            description_size = layers.geometry.description.as_ref().map(|t| t.font_size),
            "rendered creative"
        );

        Ok(Creative {
            index: job.index,
            file_name: job.file_name.clone(),
            size: job.size.clone(),
            image,
            geometry: layers.geometry,
        })
    }

    /// Everything `render` computes, without flattening.
    pub fn layers(&mut self, job: &CreativeJob, prepared: &PreparedCampaign) -> AdResult<CreativeLayers> {
        Ok(self.build_layers(job, prepared)?.0)
    }

    fn build_layers(
        &mut self,
        job: &CreativeJob,
        prepared: &PreparedCampaign,
    ) -> AdResult<(CreativeLayers, Vec<LaidOutText>)> {
        let src = prepared.image(job.image)?;
        let settings = prepared.settings;
        let base = resize_image(&src.pixels, job.size.px(), settings.resize);
        let canvas = PxSize {
            width: base.width(),
            height: base.height(),
        };

        let mut texts = Vec::new();
        let cta = self.place_text(&job.cta, canvas, &settings, &mut texts)?;
        let description = self.place_text(&job.description, canvas, &settings, &mut texts)?;

        let (logo, logo_box) = match (&prepared.logo, job.logo) {
            (Some(l), Some(placement)) => {
                let img = sized_logo(l, canvas);
                let size = PxSize {
                    width: img.width(),
                    height: img.height(),
                };
                let origin = placement.resolve(canvas, size, settings.margin);
                (
                    Some(img),
                    Some(LogoBox {
                        rect: PxRect::new(origin, size),
                        opacity: l.opacity,
                    }),
                )
            }
            _ => (None, None),
        };

        if let (Some(a), Some(b)) = (&cta, &description)
            && a.rect.intersects(b.rect)
        {
            tracing::debug!(file = %job.file_name, "cta and description boxes overlap");
        }

        let geometry = OverlayGeometry {
            canvas,
            shape: settings.shape,
            padding: (settings.padding.x, settings.padding.y),
            cta,
            description,
            logo: logo_box,
        };
        Ok((
            CreativeLayers {
                base,
                logo,
                geometry,
            },
            texts,
        ))
    }

    fn place_text(
        &mut self,
        slot: &TextSlot,
        canvas: PxSize,
        settings: &RenderSettings,
        out: &mut Vec<LaidOutText>,
    ) -> AdResult<Option<TextBox>> {
        if !slot.is_visible() {
            return Ok(None);
        }
        let engine = self
            .engine
            .as_mut()
            .ok_or_else(|| AdError::font(format!("no font loaded to draw {:?}", slot.text)))?;

        let (font_size, clamped) = match slot.sizing {
            RoleSizing::Fixed(size) => (size, false),
            RoleSizing::Fit {
                width_pct,
                height_pct,
            } => {
                let bounds = FitBounds::fraction_of(canvas, width_pct, height_pct)?;
                let fit = fit_font_size(engine, &slot.text, bounds, FitLimits::default())?;
                (fit.size_px, fit.clamped)
            }
        };

        let layout = engine.layout_line(&slot.text, font_size as f32, slot.palette.text.into())?;
        let text_size = PxSize::ceil_from(layout.width(), layout.height());
        let pad = settings.padding;
        let overflow = || {
            AdError::render(format!(
                "text box for {:?} with padding {}x{} exceeds the pixel range",
                slot.text, pad.x, pad.y
            ))
        };
        let pad_x = i32::try_from(pad.x).map_err(|_| overflow())?;
        let pad_y = i32::try_from(pad.y).map_err(|_| overflow())?;
        let box_size = PxSize {
            width: pad
                .x
                .checked_mul(2)
                .and_then(|p| text_size.width.checked_add(p))
                .filter(|w| i32::try_from(*w).is_ok())
                .ok_or_else(overflow)?,
            height: pad
                .y
                .checked_mul(2)
                .and_then(|p| text_size.height.checked_add(p))
                .filter(|h| i32::try_from(*h).is_ok())
                .ok_or_else(overflow)?,
        };
        let origin = slot.placement.resolve(canvas, box_size, settings.margin);

        out.push(LaidOutText {
            layout,
            text_origin: origin.offset(pad_x, pad_y),
        });
        Ok(Some(TextBox {
            text: slot.text.clone(),
            rect: PxRect::new(origin, box_size),
            font_size,
            palette: slot.palette,
            clamped,
        }))
    }

    /// Rasterize boxes and glyphs into a transparent premultiplied layer the size of the canvas.
    fn draw_text_layer(
        &self,
        geometry: &OverlayGeometry,
        texts: &[LaidOutText],
    ) -> AdResult<Vec<u8>> {
        let engine = self
            .engine
            .as_ref()
            .ok_or_else(|| AdError::font("text layer requested without a font"))?;
        let width: u16 = geometry
            .canvas
            .width
            .try_into()
            .map_err(|_| AdError::render("canvas width exceeds u16"))?;
        let height: u16 = geometry
            .canvas
            .height
            .try_into()
            .map_err(|_| AdError::render("canvas height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        for (tb, laid) in geometry.text_boxes().zip(texts) {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            if let Some(bg) = tb.palette.background
                && !bg.is_transparent()
            {
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
                ctx.fill_path(&bezpath_to_cpu(&box_path(tb.rect, geometry.shape)));
            }

            ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                f64::from(laid.text_origin.x),
                f64::from(laid.text_origin.y),
            )));
            for line in laid.layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(engine.font_data())
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        Ok(pixmap.data_as_u8_slice().to_vec())
    }
}

/// Outline of a text box: a plain rectangle, or a pill whose corner radius is half its height.
pub(crate) fn box_path(rect: PxRect, shape: BoxShape) -> kurbo::BezPath {
    let r = rect.to_kurbo();
    match shape {
        BoxShape::Rectangle => r.to_path(0.1),
        BoxShape::Pill => kurbo::RoundedRect::from_rect(r, r.height() / 2.0).to_path(0.1),
    }
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let p = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(a) => out.move_to(p(a)),
            PathEl::LineTo(a) => out.line_to(p(a)),
            PathEl::QuadTo(a, b) => out.quad_to(p(a), p(b)),
            PathEl::CurveTo(a, b, c) => out.curve_to(p(a), p(b), p(c)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Pixel size the logo is drawn at on `canvas`.
pub fn logo_dimensions(native: PxSize, size: LogoSize, canvas: PxSize) -> PxSize {
    match size {
        LogoSize::Native => native,
        LogoSize::Fixed { width, height } => PxSize {
            width: width.max(1),
            height: height.max(1),
        },
        LogoSize::Fraction {
            width_pct,
            height_pct,
        } => PxSize {
            width: (canvas.width * u32::from(width_pct) / 100).max(1),
            height: (canvas.height * u32::from(height_pct) / 100).max(1),
        },
    }
}

fn sized_logo(logo: &PreparedLogo, canvas: PxSize) -> RgbaImage {
    let src = &logo.image.pixels;
    let native = PxSize {
        width: src.width(),
        height: src.height(),
    };
    let target = logo_dimensions(native, logo.size, canvas);
    if target == native {
        return src.as_ref().clone();
    }
    imageops::resize(src.as_ref(), target.width, target.height, FilterType::Lanczos3)
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
