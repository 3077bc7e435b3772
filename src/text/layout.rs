use crate::assets::font::LoadedFont;
use crate::foundation::error::{AdError, AdResult};
use crate::text::fit::{TextExtent, TextMeasure};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<crate::assets::color::Color> for TextBrushRgba8 {
    fn from(c: crate::assets::color::Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Single-font Parley layout engine.
///
/// The font is registered once at construction; every layout uses its first family.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font_data: vello_cpu::peniko::FontData,
}

impl TextLayoutEngine {
    pub(crate) fn new(font: &LoadedFont) -> AdResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.to_vec()), None);
        let (family_id, faces) = families.first().ok_or_else(|| {
            AdError::font(format!(
                "no font families registered from '{}'",
                font.origin.display()
            ))
        })?;
        let family_id = *family_id;
        // Collections (.ttc) hold several faces; draw with the one layout resolves to.
        let face_index = faces
            .iter()
            .find(|f| {
                f.weight() == parley::fontique::FontWeight::NORMAL
                    && f.style() == parley::fontique::FontStyle::Normal
            })
            .or_else(|| faces.first())
            .map(|f| f.index())
            .unwrap_or(0);
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| AdError::font("registered font family has no name"))?
            .to_string();

        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.to_vec()),
            face_index,
        );
        tracing::debug!(family = %family_name, face_index, "registered font");

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font_data,
        })
    }

    pub(crate) fn family_name(&self) -> &str {
        &self.family_name
    }

    pub(crate) fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font_data
    }

    /// Shape and lay out plain text on one line (no wrapping).
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> AdResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(AdError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasure for TextLayoutEngine {
    fn measure(&mut self, text: &str, size_px: f32) -> AdResult<TextExtent> {
        let layout = self.layout_line(text, size_px, TextBrushRgba8::default())?;
        Ok(TextExtent {
            width: layout.width(),
            height: layout.height(),
        })
    }
}
