use crate::assets::decode::{SourceImage, load_image};
use crate::assets::font::{FontResolver, LoadedFont};
use crate::campaign::Campaign;
use crate::campaign::model::{BoxShape, LogoSize, Padding};
use crate::foundation::error::{AdError, AdResult};
use crate::layout::resize::ResizeMode;

/// Campaign-wide knobs the renderer needs for every creative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    /// Outline of text boxes.
    pub shape: BoxShape,
    /// Distance kept from the canvas edge by anchored overlays.
    pub margin: u32,
    /// Space between text and its box edge.
    pub padding: Padding,
    /// How base images are fitted to the ad size.
    pub resize: ResizeMode,
}

/// Decoded logo plus how it is drawn.
#[derive(Clone, Debug)]
pub struct PreparedLogo {
    /// Logo pixels at native size.
    pub image: SourceImage,
    /// Target size rule.
    pub size: LogoSize,
    /// Opacity in `0..=1`.
    pub opacity: f32,
}

/// Everything a campaign references, decoded once before rendering.
#[derive(Clone, Debug)]
pub struct PreparedCampaign {
    /// Base images in campaign order.
    pub images: Vec<SourceImage>,
    /// The logo, if the campaign has one.
    pub logo: Option<PreparedLogo>,
    /// Present only when some copy is non-blank.
    pub font: Option<LoadedFont>,
    /// Campaign-wide render settings.
    pub settings: RenderSettings,
}

impl PreparedCampaign {
    /// Decode images and logo and resolve the font, failing on the first missing asset.
    #[tracing::instrument(skip(campaign), fields(root = %campaign.root().display()))]
    pub fn prepare(campaign: &Campaign) -> AdResult<Self> {
        let def = campaign.def();
        let root = campaign.root();

        let images = def
            .images
            .iter()
            .map(|src| load_image(root, src))
            .collect::<AdResult<Vec<_>>>()?;

        let logo = match &def.logo {
            Some(l) => Some(PreparedLogo {
                image: load_image(root, &l.source)?,
                size: l.size,
                opacity: l.opacity,
            }),
            None => None,
        };

        let font = if campaign.needs_font() {
            Some(FontResolver::new(root, def.font.clone()).resolve()?)
        } else {
            None
        };

        tracing::debug!(
            images = images.len(),
            logo = logo.is_some(),
            font = ?font.as_ref().map(|f| f.origin.display().to_string()),
            "prepared campaign assets"
        );

        Ok(Self {
            images,
            logo,
            font,
            settings: RenderSettings {
                shape: def.shape,
                margin: def.margin,
                padding: def.padding,
                resize: def.resize,
            },
        })
    }

    /// Base image a job refers to by index.
    pub fn image(&self, index: usize) -> AdResult<&SourceImage> {
        self.images
            .get(index)
            .ok_or_else(|| AdError::render(format!("job references missing image #{index}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
