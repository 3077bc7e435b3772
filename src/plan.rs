//! Expansion of a campaign's option sets into individual creative jobs.

use serde::Serialize;

use crate::campaign::Campaign;
use crate::campaign::model::{CopyDef, FontSizing, Pairing, Palette};
use crate::catalog::AdSize;
use crate::foundation::error::AdResult;
use crate::layout::position::{Placement, Position};

/// Font size choice for one text role of one job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleSizing {
    /// Exact size in pixels.
    Fixed(u32),
    /// Fitted at render time against a fraction of the canvas.
    Fit {
        /// Percentage of the canvas width.
        width_pct: u8,
        /// Percentage of the canvas height.
        height_pct: u8,
    },
}

impl RoleSizing {
    fn variants(sizing: &FontSizing) -> Vec<RoleSizing> {
        match sizing {
            FontSizing::Fixed { sizes } => sizes.iter().map(|s| RoleSizing::Fixed(*s)).collect(),
            FontSizing::Fit {
                width_pct,
                height_pct,
            } => vec![RoleSizing::Fit {
                width_pct: *width_pct,
                height_pct: *height_pct,
            }],
        }
    }
}

/// One text overlay of a job.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextSlot {
    /// Copy to draw; may be blank.
    pub text: String,
    /// Where the padded box goes.
    pub placement: Placement,
    /// Font size rule.
    pub sizing: RoleSizing,
    /// Text and box colors.
    pub palette: Palette,
}

impl TextSlot {
    /// Blank text draws nothing.
    pub fn is_visible(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Everything needed to render one creative.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreativeJob {
    /// 0-based position in plan order.
    pub index: usize,
    /// Index into the campaign's `images`.
    pub image: usize,
    /// Output size.
    pub size: AdSize,
    /// Call to action.
    pub cta: TextSlot,
    /// Description.
    pub description: TextSlot,
    /// Logo placement; `None` when the campaign has no logo.
    pub logo: Option<Placement>,
    /// `creative_{index+1:04}_{channel}_{label}.png`.
    pub file_name: String,
}

impl CreativeJob {
    /// One-line human summary used by `adcraft plan`.
    pub fn summary(&self) -> String {
        let logo = self
            .logo
            .map(Placement::label)
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{}  image#{}  cta={:?}@{}  description={:?}@{}  logo={}",
            self.file_name,
            self.image,
            self.cta.text,
            self.cta.placement.label(),
            self.description.text,
            self.description.placement.label(),
            logo
        )
    }
}

/// CTA/description pairs in plan order.
pub fn text_pairs(copy: &CopyDef) -> Vec<(String, String)> {
    if copy.descriptions.is_empty() {
        return copy
            .ctas
            .iter()
            .map(|c| (c.clone(), String::new()))
            .collect();
    }
    match copy.pairing {
        Pairing::Zip => copy
            .ctas
            .iter()
            .zip(copy.descriptions.iter())
            .map(|(c, d)| (c.clone(), d.clone()))
            .collect(),
        Pairing::Cross => copy
            .ctas
            .iter()
            .flat_map(|c| copy.descriptions.iter().map(move |d| (c.clone(), d.clone())))
            .collect(),
    }
}

/// Anchored placements of visible overlays must not share an anchor.
fn anchors_distinct(cta: Option<Position>, description: Option<Position>, logo: Option<Position>) -> bool {
    let anchors = [cta, description, logo];
    for i in 0..anchors.len() {
        for j in (i + 1)..anchors.len() {
            if let (Some(a), Some(b)) = (anchors[i], anchors[j])
                && a == b
            {
                return false;
            }
        }
    }
    true
}

/// Output file name for a job.
pub fn file_name(index: usize, size: &AdSize) -> String {
    let channel: String = size
        .channel
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("creative_{:04}_{}_{}.png", index + 1, channel, size.label())
}

/// Expand a validated campaign into jobs.
#[tracing::instrument(skip(campaign), fields(images = campaign.def().images.len()))]
pub fn plan_campaign(campaign: &Campaign) -> AdResult<Vec<CreativeJob>> {
    campaign.validate()?;
    let def = campaign.def();

    let sizes = def
        .sizes
        .iter()
        .map(|s| s.resolve())
        .collect::<AdResult<Vec<_>>>()?;
    let pairs = text_pairs(&def.copy);
    let logo_placements: Vec<Option<Placement>> = match &def.logo {
        Some(logo) => logo.placements.iter().copied().map(Some).collect(),
        None => vec![None],
    };
    let cta_sizings = RoleSizing::variants(&def.cta.sizing);
    let desc_sizings = RoleSizing::variants(&def.description.sizing);

    let mut jobs = Vec::new();
    let mut skipped = 0usize;
    for (cta_text, desc_text) in &pairs {
        let cta_visible = !cta_text.trim().is_empty();
        let desc_visible = !desc_text.trim().is_empty();
        for image in 0..def.images.len() {
            for size in &sizes {
                for cta_placement in &def.cta.placements {
                    for desc_placement in &def.description.placements {
                        for logo in &logo_placements {
                            let distinct = anchors_distinct(
                                cta_placement.anchor().filter(|_| cta_visible),
                                desc_placement.anchor().filter(|_| desc_visible),
                                logo.and_then(Placement::anchor),
                            );
                            if !distinct {
                                skipped += 1;
                                continue;
                            }
                            for cta_sizing in &cta_sizings {
                                for desc_sizing in &desc_sizings {
                                    for cta_palette in &def.cta.palettes {
                                        for desc_palette in &def.description.palettes {
                                            let index = jobs.len();
                                            jobs.push(CreativeJob {
                                                index,
                                                image,
                                                size: size.clone(),
                                                cta: TextSlot {
                                                    text: cta_text.clone(),
                                                    placement: *cta_placement,
                                                    sizing: *cta_sizing,
                                                    palette: *cta_palette,
                                                },
                                                description: TextSlot {
                                                    text: desc_text.clone(),
                                                    placement: *desc_placement,
                                                    sizing: *desc_sizing,
                                                    palette: *desc_palette,
                                                },
                                                logo: *logo,
                                                file_name: file_name(index, size),
                                            });
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    if jobs.is_empty() {
        tracing::warn!(skipped, "campaign expanded to zero creatives");
    } else {
        tracing::info!(jobs = jobs.len(), skipped, "planned campaign");
    }
    Ok(jobs)
}

#[cfg(test)]
#[path = "../tests/unit/plan.rs"]
mod tests;
