use crate::assets::normalize_rel_path;
use crate::campaign::model::{CampaignDef, FontSizing, LogoSize, MAX_FONT_SIZE, Pairing, TextRoleDef};
use crate::catalog::MAX_EDGE;
use crate::foundation::error::{AdError, AdResult};

/// Problems found so far, each prefixed with its JSON path (`$.cta.placements`).
#[derive(Debug, Default)]
struct Issues(Vec<String>);

impl Issues {
    fn at(&mut self, path: impl AsRef<str>, message: impl std::fmt::Display) {
        self.0.push(format!("$.{}: {message}", path.as_ref()));
    }

    fn into_result(self) -> AdResult<()> {
        if self.0.is_empty() {
            return Ok(());
        }
        Err(AdError::validation(format!(
            "campaign is invalid:\n{}",
            self.0.join("\n")
        )))
    }
}

/// Check every option set of `def` and report all problems in one validation error.
pub(crate) fn validate_campaign(def: &CampaignDef) -> AdResult<()> {
    let mut issues = Issues::default();

    if def.images.is_empty() {
        issues.at("images", "at least one image is required");
    }
    for (i, src) in def.images.iter().enumerate() {
        if let Err(e) = normalize_rel_path(src) {
            issues.at(format!("images[{i}]"), e);
        }
    }

    if def.copy.ctas.is_empty() {
        issues.at(
            "copy.ctas",
            "at least one call to action is required (it may be an empty string)",
        );
    }
    if def.copy.pairing == Pairing::Zip
        && !def.copy.descriptions.is_empty()
        && def.copy.descriptions.len() != def.copy.ctas.len()
    {
        issues.at(
            "copy.descriptions",
            format!(
                "zip pairing needs as many descriptions as ctas ({} vs {})",
                def.copy.descriptions.len(),
                def.copy.ctas.len()
            ),
        );
    }

    validate_role(&def.cta, "cta", &mut issues);
    validate_role(&def.description, "description", &mut issues);

    if def.sizes.is_empty() {
        issues.at("sizes", "at least one size is required");
    }
    for (i, size) in def.sizes.iter().enumerate() {
        if let Err(e) = size.resolve() {
            issues.at(format!("sizes[{i}]"), e);
        }
    }

    // Offsets are later added to i32 pixel coordinates.
    if def.margin > MAX_EDGE {
        issues.at("margin", format!("margin must be within 0..={MAX_EDGE}"));
    }
    if def.padding.x > MAX_EDGE {
        issues.at("padding.x", format!("padding must be within 0..={MAX_EDGE}"));
    }
    if def.padding.y > MAX_EDGE {
        issues.at("padding.y", format!("padding must be within 0..={MAX_EDGE}"));
    }

    if let Some(font) = &def.font
        && let Err(e) = normalize_rel_path(font)
    {
        issues.at("font", e);
    }

    if let Some(logo) = &def.logo {
        if let Err(e) = normalize_rel_path(&logo.source) {
            issues.at("logo.source", e);
        }
        if logo.placements.is_empty() {
            issues.at("logo.placements", "at least one placement is required");
        }
        if !logo.opacity.is_finite() || !(0.0..=1.0).contains(&logo.opacity) {
            issues.at("logo.opacity", "opacity must be within 0..=1");
        }
        match logo.size {
            LogoSize::Native => {}
            LogoSize::Fixed { width, height } => {
                if width == 0 || height == 0 || width > MAX_EDGE || height > MAX_EDGE {
                    issues.at(
                        "logo.size",
                        format!("fixed logo size must be within 1..={MAX_EDGE}"),
                    );
                }
            }
            LogoSize::Fraction {
                width_pct,
                height_pct,
            } => {
                if !pct_ok(width_pct) || !pct_ok(height_pct) {
                    issues.at("logo.size", "logo percentages must be within 1..=100");
                }
            }
        }
    }

    issues.into_result()
}

fn validate_role(role: &TextRoleDef, name: &str, issues: &mut Issues) {
    if role.placements.is_empty() {
        issues.at(
            format!("{name}.placements"),
            "at least one placement is required",
        );
    }
    if role.palettes.is_empty() {
        issues.at(format!("{name}.palettes"), "at least one palette is required");
    }
    match &role.sizing {
        FontSizing::Fixed { sizes } => {
            if sizes.is_empty() {
                issues.at(
                    format!("{name}.sizing.sizes"),
                    "at least one font size is required",
                );
            }
            for (i, s) in sizes.iter().enumerate() {
                if !(1..=MAX_FONT_SIZE).contains(s) {
                    issues.at(
                        format!("{name}.sizing.sizes[{i}]"),
                        format!("font size must be within 1..={MAX_FONT_SIZE}"),
                    );
                }
            }
        }
        FontSizing::Fit {
            width_pct,
            height_pct,
        } => {
            if !pct_ok(*width_pct) || !pct_ok(*height_pct) {
                issues.at(
                    format!("{name}.sizing"),
                    "fit percentages must be within 1..=100",
                );
            }
        }
    }
}

fn pct_ok(pct: u8) -> bool {
    (1..=100).contains(&pct)
}
