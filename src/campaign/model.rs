use serde::{Deserialize, Serialize};

use crate::assets::color::Color;
use crate::catalog::SizeRef;
use crate::layout::position::{DEFAULT_MARGIN, Placement};
use crate::layout::resize::ResizeMode;

/// JSON-facing description of one batch of creatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CampaignDef {
    /// Base images, relative to the campaign file.
    pub images: Vec<String>,
    /// Optional logo drawn on every creative.
    #[serde(default)]
    pub logo: Option<LogoDef>,
    /// Texts to combine.
    pub copy: CopyDef,
    /// Call-to-action options.
    #[serde(default = "TextRoleDef::default_cta")]
    pub cta: TextRoleDef,
    /// Description options.
    #[serde(default = "TextRoleDef::default_description")]
    pub description: TextRoleDef,
    /// Box outline behind both text roles.
    #[serde(default)]
    pub shape: BoxShape,
    /// Output sizes.
    pub sizes: Vec<SizeRef>,
    /// How base images are fitted to each size.
    #[serde(default)]
    pub resize: ResizeMode,
    /// Font file relative to the campaign; when absent a default is searched for.
    #[serde(default)]
    pub font: Option<String>,
    /// Edge gap for anchored overlays.
    #[serde(default = "default_margin")]
    pub margin: u32,
    /// Text box padding.
    #[serde(default)]
    pub padding: Padding,
}

fn default_margin() -> u32 {
    DEFAULT_MARGIN
}

/// Call-to-action and description texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyDef {
    /// Call-to-action texts.
    pub ctas: Vec<String>,
    /// Description texts; may be empty.
    #[serde(default)]
    pub descriptions: Vec<String>,
    /// How the two lists are combined.
    #[serde(default)]
    pub pairing: Pairing,
}

/// How CTAs and descriptions are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    /// `ctas[i]` goes with `descriptions[i]`.
    #[default]
    Zip,
    /// Every CTA with every description.
    Cross,
}

/// Option sets for one text role (CTA or description).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextRoleDef {
    /// Placements to try.
    pub placements: Vec<Placement>,
    /// Font size rule.
    #[serde(default)]
    pub sizing: FontSizing,
    /// Color combinations to try.
    #[serde(default = "Palette::default_list")]
    pub palettes: Vec<Palette>,
}

impl TextRoleDef {
    /// CTA defaults: stacked at (50, 50), 20 px, white on black.
    pub fn default_cta() -> Self {
        Self {
            placements: vec![Placement::STACK_CTA],
            sizing: FontSizing::default(),
            palettes: Palette::default_list(),
        }
    }

    /// Description defaults: stacked at (50, 150), 20 px, white on black.
    pub fn default_description() -> Self {
        Self {
            placements: vec![Placement::STACK_DESCRIPTION],
            sizing: FontSizing::default(),
            palettes: Palette::default_list(),
        }
    }
}

/// Font size selection for a text role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case", deny_unknown_fields)]
pub enum FontSizing {
    /// Each listed size becomes its own variant.
    Fixed {
        /// Sizes in pixels.
        sizes: Vec<u32>,
    },
    /// Largest size whose text fits in a box of the given canvas percentages.
    Fit {
        /// Box width as a percentage of the canvas width.
        width_pct: u8,
        /// Box height as a percentage of the canvas height.
        height_pct: u8,
    },
}

impl Default for FontSizing {
    fn default() -> Self {
        FontSizing::Fixed {
            sizes: vec![DEFAULT_FONT_SIZE],
        }
    }
}

/// Font size used when a role sets none.
pub const DEFAULT_FONT_SIZE: u32 = 20;

/// Largest fixed font size accepted by validation.
pub const MAX_FONT_SIZE: u32 = 400;

/// Text and optional box colors for a text role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    /// Glyph color.
    pub text: Color,
    /// `None` draws the text without a box.
    #[serde(default)]
    pub background: Option<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::WHITE,
            background: Some(Color::BLACK),
        }
    }
}

impl Palette {
    /// The single default palette.
    pub fn default_list() -> Vec<Palette> {
        vec![Palette::default()]
    }
}

/// Shape of the box drawn behind text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxShape {
    /// Square corners.
    #[default]
    Rectangle,
    /// Rounded ends; corner radius is half the box height.
    Pill,
}

/// Space between text and the edge of its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Padding {
    /// Left and right padding.
    pub x: u32,
    /// Top and bottom padding.
    pub y: u32,
}

impl Default for Padding {
    fn default() -> Self {
        Self { x: 10, y: 5 }
    }
}

/// Logo image and how to place it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogoDef {
    /// Image path relative to the campaign.
    pub source: String,
    /// Drawn size.
    #[serde(default)]
    pub size: LogoSize,
    /// Placements to try.
    #[serde(default = "LogoDef::default_placements")]
    pub placements: Vec<Placement>,
    /// Opacity in `0..=1`.
    #[serde(default = "LogoDef::default_opacity")]
    pub opacity: f32,
}

impl LogoDef {
    fn default_placements() -> Vec<Placement> {
        vec![Placement::STACK_LOGO]
    }

    fn default_opacity() -> f32 {
        1.0
    }
}

/// How big the logo is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case", deny_unknown_fields)]
pub enum LogoSize {
    /// Logo pixels as-is.
    Native,
    /// Exact pixel dimensions.
    Fixed {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// Percentages (1..=100) of the canvas.
    Fraction {
        /// Percentage of the canvas width.
        width_pct: u8,
        /// Percentage of the canvas height.
        height_pct: u8,
    },
}

impl Default for LogoSize {
    fn default() -> Self {
        LogoSize::Fixed {
            width: 100,
            height: 100,
        }
    }
}
