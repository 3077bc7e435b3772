//! adcraft generates advertising creatives in batches.
//!
//! A [`Campaign`] lists base images, an optional logo, CTA and description copy and the option
//! sets to vary (positions, font sizes, palettes, ad sizes). The pipeline is:
//!
//! - Load and validate a [`Campaign`]
//! - Expand it into [`CreativeJob`]s with [`plan_campaign`]
//! - Render the jobs with a [`BatchRunner`] into a [`CreativeSink`]
//!
//! Results can also be exported as base64 download links, a preview gallery, or an interactive
//! HTML editor page where overlays stay draggable before the final raster is saved.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub mod batch;
pub(crate) mod campaign;
/// Ad size presets grouped by channel.
pub mod catalog;
pub(crate) mod export;
pub(crate) mod layout;
pub mod plan;
pub(crate) mod render;
pub(crate) mod text;

pub use crate::foundation::core::{PxPoint, PxRect, PxSize};
pub use crate::foundation::error::{AdError, AdResult};

pub use crate::assets::color::Color;
pub use crate::assets::decode::{SourceImage, decode_image, encode_png};
pub use crate::assets::font::{DEFAULT_FONT_FILE, FontResolver, LoadedFont};
pub use crate::assets::store::{PreparedCampaign, PreparedLogo, RenderSettings};
pub use crate::batch::{BatchOpts, BatchRunner, BatchStats};
pub use crate::campaign::Campaign;
pub use crate::campaign::model::{
    BoxShape, CampaignDef, CopyDef, FontSizing, LogoDef, LogoSize, Padding, Pairing, Palette,
    TextRoleDef,
};
pub use crate::catalog::{AdSize, SizeRef};
pub use crate::export::data_uri::{data_uri_png, download_link};
pub use crate::export::editor::{EditorItem, render_editor_html};
pub use crate::export::gallery::render_gallery_html;
pub use crate::export::html::escape_html;
pub use crate::export::sink::{CreativeSink, DirSink, GALLERY_FILE, InMemorySink};
pub use crate::layout::position::{DEFAULT_MARGIN, Placement, Position};
pub use crate::layout::resize::{ResizeMode, resize_image};
pub use crate::plan::{CreativeJob, RoleSizing, TextSlot, plan_campaign};
pub use crate::render::composite::composite_over;
pub use crate::render::overlay::{
    Creative, CreativeLayers, CreativeRenderer, LogoBox, OverlayGeometry, TextBox,
    logo_dimensions,
};
pub use crate::text::fit::{
    FitBounds, FitLimits, FitOutcome, TextExtent, TextMeasure, fit_font_size,
};
