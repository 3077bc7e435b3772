//! Built-in ad size presets, grouped by channel.

use serde::{Deserialize, Serialize};

use crate::foundation::core::PxSize;
use crate::foundation::error::{AdError, AdResult};

/// Channel holding the standard display banner sizes.
pub const DISPLAY_CHANNEL: &str = "display";

/// Largest accepted edge for any output size.
pub const MAX_EDGE: u32 = 8192;

const PRESETS: &[(&str, &[(u32, u32)])] = &[
    (
        DISPLAY_CHANNEL,
        &[
            (468, 60),
            (728, 90),
            (970, 90),
            (320, 50),
            (250, 250),
            (200, 200),
            (300, 250),
            (336, 280),
        ],
    ),
    ("ip-targeting", &[(300, 250), (728, 90)]),
    ("mobile-footprinting", &[(300, 250), (728, 90)]),
    ("audience-select", &[(300, 250), (728, 90)]),
    ("spotify", &[(640, 640), (300, 250)]),
    ("youtube", &[(1280, 720), (300, 250)]),
];

/// One output size, tagged with the channel it was selected for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdSize {
    /// Channel name, used in output file names.
    pub channel: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl AdSize {
    /// Size within `1..=MAX_EDGE` on both axes.
    pub fn new(channel: impl Into<String>, width: u32, height: u32) -> AdResult<Self> {
        if width == 0 || height == 0 || width > MAX_EDGE || height > MAX_EDGE {
            return Err(AdError::validation(format!(
                "ad size {width}x{height} must be within 1..={MAX_EDGE} on both axes"
            )));
        }
        Ok(Self {
            channel: channel.into(),
            width,
            height,
        })
    }

    /// `"{W}x{H}"`.
    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Dimensions without the channel.
    pub fn px(&self) -> PxSize {
        PxSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// Channel names in catalog order.
pub fn channels() -> Vec<&'static str> {
    PRESETS.iter().map(|(c, _)| *c).collect()
}

/// Every preset, channel by channel.
pub fn all() -> Vec<AdSize> {
    PRESETS
        .iter()
        .flat_map(|(channel, sizes)| {
            sizes.iter().map(move |&(width, height)| AdSize {
                channel: (*channel).to_string(),
                width,
                height,
            })
        })
        .collect()
}

/// Presets of one channel, or `None` for an unknown channel.
pub fn channel_sizes(channel: &str) -> Option<Vec<AdSize>> {
    PRESETS
        .iter()
        .find(|(c, _)| *c == channel)
        .map(|(c, sizes)| {
            sizes
                .iter()
                .map(|&(width, height)| AdSize {
                    channel: (*c).to_string(),
                    width,
                    height,
                })
                .collect()
        })
}

/// Find a preset by channel and `"WxH"` label.
pub fn lookup(channel: &str, label: &str) -> Option<AdSize> {
    let (w, h) = parse_dims(label)?;
    channel_sizes(channel)?
        .into_iter()
        .find(|s| s.width == w && s.height == h)
}

/// Parse `"300x250"`, `"300 x 250"` or `"300X250"`.
pub fn parse_dims(s: &str) -> Option<(u32, u32)> {
    let lower = s.to_ascii_lowercase();
    let (w, h) = lower.split_once('x')?;
    let w = w.trim().parse().ok()?;
    let h = h.trim().parse().ok()?;
    Some((w, h))
}

/// A size as written in a campaign file.
///
/// String forms: `"spotify/640x640"` (channel preset), `"300x250"` (display preset, then any
/// channel, then a custom display-channel size). Object form: `{"channel": ..., "width": ...,
/// "height": ...}` for custom sizes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeRef {
    /// Preset or `"WxH"` string.
    Named(String),
    /// Explicit dimensions.
    Custom {
        /// Defaults to the display channel.
        #[serde(default)]
        channel: Option<String>,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

impl SizeRef {
    /// Look the reference up in the catalog, or build the custom size.
    pub fn resolve(&self) -> AdResult<AdSize> {
        match self {
            SizeRef::Named(s) => resolve_named(s),
            SizeRef::Custom {
                channel,
                width,
                height,
            } => AdSize::new(
                channel.as_deref().unwrap_or(DISPLAY_CHANNEL),
                *width,
                *height,
            ),
        }
    }
}

fn resolve_named(s: &str) -> AdResult<AdSize> {
    let s = s.trim();
    if let Some((channel, label)) = s.split_once('/') {
        let channel = channel.trim();
        if channel_sizes(channel).is_none() {
            return Err(AdError::validation(format!(
                "unknown size channel '{channel}' (known: {})",
                channels().join(", ")
            )));
        }
        return lookup(channel, label).ok_or_else(|| {
            AdError::validation(format!(
                "size '{}' is not a preset of channel '{channel}'",
                label.trim()
            ))
        });
    }

    let (w, h) = parse_dims(s).ok_or_else(|| {
        AdError::validation(format!(
            "size '{s}' must look like \"WxH\" or \"channel/WxH\""
        ))
    })?;
    if let Some(found) = all().into_iter().find(|a| a.width == w && a.height == h) {
        return Ok(found);
    }
    AdSize::new(DISPLAY_CHANNEL, w, h)
}
