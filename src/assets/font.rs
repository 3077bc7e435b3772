use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{AdError, AdResult};

/// Font file looked up next to the campaign when no font is configured.
pub const DEFAULT_FONT_FILE: &str = "arial.ttf";

const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Raw TrueType/OpenType bytes plus where they came from.
#[derive(Clone, Debug)]
pub struct LoadedFont {
    /// File contents.
    pub bytes: Arc<Vec<u8>>,
    /// Path the bytes were read from.
    pub origin: PathBuf,
}

/// Finds a usable font: configured path, then the default file next to the campaign, then
/// well-known system locations.
#[derive(Clone, Debug)]
pub struct FontResolver {
    root: PathBuf,
    configured: Option<String>,
    system_candidates: Vec<PathBuf>,
}

impl FontResolver {
    /// Resolver for a campaign rooted at `root`; `configured` is the campaign's `font` path.
    pub fn new(root: impl Into<PathBuf>, configured: Option<String>) -> Self {
        Self {
            root: root.into(),
            configured,
            system_candidates: SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }

    /// Replace the system search list (tests and embedders with bundled fonts).
    pub fn with_system_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.system_candidates = candidates;
        self
    }

    /// Candidate paths in lookup order.
    pub fn candidates(&self) -> AdResult<Vec<PathBuf>> {
        let mut out = Vec::with_capacity(self.system_candidates.len() + 1);
        match &self.configured {
            // An explicitly configured font must exist; no silent fallback.
            Some(rel) => out.push(super::resolve_rel_path(&self.root, rel)?),
            None => {
                out.push(self.root.join(DEFAULT_FONT_FILE));
                out.extend(self.system_candidates.iter().cloned());
            }
        }
        Ok(out)
    }

    /// Load the first candidate that exists and looks like a font.
    pub fn resolve(&self) -> AdResult<LoadedFont> {
        let candidates = self.candidates()?;
        for path in &candidates {
            if !path.is_file() {
                continue;
            }
            match load_font_file(path) {
                Ok(font) => {
                    tracing::debug!(font = %path.display(), "resolved font");
                    return Ok(font);
                }
                Err(e) => tracing::warn!(font = %path.display(), "skipping font candidate: {e}"),
            }
        }
        let tried = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(AdError::font(format!(
            "no usable font found (tried: {tried}); set \"font\" in the campaign"
        )))
    }
}

/// Read one font file, rejecting anything without a TrueType/OpenType signature.
pub fn load_font_file(path: &Path) -> AdResult<LoadedFont> {
    let bytes = std::fs::read(path)
        .map_err(|e| AdError::font(format!("failed to read font '{}': {e}", path.display())))?;
    if !looks_like_font(&bytes) {
        return Err(AdError::font(format!(
            "'{}' is not a TrueType/OpenType font",
            path.display()
        )));
    }
    Ok(LoadedFont {
        bytes: Arc::new(bytes),
        origin: path.to_path_buf(),
    })
}

fn looks_like_font(bytes: &[u8]) -> bool {
    matches!(
        bytes.get(0..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"true") | Some(b"ttcf")
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
