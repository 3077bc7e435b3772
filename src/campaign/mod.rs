pub(crate) mod model;
pub(crate) mod validate;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::campaign::model::CampaignDef;
use crate::campaign::validate::validate_campaign;
use crate::foundation::error::{AdError, AdResult};

/// A campaign document plus the directory its asset paths are relative to.
#[derive(Debug, Clone)]
pub struct Campaign {
    def: CampaignDef,
    root: PathBuf,
}

impl Campaign {
    /// Parse a campaign from a JSON reader. Assets resolve against the current directory.
    pub fn from_reader<R: std::io::Read>(r: R) -> AdResult<Self> {
        let def: CampaignDef = serde_json::from_reader(r)
            .map_err(|e| AdError::validation(format!("parse campaign JSON: {e}")))?;
        Ok(Self::from_def(def, "."))
    }

    /// Parse a campaign from a JSON file; assets resolve against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> AdResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AdError::validation(format!("open campaign JSON '{}': {e}", path.display()))
        })?;
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        Ok(Self::from_reader(BufReader::new(f))?.with_root(root))
    }

    /// Wrap an already parsed definition.
    pub fn from_def(def: CampaignDef, root: impl Into<PathBuf>) -> Self {
        Self {
            def,
            root: root.into(),
        }
    }

    /// Replace the asset root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Check option sets and paths; all problems are reported in one error.
    pub fn validate(&self) -> AdResult<()> {
        validate_campaign(&self.def)
    }

    /// The parsed document.
    pub fn def(&self) -> &CampaignDef {
        &self.def
    }

    /// Directory asset paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether any CTA or description has visible text (and so needs a font).
    pub fn needs_font(&self) -> bool {
        let copy = &self.def.copy;
        copy.ctas
            .iter()
            .chain(copy.descriptions.iter())
            .any(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/campaign/campaign.rs"]
mod tests;
