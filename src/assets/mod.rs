pub(crate) mod color;
pub(crate) mod decode;
pub(crate) mod font;
pub(crate) mod store;

use std::path::{Path, PathBuf};

use crate::foundation::error::{AdError, AdResult};

/// Normalize and validate a campaign-relative asset path.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub(crate) fn normalize_rel_path(source: &str) -> AdResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') || s.get(1..2) == Some(":") {
        return Err(AdError::validation(format!(
            "asset path '{source}' must be relative"
        )));
    }
    if s.is_empty() {
        return Err(AdError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(AdError::validation(format!(
                "asset path '{source}' must not contain '..'"
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(AdError::validation(format!(
            "asset path '{source}' must contain a file name"
        )));
    }

    Ok(out.join("/"))
}

/// Resolve a relative asset path against the campaign root.
pub(crate) fn resolve_rel_path(root: &Path, source: &str) -> AdResult<PathBuf> {
    let norm = normalize_rel_path(source)?;
    Ok(root.join(Path::new(&norm)))
}

pub(crate) fn read_bytes(root: &Path, source: &str) -> AdResult<Vec<u8>> {
    let p = resolve_rel_path(root, source)?;
    std::fs::read(&p)
        .map_err(|e| AdError::asset(format!("failed to read asset '{}': {e}", p.display())))
}
