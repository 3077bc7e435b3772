use std::path::{Path, PathBuf};

use crate::assets::decode::encode_png;
use crate::export::gallery::{GalleryEntry, gallery_page};
use crate::foundation::error::{AdError, AdResult};
use crate::render::overlay::Creative;

/// File name of the gallery page written by [`DirSink::with_gallery`].
pub const GALLERY_FILE: &str = "gallery.html";

/// Consumer of rendered creatives.
///
/// Ordering contract: `push` is called in plan order, once per rendered job, between `begin` and
/// `end`.
pub trait CreativeSink {
    /// Called once before any creative, with the number of jobs.
    fn begin(&mut self, total: usize) -> AdResult<()>;
    /// Called once per rendered creative.
    fn push(&mut self, creative: &Creative) -> AdResult<()>;
    /// Called after the last creative.
    fn end(&mut self) -> AdResult<()>;
}

/// Writes each creative as a PNG file under a directory.
#[derive(Debug)]
pub struct DirSink {
    dir: PathBuf,
    gallery: Option<Vec<GalleryEntry>>,
    written: Vec<PathBuf>,
}

impl DirSink {
    /// Sink writing into `dir`, created on `begin`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            gallery: None,
            written: Vec::new(),
        }
    }

    /// Also write [`GALLERY_FILE`] with previews and download links at `end`.
    pub fn with_gallery(mut self) -> Self {
        self.gallery = Some(Vec::new());
        self
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl CreativeSink for DirSink {
    fn begin(&mut self, total: usize) -> AdResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            AdError::export(format!(
                "create output directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.written.clear();
        self.written.reserve(total);
        if let Some(g) = &mut self.gallery {
            g.clear();
        }
        Ok(())
    }

    fn push(&mut self, creative: &Creative) -> AdResult<()> {
        let path = self.dir.join(&creative.file_name);
        let png = encode_png(&creative.image)?;
        std::fs::write(&path, &png)
            .map_err(|e| AdError::export(format!("write '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "wrote creative");
        self.written.push(path);
        if let Some(g) = &mut self.gallery {
            g.push(GalleryEntry::new(creative, png));
        }
        Ok(())
    }

    fn end(&mut self) -> AdResult<()> {
        if let Some(g) = &self.gallery {
            let path = self.dir.join(GALLERY_FILE);
            let html = gallery_page(g);
            std::fs::write(&path, html)
                .map_err(|e| AdError::export(format!("write '{}': {e}", path.display())))?;
            tracing::info!(path = %path.display(), creatives = g.len(), "wrote gallery");
        }
        Ok(())
    }
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    expected: Option<usize>,
    /// Creatives in plan order.
    pub creatives: Vec<Creative>,
    finished: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total announced by `begin`.
    pub fn expected(&self) -> Option<usize> {
        self.expected
    }

    /// `true` once `end` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl CreativeSink for InMemorySink {
    fn begin(&mut self, total: usize) -> AdResult<()> {
        self.expected = Some(total);
        self.creatives.clear();
        self.finished = false;
        Ok(())
    }

    fn push(&mut self, creative: &Creative) -> AdResult<()> {
        self.creatives.push(creative.clone());
        Ok(())
    }

    fn end(&mut self) -> AdResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
