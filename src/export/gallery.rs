use std::fmt::Write as _;

use crate::assets::decode::encode_png;
use crate::export::data_uri::{data_uri_png, download_anchor};
use crate::export::html::{escape_html, page};
use crate::foundation::error::AdResult;
use crate::render::overlay::Creative;

/// What the gallery shows of one creative. Holds the encoded PNG instead of the pixels.
#[derive(Clone, Debug)]
pub(crate) struct GalleryEntry {
    file_name: String,
    channel: String,
    label: String,
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl GalleryEntry {
    pub(crate) fn new(creative: &Creative, png: Vec<u8>) -> Self {
        Self {
            file_name: creative.file_name.clone(),
            channel: creative.size.channel.clone(),
            label: creative.size.label(),
            width: creative.image.width(),
            height: creative.image.height(),
            png,
        }
    }
}

/// Standalone page with a preview and a download link per creative.
pub fn render_gallery_html(creatives: &[Creative]) -> AdResult<String> {
    let entries = creatives
        .iter()
        .map(|c| Ok(GalleryEntry::new(c, encode_png(&c.image)?)))
        .collect::<AdResult<Vec<_>>>()?;
    Ok(gallery_page(&entries))
}

pub(crate) fn gallery_page(entries: &[GalleryEntry]) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Creatives ({})</h1>", entries.len());
    for e in entries {
        // One encoding serves both the preview and the download.
        let uri = data_uri_png(&e.png);
        let _ = writeln!(
            body,
            "<figure class=\"creative\">\n<img src=\"{uri}\" width=\"{}\" height=\"{}\" alt=\"{}\">\n<figcaption>{} &middot; {}<br>{}</figcaption>\n</figure>",
            e.width,
            e.height,
            escape_html(&e.file_name),
            escape_html(&e.channel),
            e.label,
            download_anchor(&e.file_name, &uri),
        );
    }
    page("Creatives", "", &body)
}
