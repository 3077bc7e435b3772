use base64::{Engine as _, engine::general_purpose};

use crate::export::html::escape_html;

/// Embed PNG bytes as a `data:` URI.
pub fn data_uri_png(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(png)
    )
}

/// Anchor element that downloads `png` under `file_name` when clicked.
pub fn download_link(file_name: &str, png: &[u8]) -> String {
    download_anchor(file_name, &data_uri_png(png))
}

/// [`download_link`] for an already encoded data URI.
pub(crate) fn download_anchor(file_name: &str, data_uri: &str) -> String {
    let name = escape_html(file_name);
    format!("<a href=\"{data_uri}\" download=\"{name}\">Download {name}</a>")
}
