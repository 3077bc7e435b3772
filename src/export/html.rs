/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) const PAGE_STYLE: &str = "body{font-family:sans-serif;margin:24px;background:#f4f4f4}\
.creative{display:inline-block;margin:0 24px 24px 0;vertical-align:top}\
.creative figcaption{font-size:12px;margin-top:4px}";

pub(crate) fn page(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{PAGE_STYLE}</style>\n{head_extra}</head>\n<body>\n{body}</body>\n</html>\n",
        escape_html(title)
    )
}
