use std::fmt::Write as _;

use crate::assets::decode::encode_png;
use crate::campaign::model::BoxShape;
use crate::export::data_uri::data_uri_png;
use crate::export::html::{escape_html, page};
use crate::foundation::core::PxRect;
use crate::foundation::error::AdResult;
use crate::render::overlay::{CreativeLayers, TextBox};

/// Drag and resize library loaded by the editor page.
pub const INTERACT_JS_URL: &str =
    "https://cdn.jsdelivr.net/npm/interactjs@1.10.11/dist/interact.min.js";
/// Library the save button rasterizes containers with.
pub const HTML2CANVAS_URL: &str =
    "https://cdn.jsdelivr.net/npm/html2canvas@1.4.1/dist/html2canvas.min.js";

/// One creative as the editor sees it: clean base plus overlays that stay movable.
#[derive(Clone, Debug)]
pub struct EditorItem {
    /// Name the saved PNG is offered under.
    pub file_name: String,
    /// Base, logo and geometry to lay out.
    pub layers: CreativeLayers,
}

const EDITOR_STYLE: &str = "<style>\
.ad-container{position:relative;overflow:hidden;background-repeat:no-repeat;background-size:100% 100%}\
.overlay{position:absolute;box-sizing:border-box;white-space:nowrap;touch-action:none;cursor:move;line-height:1}\
.overlay img{width:100%;height:100%;pointer-events:none;display:block}\
.controls{margin:8px 0 32px 0}.controls label{margin-right:16px}\
</style>\n";

const EDITOR_SCRIPT: &str = r#"<script>
function dragMoveListener(event) {
  var t = event.target;
  var x = (parseFloat(t.getAttribute('data-x')) || 0) + event.dx;
  var y = (parseFloat(t.getAttribute('data-y')) || 0) + event.dy;
  t.style.transform = 'translate(' + x + 'px, ' + y + 'px)';
  t.setAttribute('data-x', x);
  t.setAttribute('data-y', y);
}
function resizeMoveListener(event) {
  var t = event.target;
  var x = (parseFloat(t.getAttribute('data-x')) || 0) + event.deltaRect.left;
  var y = (parseFloat(t.getAttribute('data-y')) || 0) + event.deltaRect.top;
  t.style.width = event.rect.width + 'px';
  t.style.height = event.rect.height + 'px';
  if (t.classList.contains('text-overlay')) {
    t.style.fontSize = (Math.min(event.rect.width, event.rect.height) / 2) + 'px';
  }
  t.style.transform = 'translate(' + x + 'px, ' + y + 'px)';
  t.setAttribute('data-x', x);
  t.setAttribute('data-y', y);
}
function applyInteractions(id) {
  interact('#' + id).draggable({
    inertia: true,
    modifiers: [interact.modifiers.restrictRect({ restriction: 'parent', endOnly: true })],
    listeners: { move: dragMoveListener }
  }).resizable({
    edges: { left: true, right: true, bottom: true, top: true },
    modifiers: [
      interact.modifiers.restrictEdges({ outer: 'parent' }),
      interact.modifiers.restrictSize({ min: { width: 20, height: 10 } })
    ],
    listeners: { move: resizeMoveListener }
  });
}
function adjustOpacity(id, value) {
  document.getElementById(id).style.opacity = value / 100;
}
function saveCreative(containerId, fileName) {
  html2canvas(document.getElementById(containerId), { backgroundColor: null }).then(function (canvas) {
    var link = document.createElement('a');
    link.download = fileName;
    link.href = canvas.toDataURL('image/png');
    link.click();
  });
}
document.querySelectorAll('.overlay').forEach(function (el) { applyInteractions(el.id); });
</script>
"#;

fn rect_style(r: PxRect) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;",
        r.origin.x, r.origin.y, r.size.width, r.size.height
    )
}

fn text_element(id: &str, tb: &TextBox, shape: BoxShape, padding: (u32, u32)) -> String {
    let background = tb
        .palette
        .background
        .map(|c| c.to_css())
        .unwrap_or_else(|| "transparent".to_string());
    let radius = match shape {
        BoxShape::Rectangle => 0,
        BoxShape::Pill => tb.rect.size.height / 2,
    };
    format!(
        "<div id=\"{id}\" class=\"overlay text-overlay\" contenteditable=\"true\" spellcheck=\"false\" style=\"{}padding:{}px {}px;font-size:{}px;color:{};background-color:{background};border-radius:{radius}px;\">{}</div>\n",
        rect_style(tb.rect),
        padding.1,
        padding.0,
        tb.font_size,
        tb.palette.text.to_css(),
        escape_html(&tb.text),
    )
}

fn slider(label: &str, target: &str, initial: u32) -> String {
    format!(
        "<label>{label} opacity <input type=\"range\" min=\"0\" max=\"100\" value=\"{initial}\" oninput=\"adjustOpacity('{target}', this.value)\"></label>\n"
    )
}

/// Interactive page where overlays can be dragged, resized, retyped and faded before saving.
pub fn render_editor_html(items: &[EditorItem]) -> AdResult<String> {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Creative editor ({})</h1>", items.len());

    for (i, item) in items.iter().enumerate() {
        let g = &item.layers.geometry;
        let container = format!("ad_{i}");
        let base = data_uri_png(&encode_png(&item.layers.base)?);

        let _ = writeln!(body, "<section class=\"creative\">");
        let _ = writeln!(
            body,
            "<div id=\"{container}\" class=\"ad-container\" style=\"width:{}px;height:{}px;background-image:url('{base}');\">",
            g.canvas.width, g.canvas.height
        );

        let mut controls = String::new();
        if let Some(tb) = &g.cta {
            let id = format!("cta_{i}");
            body.push_str(&text_element(&id, tb, g.shape, g.padding));
            controls.push_str(&slider("CTA", &id, 100));
        }
        if let Some(tb) = &g.description {
            let id = format!("desc_{i}");
            body.push_str(&text_element(&id, tb, g.shape, g.padding));
            controls.push_str(&slider("Description", &id, 100));
        }
        if let (Some(logo), Some(lb)) = (&item.layers.logo, g.logo) {
            let id = format!("logo_{i}");
            let opacity = (lb.opacity.clamp(0.0, 1.0) * 100.0).round() as u32;
            let _ = writeln!(
                body,
                "<div id=\"{id}\" class=\"overlay logo-overlay\" style=\"{}opacity:{:.2};\"><img src=\"{}\" alt=\"logo\"></div>",
                rect_style(lb.rect),
                f64::from(opacity) / 100.0,
                data_uri_png(&encode_png(logo)?),
            );
            controls.push_str(&slider("Logo", &id, opacity));
        }

        let _ = writeln!(body, "</div>");
        let _ = writeln!(
            body,
            "<div class=\"controls\">\n{controls}<button type=\"button\" onclick=\"saveCreative('{container}', '{}')\">Save {}</button>\n</div>",
            escape_html(&item.file_name),
            escape_html(&item.file_name),
        );
        let _ = writeln!(body, "</section>");
    }
    body.push_str(EDITOR_SCRIPT);

    let head = format!(
        "{EDITOR_STYLE}<script src=\"{INTERACT_JS_URL}\"></script>\n<script src=\"{HTML2CANVAS_URL}\"></script>\n"
    );
    Ok(page("Creative editor", &head, &body))
}

#[cfg(test)]
#[path = "../../tests/unit/export/editor.rs"]
mod tests;
