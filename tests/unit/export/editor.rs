use super::*;
use crate::assets::color::Color;
use crate::campaign::model::Palette;
use crate::foundation::core::{PxPoint, PxSize};
use crate::render::overlay::{LogoBox, OverlayGeometry};

fn rect(x: i32, y: i32, w: u32, h: u32) -> PxRect {
    PxRect::new(PxPoint::new(x, y), PxSize { width: w, height: h })
}

fn item(shape: BoxShape) -> EditorItem {
    let canvas = PxSize {
        width: 120,
        height: 60,
    };
    EditorItem {
        file_name: "creative_0001_display_120x60.png".into(),
        layers: CreativeLayers {
            base: image::RgbaImage::from_pixel(120, 60, image::Rgba([0, 0, 255, 255])),
            logo: Some(image::RgbaImage::from_pixel(8, 8, image::Rgba([255, 0, 0, 255]))),
            geometry: OverlayGeometry {
                canvas,
                shape,
                padding: (10, 5),
                cta: Some(TextBox {
                    text: "<Buy> & save".into(),
                    rect: rect(10, 10, 80, 30),
                    font_size: 18,
                    palette: Palette::default(),
                    clamped: false,
                }),
                description: None,
                logo: Some(LogoBox {
                    rect: rect(100, 40, 8, 8),
                    opacity: 0.25,
                }),
            },
        },
    }
}

#[test]
fn editor_places_overlays_at_computed_geometry() {
    let html = render_editor_html(&[item(BoxShape::Rectangle)]).unwrap();

    assert!(html.contains(INTERACT_JS_URL));
    assert!(html.contains(HTML2CANVAS_URL));
    assert!(html.contains("id=\"ad_0\""));
    assert!(html.contains("width:120px;height:60px;background-image:url('data:image/png;base64,"));
    assert!(html.contains("id=\"cta_0\""));
    assert!(html.contains("left:10px;top:10px;width:80px;height:30px;"));
    assert!(html.contains("font-size:18px"));
    assert!(html.contains("padding:5px 10px"));
    assert!(html.contains("contenteditable=\"true\""));
    assert!(html.contains("border-radius:0px"));
    // Text is escaped, never injected.
    assert!(html.contains("&lt;Buy&gt; &amp; save"));
    assert!(!html.contains("<Buy>"));
    // No description overlay was computed, so none is emitted.
    assert!(!html.contains("id=\"desc_0\""));

    assert!(html.contains("id=\"logo_0\""));
    assert!(html.contains("opacity:0.25;"));
    assert!(html.contains("value=\"25\" oninput=\"adjustOpacity('logo_0', this.value)\""));
    assert!(html.contains("saveCreative('ad_0', 'creative_0001_display_120x60.png')"));
}

#[test]
fn pill_radius_is_half_the_box_height() {
    let mut it = item(BoxShape::Pill);
    if let Some(tb) = &mut it.layers.geometry.cta {
        tb.palette = Palette {
            text: Color::BLACK,
            background: None,
        };
    }
    let html = render_editor_html(&[it]).unwrap();
    assert!(html.contains("border-radius:15px"));
    assert!(html.contains("background-color:transparent"));
}

#[test]
fn empty_editor_is_still_a_page() {
    let html = render_editor_html(&[]).unwrap();
    assert!(html.contains("Creative editor (0)"));
    assert!(html.trim_end().ends_with("</html>"));
}
