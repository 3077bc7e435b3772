use super::*;
use crate::campaign::model::BoxShape;
use crate::catalog::AdSize;
use crate::foundation::core::PxSize;
use crate::render::overlay::OverlayGeometry;

fn creative(index: usize) -> Creative {
    let size = AdSize::new("display", 6, 4).unwrap();
    Creative {
        index,
        file_name: crate::plan::file_name(index, &size),
        size,
        image: image::RgbaImage::from_pixel(6, 4, image::Rgba([9, 8, 7, 255])),
        geometry: OverlayGeometry {
            canvas: PxSize {
                width: 6,
                height: 4,
            },
            shape: BoxShape::Rectangle,
            padding: (10, 5),
            cta: None,
            description: None,
            logo: None,
        },
    }
}

#[test]
fn in_memory_sink_keeps_push_order() {
    let mut sink = InMemorySink::new();
    sink.begin(2).unwrap();
    sink.push(&creative(0)).unwrap();
    sink.push(&creative(1)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.expected(), Some(2));
    assert!(sink.is_finished());
    let idx: Vec<_> = sink.creatives.iter().map(|c| c.index).collect();
    assert_eq!(idx, vec![0, 1]);
}

#[test]
fn dir_sink_writes_pngs_and_gallery() {
    let dir = std::env::temp_dir()
        .join(format!("adcraft_dir_sink_{}", std::process::id()))
        .join("nested");
    let mut sink = DirSink::new(&dir).with_gallery();
    sink.begin(1).unwrap();
    sink.push(&creative(0)).unwrap();
    sink.end().unwrap();

    let png = dir.join("creative_0001_display_6x4.png");
    assert_eq!(sink.written(), &[png.clone()]);
    let decoded = image::open(&png).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(0, 0).0, [9, 8, 7, 255]);

    let gallery = std::fs::read_to_string(dir.join(GALLERY_FILE)).unwrap();
    assert!(gallery.contains("Creatives (1)"));
    assert!(gallery.contains("download=\"creative_0001_display_6x4.png\""));
    assert!(gallery.contains("src=\"data:image/png;base64,"));
    assert_eq!(
        gallery,
        crate::export::gallery::render_gallery_html(&[creative(0)]).unwrap()
    );

    // Preview and download share one data URI.
    let uri_at = |marker: &str| {
        let start = gallery.find(marker).unwrap() + marker.len();
        let len = gallery[start..].find('"').unwrap();
        gallery[start..start + len].to_string()
    };
    assert_eq!(uri_at("src=\""), uri_at("href=\""));

    std::fs::remove_dir_all(dir.parent().unwrap()).ok();
}
