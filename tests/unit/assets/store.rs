use std::path::PathBuf;

use super::*;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("adcraft_store_{tag}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(path: &std::path::Path, w: u32, h: u32, px: [u8; 4]) {
    image::RgbaImage::from_pixel(w, h, image::Rgba(px))
        .save(path)
        .unwrap();
}

#[test]
fn blank_copy_prepares_without_a_font() {
    let dir = scratch_dir("blank");
    write_png(&dir.join("base.png"), 8, 6, [10, 20, 30, 255]);
    write_png(&dir.join("logo.png"), 2, 2, [255, 0, 0, 200]);

    let campaign = Campaign::from_reader(
        r#"{
            "images": ["base.png"],
            "logo": { "source": "./logo.png", "opacity": 0.5 },
            "copy": { "ctas": [""] },
            "sizes": ["300x250"],
            "shape": "pill"
        }"#
        .as_bytes(),
    )
    .unwrap()
    .with_root(&dir);

    let prepared = PreparedCampaign::prepare(&campaign).unwrap();
    assert!(prepared.font.is_none());
    assert_eq!(prepared.images.len(), 1);
    assert_eq!(prepared.image(0).unwrap().pixels.dimensions(), (8, 6));
    assert!(prepared.image(1).is_err());

    let logo = prepared.logo.as_ref().unwrap();
    assert_eq!(logo.image.source, "logo.png");
    assert_eq!(logo.opacity, 0.5);
    assert_eq!(prepared.settings.shape, BoxShape::Pill);
    assert_eq!(prepared.settings.margin, 10);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_image_is_an_asset_error() {
    let dir = scratch_dir("missing");
    let campaign = Campaign::from_reader(
        r#"{ "images": ["nope.png"], "copy": { "ctas": [""] }, "sizes": ["300x250"] }"#.as_bytes(),
    )
    .unwrap()
    .with_root(&dir);

    let err = PreparedCampaign::prepare(&campaign).unwrap_err();
    assert!(matches!(err, AdError::Asset(_)), "{err}");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn configured_font_must_exist() {
    let dir = scratch_dir("font");
    write_png(&dir.join("base.png"), 4, 4, [0, 0, 0, 255]);
    let campaign = Campaign::from_reader(
        r#"{ "images": ["base.png"], "copy": { "ctas": ["Buy"] }, "sizes": ["300x250"], "font": "missing.ttf" }"#
            .as_bytes(),
    )
    .unwrap()
    .with_root(&dir);

    let err = PreparedCampaign::prepare(&campaign).unwrap_err();
    assert!(matches!(err, AdError::Font(_)), "{err}");
    std::fs::remove_dir_all(&dir).ok();
}
