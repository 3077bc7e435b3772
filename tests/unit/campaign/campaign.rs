use super::*;
use crate::assets::color::Color;
use crate::campaign::model::{BoxShape, FontSizing, LogoSize, Padding, Pairing, Palette};
use crate::layout::position::{Placement, Position};
use crate::layout::resize::ResizeMode;

fn parse(json: &str) -> Campaign {
    Campaign::from_reader(json.as_bytes()).unwrap()
}

#[test]
fn minimal_campaign_gets_stacked_defaults() {
    let c = parse(
        r#"{
            "images": ["hero.jpg"],
            "copy": { "ctas": ["Shop now"] },
            "sizes": ["300x250"]
        }"#,
    );
    c.validate().unwrap();

    let d = c.def();
    assert_eq!(d.cta.placements, vec![Placement::STACK_CTA]);
    assert_eq!(d.description.placements, vec![Placement::STACK_DESCRIPTION]);
    assert_eq!(
        d.cta.sizing,
        FontSizing::Fixed { sizes: vec![20] }
    );
    assert_eq!(d.cta.palettes, vec![Palette::default()]);
    assert_eq!(d.copy.pairing, Pairing::Zip);
    assert_eq!(d.shape, BoxShape::Rectangle);
    assert_eq!(d.resize, ResizeMode::Exact);
    assert_eq!(d.margin, 10);
    assert_eq!(d.padding, Padding { x: 10, y: 5 });
    assert!(d.logo.is_none());
    assert_eq!(c.root(), Path::new("."));
    assert!(c.needs_font());
}

#[test]
fn full_campaign_parses() {
    let c = parse(
        r##"{
            "images": ["a.png", "b.jpg"],
            "logo": {
                "source": "brand/logo.png",
                "size": { "mode": "fraction", "width_pct": 20, "height_pct": 20 },
                "placements": ["top-right", "bottom-left"],
                "opacity": 0.8
            },
            "copy": {
                "ctas": ["Buy", "Try"],
                "descriptions": ["Fast", "Cheap", "Good"],
                "pairing": "cross"
            },
            "cta": {
                "placements": ["top-left", {"x": 5, "y": 6}],
                "sizing": { "mode": "fit", "width_pct": 50, "height_pct": 10 },
                "palettes": [
                    { "text": "#000000" },
                    { "text": "white", "background": "#ff000080" }
                ]
            },
            "description": {
                "placements": ["center"],
                "sizing": { "mode": "fixed", "sizes": [14, 18] }
            },
            "shape": "pill",
            "sizes": ["spotify/640x640", {"width": 1080, "height": 1920, "channel": "stories"}],
            "resize": "fit",
            "font": "fonts/brand.ttf",
            "margin": 4,
            "padding": { "x": 8, "y": 8 }
        }"##,
    );
    c.validate().unwrap();

    let d = c.def();
    let logo = d.logo.as_ref().unwrap();
    assert_eq!(
        logo.size,
        LogoSize::Fraction {
            width_pct: 20,
            height_pct: 20
        }
    );
    assert_eq!(logo.placements[0], Placement::Anchor(Position::TopRight));
    assert_eq!(d.cta.palettes[0].background, None);
    assert_eq!(
        d.cta.palettes[1].background,
        Some(Color::rgba(255, 0, 0, 128))
    );
    assert_eq!(
        d.description.placements,
        vec![Placement::Anchor(Position::MiddleCenter)]
    );
    assert_eq!(d.shape, BoxShape::Pill);
    assert_eq!(d.resize, ResizeMode::Fit);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Campaign::from_reader(
        r#"{ "images": ["a.png"], "copy": { "ctas": ["x"] }, "sizes": ["300x250"], "colour": 1 }"#
            .as_bytes(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("colour"));
}

#[test]
fn validation_reports_every_issue_with_paths() {
    let c = parse(
        r#"{
            "images": [],
            "logo": { "source": "../logo.png", "opacity": 2.0, "placements": [] },
            "copy": { "ctas": ["a", "b"], "descriptions": ["only one"] },
            "cta": { "placements": [], "sizing": { "mode": "fixed", "sizes": [0] } },
            "description": { "placements": ["top-left"], "sizing": { "mode": "fit", "width_pct": 0, "height_pct": 10 } },
            "sizes": ["radio/300x250"],
            "font": "/etc/font.ttf"
        }"#,
    );
    let err = c.validate().unwrap_err();
    assert!(matches!(err, AdError::Validation(_)), "{err}");
    let msg = err.to_string();
    assert!(msg.starts_with("validation error: campaign is invalid:\n$."), "{msg}");
    // One line per problem.
    assert!(msg.lines().count() >= 11, "{msg}");
    for needle in [
        "$.images: at least one image",
        "$.copy.descriptions: zip pairing",
        "$.cta.placements",
        "$.cta.sizing.sizes[0]",
        "$.description.sizing",
        "$.sizes[0]",
        "$.font",
        "$.logo.source",
        "$.logo.placements",
        "$.logo.opacity",
    ] {
        assert!(msg.contains(needle), "missing '{needle}' in:\n{msg}");
    }
}

#[test]
fn oversized_margin_and_padding_are_rejected() {
    let c = parse(
        r#"{
            "images": ["a.png"],
            "copy": { "ctas": ["Shop"] },
            "sizes": ["300x250"],
            "margin": 9000,
            "padding": { "x": 3000000000, "y": 5 }
        }"#,
    );
    let msg = c.validate().unwrap_err().to_string();
    assert!(msg.contains("$.margin: margin must be within 0..=8192"), "{msg}");
    assert!(msg.contains("$.padding.x"), "{msg}");
    assert!(!msg.contains("$.padding.y"), "{msg}");

    let edge = parse(
        r#"{
            "images": ["a.png"],
            "copy": { "ctas": ["Shop"] },
            "sizes": ["300x250"],
            "margin": 8192,
            "padding": { "x": 8192, "y": 0 }
        }"#,
    );
    edge.validate().unwrap();
}

#[test]
fn cross_pairing_allows_uneven_lists() {
    let c = parse(
        r#"{
            "images": ["a.png"],
            "copy": { "ctas": ["a", "b"], "descriptions": ["x"], "pairing": "cross" },
            "sizes": ["728x90"]
        }"#,
    );
    c.validate().unwrap();
}

#[test]
fn blank_copy_needs_no_font() {
    let c = parse(
        r#"{ "images": ["a.png"], "copy": { "ctas": ["", "  "] }, "sizes": ["728x90"] }"#,
    );
    c.validate().unwrap();
    assert!(!c.needs_font());
}

#[test]
fn from_path_uses_file_directory_as_root() {
    let dir = std::env::temp_dir().join(format!("adcraft_campaign_root_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("campaign.json");
    std::fs::write(
        &path,
        r#"{ "images": ["a.png"], "copy": { "ctas": ["x"] }, "sizes": ["728x90"] }"#,
    )
    .unwrap();

    let c = Campaign::from_path(&path).unwrap();
    assert_eq!(c.root(), dir.as_path());

    assert!(Campaign::from_path(dir.join("missing.json")).is_err());
    std::fs::remove_dir_all(&dir).ok();
}
