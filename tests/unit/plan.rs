use super::*;

fn campaign(json: &str) -> Campaign {
    Campaign::from_reader(json.as_bytes()).unwrap()
}

#[test]
fn zip_pairs_by_index_and_cross_forms_every_combination() {
    let zip = CopyDef {
        ctas: vec!["a".into(), "b".into()],
        descriptions: vec!["1".into(), "2".into()],
        pairing: Pairing::Zip,
    };
    assert_eq!(
        text_pairs(&zip),
        vec![("a".into(), "1".into()), ("b".into(), "2".into())]
    );

    let cross = CopyDef {
        pairing: Pairing::Cross,
        ..zip.clone()
    };
    assert_eq!(
        text_pairs(&cross),
        vec![
            ("a".into(), "1".into()),
            ("a".into(), "2".into()),
            ("b".into(), "1".into()),
            ("b".into(), "2".into()),
        ]
    );

    let no_desc = CopyDef {
        descriptions: vec![],
        ..cross
    };
    assert_eq!(
        text_pairs(&no_desc),
        vec![("a".into(), String::new()), ("b".into(), String::new())]
    );
}

#[test]
fn stacked_defaults_give_pairs_times_images_times_sizes() {
    let c = campaign(
        r#"{
            "images": ["a.png", "b.png"],
            "copy": { "ctas": ["Buy", "Try"], "descriptions": ["Fast", "Cheap"] },
            "sizes": ["300x250", "728x90", "youtube/1280x720"]
        }"#,
    );
    let jobs = plan_campaign(&c).unwrap();
    assert_eq!(jobs.len(), 2 * 2 * 3);

    // Outer loop is the text pair, then image, then size.
    assert_eq!(jobs[0].cta.text, "Buy");
    assert_eq!((jobs[0].image, jobs[0].size.label()), (0, "300x250".to_string()));
    assert_eq!((jobs[1].image, jobs[1].size.label()), (0, "728x90".to_string()));
    assert_eq!(jobs[3].image, 1);
    assert_eq!(jobs[6].cta.text, "Try");
    assert_eq!(jobs[6].description.text, "Cheap");

    for (i, j) in jobs.iter().enumerate() {
        assert_eq!(j.index, i);
        assert_eq!(j.logo, None);
    }
    assert_eq!(jobs[2].file_name, "creative_0003_youtube_1280x720.png");
}

#[test]
fn anchored_positions_must_be_distinct() {
    let c = campaign(
        r#"{
            "images": ["a.png"],
            "logo": { "source": "logo.png", "placements": ["top-left", "top-right", "bottom-right"] },
            "copy": { "ctas": ["Buy"], "descriptions": ["Fast"] },
            "cta": { "placements": ["top-left", "top-right"] },
            "description": { "placements": ["top-right", "bottom-right"] },
            "sizes": ["300x250"]
        }"#,
    );
    let jobs = plan_campaign(&c).unwrap();
    // 2 cta x 2 desc x 3 logo = 12 combinations; keep only pairwise-distinct ones.
    let combos: Vec<_> = jobs
        .iter()
        .map(|j| {
            (
                j.cta.placement.label(),
                j.description.placement.label(),
                j.logo.unwrap().label(),
            )
        })
        .collect();
    assert_eq!(
        combos,
        vec![
            ("top-left".into(), "top-right".into(), "bottom-right".into()),
            ("top-left".into(), "bottom-right".into(), "top-right".into()),
            ("top-right".into(), "bottom-right".into(), "top-left".into()),
        ]
    );
}

#[test]
fn blank_text_and_fixed_placements_do_not_block_anchors() {
    let c = campaign(
        r#"{
            "images": ["a.png"],
            "logo": { "source": "logo.png", "placements": ["top-left", {"x": 50, "y": 250}] },
            "copy": { "ctas": ["Buy"], "descriptions": [""] },
            "cta": { "placements": [{"x": 50, "y": 250}] },
            "description": { "placements": ["top-left"] },
            "sizes": ["300x250"]
        }"#,
    );
    let jobs = plan_campaign(&c).unwrap();
    assert_eq!(jobs.len(), 2);
}

#[test]
fn font_sizes_and_palettes_multiply_inside_placements() {
    let c = campaign(
        r##"{
            "images": ["a.png"],
            "copy": { "ctas": ["Buy"] },
            "cta": {
                "placements": ["top-left"],
                "sizing": { "mode": "fixed", "sizes": [12, 24] },
                "palettes": [{ "text": "#000" }, { "text": "#fff", "background": "#000" }]
            },
            "description": {
                "placements": ["bottom-left"],
                "sizing": { "mode": "fit", "width_pct": 50, "height_pct": 10 }
            },
            "sizes": ["300x250"]
        }"##,
    );
    let jobs = plan_campaign(&c).unwrap();
    assert_eq!(jobs.len(), 4);
    assert_eq!(jobs[0].cta.sizing, RoleSizing::Fixed(12));
    assert_eq!(jobs[0].cta.palette.background, None);
    assert_eq!(jobs[1].cta.sizing, RoleSizing::Fixed(12));
    assert!(jobs[1].cta.palette.background.is_some());
    assert_eq!(jobs[2].cta.sizing, RoleSizing::Fixed(24));
    assert_eq!(
        jobs[3].description.sizing,
        RoleSizing::Fit {
            width_pct: 50,
            height_pct: 10
        }
    );
}

#[test]
fn colliding_everything_yields_zero_jobs_without_error() {
    let c = campaign(
        r#"{
            "images": ["a.png"],
            "copy": { "ctas": ["Buy"], "descriptions": ["Now"] },
            "cta": { "placements": ["center"] },
            "description": { "placements": ["middle-center"] },
            "sizes": ["300x250"]
        }"#,
    );
    assert!(plan_campaign(&c).unwrap().is_empty());
}

#[test]
fn invalid_campaign_is_rejected_before_planning() {
    let c = campaign(r#"{ "images": [], "copy": { "ctas": ["x"] }, "sizes": ["300x250"] }"#);
    assert!(plan_campaign(&c).is_err());
}

#[test]
fn file_names_slug_the_channel() {
    let size = AdSize::new("Audience Select", 300, 250).unwrap();
    assert_eq!(file_name(41, &size), "creative_0042_audience-select_300x250.png");
}

#[test]
fn summary_mentions_texts_and_placements() {
    let c = campaign(
        r#"{ "images": ["a.png"], "copy": { "ctas": ["Buy"] }, "sizes": ["300x250"] }"#,
    );
    let jobs = plan_campaign(&c).unwrap();
    let s = jobs[0].summary();
    assert!(s.contains("creative_0001_display_300x250.png"));
    assert!(s.contains("\"Buy\"@@50,50"));
    assert!(s.contains("logo=-"));
}
