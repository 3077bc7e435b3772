use super::*;

#[test]
fn over_opaque_source_replaces_destination() {
    assert_eq!(over([10, 20, 30, 255], [200, 100, 50, 255], 1.0), [200, 100, 50, 255]);
}

#[test]
fn over_transparent_or_zero_opacity_is_identity() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0], 1.0), dst);
    assert_eq!(over(dst, [200, 100, 50, 255], 0.0), dst);
    assert_eq!(over(dst, [200, 100, 50, 255], f32::NAN), dst);
}

#[test]
fn over_half_opacity_mixes() {
    let out = over([0, 0, 0, 255], [255, 255, 255, 255], 0.5);
    assert_eq!(out[3], 255);
    assert!((out[0] as i32 - 128).abs() <= 1);
}

#[test]
fn composite_logo_with_transparent_hole() {
    let mut base = RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 255, 255]));
    let mut logo = RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
    logo.put_pixel(1, 1, image::Rgba([0, 255, 0, 0]));

    composite_over(&mut base, &logo, PxPoint::new(1, 1), 1.0).unwrap();

    assert_eq!(base.get_pixel(0, 0).0, [0, 0, 255, 255]);
    assert_eq!(base.get_pixel(1, 1).0, [255, 0, 0, 255]);
    assert_eq!(base.get_pixel(2, 1).0, [255, 0, 0, 255]);
    // The logo's transparent pixel leaves the base visible.
    assert_eq!(base.get_pixel(2, 2).0, [0, 0, 255, 255]);
    assert_eq!(base.get_pixel(3, 3).0, [0, 0, 255, 255]);
}

#[test]
fn composite_clips_at_every_edge() {
    let mut base = RgbaImage::from_pixel(3, 3, image::Rgba([0, 0, 0, 255]));
    let logo = RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 255]));

    composite_over(&mut base, &logo, PxPoint::new(-1, -1), 1.0).unwrap();
    assert_eq!(base.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(base.get_pixel(1, 0).0, [0, 0, 0, 255]);

    composite_over(&mut base, &logo, PxPoint::new(2, 2), 1.0).unwrap();
    assert_eq!(base.get_pixel(2, 2).0, [255, 255, 255, 255]);

    // Entirely off-canvas is a no-op.
    let before = base.clone();
    composite_over(&mut base, &logo, PxPoint::new(50, -50), 1.0).unwrap();
    assert_eq!(base, before);
}

#[test]
fn semi_transparent_base_round_trips() {
    let mut base = RgbaImage::from_pixel(2, 1, image::Rgba([200, 100, 50, 128]));
    let logo = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 0]));
    composite_over(&mut base, &logo, PxPoint::new(0, 0), 1.0).unwrap();
    let px = base.get_pixel(1, 0).0;
    assert_eq!(px[3], 128);
    assert!(px[0].abs_diff(200) <= 2);
}

#[test]
fn layer_and_paste_validate_buffer_sizes() {
    let img = RgbaImage::new(2, 2);
    let mut canvas = PremulCanvas::from_straight(&img);
    assert!(canvas.over_layer(&[0u8; 4]).is_err());
    assert!(
        canvas
            .paste(&[0u8; 8], PxSize { width: 2, height: 2 }, PxPoint::new(0, 0), 1.0)
            .is_err()
    );
}
