use super::*;

/// Monospace stand-in: every char is 0.5 em wide, lines are 1.25 em tall.
struct Mono {
    calls: usize,
}

impl TextMeasure for Mono {
    fn measure(&mut self, text: &str, size_px: f32) -> AdResult<TextExtent> {
        self.calls += 1;
        Ok(TextExtent {
            width: text.chars().count() as f32 * size_px * 0.5,
            height: size_px * 1.25,
        })
    }
}

#[test]
fn grows_until_width_overflows() {
    let mut m = Mono { calls: 0 };
    // 10 chars * 0.5 = 5 px per size unit; 120 px wide allows size 24.
    let bounds = FitBounds {
        width: 120.0,
        height: 1000.0,
    };
    let out = fit_font_size(&mut m, "abcdefghij", bounds, FitLimits::default()).unwrap();
    assert_eq!(out.size_px, 24);
    assert!(!out.clamped);
    assert_eq!(out.extent.width, 120.0);
    // Sizes 1..=24 fit, 25 overflows.
    assert_eq!(m.calls, 25);
}

#[test]
fn height_can_be_the_binding_constraint() {
    let mut m = Mono { calls: 0 };
    let bounds = FitBounds {
        width: 10_000.0,
        height: 30.0,
    };
    let out = fit_font_size(&mut m, "hi", bounds, FitLimits::default()).unwrap();
    assert_eq!(out.size_px, 24);
}

#[test]
fn stops_at_the_ceiling() {
    let mut m = Mono { calls: 0 };
    let bounds = FitBounds {
        width: 1e9,
        height: 1e9,
    };
    let out = fit_font_size(&mut m, "x", bounds, FitLimits { min: 1, max: 50 }).unwrap();
    assert_eq!(out.size_px, 50);
    assert_eq!(m.calls, 50);
}

#[test]
fn falls_back_to_minimum_when_nothing_fits() {
    let mut m = Mono { calls: 0 };
    let bounds = FitBounds {
        width: 1.0,
        height: 1.0,
    };
    let out = fit_font_size(&mut m, "too long", bounds, FitLimits::default()).unwrap();
    assert_eq!(out.size_px, 1);
    assert!(out.clamped);
}

#[test]
fn empty_text_is_not_measured() {
    let mut m = Mono { calls: 0 };
    let bounds = FitBounds {
        width: 5.0,
        height: 5.0,
    };
    let out = fit_font_size(&mut m, "", bounds, FitLimits::default()).unwrap();
    assert_eq!(out.size_px, 1);
    assert_eq!(m.calls, 0);
}

#[test]
fn invalid_limits_are_rejected() {
    let mut m = Mono { calls: 0 };
    let bounds = FitBounds {
        width: 5.0,
        height: 5.0,
    };
    assert!(fit_font_size(&mut m, "a", bounds, FitLimits { min: 0, max: 3 }).is_err());
    assert!(fit_font_size(&mut m, "a", bounds, FitLimits { min: 5, max: 3 }).is_err());
}

#[test]
fn bounds_from_canvas_percentages() {
    let canvas = PxSize {
        width: 300,
        height: 250,
    };
    let b = FitBounds::fraction_of(canvas, 50, 10).unwrap();
    assert_eq!(b.width, 150.0);
    assert_eq!(b.height, 25.0);

    let tiny = FitBounds::fraction_of(PxSize { width: 3, height: 3 }, 1, 1).unwrap();
    assert_eq!(tiny.width, 1.0);

    assert!(FitBounds::fraction_of(canvas, 0, 10).is_err());
    assert!(FitBounds::fraction_of(canvas, 50, 101).is_err());
}
