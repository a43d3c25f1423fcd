use super::*;
use serde_json::json;

#[test]
fn defaults_match_control_defaults_and_validate() {
    let p = RenderParameters::default();
    assert_eq!(p.seed, 42);
    assert_eq!(p.background.to_hex(), "#fafaf7");
    assert_eq!((p.n_layers, p.k_palette, p.points), (8, 6, 220));
    assert!(p.label_on);
    p.validate().unwrap();
}

#[test]
fn defaults_sit_inside_ui_bounds() {
    let p = RenderParameters::default();
    assert!(p.seed <= ui_bounds::SEED_MAX);
    assert!((ui_bounds::LAYERS.0..=ui_bounds::LAYERS.1).contains(&p.n_layers));
    assert!((ui_bounds::PALETTE.0..=ui_bounds::PALETTE.1).contains(&p.k_palette));
    assert!((ui_bounds::POINTS.0..=ui_bounds::POINTS.1).contains(&p.points));
    assert!(p.wobble.min >= ui_bounds::WOBBLE.0 && p.wobble.max <= ui_bounds::WOBBLE.1);
    assert!(p.radius.min >= ui_bounds::RADIUS.0 && p.radius.max <= ui_bounds::RADIUS.1);
    assert!(p.alpha.min >= ui_bounds::ALPHA.0 && p.alpha.max <= ui_bounds::ALPHA.1);
    p.validate_ui_bounds().unwrap();
}

#[test]
fn control_ranges_are_enforced_on_request() {
    let cases = [
        RenderParameters {
            n_layers: 200,
            ..RenderParameters::default()
        },
        RenderParameters {
            k_palette: 1,
            ..RenderParameters::default()
        },
        RenderParameters {
            points: 3,
            ..RenderParameters::default()
        },
        RenderParameters {
            points: 4_000_000_000,
            ..RenderParameters::default()
        },
        RenderParameters {
            seed: 1_000_000,
            ..RenderParameters::default()
        },
        RenderParameters {
            wobble: FloatRange::new(0.1, 0.9),
            ..RenderParameters::default()
        },
        RenderParameters {
            radius: FloatRange::new(0.01, 0.3),
            ..RenderParameters::default()
        },
        RenderParameters {
            alpha: FloatRange::new(0.0, 0.5),
            ..RenderParameters::default()
        },
    ];
    for p in cases {
        let err = p.validate_ui_bounds().unwrap_err();
        assert!(matches!(err, PosterError::InvalidParameter(_)), "{p:?}");
    }

    // Still renderable, just outside what the controls offer.
    RenderParameters {
        n_layers: 200,
        k_palette: 1,
        points: 3,
        ..RenderParameters::default()
    }
    .validate()
    .unwrap();
}

#[test]
fn inverted_ranges_are_rejected() {
    let cases = [
        RenderParameters {
            wobble: FloatRange::new(0.3, 0.1),
            ..RenderParameters::default()
        },
        RenderParameters {
            radius: FloatRange::new(0.5, 0.2),
            ..RenderParameters::default()
        },
        RenderParameters {
            alpha: FloatRange::new(0.9, 0.1),
            ..RenderParameters::default()
        },
    ];
    for p in cases {
        let err = p.validate().unwrap_err();
        assert!(matches!(err, PosterError::InvalidParameter(_)));
        assert!(err.to_string().contains("inverted"));
    }
}

#[test]
fn degenerate_counts_are_rejected() {
    let p = RenderParameters {
        k_palette: 0,
        ..RenderParameters::default()
    };
    assert!(p.validate().is_err());

    let p = RenderParameters {
        points: 2,
        ..RenderParameters::default()
    };
    assert!(p.validate().is_err());

    let p = RenderParameters {
        n_layers: 0,
        ..RenderParameters::default()
    };
    p.validate().unwrap();
}

#[test]
fn out_of_domain_values_are_rejected() {
    let p = RenderParameters {
        radius: FloatRange::new(0.0, 0.2),
        ..RenderParameters::default()
    };
    assert!(p.validate().is_err());

    let p = RenderParameters {
        alpha: FloatRange::new(0.5, 1.5),
        ..RenderParameters::default()
    };
    assert!(p.validate().is_err());

    let p = RenderParameters {
        wobble: FloatRange::new(f64::NAN, 0.2),
        ..RenderParameters::default()
    };
    assert!(p.validate().is_err());
}

#[test]
fn partial_json_fills_defaults() {
    let p: RenderParameters = serde_json::from_value(json!({
        "seed": 7,
        "background": "#101010",
        "alpha": {"min": 0.1, "max": 0.2}
    }))
    .unwrap();
    assert_eq!(p.seed, 7);
    assert_eq!(p.background.to_hex(), "#101010");
    assert_eq!(p.alpha, FloatRange::new(0.1, 0.2));
    assert_eq!(p.n_layers, 8);
}

#[test]
fn unknown_fields_are_rejected() {
    let r = serde_json::from_value::<RenderParameters>(json!({"sead": 7}));
    assert!(r.is_err());
}
