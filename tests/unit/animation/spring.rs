use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn peak(config: SpringConfig) -> f64 {
    (0..300)
        .map(|f| spring(f as f64, fps30(), config))
        .fold(f64::MIN, f64::max)
}

#[test]
fn starts_at_zero_without_nan() {
    let cfg = EasingPreset::GENTLE_BOUNCE.spring;
    assert_eq!(spring(0.0, fps30(), cfg), 0.0);
    assert_eq!(spring(-12.0, fps30(), cfg), 0.0);
    assert_eq!(spring(f64::NAN, fps30(), cfg), 0.0);
    assert!(spring(1.0, fps30(), cfg).is_finite());
}

#[test]
fn converges_to_one() {
    for preset in [EasingPreset::GENTLE_BOUNCE, EasingPreset::FIRM_POP] {
        let late = preset.progress(300.0, fps30());
        assert!((late - 1.0).abs() < 1e-6, "{}: {late}", preset.id());
    }
    let critical = SpringConfig {
        stiffness: 100.0,
        damping: 20.0,
        mass: 1.0,
        overshoot_clamping: false,
    };
    assert!((critical.damping_ratio() - 1.0).abs() < 1e-12);
    assert!((spring(300.0, fps30(), critical) - 1.0).abs() < 1e-6);
}

#[test]
fn gentle_bounce_overshoots_about_six_percent() {
    let p = peak(EasingPreset::GENTLE_BOUNCE.spring);
    assert!(p > 1.04 && p < 1.07, "peak {p}");
}

#[test]
fn firm_pop_is_monotone() {
    let cfg = EasingPreset::FIRM_POP.spring;
    assert!(cfg.damping_ratio() > 1.0);
    let mut prev = 0.0;
    for f in 0..120 {
        let v = spring(f as f64, fps30(), cfg);
        assert!(v >= prev - 1e-12, "frame {f}: {v} < {prev}");
        assert!(v <= 1.0 + 1e-12);
        prev = v;
    }
}

#[test]
fn lower_damping_overshoots_further() {
    let loose = SpringConfig {
        damping: 6.0,
        ..EasingPreset::GENTLE_BOUNCE.spring
    };
    assert!(peak(loose) > peak(EasingPreset::GENTLE_BOUNCE.spring));
}

#[test]
fn overshoot_clamping_caps_at_one() {
    let cfg = SpringConfig {
        overshoot_clamping: true,
        ..EasingPreset::GENTLE_BOUNCE.spring
    };
    assert!(peak(cfg) <= 1.0);
}

#[test]
fn repeated_calls_are_identical() {
    let cfg = EasingPreset::GENTLE_BOUNCE.spring;
    for f in [0.5, 3.0, 7.25, 40.0] {
        assert_eq!(
            spring(f, fps30(), cfg).to_bits(),
            spring(f, fps30(), cfg).to_bits()
        );
    }
}

#[test]
fn zero_stiffness_never_leaves_the_start() {
    let cfg = SpringConfig {
        stiffness: 0.0,
        ..SpringConfig::default()
    };
    for f in [1.0, 30.0, 3000.0] {
        assert_eq!(spring(f, fps30(), cfg), 0.0);
    }
    assert!(matches!(cfg.validate(), Err(ReelError::Animation(_))));
    assert_eq!(settle_frame(fps30(), cfg, 0.005), None);
}

#[test]
fn presets_validate() {
    for preset in [EasingPreset::GENTLE_BOUNCE, EasingPreset::FIRM_POP] {
        assert!(preset.spring.validate().is_ok(), "{}", preset.id());
    }
}

#[test]
fn settle_frame_bounds_the_motion() {
    let cfg = EasingPreset::GENTLE_BOUNCE.spring;
    let settled = settle_frame(fps30(), cfg, 0.005).unwrap();
    assert!(settled > 5 && settled < 60, "settled at {settled}");
    for f in settled..settled + 60 {
        assert!((spring(f as f64, fps30(), cfg) - 1.0).abs() <= 0.005);
    }
}

#[test]
fn frame_rate_independent_in_seconds() {
    let cfg = EasingPreset::GENTLE_BOUNCE.spring;
    let fps60 = Fps::new(60, 1).unwrap();
    let a = spring(15.0, fps30(), cfg);
    let b = spring(30.0, fps60, cfg);
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn preset_ids_are_versioned() {
    assert_eq!(EasingPreset::GENTLE_BOUNCE.id(), "gentle-bounce@1");
    assert_eq!(EasingPreset::FIRM_POP.id(), "firm-pop@1");
}

#[test]
fn validate_rejects_bad_parameters() {
    assert!(SpringConfig::default().validate().is_ok());
    for cfg in [
        SpringConfig {
            mass: 0.0,
            ..SpringConfig::default()
        },
        SpringConfig {
            damping: -1.0,
            ..SpringConfig::default()
        },
        SpringConfig {
            stiffness: f64::NAN,
            ..SpringConfig::default()
        },
    ] {
        assert!(matches!(cfg.validate(), Err(ReelError::Animation(_))));
    }
}
