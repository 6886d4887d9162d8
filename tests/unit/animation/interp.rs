use super::*;

const UNIT: [f64; 2] = [0.0, 10.0];
const RAMP: [f64; 2] = [0.0, 1.0];

#[test]
fn clamp_both_ends() {
    for x in [-100.0, -1.0, 0.0] {
        assert_eq!(interpolate(x, &UNIT, &RAMP, InterpOpts::CLAMP).unwrap(), 0.0);
    }
    for x in [10.0, 11.0, 1e9] {
        assert_eq!(interpolate(x, &UNIT, &RAMP, InterpOpts::CLAMP).unwrap(), 1.0);
    }
    assert_eq!(interpolate(5.0, &UNIT, &RAMP, InterpOpts::CLAMP).unwrap(), 0.5);
}

#[test]
fn extend_right_continues_last_segment() {
    let opts = InterpOpts::CLAMP.right(Extrapolate::Extend);
    assert_eq!(interpolate(20.0, &UNIT, &RAMP, opts).unwrap(), 2.0);
    assert_eq!(interpolate(-5.0, &UNIT, &RAMP, opts).unwrap(), 0.0);
}

#[test]
fn extend_left_continues_first_segment() {
    let opts = InterpOpts::CLAMP.left(Extrapolate::Extend);
    assert_eq!(interpolate(-5.0, &UNIT, &RAMP, opts).unwrap(), -0.5);
    assert_eq!(interpolate(15.0, &UNIT, &RAMP, opts).unwrap(), 1.0);
}

#[test]
fn default_opts_extend_both_ends() {
    let opts = InterpOpts::default();
    assert_eq!(opts, InterpOpts::EXTEND);
    assert_eq!(interpolate(-10.0, &UNIT, &RAMP, opts).unwrap(), -1.0);
    assert_eq!(interpolate(30.0, &UNIT, &RAMP, opts).unwrap(), 3.0);
}

#[test]
fn four_point_envelope_holds_plateau() {
    let frames = [0.0, 12.0, 88.0, 100.0];
    let values = [0.0, 1.0, 1.0, 0.0];
    let t = Breakpoints::new(&frames, &values).unwrap();
    assert_eq!(t.sample(6.0, InterpOpts::CLAMP), 0.5);
    assert_eq!(t.sample(50.0, InterpOpts::CLAMP), 1.0);
    assert_eq!(t.sample(94.0, InterpOpts::CLAMP), 0.5);
    assert_eq!(t.sample(140.0, InterpOpts::CLAMP), 0.0);
    assert_eq!(t.sample(-3.0, InterpOpts::CLAMP), 0.0);
}

#[test]
fn decreasing_outputs_interpolate() {
    let y = interpolate(9.0, &[0.0, 18.0], &[16.0, 0.0], InterpOpts::CLAMP).unwrap();
    assert_eq!(y, 8.0);
}

#[test]
fn zero_width_span_is_a_step() {
    let frames = [0.0, 5.0, 5.0, 10.0];
    let values = [0.0, 1.0, 3.0, 4.0];
    let t = Breakpoints::new(&frames, &values).unwrap();
    assert_eq!(t.sample(2.5, InterpOpts::CLAMP), 0.5);
    assert!(t.sample(4.999, InterpOpts::CLAMP) < 1.0);
    assert_eq!(t.sample(5.0, InterpOpts::CLAMP), 3.0);
    assert_eq!(t.sample(7.5, InterpOpts::CLAMP), 3.5);
}

#[test]
fn zero_width_only_span_never_divides_by_zero() {
    let frames = [3.0, 3.0];
    let values = [1.0, 2.0];
    let t = Breakpoints::new(&frames, &values).unwrap();
    for opts in [InterpOpts::CLAMP, InterpOpts::EXTEND] {
        assert_eq!(t.sample(0.0, opts), 1.0);
        assert_eq!(t.sample(3.0, opts), 2.0);
        assert_eq!(t.sample(9.0, opts), 2.0);
    }
}

#[test]
fn nan_input_propagates_without_panicking() {
    assert!(
        interpolate(f64::NAN, &UNIT, &RAMP, InterpOpts::CLAMP)
            .unwrap()
            .is_nan()
    );
}

#[test]
fn malformed_tables_are_animation_errors() {
    let cases: [(&[f64], &[f64]); 4] = [
        (&[0.0, 1.0], &[0.0]),
        (&[0.0], &[0.0]),
        (&[0.0, f64::INFINITY], &[0.0, 1.0]),
        (&[5.0, 1.0], &[0.0, 1.0]),
    ];
    for (frames, values) in cases {
        let err = Breakpoints::new(frames, values).unwrap_err();
        assert!(matches!(err, ReelError::Animation(_)), "{frames:?}");
    }
}
