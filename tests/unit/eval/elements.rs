use super::*;
use crate::foundation::core::Fps;

fn at(frame: u64) -> FrameCtx {
    FrameCtx::new(frame, Fps::new(30, 1).unwrap())
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "{a} != {b}");
}

#[test]
fn fade_envelope_plateaus_between_fades() {
    assert_close(fade_envelope(-3.0, 12.0, 12.0, 120.0).unwrap(), 0.0);
    assert_close(fade_envelope(6.0, 12.0, 12.0, 120.0).unwrap(), 0.5);
    assert_close(fade_envelope(60.0, 12.0, 12.0, 120.0).unwrap(), 1.0);
    assert_close(fade_envelope(114.0, 12.0, 12.0, 120.0).unwrap(), 0.5);
    assert_close(fade_envelope(120.0, 12.0, 12.0, 120.0).unwrap(), 0.0);
}

#[test]
fn fade_envelope_shortens_fades_on_short_durations() {
    // 12 + 12 > 10: both fades become 5 frames.
    assert_close(fade_envelope(2.5, 12.0, 12.0, 10.0).unwrap(), 0.5);
    assert_close(fade_envelope(5.0, 12.0, 12.0, 10.0).unwrap(), 1.0);
    assert_close(fade_envelope(7.5, 12.0, 12.0, 10.0).unwrap(), 0.5);
}

#[test]
fn title_enters_settles_and_zooms() {
    let s = title_style(at(0), 0.0, 120.0).unwrap();
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.translate, Vec2::new(0.0, 16.0));
    assert_close(s.scale, 0.96);

    let s = title_style(at(6), 0.0, 120.0).unwrap();
    assert_close(s.opacity, 0.5);
    assert_close(s.translate.y, 16.0 * (1.0 - 6.0 / 18.0));

    let s = title_style(at(160), 100.0, 120.0).unwrap();
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.translate.y, 0.0);
    assert_close(s.scale, 0.96 + 0.07 * 0.5);

    let s = title_style(at(220), 100.0, 120.0).unwrap();
    assert_eq!(s.opacity, 0.0);
    assert_close(s.scale, 1.03);
}

#[test]
fn bubble_waits_for_its_delay() {
    let pos = Vec2::new(-120.0, 100.0);
    let s = bubble_style(at(0), 0.0, 120.0, 9.0, pos).unwrap();
    assert_eq!(s.opacity, 0.0);
    assert_close(s.scale, 0.75);
    assert_eq!(s.translate, pos);
}

#[test]
fn bubble_overshoots_then_swells_out() {
    let pos = Vec2::new(80.0, 260.0);
    // Gentle-bounce peaks roughly 0.38s in.
    let peak = bubble_style(at(11), 0.0, 120.0, 0.0, pos).unwrap();
    assert!(peak.scale > 1.0, "scale {}", peak.scale);

    let rest = bubble_style(at(90), 0.0, 120.0, 0.0, pos).unwrap();
    assert_eq!(rest.opacity, 1.0);
    assert_close(rest.scale, 1.0);

    let end = bubble_style(at(120), 0.0, 120.0, 0.0, pos).unwrap();
    assert_eq!(end.opacity, 0.0);
    assert_close(end.scale, 1.06);
}

#[test]
fn bubble_survives_scenes_shorter_than_its_fades() {
    let s = bubble_style(at(3), 0.0, 4.0, 0.0, Vec2::ZERO).unwrap();
    assert!((0.0..=1.0).contains(&s.opacity));
}

#[test]
fn inbox_fades_in_quickly() {
    let s = inbox_style(at(30), 30.0).unwrap();
    assert_eq!(s.opacity, 0.0);
    assert_close(s.scale, 0.9);

    let s = inbox_style(at(39), 30.0).unwrap();
    assert_eq!(s.opacity, 1.0);

    let s = inbox_style(at(200), 30.0).unwrap();
    assert_close(s.scale, 1.0);
}

#[test]
fn showcase_rises_into_place() {
    let s = showcase_style(at(12), 12.0).unwrap();
    assert_eq!(s.translate.y, 40.0);
    assert_close(s.scale, 0.92);

    let s = showcase_style(at(45), 12.0).unwrap();
    assert_eq!(s.translate.y, 0.0);
    assert_eq!(s.opacity, 1.0);
}

#[test]
fn use_cases_zoom_over_scene() {
    let s = use_cases_style(at(0), 0.0, 180.0).unwrap();
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.translate.y, 24.0);
    assert_close(s.scale, 0.94);

    let s = use_cases_style(at(180), 0.0, 180.0).unwrap();
    assert_close(s.scale, 1.04);
}

#[test]
fn cta_button_pops_without_overshoot() {
    assert_eq!(cta_button_scale(at(0), 0.0), 0.0);
    let mut prev = 0.0;
    for f in 1..120 {
        let v = cta_button_scale(at(f), 0.0);
        assert!(v >= prev && v <= 1.0, "frame {f}: {v}");
        prev = v;
    }
    assert!(prev > 0.99);

    let s = cta_style(at(6), 0.0).unwrap();
    assert_close(s.opacity, 0.5);
    assert_eq!(s.scale, 1.0);
}
