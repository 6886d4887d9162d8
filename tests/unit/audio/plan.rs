use super::*;
use crate::foundation::core::Canvas;
use crate::script::builtin::promo_script;

fn plan_for(total_frames: u64) -> AudioPlan {
    let timeline = Timeline::new(total_frames, Fps::default(), Canvas::default()).unwrap();
    let script = promo_script();
    let scenes = SceneTable::new(&timeline, &script.weights()).unwrap();
    AudioPlan::build(&timeline, &scenes, &script).unwrap()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn frame_to_sample_rounds_to_nearest() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(frame_to_sample(0, fps, MIX_SAMPLE_RATE), 0);
    assert_eq!(frame_to_sample(1, fps, MIX_SAMPLE_RATE), 1_600);
    let ntsc = Fps::new(30_000, 1_001).unwrap();
    // 48000 * 1001 / 30000 = 1601.6
    assert_eq!(frame_to_sample(1, ntsc, MIX_SAMPLE_RATE), 1_602);
}

#[test]
fn cues_follow_scene_starts() {
    let plan = plan_for(900);
    let starts: Vec<(&str, u64)> = plan
        .cues()
        .iter()
        .map(|c| (c.id.as_str(), c.start_frame))
        .collect();
    assert_eq!(
        starts,
        [
            ("bell", 0),
            ("swoosh", 99),
            ("click", 209),
            ("chime", 518),
            ("pop", 820)
        ]
    );
    assert_eq!(plan.cues()[1].start_sample, 99 * 1_600);
    assert_eq!(plan.cues()[3].volume, 0.25);
}

#[test]
fn swoosh_clamps_to_zero_on_tiny_timelines() {
    // Scene 2 starts at frame 1 and the swoosh leads it by 3 frames.
    let plan = plan_for(10);
    let swoosh = plan.cues().iter().find(|c| c.id == "swoosh").unwrap();
    assert_eq!(swoosh.start_frame, 0);
}

#[test]
fn narration_starts_at_zero_full_volume() {
    let plan = plan_for(900);
    assert_eq!(plan.narration().start_frame, 0);
    assert_eq!(plan.narration().volume, 1.0);
    assert_eq!(plan.sample_rate(), MIX_SAMPLE_RATE);
    assert_eq!(plan.music().fade_frames, 36.0);
}

#[test]
fn music_fades_in_and_out() {
    let plan = plan_for(900);
    assert_close(plan.music_volume(0.0).unwrap(), 0.0);
    assert_close(plan.music_volume(18.0).unwrap(), 0.1);
    assert_close(plan.music_volume(36.0).unwrap(), 0.2);
    assert_close(plan.music_volume(450.0).unwrap(), 0.2);
    assert_close(plan.music_volume(882.0).unwrap(), 0.1);
    assert_close(plan.music_volume(900.0).unwrap(), 0.0);
    assert_close(plan.music_volume(-10.0).unwrap(), 0.0);
    assert_close(plan.music_volume(1_000.0).unwrap(), 0.0);
}

#[test]
fn plan_serializes_for_the_mixer() {
    let plan = plan_for(900);
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["sample_rate"], 48_000);
    assert_eq!(json["cues"][4]["id"], "pop");
    assert_eq!(json["narration"]["source"], "audio/hibot-vo-es.mp3");
}
