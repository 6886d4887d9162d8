use super::*;

#[test]
fn scenes_match_weights_and_order() {
    let script = promo_script();
    let ids: Vec<&str> = script.scenes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        ["channels", "inbox", "multiagent", "chatbots", "metrics", "speed", "cta"]
    );
    assert_eq!(script.weights(), SCENE_WEIGHTS.to_vec());
}

#[test]
fn opening_scene_has_hero_title_and_five_bubbles() {
    let script = promo_script();
    let scene = &script.scenes[0];
    let title = scene.title.as_ref().unwrap();
    assert_eq!(title.variant, TitleVariant::Hero);
    assert_eq!(title.offset_y, 160.0);

    let delays: Vec<f64> = scene.widgets.iter().map(WidgetSpec::delay_secs).collect();
    assert_eq!(delays, [0.0, 0.3, 0.45, 0.6, 0.75]);
    match &scene.widgets[0] {
        WidgetSpec::ChannelBubble(b) => {
            assert_eq!(b.label, "WhatsApp");
            assert_eq!(b.position, Vec2::new(-620.0, 100.0));
            assert_eq!(b.icon, PathBuf::from("assets/hibot/channels/whatsapp.svg"));
        }
        other => panic!("unexpected widget {other:?}"),
    }
}

#[test]
fn metrics_showcase_overrides_bullets() {
    let script = promo_script();
    let WidgetSpec::FeatureShowcase(s) = &script.scenes[4].widgets[0] else {
        panic!("metrics scene should hold a showcase");
    };
    assert_eq!(s.layout, FeatureLayout::Default);
    assert_eq!(s.bullet_size, Some(26.0));
    assert_eq!(s.bullet_padding, Some(Vec2::new(28.0, 16.0)));
    assert_eq!(s.delay_secs, 0.4);
}

#[test]
fn closing_scene_is_untitled_call_to_action() {
    let script = promo_script();
    let cta = &script.scenes[6];
    assert!(cta.title.is_none());
    assert!(matches!(&cta.widgets[..], [WidgetSpec::CallToAction(c)] if c.button_label == "hibotchat.com"));
}

#[test]
fn sound_cues_anchor_to_expected_scenes() {
    let script = promo_script();
    let anchors: Vec<(&str, usize, f64)> = script
        .sound_cues
        .iter()
        .map(|c| (c.id.as_str(), c.scene_index, c.offset_secs))
        .collect();
    assert_eq!(
        anchors,
        [
            ("bell", 0, 0.0),
            ("swoosh", 1, -0.1),
            ("click", 2, 0.15),
            ("chime", 4, 0.2),
            ("pop", 6, 0.0),
        ]
    );
    assert_eq!(script.music.peak_volume, 0.2);
    assert_eq!(script.music.fade_secs, 1.2);
}
