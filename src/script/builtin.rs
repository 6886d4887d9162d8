use std::path::PathBuf;

use crate::foundation::core::Vec2;
use crate::script::model::{
    BubbleSpec, Conversation, CtaSpec, FeatureLayout, InboxSpec, MusicSpec, SceneSpec, Script,
    ShowcaseSpec, SoundCueSpec, TitleSpec, TitleVariant, UseCaseItem, UseCasesSpec, WidgetSpec,
};

/// Relative scene lengths of the promo, in playback order.
pub const SCENE_WEIGHTS: [f64; 7] = [4.0, 4.0, 6.0, 6.0, 6.0, 6.0, 3.0];

const BACKGROUND: &str =
    "radial-gradient(1600px 900px at 20% 10%, #1D2440 0%, #0C101B 50%, #070A11 100%)";

const TEAL: &str = "#14B8A6";
const ROSE: &str = "#F43F5E";
const INDIGO: &str = "#2563EB";
const AMBER: &str = "#F59E0B";
const CYAN: &str = "#22D3EE";

fn asset(rel: &str) -> PathBuf {
    PathBuf::from("assets/hibot").join(rel)
}

fn title(label: &str, sub: &str) -> TitleSpec {
    TitleSpec {
        label: label.to_owned(),
        sub: Some(sub.to_owned()),
        variant: TitleVariant::Default,
        offset_y: 0.0,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn bubble(
    label: &str,
    color: &str,
    icon: &str,
    delay_secs: f64,
    x: f64,
    y: f64,
    size: f64,
) -> WidgetSpec {
    WidgetSpec::ChannelBubble(BubbleSpec {
        label: label.to_owned(),
        color: color.to_owned(),
        icon: asset(icon),
        delay_secs,
        position: Vec2::new(x, y),
        size_scale: size,
    })
}

fn showcase(title: &str, icon: &str, image: &str, bullets: &[&str]) -> ShowcaseSpec {
    ShowcaseSpec {
        delay_secs: 0.4,
        title: title.to_owned(),
        icon: asset(icon),
        image: asset(image),
        bullets: strings(bullets),
        layout: FeatureLayout::TextWide,
        bullet_size: None,
        bullet_padding: None,
    }
}

fn cue(id: &str, file: &str, scene_index: usize, offset_secs: f64, volume: f64) -> SoundCueSpec {
    SoundCueSpec {
        id: id.to_owned(),
        source: PathBuf::from("audio/sfx").join(file),
        scene_index,
        offset_secs,
        volume,
    }
}

/// The seven-scene product promo.
///
/// Scene weights are [`SCENE_WEIGHTS`]; everything else (copy, colors, asset paths, cue offsets)
/// is carried verbatim into the visual tree and audio plan.
pub fn promo_script() -> Script {
    let channels = SceneSpec {
        id: "channels".to_owned(),
        weight: SCENE_WEIGHTS[0],
        title: Some(TitleSpec {
            variant: TitleVariant::Hero,
            offset_y: 160.0,
            ..title("Mensajes por todos lados", "WhatsApp, Instagram y web...")
        }),
        widgets: vec![
            bubble("WhatsApp", TEAL, "channels/whatsapp.svg", 0.0, -620.0, 100.0, 1.45),
            bubble("Instagram", ROSE, "channels/instagram.svg", 0.3, -120.0, 100.0, 1.2),
            bubble("Facebook", INDIGO, "channels/facebook.svg", 0.45, 320.0, 100.0, 1.2),
            bubble("Web", AMBER, "channels/web.svg", 0.6, -300.0, 260.0, 1.16),
            bubble("Telegram", CYAN, "channels/telegram.svg", 0.75, 80.0, 260.0, 1.16),
        ],
    };

    let conversation = |name: &str, subject: &str, team: &str| Conversation {
        name: name.to_owned(),
        subject: subject.to_owned(),
        team: team.to_owned(),
    };
    let inbox = SceneSpec {
        id: "inbox".to_owned(),
        weight: SCENE_WEIGHTS[1],
        title: Some(title(
            "Bandeja unificada",
            "Todos tus chats en una sola plataforma",
        )),
        widgets: vec![WidgetSpec::InboxCard(InboxSpec {
            delay_secs: 0.2,
            conversations: vec![
                conversation("Sofía", "Pedido #884", "Ventas"),
                conversation("Carlos", "Seguimiento", "Soporte"),
                conversation("Lucía", "Cotización", "Ventas"),
                conversation("Pedro", "Entrega", "Logística"),
            ],
            benefits: strings(&[
                "Centraliza todos tus chats",
                "Asigna por equipo o prioridad",
                "Historial completo en un lugar",
            ]),
        })],
    };

    let multiagent = SceneSpec {
        id: "multiagent".to_owned(),
        weight: SCENE_WEIGHTS[2],
        title: Some(title("Multiagente", "Asigna conversaciones automáticamente")),
        widgets: vec![WidgetSpec::FeatureShowcase(showcase(
            "Coordinación de equipos",
            "feature-icon-multiagente.png",
            "help-app-conversations.png",
            &[
                "Asignación inteligente",
                "Colas por prioridad",
                "Visibilidad total",
            ],
        ))],
    };

    let chatbots = SceneSpec {
        id: "chatbots".to_owned(),
        weight: SCENE_WEIGHTS[3],
        title: Some(title(
            "Chatbots 24/7",
            "Automatiza respuestas y no pierdas clientes",
        )),
        widgets: vec![WidgetSpec::FeatureShowcase(showcase(
            "Automatización inmediata",
            "feature-icon-bots.png",
            "help-app-filter.png",
            &[
                "Respuestas instantáneas",
                "Flujos personalizados",
                "Derivación a agentes",
            ],
        ))],
    };

    let metrics = SceneSpec {
        id: "metrics".to_owned(),
        weight: SCENE_WEIGHTS[4],
        title: Some(title("Métricas en vivo", "Control total del desempeño")),
        widgets: vec![WidgetSpec::FeatureShowcase(ShowcaseSpec {
            layout: FeatureLayout::Default,
            bullet_size: Some(26.0),
            bullet_padding: Some(Vec2::new(28.0, 16.0)),
            ..showcase(
                "Dashboard en tiempo real",
                "feature-icon-metrics.png",
                "help-login.png",
                &["KPIs clave", "Alertas automáticas", "Reportes claros"],
            )
        })],
    };

    let use_case = |label: &str, icon: &str| UseCaseItem {
        label: label.to_owned(),
        icon: asset(icon),
    };
    let speed = SceneSpec {
        id: "speed".to_owned(),
        weight: SCENE_WEIGHTS[5],
        title: Some(TitleSpec {
            offset_y: 240.0,
            ..title(
                "Más velocidad. Más ventas.",
                "Responde más rápido y convierte más conversaciones",
            )
        }),
        widgets: vec![WidgetSpec::UseCases(UseCasesSpec {
            delay_secs: 0.4,
            items: vec![
                use_case("Ventas", "use-case-icon-sells.png"),
                use_case("Soporte", "use-case-icon-support.png"),
                use_case("Logística", "use-case-icon-distribution.png"),
            ],
        })],
    };

    let cta = SceneSpec {
        id: "cta".to_owned(),
        weight: SCENE_WEIGHTS[6],
        title: None,
        widgets: vec![WidgetSpec::CallToAction(CtaSpec {
            delay_secs: 0.0,
            logo: asset("hibot-by-sofka.svg"),
            headline: "Comunícate con nosotros".to_owned(),
            subline: "Para optimizar tu atención y convertir más conversaciones en ventas."
                .to_owned(),
            button_label: "hibotchat.com".to_owned(),
        })],
    };

    Script {
        background: BACKGROUND.to_owned(),
        narration: PathBuf::from("audio/hibot-vo-es.mp3"),
        music: MusicSpec {
            source: PathBuf::from("audio/hotham_music-love-me-back-instrumental-126983.mp3"),
            peak_volume: 0.2,
            fade_secs: 1.2,
        },
        sound_cues: vec![
            cue("bell", "notification-bell.mp3", 0, 0.0, 0.35),
            cue("swoosh", "sfx-swoosh1.mp3", 1, -0.1, 0.35),
            cue("click", "sfx-menu1.mp3", 2, 0.15, 0.3),
            cue("chime", "chime.mp3", 4, 0.2, 0.25),
            cue("pop", "sfx-pop.mp3", 6, 0.0, 0.3),
        ],
        scenes: vec![channels, inbox, multiagent, chatbots, metrics, speed, cta],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/builtin.rs"]
mod tests;
