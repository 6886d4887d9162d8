use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::foundation::core::Vec2;
use crate::foundation::error::{ReelError, ReelResult};

/// The fixed storyboard: narration, music, sound cues and the ordered scenes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    /// CSS background painted behind every scene.
    pub background: String,
    /// Voice-over track; its length sizes the timeline.
    pub narration: PathBuf,
    /// Background music bed.
    pub music: MusicSpec,
    /// Sound effects anchored to scene starts.
    pub sound_cues: Vec<SoundCueSpec>,
    /// Scenes in playback order.
    pub scenes: Vec<SceneSpec>,
}

/// Background music with a symmetric fade at both ends of the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MusicSpec {
    /// Audio file relative to the assets root.
    pub source: PathBuf,
    /// Volume once the fade-in completes.
    pub peak_volume: f64,
    /// Length of the fade at each end.
    pub fade_secs: f64,
}

/// One sound effect, positioned relative to the start of a scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SoundCueSpec {
    /// Name of the cue in the audio plan.
    pub id: String,
    /// Audio file relative to the assets root.
    pub source: PathBuf,
    /// Scene whose start anchors the cue.
    pub scene_index: usize,
    /// Seconds from the scene start. Negative values lead the scene cut.
    pub offset_secs: f64,
    /// Playback gain.
    pub volume: f64,
}

/// One scene: its share of the timeline plus what is on screen.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneSpec {
    /// Stable identifier, used as the prefix of node ids.
    pub id: String,
    /// Relative share of the timeline.
    pub weight: f64,
    /// Headline shown for the whole scene.
    pub title: Option<TitleSpec>,
    /// Animated elements, back to front.
    pub widgets: Vec<WidgetSpec>,
}

/// Scene headline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TitleSpec {
    /// Main line.
    pub label: String,
    /// Optional second line.
    pub sub: Option<String>,
    /// Typography preset.
    pub variant: TitleVariant,
    /// Vertical layout offset in pixels, passed through to the renderer.
    pub offset_y: f64,
}

/// Title typography preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleVariant {
    /// Regular scene headline.
    #[default]
    Default,
    /// Large opening headline.
    Hero,
}

/// Animated element of a scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetSpec {
    /// Messaging-channel bubble.
    ChannelBubble(BubbleSpec),
    /// Unified inbox mock-up.
    InboxCard(InboxSpec),
    /// Feature screenshot with bullets.
    FeatureShowcase(ShowcaseSpec),
    /// Row of use-case tiles.
    UseCases(UseCasesSpec),
    /// Closing call to action.
    CallToAction(CtaSpec),
}

impl WidgetSpec {
    /// Short kind name used in node ids.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::ChannelBubble(_) => "bubble",
            Self::InboxCard(_) => "inbox",
            Self::FeatureShowcase(_) => "showcase",
            Self::UseCases(_) => "use_cases",
            Self::CallToAction(_) => "cta",
        }
    }

    /// Delay after the scene start before the widget begins animating.
    pub fn delay_secs(&self) -> f64 {
        match self {
            Self::ChannelBubble(b) => b.delay_secs,
            Self::InboxCard(c) => c.delay_secs,
            Self::FeatureShowcase(s) => s.delay_secs,
            Self::UseCases(u) => u.delay_secs,
            Self::CallToAction(c) => c.delay_secs,
        }
    }
}

/// Messaging-channel bubble that pops in and drifts outward at the end of the scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BubbleSpec {
    /// Channel name.
    pub label: String,
    /// CSS color string.
    pub color: String,
    /// Channel logo relative to the assets root.
    pub icon: PathBuf,
    /// Delay after the scene start.
    pub delay_secs: f64,
    /// Target position relative to the canvas center.
    pub position: Vec2,
    /// Bubble size relative to the base bubble.
    pub size_scale: f64,
}

/// Unified inbox mock-up.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InboxSpec {
    /// Delay after the scene start.
    pub delay_secs: f64,
    /// Rows of the conversation list.
    pub conversations: Vec<Conversation>,
    /// Benefit lines next to the list.
    pub benefits: Vec<String>,
}

/// Row of the inbox mock-up.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Conversation {
    /// Contact name.
    pub name: String,
    /// Conversation subject.
    pub subject: String,
    /// Team the conversation is assigned to.
    pub team: String,
}

/// Screenshot plus bullet list presentation of a product feature.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShowcaseSpec {
    /// Delay after the scene start.
    pub delay_secs: f64,
    /// Card heading.
    pub title: String,
    /// Feature icon relative to the assets root.
    pub icon: PathBuf,
    /// Product screenshot relative to the assets root.
    pub image: PathBuf,
    /// Bullet lines.
    pub bullets: Vec<String>,
    /// Column split.
    pub layout: FeatureLayout,
    /// Bullet font size override in pixels.
    pub bullet_size: Option<f64>,
    /// Bullet padding override (`x`, `y`) in pixels.
    pub bullet_padding: Option<Vec2>,
}

/// Column split of a feature showcase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureLayout {
    /// Even split.
    #[default]
    Default,
    /// Wider text column, narrower screenshot.
    TextWide,
}

/// Row of use-case tiles that zooms slowly across its scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UseCasesSpec {
    /// Delay after the scene start.
    pub delay_secs: f64,
    /// Tiles, left to right.
    pub items: Vec<UseCaseItem>,
}

/// One use-case tile.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UseCaseItem {
    /// Tile caption.
    pub label: String,
    /// Tile icon relative to the assets root.
    pub icon: PathBuf,
}

/// Closing call to action.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CtaSpec {
    /// Delay after the scene start.
    pub delay_secs: f64,
    /// Brand logo relative to the assets root.
    pub logo: PathBuf,
    /// Main line.
    pub headline: String,
    /// Supporting line.
    pub subline: String,
    /// Text on the pop-in button.
    pub button_label: String,
}

impl Script {
    /// Scene weights in playback order.
    pub fn weights(&self) -> Vec<f64> {
        self.scenes.iter().map(|s| s.weight).collect()
    }

    /// Check everything the partitioner does not: ids, cue anchors, volumes and delays.
    pub fn validate(&self) -> ReelResult<()> {
        if self.scenes.is_empty() {
            return Err(ReelError::config("script must contain at least one scene"));
        }
        let mut ids = BTreeSet::new();
        for scene in &self.scenes {
            if scene.id.is_empty() {
                return Err(ReelError::config("scene id must not be empty"));
            }
            if !ids.insert(scene.id.as_str()) {
                return Err(ReelError::config(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }
            for w in &scene.widgets {
                let delay = w.delay_secs();
                if !delay.is_finite() || delay < 0.0 {
                    return Err(ReelError::config(format!(
                        "scene '{}': {} delay must be finite and >= 0",
                        scene.id,
                        w.kind_name()
                    )));
                }
                if let WidgetSpec::ChannelBubble(b) = w
                    && (!b.size_scale.is_finite() || b.size_scale <= 0.0)
                {
                    return Err(ReelError::config(format!(
                        "scene '{}': bubble '{}' size_scale must be finite and > 0",
                        scene.id, b.label
                    )));
                }
            }
        }

        validate_volume("music", self.music.peak_volume)?;
        if !self.music.fade_secs.is_finite() || self.music.fade_secs < 0.0 {
            return Err(ReelError::config("music fade_secs must be finite and >= 0"));
        }

        for cue in &self.sound_cues {
            if cue.scene_index >= self.scenes.len() {
                return Err(ReelError::config(format!(
                    "cue '{}' anchored to scene {} but the script has {} scenes",
                    cue.id,
                    cue.scene_index,
                    self.scenes.len()
                )));
            }
            if !cue.offset_secs.is_finite() {
                return Err(ReelError::config(format!(
                    "cue '{}' offset must be finite",
                    cue.id
                )));
            }
            validate_volume(&cue.id, cue.volume)?;
        }
        Ok(())
    }
}

fn validate_volume(what: &str, volume: f64) -> ReelResult<()> {
    if !volume.is_finite() || volume < 0.0 {
        return Err(ReelError::config(format!(
            "{what} volume must be finite and >= 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/script/model.rs"]
mod tests;
