use crate::animation::clock::FrameCtx;
use crate::audio::plan::AudioPlan;
use crate::eval::elements::{
    ElementStyle, bubble_style, cta_button_scale, cta_style, inbox_style, showcase_style,
    title_style, use_cases_style,
};
use crate::foundation::error::{ReelError, ReelResult};
use crate::script::model::{Script, TitleSpec, WidgetSpec};
use crate::timeline::Timeline;
use crate::timeline::partition::{Rounding, SceneInterval};
use crate::timeline::scenes::SceneTable;

/// A resolved video: timeline, script, scene partition and audio plan.
///
/// Everything here is computed once in [`Reel::new`]; [`Reel::render_frame`] only reads, so a
/// `Reel` can be shared across threads.
#[derive(Clone, Debug)]
pub struct Reel {
    timeline: Timeline,
    script: Script,
    scenes: SceneTable,
    audio: AudioPlan,
}

/// The scene a frame belongs to.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ActiveScene<'a> {
    /// Position in the script.
    pub index: usize,
    /// Scene id from the script.
    pub id: &'a str,
    /// Frames since the scene started.
    pub local_frame: u64,
    /// Scene length in frames.
    pub duration: u64,
}

/// What a node draws. Layout data is borrowed from the script and passed through untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "spec", rename_all = "snake_case")]
pub enum NodeContent<'a> {
    /// Full-frame background.
    Background(&'a str),
    /// Scene headline.
    Title(&'a TitleSpec),
    /// Scene widget.
    Widget(&'a WidgetSpec),
    /// Pop-in button of the call to action, drawn inside the widget node.
    CtaButton(&'a str),
}

/// One animated node of a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualNode<'a> {
    /// Stable id: `<scene>/<kind>` or `<scene>/<kind>-<index>`.
    pub id: String,
    /// Animated properties at this frame.
    pub style: ElementStyle,
    /// What to draw.
    pub content: NodeContent<'a>,
}

/// Everything visible on one frame, back to front.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualTree<'a> {
    /// Absolute frame index.
    pub frame: u64,
    /// Scene the frame belongs to.
    pub scene: ActiveScene<'a>,
    /// Gain of the music bed at this frame.
    pub music_volume: f64,
    /// Nodes in paint order.
    pub nodes: Vec<VisualNode<'a>>,
}

impl Reel {
    /// Partition `timeline` by the script's weights and schedule its audio.
    pub fn new(timeline: Timeline, script: Script) -> ReelResult<Self> {
        Self::with_rounding(timeline, script, Rounding::Floor)
    }

    /// Like [`Reel::new`], with an explicit rounding rule for scene lengths.
    pub fn with_rounding(
        timeline: Timeline,
        script: Script,
        rounding: Rounding,
    ) -> ReelResult<Self> {
        script.validate()?;
        let scenes = SceneTable::with_rounding(&timeline, &script.weights(), rounding)?;
        let audio = AudioPlan::build(&timeline, &scenes, &script)?;
        tracing::debug!(
            total_frames = timeline.total_frames(),
            scenes = scenes.len(),
            cues = audio.cues().len(),
            "reel built"
        );
        Ok(Self {
            timeline,
            script,
            scenes,
            audio,
        })
    }

    /// The timeline this reel was built from.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The scene script.
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Scene intervals.
    pub fn scenes(&self) -> &SceneTable {
        &self.scenes
    }

    /// Narration, music envelope and scheduled cues.
    pub fn audio_plan(&self) -> &AudioPlan {
        &self.audio
    }

    /// Evaluate every animated property at `frame`.
    ///
    /// Pure: the result depends only on `frame` and the reel, so frames may be evaluated in any
    /// order, repeatedly, or in parallel.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn render_frame(&self, frame: u64) -> ReelResult<VisualTree<'_>> {
        let Some((index, interval)) = self.scenes.active_scene(frame) else {
            return Err(ReelError::evaluation(format!(
                "frame {frame} is out of bounds (total_frames {})",
                self.timeline.total_frames()
            )));
        };
        let scene = self.script.scenes.get(index).ok_or_else(|| {
            ReelError::evaluation(format!("scene {index} is missing from the script"))
        })?;

        let ctx = FrameCtx::new(frame, self.timeline.fps());
        let start = interval.start as f64;
        let duration = interval.duration as f64;

        let mut nodes = Vec::with_capacity(scene.widgets.len() + 3);
        nodes.push(VisualNode {
            id: "background".to_owned(),
            style: ElementStyle::IDENTITY,
            content: NodeContent::Background(&self.script.background),
        });
        if let Some(title) = &scene.title {
            nodes.push(VisualNode {
                id: format!("{}/title", scene.id),
                style: title_style(ctx, start, duration)?,
                content: NodeContent::Title(title),
            });
        }
        for (i, widget) in scene.widgets.iter().enumerate() {
            let id = if scene.widgets.len() == 1 {
                format!("{}/{}", scene.id, widget.kind_name())
            } else {
                format!("{}/{}-{i}", scene.id, widget.kind_name())
            };
            push_widget(ctx, interval, id, widget, &mut nodes)?;
        }

        Ok(VisualTree {
            frame,
            scene: ActiveScene {
                index,
                id: &scene.id,
                local_frame: frame - interval.start,
                duration: interval.duration,
            },
            music_volume: self.audio.music_volume(frame as f64)?,
            nodes,
        })
    }
}

fn push_widget<'a>(
    ctx: FrameCtx,
    interval: SceneInterval,
    id: String,
    widget: &'a WidgetSpec,
    nodes: &mut Vec<VisualNode<'a>>,
) -> ReelResult<()> {
    let start = interval.start as f64;
    let duration = interval.duration as f64;
    let delay = ctx.secs(widget.delay_secs());

    let style = match widget {
        WidgetSpec::ChannelBubble(b) => bubble_style(ctx, start, duration, delay, b.position)?,
        WidgetSpec::InboxCard(_) => inbox_style(ctx, start + delay)?,
        WidgetSpec::FeatureShowcase(_) => showcase_style(ctx, start + delay)?,
        WidgetSpec::UseCases(_) => use_cases_style(ctx, start + delay, duration)?,
        WidgetSpec::CallToAction(_) => cta_style(ctx, start + delay)?,
    };

    let button = match widget {
        WidgetSpec::CallToAction(cta) => Some(VisualNode {
            id: format!("{id}/button"),
            style: ElementStyle {
                scale: cta_button_scale(ctx, start + delay),
                ..ElementStyle::IDENTITY
            },
            content: NodeContent::CtaButton(&cta.button_label),
        }),
        _ => None,
    };

    nodes.push(VisualNode {
        id,
        style,
        content: NodeContent::Widget(widget),
    });
    nodes.extend(button);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
