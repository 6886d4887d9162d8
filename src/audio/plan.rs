use std::path::PathBuf;

use crate::animation::interp::{InterpOpts, interpolate};
use crate::foundation::core::Fps;
use crate::foundation::error::ReelResult;
use crate::script::model::Script;
use crate::timeline::Timeline;
use crate::timeline::cue::CueOffset;
use crate::timeline::scenes::SceneTable;

/// Sample rate the mixer positions tracks at.
pub const MIX_SAMPLE_RATE: u32 = 48_000;

/// Convert a frame offset to a sample offset, rounding to the nearest sample.
pub fn frame_to_sample(frame_delta: u64, fps: Fps, sample_rate: u32) -> u64 {
    let num = u128::from(frame_delta) * u128::from(sample_rate) * u128::from(fps.den);
    let den = u128::from(fps.num);
    ((num + (den / 2)) / den) as u64
}

/// A single audio file placed on the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioTrack {
    /// Name of the track in the plan.
    pub id: String,
    /// Audio file relative to the assets root.
    pub source: PathBuf,
    /// First frame the track is audible.
    pub start_frame: u64,
    /// `start_frame` at [`MIX_SAMPLE_RATE`].
    pub start_sample: u64,
    /// Constant playback gain.
    pub volume: f64,
}

/// Background music bed whose gain follows a fade-in/fade-out envelope.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MusicBed {
    /// Audio file relative to the assets root.
    pub source: PathBuf,
    /// Gain between the fades.
    pub peak_volume: f64,
    /// Fade length at each end, in frames.
    pub fade_frames: f64,
}

/// Everything the mixer needs: narration, music envelope and scheduled sound cues.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioPlan {
    sample_rate: u32,
    total_frames: u64,
    narration: AudioTrack,
    music: MusicBed,
    cues: Vec<AudioTrack>,
}

impl AudioPlan {
    /// Schedule the script's audio against a partitioned timeline.
    pub fn build(timeline: &Timeline, scenes: &SceneTable, script: &Script) -> ReelResult<Self> {
        let fps = timeline.fps();
        let track = |id: &str, source: PathBuf, start_frame: u64, volume: f64| AudioTrack {
            id: id.to_owned(),
            source,
            start_frame,
            start_sample: frame_to_sample(start_frame, fps, MIX_SAMPLE_RATE),
            volume,
        };

        let cues = script
            .sound_cues
            .iter()
            .map(|cue| {
                let start = CueOffset::secs(cue.scene_index, cue.offset_secs, fps)
                    .resolve(scenes.intervals())?;
                Ok(track(&cue.id, cue.source.clone(), start, cue.volume))
            })
            .collect::<ReelResult<Vec<_>>>()?;

        for c in &cues {
            tracing::debug!(cue = %c.id, start_frame = c.start_frame, "sound cue scheduled");
        }

        Ok(Self {
            sample_rate: MIX_SAMPLE_RATE,
            total_frames: timeline.total_frames(),
            narration: track("narration", script.narration.clone(), 0, 1.0),
            music: MusicBed {
                source: script.music.source.clone(),
                peak_volume: script.music.peak_volume,
                fade_frames: fps.secs_to_frames(script.music.fade_secs),
            },
            cues,
        })
    }

    /// Sample rate of every `start_sample` in the plan.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The voice-over, from frame 0 at full volume.
    pub fn narration(&self) -> &AudioTrack {
        &self.narration
    }

    /// The music bed.
    pub fn music(&self) -> &MusicBed {
        &self.music
    }

    /// Sound effects in script order.
    pub fn cues(&self) -> &[AudioTrack] {
        &self.cues
    }

    /// Music gain at `frame`: fade in over the first `fade_frames`, fade out over the last.
    pub fn music_volume(&self, frame: f64) -> ReelResult<f64> {
        let total = self.total_frames as f64;
        let fade = self.music.fade_frames;
        let fade_in = interpolate(
            frame,
            &[0.0, fade],
            &[0.0, self.music.peak_volume],
            InterpOpts::CLAMP,
        )?;
        let fade_out = interpolate(frame, &[total - fade, total], &[1.0, 0.0], InterpOpts::CLAMP)?;
        Ok(fade_in * fade_out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/plan.rs"]
mod tests;
