use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use promoreel::{
    FfprobeProbe, FixedDurationProbe, FrameRange, FrameThreading, Reel, ReelConfig, ReelError,
    Rounding, promo_script, render_frames_into, resolve_timeline,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "promoreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the timeline, scene intervals and audio plan as JSON.
    Plan(PlanArgs),
    /// Print the visual tree of a single frame as JSON.
    Frame(FrameArgs),
    /// Write one visual tree per line for a range of frames.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct ReelArgs {
    /// Render config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Narration length in seconds; skips running ffprobe.
    #[arg(long)]
    duration_secs: Option<f64>,

    /// How fractional scene lengths are rounded.
    #[arg(long, value_enum, default_value_t = RoundingArg::Floor)]
    rounding: RoundingArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoundingArg {
    Floor,
    Nearest,
}

impl From<RoundingArg> for Rounding {
    fn from(r: RoundingArg) -> Self {
        match r {
            RoundingArg::Floor => Rounding::Floor,
            RoundingArg::Nearest => Rounding::Nearest,
        }
    }
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    reel: ReelArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    reel: ReelArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    reel: ReelArgs,

    /// Output path for newline-delimited JSON.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive). Defaults to 0.
    #[arg(long)]
    start: Option<u64>,

    /// Last frame (exclusive). Defaults to the end of the timeline.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args).await,
        Command::Frame(args) => cmd_frame(args).await,
        Command::Frames(args) => cmd_frames(args).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_reel(args: &ReelArgs) -> anyhow::Result<Reel> {
    let cfg = match &args.config {
        Some(path) => ReelConfig::from_path(path)?,
        None => ReelConfig::default(),
    };
    let script = promo_script();
    let timeline = match args.duration_secs {
        Some(secs) => {
            resolve_timeline(&FixedDurationProbe::new(secs), &cfg, &script.narration).await?
        }
        None => resolve_timeline(&FfprobeProbe::default(), &cfg, &script.narration)
            .await
            .context("measure narration (pass --duration-secs to skip ffprobe)")?,
    };
    Ok(Reel::with_rounding(timeline, script, args.rounding.into())?)
}

async fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let reel = load_reel(&args.reel).await?;
    let scenes: Vec<_> = reel
        .script()
        .scenes
        .iter()
        .zip(reel.scenes().intervals())
        .map(|(scene, interval)| {
            serde_json::json!({
                "id": scene.id,
                "weight": scene.weight,
                "start": interval.start,
                "duration": interval.duration,
            })
        })
        .collect();
    let plan = serde_json::json!({
        "timeline": reel.timeline(),
        "duration_secs": reel.timeline().duration_secs(),
        "scenes": scenes,
        "audio": reel.audio_plan(),
    });
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

async fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let reel = load_reel(&args.reel).await?;
    let tree = reel.render_frame(args.frame)?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

async fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let reel = load_reel(&args.reel).await?;
    let range = FrameRange::new(
        args.start.unwrap_or(0),
        args.end.unwrap_or(reel.timeline().total_frames()),
    )?;
    let threading = FrameThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let file = std::fs::File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut out = BufWriter::new(file);

    let stats = render_frames_into(&reel, range, &threading, |tree| {
        serde_json::to_writer(&mut out, &tree)
            .map_err(|e| ReelError::serde(format!("write frame {}: {e}", tree.frame)))?;
        out.write_all(b"\n").map_err(anyhow::Error::from)?;
        Ok(())
    })?;
    out.flush()
        .with_context(|| format!("flush output '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames)",
        args.out.display(),
        stats.frames_total
    );
    Ok(())
}
