use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use choreo::{
    Choreographer, ChoreographyConfig, Frame, MobileGate, Preset, Progress, RecordingTarget,
    Viewport, compute_state, map_segments,
};

#[derive(Parser, Debug)]
#[command(name = "choreo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the animation state at one progress value.
    Sample(SampleArgs),
    /// Drive a choreographer across the pinned region and print one JSON line per step.
    Sweep(SweepArgs),
    /// Print a built-in configuration as JSON.
    Preset(PresetArgs),
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PresetArg {
    Cards,
    Showcase,
}

impl From<PresetArg> for Preset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Cards => Preset::Cards,
            PresetArg::Showcase => Preset::Showcase,
        }
    }
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Built-in choreography.
    #[arg(long, value_enum, default_value_t = PresetArg::Showcase)]
    preset: PresetArg,

    /// JSON config file; takes precedence over `--preset`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in CSS px.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height in CSS px.
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

impl SceneArgs {
    fn load(&self) -> anyhow::Result<ChoreographyConfig> {
        match &self.config {
            Some(path) => ChoreographyConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display())),
            None => Ok(Preset::from(self.preset).config()),
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

#[derive(Args, Debug)]
struct SampleArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Progress through the pinned region; clamped to [0, 1].
    #[arg(long, allow_negative_numbers = true)]
    progress: f64,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of intervals; `steps + 1` positions are visited.
    #[arg(long, default_value_t = 20)]
    steps: usize,

    /// Scroll back to the start after reaching the end.
    #[arg(long, default_value_t = false)]
    round_trip: bool,

    /// Simulated frame rate; enables scrub smoothing and timed transitions.
    #[arg(long)]
    fps: Option<f64>,
}

#[derive(Args, Debug)]
struct PresetArgs {
    /// Preset to print.
    #[arg(long, value_enum)]
    name: PresetArg,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let config = args.scene.load()?;
    let viewport = args.scene.viewport();
    let resolved = config.breakpoints.resolve(viewport);
    let progress = Progress::new(args.progress);

    let out = serde_json::json!({
        "progress": progress,
        "breakpoint": resolved.breakpoint,
        "blocked": MobileGate::is_blocked_width(viewport.width),
        "segments": map_segments(progress, &config),
        "state": compute_state(progress, &resolved, &config),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("--steps must be >= 1");
    }
    if let Some(fps) = args.fps {
        if !(fps.is_finite() && fps > 0.0) {
            anyhow::bail!("--fps must be > 0");
        }
    }

    let config = args.scene.load()?;
    let mut choreo = Choreographer::new(config, args.scene.viewport(), 0.0)?;
    let mut target = RecordingTarget::new();

    let mut positions: Vec<f64> = (0..=args.steps)
        .map(|i| i as f64 / args.steps as f64)
        .collect();
    if args.round_trip {
        positions.extend((0..args.steps).rev().map(|i| i as f64 / args.steps as f64));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut event_count = 0usize;
    for (step, p) in positions.into_iter().enumerate() {
        let scroll = choreo.track().offset_for(Progress::new(p));
        let frame = match args.fps {
            Some(fps) => Frame::timed(scroll, step as f64 / fps),
            None => Frame::at(scroll),
        };
        let Some(report) = choreo.tick(frame, &mut target) else {
            continue;
        };
        event_count += report.events.len();
        let line = serde_json::json!({
            "step": step,
            "scroll": scroll,
            "report": report,
        });
        writeln!(out, "{}", serde_json::to_string(&line)?).context("write sweep line")?;
    }

    tracing::info!(
        events = event_count,
        writes = target.writes,
        commits = target.commits,
        "sweep finished"
    );
    Ok(())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let preset = Preset::from(args.name);
    println!("{}", preset.config().to_json_pretty()?);
    tracing::debug!(preset = preset.name(), "printed preset");
    Ok(())
}
