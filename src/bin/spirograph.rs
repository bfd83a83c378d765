use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use spirograph::{
    AnimationConfig, Cohort, Curve, CurveId, CurveParams, DEFAULT_STEP_DEGREES, ManualScheduler,
    ParamSource, ParameterSampler, Point, RasterStyle, RealTimeScheduler, RecordingSurface, Rgb,
    Scheduler, SurfaceBounds, rasterize,
};

#[derive(Parser, Debug)]
#[command(name = "spirograph", version, about = "Draw and animate spirographs")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw one curve in a single pass and write it as a PNG.
    Draw(DrawArgs),
    /// Animate a cohort of random curves and write PNG snapshots.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct DrawArgs {
    /// Outer radius R, inner radius r and hole ratio l. Random when omitted.
    #[arg(long, num_args = 3, value_names = ["R", "r", "l"], allow_negative_numbers = true)]
    sparams: Option<Vec<f64>>,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Degrees between consecutive points.
    #[arg(long, default_value_t = DEFAULT_STEP_DEGREES)]
    step: u32,

    /// Seed for the random parameters used when `--sparams` is omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Stroke width in pixels.
    #[arg(long, default_value_t = 1.0)]
    line_width: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// JSON animation config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of curves.
    #[arg(long)]
    curves: Option<usize>,

    /// Surface width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Delay between ticks in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Degrees each curve advances per tick.
    #[arg(long)]
    step: Option<u32>,

    /// RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 2000)]
    ticks: u64,

    /// Sleep between ticks instead of running as fast as possible.
    #[arg(long)]
    realtime: bool,

    /// Also write a snapshot every N ticks (0 disables).
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,

    /// Output directory for snapshots.
    #[arg(long, default_value = "spiro-out")]
    out_dir: PathBuf,

    /// Stroke width in pixels.
    #[arg(long, default_value_t = 1.0)]
    line_width: f64,

    /// Print the parameters of the last generation as JSON on stdout.
    #[arg(long)]
    dump_params: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Draw(args) => cmd_draw(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn radius(v: f64, name: &str) -> anyhow::Result<u32> {
    anyhow::ensure!(
        v.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&v),
        "{name} must be a non-negative number, got {v}"
    );
    Ok(v.trunc() as u32)
}

fn cmd_draw(args: DrawArgs) -> anyhow::Result<()> {
    let bounds = SurfaceBounds::new(args.width, args.height)?;

    let params = match args.sparams.as_deref() {
        Some(&[big_r, r, l]) => CurveParams {
            center: Point::ZERO,
            color: Rgb::BLACK,
            outer_radius: radius(big_r, "R")?,
            inner_radius: radius(r, "r")?,
            hole_ratio: l,
        },
        Some(other) => anyhow::bail!("--sparams takes exactly 3 values, got {}", other.len()),
        None => {
            let mut sampler = match args.seed {
                Some(seed) => ParameterSampler::seeded(seed),
                None => ParameterSampler::from_entropy(),
            };
            CurveParams {
                center: Point::ZERO,
                ..sampler.sample(bounds)?
            }
        }
    };

    let mut surface = RecordingSurface::new();
    let mut curve = Curve::new(CurveId(0), &params, args.step).with_context(|| {
        format!(
            "build curve R={} r={} l={}",
            params.outer_radius, params.inner_radius, params.hole_ratio
        )
    })?;
    curve.render_full(&mut surface);

    let style = RasterStyle {
        line_width: args.line_width,
        ..RasterStyle::default()
    };
    rasterize(&surface, bounds, &style)?.save_png(&args.out)?;

    eprintln!(
        "drew R={} r={} l={} over {} degrees",
        params.outer_radius,
        params.inner_radius,
        params.hole_ratio,
        curve.model().rotation_period_degrees()
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn animation_config(args: &AnimateArgs) -> anyhow::Result<AnimationConfig> {
    let mut cfg = match &args.config {
        Some(path) => AnimationConfig::load(path)?,
        None => AnimationConfig::default(),
    };
    if let Some(v) = args.curves {
        cfg.curves = v;
    }
    if let Some(v) = args.width {
        cfg.width = v;
    }
    if let Some(v) = args.height {
        cfg.height = v;
    }
    if let Some(v) = args.tick_ms {
        cfg.tick_interval_ms = v;
    }
    if let Some(v) = args.step {
        cfg.step_degrees = v;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn snapshot_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("spiro-{name}.png"))
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let cfg = animation_config(&args)?;
    let settings = cfg.settings()?;
    let bounds = settings.bounds;
    let style = RasterStyle {
        line_width: args.line_width,
        ..RasterStyle::default()
    };

    let mut surface = RecordingSurface::new();
    let mut cohort = Cohort::new(settings, cfg.sampler(), &mut surface)?;

    let mut scheduler: Box<dyn Scheduler> = if args.realtime {
        Box::new(RealTimeScheduler::with_budget(args.ticks))
    } else {
        Box::new(ManualScheduler::new(args.ticks))
    };

    let mut written = 0usize;
    let ticks = spirograph::run(
        &mut cohort,
        &mut surface,
        scheduler.as_mut(),
        |cohort, surface, tick| {
            let n = cohort.ticks();
            let finished = !tick.restarted && tick.completed == cohort.curve_count();
            let name = if finished {
                Some(format!("gen{:04}", cohort.generation()))
            } else if args.snapshot_every > 0 && n % args.snapshot_every == 0 {
                Some(format!("tick{n:06}"))
            } else {
                None
            };
            if let Some(name) = name {
                rasterize(surface, bounds, &style)?
                    .save_png(&snapshot_path(&args.out_dir, &name))?;
                written += 1;
            }
            Ok(())
        },
    )?;

    let final_path = snapshot_path(&args.out_dir, "final");
    rasterize(&surface, bounds, &style)?.save_png(&final_path)?;
    written += 1;

    if args.dump_params {
        let params: Vec<CurveParams> = cohort.curves().iter().map(Curve::params).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&params).context("serialize curve parameters")?
        );
    }

    eprintln!(
        "ran {ticks} ticks over {} generations, wrote {written} images to {}",
        cohort.generation() + 1,
        args.out_dir.display()
    );
    Ok(())
}
