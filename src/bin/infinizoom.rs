use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use infinizoom::{
    DownsizeOpts, EasingMode, FfmpegEncoder, Fps, RenderThreading, ZoomOpts, downsize,
    render_infinite_zoom,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "infinizoom", version)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an infinite zoom video from progressively outcropped frames (requires `ffmpeg`).
    Zoom(ZoomArgs),
    /// Downsize an image for infinite zoom outcropping.
    Downsize(DownsizeArgs),
}

#[derive(Parser, Debug)]
struct ZoomArgs {
    /// Directory containing the input frames (`.png`, zero-padded names).
    frames_dir: PathBuf,

    /// Fraction of each frame to initially crop to (match the downsize scale).
    #[arg(short = 'i', long = "crop", default_value_t = 0.7)]
    crop: f64,

    /// Duration, in seconds, of the video to render.
    #[arg(short, long, default_value_t = 10)]
    duration: u64,

    /// Animation easing mode (linear, inquad, outcubic, inoutelastic, ...).
    #[arg(short, long, default_value_t = EasingMode::Linear)]
    easing: EasingMode,

    /// Output frame rate.
    #[arg(long, default_value_t = Fps::DEFAULT.0)]
    fps: u32,

    /// Render segments concurrently.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel.
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct DownsizeArgs {
    /// Image to downsize (`.png`, `.jpg`, `.jpeg` or `.webp`).
    image: PathBuf,

    /// Fraction of the new image the original should occupy.
    #[arg(short, long, default_value_t = 0.7)]
    scale: f64,

    /// Fade the edges of the downsized image.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    transition: bool,

    /// Fraction of the downsized width used as the fade band.
    #[arg(long, default_value_t = 0.03)]
    transition_scale: f64,

    /// Convert a non-PNG source to PNG in place (deletes the original file).
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    convert_source: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Zoom(args) => cmd_zoom(args),
        Command::Downsize(args) => cmd_downsize(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_zoom(args: ZoomArgs) -> anyhow::Result<()> {
    let opts = ZoomOpts {
        initial_crop: args.crop,
        duration_secs: args.duration,
        easing: args.easing,
        fps: Fps::new(args.fps)?,
        threading: RenderThreading {
            parallel: args.parallel,
            threads: args.threads,
        },
        ..ZoomOpts::default()
    };
    opts.validate()?;

    let encoder = FfmpegEncoder::new();
    encoder.ensure_available()?;

    let report = render_infinite_zoom(&args.frames_dir, &opts, &encoder)
        .with_context(|| format!("render infinite zoom from '{}'", args.frames_dir.display()))?;

    eprintln!(
        "wrote {} ({} segments, {} frames)",
        report.output.display(),
        report.segments.len(),
        report.timeline.total_frames()
    );
    Ok(())
}

fn cmd_downsize(args: DownsizeArgs) -> anyhow::Result<()> {
    let opts = DownsizeOpts {
        scale: args.scale,
        fade: args.transition,
        fade_scale: args.transition_scale,
        convert_source: args.convert_source,
    };

    let outcome = downsize(&args.image, &opts)
        .with_context(|| format!("downsize '{}'", args.image.display()))?;

    if let Some(converted) = &outcome.converted_source {
        eprintln!("converted source to {}", converted.display());
    }
    eprintln!("wrote {}", outcome.output.display());
    Ok(())
}
