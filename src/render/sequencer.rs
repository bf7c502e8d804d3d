use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::animation::ease::EasingMode;
use crate::encode::encoder::{SegmentEncoder, SegmentJob};
use crate::encode::zoom::{ZoomExpr, validate_crop};
use crate::foundation::core::{Fps, OutputSize};
use crate::foundation::error::{RunStage, ZoomError, ZoomResult};
use crate::timeline::plan::Timeline;

/// Name of the segment list handed to the concatenation step.
pub const MANIFEST_FILE_NAME: &str = "segments.txt";

/// Worker pool configuration for per-frame segment rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderThreading {
    /// Render segments concurrently. Off by default.
    pub parallel: bool,
    /// Worker count when `parallel` is set. `None` uses rayon's default.
    pub threads: Option<usize>,
}

/// Options for [`render_infinite_zoom`].
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomOpts {
    /// Fraction of each frame visible at the start of its segment, in `(0, 1]`.
    pub initial_crop: f64,
    /// Total video duration in whole seconds.
    pub duration_secs: u64,
    /// Curve distributing the duration across frames.
    pub easing: EasingMode,
    /// Output frame rate.
    pub fps: Fps,
    /// Output resolution.
    pub size: OutputSize,
    /// Working directory for segment files. Cleared at the start of every run.
    pub segments_dir: PathBuf,
    /// Directory receiving final renders. Created if missing, never cleared.
    pub renders_dir: PathBuf,
    /// Per-frame rendering concurrency.
    pub threading: RenderThreading,
}

impl Default for ZoomOpts {
    fn default() -> Self {
        Self {
            initial_crop: 0.7,
            duration_secs: 10,
            easing: EasingMode::Linear,
            fps: Fps::DEFAULT,
            size: OutputSize::default(),
            segments_dir: PathBuf::from("segments"),
            renders_dir: PathBuf::from("renders"),
            threading: RenderThreading::default(),
        }
    }
}

impl ZoomOpts {
    /// Check option ranges. Performs no I/O.
    pub fn validate(&self) -> ZoomResult<()> {
        validate_crop(self.initial_crop)?;
        Fps::new(self.fps.0)?;
        self.size.validate()?;
        if self.threading.threads == Some(0) {
            return Err(ZoomError::usage(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// One rendered zoom segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// 0-based index, equal to the source frame's position.
    pub index: usize,
    /// Source still frame.
    pub source: PathBuf,
    /// Output frames in this segment.
    pub duration_frames: u64,
    /// Rendered segment file.
    pub output: PathBuf,
}

/// Result of a successful run.
#[derive(Clone, Debug)]
pub struct RenderReport {
    /// Planned timing.
    pub timeline: Timeline,
    /// Segments in manifest order.
    pub segments: Vec<Segment>,
    /// Segment list passed to the concatenation step.
    pub manifest_path: PathBuf,
    /// Final concatenated video.
    pub output: PathBuf,
}

/// Render every PNG frame in `frames_dir` as an eased zoom segment and concatenate them.
///
/// Steps run strictly in order: init (clear segments dir, ensure renders dir), render one
/// segment per frame, write the manifest, concatenate. The first failure aborts the run;
/// files written before it are left in place.
#[tracing::instrument(skip(opts, encoder), fields(easing = %opts.easing, duration = opts.duration_secs))]
pub fn render_infinite_zoom(
    frames_dir: &Path,
    opts: &ZoomOpts,
    encoder: &dyn SegmentEncoder,
) -> ZoomResult<RenderReport> {
    opts.validate()?;
    let zoom = ZoomExpr::new(opts.initial_crop)?;

    let frames = collect_frames(frames_dir)?;
    if frames.is_empty() {
        return Err(ZoomError::usage(format!(
            "no .png frames found in '{}'",
            frames_dir.display()
        )));
    }
    let timeline = Timeline::plan(opts.duration_secs, frames.len(), opts.easing, opts.fps)?;
    tracing::info!(
        frames = frames.len(),
        total_frames = timeline.total_frames(),
        "planned zoom timeline"
    );

    prepare_dirs(&opts.segments_dir, &opts.renders_dir)?;

    let jobs: Vec<SegmentJob> = frames
        .iter()
        .zip(&timeline.segments)
        .map(|(frame, plan)| SegmentJob {
            index: plan.index,
            input: frame.clone(),
            output: opts.segments_dir.join(segment_file_name(plan.index)),
            zoom,
            duration_frames: plan.duration_frames,
            fps: opts.fps,
            size: opts.size,
        })
        .collect();

    render_segments(&jobs, encoder, &opts.threading)?;

    let segments: Vec<Segment> = jobs
        .into_iter()
        .map(|job| Segment {
            index: job.index,
            source: job.input,
            duration_frames: job.duration_frames,
            output: job.output,
        })
        .collect();

    let manifest = opts.segments_dir.join(MANIFEST_FILE_NAME);
    write_manifest(&manifest, &segments)
        .map_err(|e| e.at(RunStage::Manifest, manifest.display().to_string()))?;
    tracing::info!(manifest = %manifest.display(), "wrote segment manifest");

    let output = opts
        .renders_dir
        .join(format!("render_{}.mp4", chrono::Utc::now().timestamp()));
    encoder
        .concat(&manifest, &output)
        .map_err(|e| e.at(RunStage::Concat, output.display().to_string()))?;
    tracing::info!(output = %output.display(), "concatenated segments");

    Ok(RenderReport {
        timeline,
        segments,
        manifest_path: manifest,
        output,
    })
}

/// PNG files directly inside `dir`, sorted by file name. Other entries are skipped.
pub fn collect_frames(dir: &Path) -> ZoomResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        ZoomError::io(format!(
            "failed to open frames directory '{}': {e}",
            dir.display()
        ))
    })?;

    let mut frames = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            ZoomError::io(format!(
                "failed to list frames directory '{}': {e}",
                dir.display()
            ))
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "png") {
            frames.push(path);
        }
    }
    frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(frames)
}

/// `7` -> `007.mp4`.
pub fn segment_file_name(index: usize) -> String {
    format!("{index:03}.mp4")
}

/// Write one `file NNN.mp4` line per segment, in the given order.
pub fn write_manifest(path: &Path, segments: &[Segment]) -> ZoomResult<()> {
    let file = File::create(path).map_err(|e| {
        ZoomError::io(format!(
            "failed to create segment list '{}': {e}",
            path.display()
        ))
    })?;
    let mut writer = BufWriter::new(file);
    for seg in segments {
        writeln!(writer, "file {}", segment_file_name(seg.index)).map_err(|e| {
            ZoomError::io(format!(
                "failed to write segment list '{}': {e}",
                path.display()
            ))
        })?;
    }
    writer.flush().map_err(|e| {
        ZoomError::io(format!(
            "failed to flush segment list '{}': {e}",
            path.display()
        ))
    })?;
    Ok(())
}

fn prepare_dirs(segments_dir: &Path, renders_dir: &Path) -> ZoomResult<()> {
    let subject = segments_dir.display().to_string();
    match std::fs::remove_dir_all(segments_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(ZoomError::directory(format!(
                "failed to clear segments directory: {e}"
            ))
            .at(RunStage::Init, subject));
        }
    }
    std::fs::create_dir_all(segments_dir).map_err(|e| {
        ZoomError::directory(format!("failed to create segments directory: {e}"))
            .at(RunStage::Init, subject)
    })?;
    std::fs::create_dir_all(renders_dir).map_err(|e| {
        ZoomError::directory(format!("failed to create renders directory: {e}"))
            .at(RunStage::Init, renders_dir.display().to_string())
    })?;
    tracing::info!(
        segments = %segments_dir.display(),
        renders = %renders_dir.display(),
        "prepared working directories"
    );
    Ok(())
}

fn render_segments(
    jobs: &[SegmentJob],
    encoder: &dyn SegmentEncoder,
    threading: &RenderThreading,
) -> ZoomResult<()> {
    if !threading.parallel {
        for job in jobs {
            render_one(job, encoder)?;
        }
        return Ok(());
    }

    let pool = build_thread_pool(threading.threads)?;
    let results: Vec<ZoomResult<()>> =
        pool.install(|| jobs.par_iter().map(|job| render_one(job, encoder)).collect());
    // Report the lowest failing index, as a sequential run would.
    results.into_iter().collect()
}

fn render_one(job: &SegmentJob, encoder: &dyn SegmentEncoder) -> ZoomResult<()> {
    let frame = job.input.file_name().unwrap_or_default().to_string_lossy();
    if job.duration_frames == 0 {
        tracing::warn!(segment = job.index, %frame, "segment has zero duration");
    }
    encoder.render_segment(job).map_err(|e| {
        e.at(
            RunStage::Render,
            format!("segment {} (frame '{frame}')", job.index),
        )
    })?;
    tracing::info!(
        segment = job.index,
        %frame,
        frames = job.duration_frames,
        "rendered segment"
    );
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> ZoomResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ZoomError::Other(anyhow::Error::new(e).context("build rayon thread pool")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequencer.rs"]
mod tests;
