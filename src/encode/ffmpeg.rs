use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::encode::encoder::{SegmentEncoder, SegmentJob};
use crate::encode::zoom::{CENTER_X_EXPR, CENTER_Y_EXPR, PRESCALE_FILTER};
use crate::foundation::error::{ZoomError, ZoomResult};

/// [`SegmentEncoder`] backed by the system `ffmpeg` binary.
#[derive(Clone, Debug)]
pub struct FfmpegEncoder {
    program: PathBuf,
}

impl FfmpegEncoder {
    /// Use `ffmpeg` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("ffmpeg")
    }

    /// Use a specific ffmpeg executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable this encoder spawns.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments rendering one zoom segment.
    pub fn segment_args(job: &SegmentJob) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-y", "-loglevel", "error", "-i"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(job.input.clone().into_os_string());
        args.push("-vf".into());
        args.push(segment_filter(job).into());
        for a in ["-pix_fmt", "yuv420p", "-c:v", "libx264"] {
            args.push(a.into());
        }
        args.push(job.output.clone().into_os_string());
        args
    }

    /// Arguments concatenating the segments listed in `manifest` into `out`.
    ///
    /// `-n` refuses to overwrite an existing render.
    pub fn concat_args(manifest: &Path, out: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-n", "-loglevel", "error", "-f", "concat", "-i"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(manifest.as_os_str().to_owned());
        args.push("-c".into());
        args.push("copy".into());
        args.push(out.as_os_str().to_owned());
        args
    }

    /// Fail with [`ZoomError::ExternalTool`] unless the program answers `-version`.
    pub fn ensure_available(&self) -> ZoomResult<()> {
        if is_ffmpeg_available(&self.program) {
            return Ok(());
        }
        Err(ZoomError::external_tool(format!(
            "ffmpeg is required for rendering, but '{}' could not be run",
            self.program.display()
        )))
    }

    fn run(&self, what: &str, args: &[OsString]) -> ZoomResult<()> {
        tracing::debug!(
            program = %self.program.display(),
            args = ?args,
            "invoking ffmpeg for {what}"
        );
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                ZoomError::external_tool(format!(
                    "failed to spawn '{}' for {what} (is it installed and on PATH?): {e}",
                    self.program.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ZoomError::external_tool(format!(
                "ffmpeg exited with status {} for {what}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentEncoder for FfmpegEncoder {
    fn render_segment(&self, job: &SegmentJob) -> ZoomResult<()> {
        let what = format!(
            "segment {} ('{}')",
            job.index,
            job.input.file_name().unwrap_or_default().to_string_lossy()
        );
        self.run(&what, &Self::segment_args(job))
    }

    fn concat(&self, manifest: &Path, out: &Path) -> ZoomResult<()> {
        self.run(
            &format!("concatenation of '{}'", manifest.display()),
            &Self::concat_args(manifest, out),
        )
    }
}

/// Pre-scale then zoompan, centered, at the job's frame count, size and rate.
pub fn segment_filter(job: &SegmentJob) -> String {
    format!(
        "{PRESCALE_FILTER},zoompan=z='{}':x='{CENTER_X_EXPR}':y='{CENTER_Y_EXPR}':d={}:s={}:fps={}",
        job.zoom, job.duration_frames, job.size, job.fps.0
    )
}

/// Return `true` when `program` can be invoked with `-version`.
pub fn is_ffmpeg_available(program: &Path) -> bool {
    Command::new(program)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    is_ffmpeg_available(Path::new("ffmpeg"))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
