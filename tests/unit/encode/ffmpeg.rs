use super::*;
use crate::encode::zoom::ZoomExpr;
use crate::foundation::core::{Fps, OutputSize};

fn job() -> SegmentJob {
    SegmentJob {
        index: 3,
        input: PathBuf::from("frames/003.png"),
        output: PathBuf::from("segments/003.mp4"),
        zoom: ZoomExpr::new(0.5).unwrap(),
        duration_frames: 25,
        fps: Fps(25),
        size: OutputSize::default(),
    }
}

fn strings(args: &[OsString]) -> Vec<String> {
    args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
}

#[test]
fn segment_filter_is_prescale_then_centered_zoompan() {
    assert_eq!(
        segment_filter(&job()),
        "scale=-2:10*ih,zoompan=z='2.000000-on/duration*1.000000':\
         x='iw/2-(iw/zoom/2)':y='ih/2-(ih/zoom/2)':d=25:s=1024x1024:fps=25"
    );
}

#[test]
fn segment_args_are_deterministic() {
    let args = strings(&FfmpegEncoder::segment_args(&job()));
    assert_eq!(args[..5], ["-y", "-loglevel", "error", "-i", "frames/003.png"]);
    assert_eq!(args[5], "-vf");
    assert_eq!(args[6], segment_filter(&job()));
    assert_eq!(
        args[7..],
        ["-pix_fmt", "yuv420p", "-c:v", "libx264", "segments/003.mp4"]
    );
    assert_eq!(args, strings(&FfmpegEncoder::segment_args(&job())));
}

#[test]
fn concat_args_stream_copy_from_manifest() {
    let args = strings(&FfmpegEncoder::concat_args(
        Path::new("segments/segments.txt"),
        Path::new("renders/render_1700000000.mp4"),
    ));
    assert_eq!(
        args,
        [
            "-n",
            "-loglevel",
            "error",
            "-f",
            "concat",
            "-i",
            "segments/segments.txt",
            "-c",
            "copy",
            "renders/render_1700000000.mp4"
        ]
    );
}

#[test]
fn missing_program_is_an_external_tool_error() {
    let enc = FfmpegEncoder::with_program("definitely-not-an-ffmpeg-binary-7f3a");
    assert!(!is_ffmpeg_available(enc.program()));

    let err = enc.render_segment(&job()).unwrap_err();
    assert!(matches!(err, ZoomError::ExternalTool(_)));
    assert!(err.to_string().contains("segment 3 ('003.png')"));
}

#[test]
fn default_program_is_ffmpeg() {
    assert_eq!(FfmpegEncoder::default().program(), Path::new("ffmpeg"));
}

#[test]
fn availability_check_fails_fast_for_missing_program() {
    let encoder = FfmpegEncoder::with_program("definitely-not-an-ffmpeg-binary");
    let err = encoder.ensure_available().unwrap_err();
    assert!(matches!(err, ZoomError::ExternalTool(_)), "{err}");
    assert!(err.to_string().contains("definitely-not-an-ffmpeg-binary"));
}
