use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use rand::Rng;

use crate::assets::decode::{convert_source_to_png, load_image, write_png};
use crate::foundation::error::{ZoomError, ZoomResult};

/// Options for [`downsize`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DownsizeOpts {
    /// Fraction of the original width the shrunken frame occupies, in `(0, 1]`.
    pub scale: f64,
    /// Fade the four borders of the shrunken frame into transparency.
    pub fade: bool,
    /// Fade band width as a fraction of the shrunken width, in `[0, 1]`.
    pub fade_scale: f64,
    /// Replace a non-PNG source with a PNG copy. Deletes the original.
    pub convert_source: bool,
}

impl Default for DownsizeOpts {
    fn default() -> Self {
        Self {
            scale: 0.7,
            fade: true,
            fade_scale: 0.03,
            convert_source: true,
        }
    }
}

impl DownsizeOpts {
    /// Check option ranges.
    pub fn validate(&self) -> ZoomResult<()> {
        if !(self.scale > 0.0 && self.scale <= 1.0) {
            return Err(ZoomError::usage(format!(
                "downsize scale must be in (0, 1], got {}",
                self.scale
            )));
        }
        if !(0.0..=1.0).contains(&self.fade_scale) {
            return Err(ZoomError::usage(format!(
                "transition scale must be in [0, 1], got {}",
                self.fade_scale
            )));
        }
        Ok(())
    }
}

/// Files produced by [`downsize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownsizeOutcome {
    /// The `<stem>_downsized.png` canvas.
    pub output: PathBuf,
    /// PNG that replaced a non-PNG source, when conversion happened.
    pub converted_source: Option<PathBuf>,
}

/// Pixel rectangle occupied by the shrunken frame on its canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Prepare a frame for outpainting: shrink it onto a transparent canvas of its original size.
///
/// Uses the thread-local RNG for the edge fade; see [`downsize_with_rng`].
pub fn downsize(path: &Path, opts: &DownsizeOpts) -> ZoomResult<DownsizeOutcome> {
    downsize_with_rng(path, opts, &mut rand::thread_rng())
}

/// [`downsize`] with an explicit randomness source for the edge fade.
#[tracing::instrument(skip(opts, rng), fields(scale = opts.scale, fade = opts.fade))]
pub fn downsize_with_rng<R: Rng + ?Sized>(
    path: &Path,
    opts: &DownsizeOpts,
    rng: &mut R,
) -> ZoomResult<DownsizeOutcome> {
    opts.validate()?;

    let (img, format) = load_image(path)?;

    let converted_source = if !format.is_canonical() && opts.convert_source {
        Some(convert_source_to_png(&img, path)?)
    } else {
        None
    };

    let (mut canvas, region) = shrink_onto_canvas(&img, opts.scale);

    if opts.fade {
        let transition = (opts.fade_scale * f64::from(region.width)).floor() as u32;
        tracing::debug!(transition, ?region, "applying edge fade");
        apply_edge_fade(&mut canvas, region, transition, rng);
    }

    let output = downsized_path(path);
    write_png(&DynamicImage::ImageRgba8(canvas), &output)?;
    tracing::info!(
        source = %path.display(),
        output = %output.display(),
        "wrote downsized frame"
    );

    Ok(DownsizeOutcome {
        output,
        converted_source,
    })
}

/// `dir/frame.jpg` -> `dir/frame_downsized.png`.
pub fn downsized_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    path.with_file_name(format!("{stem}_downsized.png"))
}

/// Resize `img` to `scale` of its width (aspect preserved, Lanczos3) and center it on a
/// transparent canvas with the original dimensions.
pub fn shrink_onto_canvas(img: &DynamicImage, scale: f64) -> (RgbaImage, Region) {
    let (width, height) = (img.width(), img.height());
    let new_width = ((f64::from(width) * scale).floor() as u32).clamp(1, width.max(1));
    let new_height = ((f64::from(height) * f64::from(new_width) / f64::from(width)).round()
        as u32)
        .clamp(1, height.max(1));

    let resized = imageops::resize(&img.to_rgba8(), new_width, new_height, FilterType::Lanczos3);

    let region = Region {
        x: width / 2 - new_width / 2,
        y: height / 2 - new_height / 2,
        width: new_width,
        height: new_height,
    };

    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    imageops::replace(
        &mut canvas,
        &resized,
        i64::from(region.x),
        i64::from(region.y),
    );
    (canvas, region)
}

/// Randomly clear pixels near the four borders of `region`.
///
/// For each border in turn (top, left, bottom, right), a pixel at distance `d` from that
/// border with `d < transition` is made fully transparent when a uniform draw in `[0, 1)` is
/// `>= d / transition`. Border pixels are therefore always cleared and pixels `transition`
/// or more inside are never touched by that pass. Passes only ever clear.
pub fn apply_edge_fade<R: Rng + ?Sized>(
    canvas: &mut RgbaImage,
    region: Region,
    transition: u32,
    rng: &mut R,
) {
    if transition == 0 || region.width == 0 || region.height == 0 {
        return;
    }
    let x_end = region.x + region.width;
    let y_end = region.y + region.height;
    let band_h = transition.min(region.height);
    let band_w = transition.min(region.width);

    // top
    for x in region.x..x_end {
        for d in 0..band_h {
            fade_pixel(canvas, x, region.y + d, d, transition, rng);
        }
    }
    // left
    for d in 0..band_w {
        for y in region.y..y_end {
            fade_pixel(canvas, region.x + d, y, d, transition, rng);
        }
    }
    // bottom
    for x in region.x..x_end {
        for d in 0..band_h {
            fade_pixel(canvas, x, y_end - 1 - d, d, transition, rng);
        }
    }
    // right
    for d in 0..band_w {
        for y in region.y..y_end {
            fade_pixel(canvas, x_end - 1 - d, y, d, transition, rng);
        }
    }
}

fn fade_pixel<R: Rng + ?Sized>(
    canvas: &mut RgbaImage,
    x: u32,
    y: u32,
    distance: u32,
    transition: u32,
    rng: &mut R,
) {
    if rng.r#gen::<f64>() >= f64::from(distance) / f64::from(transition) {
        canvas.put_pixel(x, y, Rgba([0, 0, 0, 0]));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/downsize.rs"]
mod tests;
