use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::foundation::error::{ZoomError, ZoomResult};

/// Raster formats accepted as downsize input. PNG is the canonical format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    /// `.png`
    Png,
    /// `.jpg` / `.jpeg`
    Jpeg,
    /// `.webp`
    Webp,
}

impl SourceFormat {
    /// Infer the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> ZoomResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("jpg" | "jpeg") => Ok(Self::Jpeg),
            Some("webp") => Ok(Self::Webp),
            _ => Err(ZoomError::unsupported_format(format!(
                "'{}' (expected .png, .jpg, .jpeg or .webp)",
                path.display()
            ))),
        }
    }

    /// Return `true` for the canonical output format.
    pub fn is_canonical(self) -> bool {
        self == Self::Png
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Webp => ImageFormat::WebP,
        }
    }
}

/// Decode the image at `path`, with the decoder chosen by extension.
pub fn load_image(path: &Path) -> ZoomResult<(DynamicImage, SourceFormat)> {
    let format = SourceFormat::from_path(path)?;
    let file = File::open(path)
        .map_err(|e| ZoomError::io(format!("failed to open image '{}': {e}", path.display())))?;
    let img = image::load(BufReader::new(file), format.image_format()).map_err(|e| {
        ZoomError::decode(format!(
            "failed to decode {format:?} image '{}': {e}",
            path.display()
        ))
    })?;
    Ok((img, format))
}

/// Encode `img` as PNG at `path`, flushed and synced to disk before returning.
pub fn write_png(img: &DynamicImage, path: &Path) -> ZoomResult<()> {
    let file = File::create(path)
        .map_err(|e| ZoomError::io(format!("failed to create '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, ImageFormat::Png).map_err(|e| {
        ZoomError::encode(format!("failed to encode PNG '{}': {e}", path.display()))
    })?;
    writer
        .flush()
        .map_err(|e| ZoomError::io(format!("failed to flush '{}': {e}", path.display())))?;
    let file = writer
        .into_inner()
        .map_err(|e| ZoomError::io(format!("failed to flush '{}': {e}", path.display())))?;
    file.sync_all()
        .map_err(|e| ZoomError::io(format!("failed to sync '{}': {e}", path.display())))?;
    Ok(())
}

/// Replace a non-PNG source with a PNG sibling (`photo.jpg` -> `photo.png`).
///
/// Irreversible: the original file is deleted, but only after the PNG copy has been fully
/// written and synced.
pub fn convert_source_to_png(img: &DynamicImage, source: &Path) -> ZoomResult<PathBuf> {
    let target = source.with_extension("png");
    write_png(img, &target)?;
    std::fs::remove_file(source).map_err(|e| {
        ZoomError::io(format!(
            "wrote '{}' but failed to remove original '{}': {e}",
            target.display(),
            source.display()
        ))
    })?;
    tracing::info!(
        source = %source.display(),
        converted = %target.display(),
        "converted source image to PNG"
    );
    Ok(target)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
