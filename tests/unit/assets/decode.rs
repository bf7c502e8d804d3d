use super::*;
use image::{Rgb, RgbImage};

fn write_jpeg(path: &Path) {
    let img = RgbImage::from_pixel(8, 6, Rgb([200, 40, 10]));
    DynamicImage::ImageRgb8(img)
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

#[test]
fn format_is_inferred_from_extension() {
    assert_eq!(
        SourceFormat::from_path(Path::new("a/000.png")).unwrap(),
        SourceFormat::Png
    );
    assert_eq!(
        SourceFormat::from_path(Path::new("b.JPG")).unwrap(),
        SourceFormat::Jpeg
    );
    assert_eq!(
        SourceFormat::from_path(Path::new("b.jpeg")).unwrap(),
        SourceFormat::Jpeg
    );
    assert_eq!(
        SourceFormat::from_path(Path::new("c.webp")).unwrap(),
        SourceFormat::Webp
    );
    assert!(SourceFormat::Png.is_canonical());
    assert!(!SourceFormat::Webp.is_canonical());
}

#[test]
fn unknown_extension_is_unsupported() {
    for name in ["frame.gif", "frame.tiff", "frame"] {
        let err = SourceFormat::from_path(Path::new(name)).unwrap_err();
        assert!(matches!(err, ZoomError::UnsupportedFormat(_)), "{name}");
    }
}

#[test]
fn unsupported_extension_fails_before_opening() {
    let err = load_image(Path::new("does/not/exist.bmp")).unwrap_err();
    assert!(matches!(err, ZoomError::UnsupportedFormat(_)));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_image(&dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, ZoomError::Io(_)));
}

#[test]
fn garbage_bytes_are_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png").unwrap();
    let err = load_image(&path).unwrap_err();
    assert!(matches!(err, ZoomError::Decode(_)));
    assert!(err.to_string().contains("broken.png"));
}

#[test]
fn jpeg_decodes_with_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.jpg");
    write_jpeg(&path);
    let (img, format) = load_image(&path).unwrap();
    assert_eq!(format, SourceFormat::Jpeg);
    assert_eq!((img.width(), img.height()), (8, 6));
}

#[test]
fn conversion_writes_png_then_removes_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.jpeg");
    write_jpeg(&path);
    let (img, _) = load_image(&path).unwrap();

    let converted = convert_source_to_png(&img, &path).unwrap();
    assert_eq!(converted, dir.path().join("photo.png"));
    assert!(converted.exists());
    assert!(!path.exists());

    let (back, format) = load_image(&converted).unwrap();
    assert_eq!(format, SourceFormat::Png);
    assert_eq!((back.width(), back.height()), (8, 6));
}

#[test]
fn failed_png_write_keeps_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.jpg");
    write_jpeg(&path);
    let (img, _) = load_image(&path).unwrap();

    // A directory squatting on the target name makes the PNG write fail.
    std::fs::create_dir(dir.path().join("photo.png")).unwrap();
    assert!(convert_source_to_png(&img, &path).is_err());
    assert!(path.exists());
}
