use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(ZoomError::usage("x").to_string().contains("usage error:"));
    assert!(ZoomError::io("x").to_string().contains("io error:"));
    assert!(
        ZoomError::unsupported_format("x")
            .to_string()
            .contains("unsupported image format:")
    );
    assert!(ZoomError::decode("x").to_string().contains("decode error:"));
    assert!(ZoomError::encode("x").to_string().contains("encode error:"));
    assert!(
        ZoomError::external_tool("x")
            .to_string()
            .contains("external tool error:")
    );
    assert!(
        ZoomError::directory("x")
            .to_string()
            .contains("directory error:")
    );
}

#[test]
fn stage_wraps_and_reports_step() {
    let err =
        ZoomError::external_tool("exited with status 1").at(RunStage::Render, "frame '003.png'");
    assert_eq!(err.stage(), Some(RunStage::Render));
    let msg = err.to_string();
    assert!(msg.starts_with("render step failed for frame '003.png':"));
    assert!(msg.contains("exited with status 1"));

    assert_eq!(ZoomError::usage("x").stage(), None);
    assert_eq!(RunStage::Concat.to_string(), "concat");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ZoomError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
