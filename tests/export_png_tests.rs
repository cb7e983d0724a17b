#![cfg(feature = "png-export")]

use chartex::export::FitTransform;
use chartex::{
    BarChart, BarChartConfig, ChartData, ChartPoint, Container, ExportError, ExportManager,
    PngExportConfig,
};

fn rendered_container() -> Container {
    let data = ChartData::labeled(vec![
        ChartPoint::new("A", 10.0),
        ChartPoint::new("B", 30.0),
        ChartPoint::new("C", 20.0),
    ])
    .expect("valid data");
    let chart = BarChart::new(data, BarChartConfig::default()).expect("chart init");
    let mut container = Container::new();
    chart.render_into(&mut container).expect("render");
    container
}

/// Width and height live in the IHDR chunk directly after the 8-byte
/// signature: 4-byte length, 4-byte type, then two big-endian u32s.
fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    assert!(bytes.len() > 24, "png too short");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "png signature");
    assert_eq!(&bytes[12..16], b"IHDR");
    let width = u32::from_be_bytes(bytes[16..20].try_into().expect("width bytes"));
    let height = u32::from_be_bytes(bytes[20..24].try_into().expect("height bytes"));
    (width, height)
}

#[test]
fn default_export_is_an_800_by_600_png() {
    let container = rendered_container();
    let manager = ExportManager::new(&container);
    let bytes = manager
        .export_png(&PngExportConfig::default())
        .expect("png export");
    assert_eq!(png_dimensions(&bytes), (800, 600));
}

#[test]
fn requested_dimensions_are_honored() {
    let container = rendered_container();
    let manager = ExportManager::new(&container);
    let bytes = manager
        .export_png(&PngExportConfig::default().with_size(320, 240))
        .expect("png export");
    assert_eq!(png_dimensions(&bytes), (320, 240));
}

#[test]
fn empty_container_fails_with_not_found() {
    let container = Container::new();
    let manager = ExportManager::new(&container);
    let err = manager
        .export_png(&PngExportConfig::default())
        .expect_err("must fail");
    assert!(matches!(err, ExportError::NotFound));
}

#[test]
fn zero_target_surface_is_a_render_error() {
    let container = rendered_container();
    let manager = ExportManager::new(&container);
    let err = manager
        .export_png(&PngExportConfig::default().with_size(0, 240))
        .expect_err("must fail");
    assert!(matches!(err, ExportError::Render(_)));
}

#[test]
fn malformed_background_color_is_a_render_error() {
    let container = rendered_container();
    let manager = ExportManager::new(&container);
    let err = manager
        .export_png(&PngExportConfig::default().with_background("not-a-color"))
        .expect_err("must fail");
    assert!(matches!(err, ExportError::Render(_)));
}

#[test]
fn file_side_effect_writes_the_encoded_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chart.png");
    let container = rendered_container();
    let manager = ExportManager::new(&container);

    let bytes = manager
        .export_png(&PngExportConfig::default().with_filename(&path))
        .expect("png export");
    assert_eq!(bytes, std::fs::read(&path).expect("artifact file"));
}

#[test]
fn fit_matches_the_documented_scale_and_centering() {
    // 800x600 source into 400x400: width-constrained, scale 0.5,
    // horizontal flush, vertical centering of the 300px scaled height.
    let fit = FitTransform::compute(800.0, 600.0, 400.0, 400.0).expect("fit");
    assert_eq!(fit.scale, 400.0 / 800.0);
    assert_eq!(fit.offset_x, 0.0);
    assert_eq!(fit.offset_y, (400.0 - 600.0 * fit.scale) / 2.0);
}
