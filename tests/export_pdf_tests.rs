use chartex::{
    ChartData, Container, ExportManager, PdfExportConfig, ScatterChart, ScatterChartConfig,
    ScatterPoint,
};

fn rendered_container() -> Container {
    let data = ChartData::xy(vec![
        ScatterPoint::new(0.0, 0.0),
        ScatterPoint::new(1.0, 1.0),
        ScatterPoint::new(2.0, 2.0),
    ])
    .expect("valid data");
    let chart = ScatterChart::new(data, ScatterChartConfig::default()).expect("chart init");
    let mut container = Container::new();
    chart.render_into(&mut container).expect("render");
    container
}

#[cfg(not(feature = "pdf-export"))]
#[test]
fn missing_pdf_capability_is_reported_not_swallowed() {
    use chartex::ExportError;

    let container = rendered_container();
    let manager = ExportManager::new(&container);
    let err = manager
        .export_pdf(&PdfExportConfig::default())
        .expect_err("must fail");
    assert!(matches!(err, ExportError::DependencyMissing(_)));
}

#[cfg(feature = "pdf-export")]
#[test]
fn export_produces_a_pdf_document() {
    let container = rendered_container();
    let manager = ExportManager::new(&container);
    let bytes = manager
        .export_pdf(
            &PdfExportConfig::default()
                .with_title("Scatter report")
                .with_author("qa")
                .with_subject("regression fixture"),
        )
        .expect("pdf export");
    assert!(bytes.starts_with(b"%PDF"));
}

#[cfg(feature = "pdf-export")]
#[test]
fn empty_container_fails_before_composition() {
    use chartex::ExportError;

    let container = Container::new();
    let manager = ExportManager::new(&container);
    let err = manager
        .export_pdf(&PdfExportConfig::default())
        .expect_err("must fail");
    assert!(matches!(err, ExportError::NotFound));
}
