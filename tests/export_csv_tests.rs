use chartex::{ChartData, ChartPoint, ScatterPoint, export_csv};

#[test]
fn labeled_export_matches_the_contract_byte_for_byte() {
    let data = ChartData::labeled(vec![
        ChartPoint::new("Q1", 120.0),
        ChartPoint::new("Q2", 180.0).with_color("#10B981"),
    ])
    .expect("valid data");

    let csv = export_csv(&data, None).expect("csv export");
    assert_eq!(csv, "Label,Value,Color\nQ1,120,\nQ2,180,#10B981\n");
}

#[test]
fn positioned_export_uses_the_xy_header() {
    let data = ChartData::xy(vec![
        ScatterPoint::new(0.5, 1.5).with_label("a").with_color("#111111"),
        ScatterPoint::new(2.0, 3.0),
    ])
    .expect("valid data");

    let csv = export_csv(&data, None).expect("csv export");
    assert_eq!(csv, "X,Y,Label,Color\n0.5,1.5,a,#111111\n2,3,,\n");
}

#[test]
fn empty_dataset_still_emits_the_header() {
    let data = ChartData::labeled(vec![]).expect("valid data");
    let csv = export_csv(&data, None).expect("csv export");
    assert_eq!(csv, "Label,Value,Color\n");
}

#[test]
fn text_is_returned_even_when_a_file_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.csv");
    let data = ChartData::labeled(vec![ChartPoint::new("Q1", 1.0)]).expect("valid data");

    let csv = export_csv(&data, Some(&path)).expect("csv export");
    assert_eq!(csv, std::fs::read_to_string(&path).expect("artifact file"));
}
