use chartex::export::FitTransform;
use chartex::{ChartData, ChartPoint, ScatterPoint, export_csv, export_json};
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _-]{1,12}"
}

fn color_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("#[0-9A-F]{6}")
}

fn labeled_points() -> impl Strategy<Value = Vec<ChartPoint>> {
    prop::collection::vec(
        (label_strategy(), -1_000_000.0f64..1_000_000.0, color_strategy()),
        0..24,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(label, value, color)| ChartPoint {
                label,
                value,
                color,
            })
            .collect()
    })
}

fn xy_points() -> impl Strategy<Value = Vec<ScatterPoint>> {
    prop::collection::vec(
        (
            -1_000.0f64..1_000.0,
            -1_000.0f64..1_000.0,
            prop::option::of(label_strategy()),
            color_strategy(),
        ),
        0..24,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(x, y, label, color)| ScatterPoint { x, y, label, color })
            .collect()
    })
}

proptest! {
    #[test]
    fn labeled_csv_has_header_plus_one_row_per_datum(points in labeled_points()) {
        let expected = points.len() + 1;
        let data = ChartData::Labeled(points);
        let csv = export_csv(&data, None).expect("csv export");
        prop_assert_eq!(csv.lines().count(), expected);
        prop_assert!(csv.starts_with("Label,Value,Color\n"));
    }

    #[test]
    fn xy_csv_has_header_plus_one_row_per_datum(points in xy_points()) {
        let expected = points.len() + 1;
        let data = ChartData::Xy(points);
        let csv = export_csv(&data, None).expect("csv export");
        prop_assert_eq!(csv.lines().count(), expected);
        prop_assert!(csv.starts_with("X,Y,Label,Color\n"));
    }

    #[test]
    fn json_round_trips_labeled_data(points in labeled_points()) {
        let data = ChartData::Labeled(points.clone());
        let json = export_json(&data, None).expect("json export");
        let parsed: Vec<ChartPoint> = serde_json::from_str(&json).expect("parse back");
        prop_assert_eq!(parsed, points);
    }

    #[test]
    fn json_round_trips_xy_data(points in xy_points()) {
        let data = ChartData::Xy(points.clone());
        let json = export_json(&data, None).expect("json export");
        let parsed: Vec<ScatterPoint> = serde_json::from_str(&json).expect("parse back");
        prop_assert_eq!(parsed, points);
    }

    #[test]
    fn fit_scale_is_the_min_ratio_and_offsets_center(
        source_w in 1.0f64..4_000.0,
        source_h in 1.0f64..4_000.0,
        target_w in 1.0f64..4_000.0,
        target_h in 1.0f64..4_000.0
    ) {
        let fit = FitTransform::compute(source_w, source_h, target_w, target_h).expect("fit");
        prop_assert_eq!(fit.scale, (target_w / source_w).min(target_h / source_h));

        let (scaled_w, scaled_h) = fit.scaled_size(source_w, source_h);
        prop_assert_eq!(fit.offset_x, (target_w - scaled_w) / 2.0);
        prop_assert_eq!(fit.offset_y, (target_h - scaled_h) / 2.0);

        // The scaled extent never overflows the target surface.
        prop_assert!(scaled_w <= target_w * (1.0 + 1e-12));
        prop_assert!(scaled_h <= target_h * (1.0 + 1e-12));
        prop_assert!(fit.offset_x >= -1e-9 && fit.offset_y >= -1e-9);
    }
}
