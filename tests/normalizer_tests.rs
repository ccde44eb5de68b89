use chart_extents::core::{
    ExtentSeriesOptions, LabelHAlign, RawExtent, datetime_to_unix_seconds, normalize_extents,
};
use chart_extents::render::{Color, Fill};
use chrono::{TimeZone, Utc};

#[test]
fn every_normalized_extent_is_ordered() {
    let raw = vec![
        RawExtent::new(5.0, 1.0),
        RawExtent::new(-3.0, -8.0),
        RawExtent::new(2.0, 2.0),
    ];
    let set = normalize_extents(&raw, &ExtentSeriesOptions::shown());

    assert_eq!(set.len(), 3);
    for extent in &set {
        assert!(extent.start <= extent.end);
    }
    assert_eq!(set.extents()[1].span(), (-8.0, -3.0));
}

#[test]
fn raw_records_deserialize_from_host_json() {
    let raw: Vec<RawExtent> = serde_json::from_str(
        r##"[
            {"label": "design", "id": "t1", "start": 0, "end": 10},
            {"label": "build", "start": 12, "end": 20, "depends": [0], "labelHalign": "right"},
            {"label": "no end", "start": 4},
            {"start": 30, "end": 25, "row": 3, "color": "rgba(255, 0, 0, 1.0)",
             "fillColor": {"topColor": "#ffffff", "bottomColor": "#000000"},
             "barWithPointers": true}
        ]"##,
    )
    .expect("raw extents");

    let set = normalize_extents(&raw, &ExtentSeriesOptions::shown().with_rows(0));
    assert_eq!(set.raw_len(), 4);
    assert_eq!(set.len(), 3);

    let build = set.by_raw_index(1).expect("build");
    assert_eq!(build.label_h_align, LabelHAlign::Right);
    assert_eq!(build.depends_on.as_slice(), &[0]);

    let pinned = set.by_raw_index(3).expect("pinned");
    assert_eq!(pinned.span(), (25.0, 30.0));
    assert_eq!(pinned.row, 3);
    assert_eq!(pinned.color, Color::rgb(1.0, 0.0, 0.0));
    assert!(matches!(pinned.fill, Fill::Gradient { .. }));
    assert!(pinned.has_pointer_markers);

    assert_eq!(set.index_of_id("t1"), Some(0));
    assert_eq!(set.domain_range(), Some((0.0, 30.0)));
}

#[test]
fn repeated_passes_yield_identical_rows() {
    let raw: Vec<RawExtent> = (0..40)
        .map(|i| {
            let start = f64::from(i % 7) * 3.0;
            RawExtent::new(start, start + f64::from(i % 5))
        })
        .collect();

    for options in [
        ExtentSeriesOptions::shown().with_rows(0),
        ExtentSeriesOptions::shown().with_rows(3),
    ] {
        let first = normalize_extents(&raw, &options);
        let second = normalize_extents(&raw, &options);
        assert_eq!(first, second);
    }
}

#[test]
fn time_bounds_map_to_unix_seconds() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().expect("start");
    let end = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).single().expect("end");
    let raw = RawExtent::from_times(start, end);

    assert_eq!(raw.start, Some(datetime_to_unix_seconds(start)));
    assert_eq!(
        raw.end.zip(raw.start).map(|(end, start)| end - start),
        Some(36.0 * 3600.0)
    );
}
