use tracing::{debug, trace};

use crate::core::{
    Extent, ExtentSeriesOptions, ExtentSet, LabelHAlign, LayoutContext, RawExtent,
};

/// Validates raw records, repairs them and resolves their rows.
///
/// Records without a finite `start` and `end` are skipped, inverted bounds are
/// swapped, unknown label alignments and missing colors fall back to the
/// series defaults. Row packing runs on a [`LayoutContext`] created for this
/// call only, so repeated passes over the same input are identical.
#[must_use]
pub fn normalize_extents(raw: &[RawExtent], options: &ExtentSeriesOptions) -> ExtentSet {
    let mut layout = LayoutContext::new(options.row_policy());
    let mut extents = Vec::with_capacity(raw.len());
    let mut by_index = Vec::with_capacity(raw.len());

    for (index, record) in raw.iter().enumerate() {
        let Some((start, end)) = resolve_bounds(record) else {
            trace!(index, "skipping extent without finite start/end");
            by_index.push(None);
            continue;
        };

        let row = layout.assign((start, end), record.row);
        by_index.push(Some(extents.len()));
        extents.push(Extent {
            index,
            start,
            end,
            row,
            label: record.label.clone(),
            id: record.id.clone(),
            color: record.color.unwrap_or(options.color),
            fill: record.fill_color.unwrap_or(options.fill_color),
            label_h_align: record
                .label_h_align
                .as_deref()
                .and_then(LabelHAlign::parse)
                .unwrap_or(options.label_h_align),
            depends_on: record.depends_on.clone(),
            has_pointer_markers: record
                .has_pointer_markers
                .unwrap_or(options.bar_with_pointers),
        });
    }

    let set = ExtentSet::from_parts(extents, by_index, layout.row_count());
    debug!(
        raw_count = set.raw_len(),
        accepted = set.len(),
        dropped = set.dropped_count(),
        rows = set.row_count(),
        "normalized extents"
    );
    set
}

fn resolve_bounds(record: &RawExtent) -> Option<(f64, f64)> {
    let start = record.start.filter(|value| value.is_finite())?;
    let end = record.end.filter(|value| value.is_finite())?;
    if end < start {
        Some((end, start))
    } else {
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_extents;
    use crate::core::{ExtentSeriesOptions, LabelHAlign, RawExtent};
    use crate::render::{Color, Fill};

    #[test]
    fn inverted_bounds_are_swapped() {
        let set = normalize_extents(&[RawExtent::new(9.0, 3.0)], &ExtentSeriesOptions::shown());
        assert_eq!(set.extents()[0].span(), (3.0, 9.0));
    }

    #[test]
    fn records_without_bounds_are_dropped_but_keep_their_index() {
        let raw = vec![
            RawExtent::new(0.0, 1.0),
            RawExtent {
                start: Some(4.0),
                ..RawExtent::default()
            },
            RawExtent::new(f64::NAN, 2.0),
            RawExtent::new(2.0, 3.0),
        ];
        let set = normalize_extents(&raw, &ExtentSeriesOptions::shown());

        assert_eq!(set.len(), 2);
        assert_eq!(set.dropped_count(), 2);
        assert_eq!(set.extents()[1].index, 3);
        assert!(set.by_raw_index(1).is_none());
        assert_eq!(set.by_raw_index(3).map(|extent| extent.start), Some(2.0));
    }

    #[test]
    fn dropped_records_do_not_advance_cyclic_rows() {
        let raw = vec![
            RawExtent::new(0.0, 1.0),
            RawExtent::default(),
            RawExtent::new(0.0, 1.0),
        ];
        let set = normalize_extents(&raw, &ExtentSeriesOptions::shown().with_rows(2));
        let rows: Vec<usize> = set.iter().map(|extent| extent.row).collect();
        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn defaults_fill_missing_per_extent_fields() {
        let options = ExtentSeriesOptions::shown().with_label_h_align(LabelHAlign::Right);
        let custom = Color::rgb(1.0, 0.0, 0.0);
        let raw = vec![
            RawExtent::new(0.0, 1.0).with_label_h_align("center"),
            RawExtent::new(0.0, 1.0)
                .with_label_h_align("left")
                .with_color(custom)
                .with_fill_color(Fill::Solid(custom))
                .with_pointer_markers(true),
        ];
        let set = normalize_extents(&raw, &options);
        let [fallback, overridden] = set.extents() else {
            panic!("expected two extents");
        };

        assert_eq!(fallback.label_h_align, LabelHAlign::Right);
        assert_eq!(fallback.color, options.color);
        assert_eq!(fallback.fill, options.fill_color);
        assert!(!fallback.has_pointer_markers);

        assert_eq!(overridden.label_h_align, LabelHAlign::Left);
        assert_eq!(overridden.color, custom);
        assert_eq!(overridden.fill, Fill::Solid(custom));
        assert!(overridden.has_pointer_markers);
    }
}
