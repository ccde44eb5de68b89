use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::datetime_to_unix_seconds;
use crate::core::LabelHAlign;
use crate::render::{Color, Fill};

/// Predecessor indices of one extent, positions in the raw record list.
pub type DependsOn = SmallVec<[i64; 4]>;

/// Extent record as supplied by the host, before normalization.
///
/// Every field is optional. Deserialization never rejects a record for a
/// malformed field: values of the wrong shape load as unset and fall back to
/// the series defaults, and records left without `start` or `end` are dropped
/// during normalization instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawExtent {
    #[serde(deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub start: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub end: Option<f64>,
    #[serde(deserialize_with = "lenient::row")]
    pub row: Option<usize>,
    #[serde(alias = "labelHalign", deserialize_with = "lenient::alignment")]
    pub label_h_align: Option<String>,
    #[serde(deserialize_with = "lenient::color")]
    pub color: Option<Color>,
    #[serde(deserialize_with = "lenient::fill")]
    pub fill_color: Option<Fill>,
    #[serde(alias = "depends", deserialize_with = "lenient::indices")]
    pub depends_on: DependsOn,
    #[serde(alias = "barWithPointers", deserialize_with = "lenient::flag")]
    pub has_pointer_markers: Option<bool>,
}

impl RawExtent {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    /// Extent on a time axis whose domain is unix seconds.
    #[must_use]
    pub fn from_times(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(
            datetime_to_unix_seconds(start),
            datetime_to_unix_seconds(end),
        )
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    #[must_use]
    pub fn with_label_h_align(mut self, align: impl Into<String>) -> Self {
        self.label_h_align = Some(align.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, fill: Fill) -> Self {
        self.fill_color = Some(fill);
        self
    }

    #[must_use]
    pub fn with_depends_on(mut self, predecessors: impl IntoIterator<Item = i64>) -> Self {
        self.depends_on = predecessors.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_pointer_markers(mut self, enabled: bool) -> Self {
        self.has_pointer_markers = Some(enabled);
        self
    }
}

/// Normalized extent with every default resolved and a concrete row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Position of the source record in the raw list.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub row: usize,
    pub label: Option<String>,
    pub id: Option<String>,
    pub color: Color,
    pub fill: Fill,
    pub label_h_align: LabelHAlign,
    pub depends_on: DependsOn,
    pub has_pointer_markers: bool,
}

impl Extent {
    #[must_use]
    pub fn span(&self) -> (f64, f64) {
        (self.start, self.end)
    }
}

/// Output of one normalization pass, in input order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtentSet {
    extents: Vec<Extent>,
    /// Raw index -> position in `extents`, `None` for dropped records.
    positions: Vec<Option<usize>>,
    row_count: usize,
}

impl ExtentSet {
    pub(crate) fn from_parts(
        extents: Vec<Extent>,
        positions: Vec<Option<usize>>,
        row_count: usize,
    ) -> Self {
        Self {
            extents,
            positions,
            row_count,
        }
    }

    #[must_use]
    pub fn extents(&self) -> &[Extent] {
        &self.extents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Extent> {
        self.extents.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Number of raw records the set was built from, dropped ones included.
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.raw_len() - self.len()
    }

    /// Number of display rows in use (highest row + 1).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Looks up an extent by its raw record index.
    ///
    /// Negative, out-of-range and dropped indices all resolve to `None`.
    #[must_use]
    pub fn by_raw_index(&self, index: i64) -> Option<&Extent> {
        self.by_index(usize::try_from(index).ok()?)
    }

    /// Extent built from raw record `index`, `None` when it was dropped.
    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&Extent> {
        let position = (*self.positions.get(index)?)?;
        self.extents.get(position)
    }

    #[must_use]
    pub fn index_of_id(&self, id: &str) -> Option<usize> {
        self.extents
            .iter()
            .find(|extent| extent.id.as_deref() == Some(id))
            .map(|extent| extent.index)
    }

    /// Domain range covered by all extents, `None` when empty.
    #[must_use]
    pub fn domain_range(&self) -> Option<(f64, f64)> {
        let min = self
            .extents
            .iter()
            .map(|extent| OrderedFloat(extent.start))
            .min()?;
        let max = self
            .extents
            .iter()
            .map(|extent| OrderedFloat(extent.end))
            .max()?;
        Some((min.into_inner(), max.into_inner()))
    }
}

impl<'a> IntoIterator for &'a ExtentSet {
    type Item = &'a Extent;
    type IntoIter = std::slice::Iter<'a, Extent>;

    fn into_iter(self) -> Self::IntoIter {
        self.extents.iter()
    }
}

/// Field loaders for host records: anything of the wrong shape becomes unset.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use tracing::trace;

    use super::DependsOn;
    use crate::render::{Color, Fill};

    pub(super) fn text<'de, D: Deserializer<'de>>(input: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(input)? {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
    }

    pub(super) fn number<'de, D: Deserializer<'de>>(input: D) -> Result<Option<f64>, D::Error> {
        Ok(Value::deserialize(input)?.as_f64())
    }

    /// Only non-negative integers pin a row.
    pub(super) fn row<'de, D: Deserializer<'de>>(input: D) -> Result<Option<usize>, D::Error> {
        let value = Value::deserialize(input)?;
        let row = value.as_u64().and_then(|row| usize::try_from(row).ok());
        if row.is_none() && !value.is_null() {
            trace!(%value, "ignoring invalid pinned extent row");
        }
        Ok(row)
    }

    pub(super) fn alignment<'de, D: Deserializer<'de>>(
        input: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(input)? {
            Value::String(align) => Some(align),
            _ => None,
        })
    }

    pub(super) fn color<'de, D: Deserializer<'de>>(input: D) -> Result<Option<Color>, D::Error> {
        let value = Value::deserialize(input)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Color::deserialize(&value)
            .inspect_err(|err| trace!(%value, error = %err, "ignoring unsupported extent color"))
            .ok())
    }

    pub(super) fn fill<'de, D: Deserializer<'de>>(input: D) -> Result<Option<Fill>, D::Error> {
        let value = Value::deserialize(input)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Fill::deserialize(&value)
            .inspect_err(|err| trace!(%value, error = %err, "ignoring unsupported extent fill"))
            .ok())
    }

    pub(super) fn indices<'de, D: Deserializer<'de>>(input: D) -> Result<DependsOn, D::Error> {
        Ok(match Value::deserialize(input)? {
            Value::Array(items) => items.iter().filter_map(Value::as_i64).collect(),
            single => single.as_i64().into_iter().collect(),
        })
    }

    pub(super) fn flag<'de, D: Deserializer<'de>>(input: D) -> Result<Option<bool>, D::Error> {
        Ok(Value::deserialize(input)?.as_bool())
    }
}
