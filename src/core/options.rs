use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Fill};

/// Fixed top margin between the plot edge and row 0, in pixels.
pub const ROW_MARGIN_PX: f64 = 4.0;

/// Corner radius of every extent bar, in pixels.
pub const BAR_CORNER_RADIUS_PX: f64 = 5.0;

pub const DEFAULT_OUTLINE_COLOR: Color = Color::from_rgba8(192, 192, 192, 1.0);
pub const DEFAULT_CONNECTION_COLOR: Color = Color::from_rgba8(0, 192, 128, 0.8);
pub const DEFAULT_FILL_COLOR: Color = Color::from_rgba8(64, 192, 255, 0.5);

/// Whether rows hang from the plot top or stack up from the plot bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarVAlign {
    #[default]
    Top,
    Bottom,
}

/// Which bar edge a label is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelHAlign {
    #[default]
    Left,
    Right,
}

impl LabelHAlign {
    /// Parses the `left`/`right` keywords; anything else is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Row packing policy derived from the `rows` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPolicy {
    /// Rows `0..n` assigned cyclically in input order, overlap ignored.
    Cyclic(NonZeroUsize),
    /// Greedy lowest-index row without a closed-interval overlap.
    FirstFit,
}

/// Series-level defaults for extent rendering.
///
/// Field names follow the camelCase keys hosts use in JSON option blobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtentSeriesOptions {
    pub show: bool,
    pub line_width: f64,
    pub bar_height: f64,
    pub color: Color,
    pub show_connections: bool,
    pub connection_color: Color,
    pub fill: bool,
    pub fill_color: Fill,
    pub show_labels: bool,
    pub row_height: f64,
    /// Fixed row count; `0` selects dynamic first-fit packing.
    pub rows: usize,
    pub bar_v_align: BarVAlign,
    pub label_h_align: LabelHAlign,
    /// Symmetric horizontal bar padding in pixels.
    pub expand_bar: f64,
    pub bar_with_pointers: bool,
}

impl Default for ExtentSeriesOptions {
    fn default() -> Self {
        Self {
            show: false,
            line_width: 1.0,
            bar_height: 17.0,
            color: DEFAULT_OUTLINE_COLOR,
            show_connections: true,
            connection_color: DEFAULT_CONNECTION_COLOR,
            fill: true,
            fill_color: Fill::Solid(DEFAULT_FILL_COLOR),
            show_labels: true,
            row_height: 20.0,
            rows: 7,
            bar_v_align: BarVAlign::Top,
            label_h_align: LabelHAlign::Left,
            expand_bar: 0.0,
            bar_with_pointers: false,
        }
    }
}

impl ExtentSeriesOptions {
    /// Default options with `show` enabled.
    #[must_use]
    pub fn shown() -> Self {
        Self {
            show: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_v_align(mut self, align: BarVAlign) -> Self {
        self.bar_v_align = align;
        self
    }

    #[must_use]
    pub fn with_label_h_align(mut self, align: LabelHAlign) -> Self {
        self.label_h_align = align;
        self
    }

    #[must_use]
    pub fn with_expand_bar(mut self, expand_bar: f64) -> Self {
        self.expand_bar = expand_bar;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, fill: Fill) -> Self {
        self.fill_color = fill;
        self
    }

    #[must_use]
    pub fn row_policy(&self) -> RowPolicy {
        NonZeroUsize::new(self.rows).map_or(RowPolicy::FirstFit, RowPolicy::Cyclic)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let options: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidOptions(format!("failed to parse extent options json: {e}"))
        })?;
        options.validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.line_width, "lineWidth"),
            (self.bar_height, "barHeight"),
            (self.row_height, "rowHeight"),
            (self.expand_bar, "expandBar"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidOptions(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        self.color.validate()?;
        self.connection_color.validate()?;
        self.fill_color.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{BarVAlign, ExtentSeriesOptions, LabelHAlign, RowPolicy};
    use crate::render::{Color, Fill};

    #[test]
    fn defaults_match_documented_option_table() {
        let options = ExtentSeriesOptions::default();
        assert!(!options.show);
        assert_eq!(options.line_width, 1.0);
        assert_eq!(options.bar_height, 17.0);
        assert_eq!(options.row_height, 20.0);
        assert_eq!(options.rows, 7);
        assert_eq!(options.bar_v_align, BarVAlign::Top);
        assert_eq!(options.label_h_align, LabelHAlign::Left);
        assert_eq!(options.expand_bar, 0.0);
        assert!(options.show_connections && options.fill && options.show_labels);
        assert!(!options.bar_with_pointers);
    }

    #[test]
    fn row_policy_follows_rows_option() {
        assert_eq!(
            ExtentSeriesOptions::default().with_rows(0).row_policy(),
            RowPolicy::FirstFit
        );
        assert!(matches!(
            ExtentSeriesOptions::default().with_rows(3).row_policy(),
            RowPolicy::Cyclic(n) if n.get() == 3
        ));
    }

    #[test]
    fn json_options_merge_over_defaults() {
        let options = ExtentSeriesOptions::from_json_str(
            r#"{
                "show": true,
                "rows": 0,
                "barVAlign": "bottom",
                "fillColor": {"topColor": "rgb(255, 255, 255)", "bottomColor": "rgb(0, 0, 0)"}
            }"#,
        )
        .expect("options");

        assert!(options.show);
        assert_eq!(options.rows, 0);
        assert_eq!(options.bar_v_align, BarVAlign::Bottom);
        assert_eq!(options.bar_height, 17.0);
        assert_eq!(
            options.fill_color,
            Fill::Gradient {
                top: Color::rgb(1.0, 1.0, 1.0),
                bottom: Color::rgb(0.0, 0.0, 0.0),
            }
        );
    }

    #[test]
    fn negative_geometry_options_are_rejected() {
        let mut options = ExtentSeriesOptions::shown();
        options.row_height = -1.0;
        assert!(options.validate().is_err());

        let mut options = ExtentSeriesOptions::shown();
        options.expand_bar = f64::NAN;
        assert!(options.validate().is_err());
    }
}
