use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use tracing::trace;

use crate::core::primitives::round_px;
use crate::core::{
    AxisTransform, BAR_CORNER_RADIUS_PX, BarVAlign, Extent, ExtentSeriesOptions, ExtentSet,
    LabelHAlign, PlotArea, ROW_MARGIN_PX,
};
use crate::render::{
    BarPrimitive, ColorStop, ConnectorPrimitive, Fill, FillStyle, LabelHAnchor, LabelPrimitive,
    LabelVAnchor, LinearGradient, PointerMarker,
};

/// Horizontal run of the elbow before it turns towards the target row.
const CONNECTOR_ELBOW_PX: f64 = 10.0;
const ARROW_LENGTH_PX: f64 = 6.0;
const ARROW_HALF_WIDTH_PX: f64 = 3.0;
/// Gap between a bar edge and its label box.
const LABEL_INSET_PX: f64 = 3.0;

/// Draw primitives produced for one visible extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtentGeometry {
    pub index: usize,
    pub bar: BarPrimitive,
    pub connectors: Vec<ConnectorPrimitive>,
    pub label: Option<LabelPrimitive>,
}

/// Top edge of the bar band for `row`, in plot pixels.
#[must_use]
pub fn bar_top(row: usize, options: &ExtentSeriesOptions, plot_height: f64) -> f64 {
    let offset = options.row_height * row as f64;
    match options.bar_v_align {
        BarVAlign::Top => ROW_MARGIN_PX + offset,
        BarVAlign::Bottom => plot_height - ROW_MARGIN_PX - offset - options.bar_height,
    }
}

/// Vertical band `(top, bottom)` occupied by bars of `row`.
#[must_use]
pub fn bar_band(row: usize, options: &ExtentSeriesOptions, plot_height: f64) -> (f64, f64) {
    let top = bar_top(row, options, plot_height);
    (top, top + options.bar_height)
}

/// Pixel-snapped vertical center of `row`, where connectors attach.
#[must_use]
pub fn row_center(row: usize, options: &ExtentSeriesOptions, plot_height: f64) -> f64 {
    let offset = round_px(options.row_height * row as f64) + round_px(options.bar_height * 0.5);
    match options.bar_v_align {
        BarVAlign::Top => ROW_MARGIN_PX + offset,
        BarVAlign::Bottom => plot_height - ROW_MARGIN_PX - offset,
    }
}

/// An extent is drawn only when it reaches into the open axis range.
#[must_use]
pub fn is_visible(extent: &Extent, axis: &impl AxisTransform) -> bool {
    let (min, max) = axis.bounds();
    extent.start < max && extent.end > min
}

/// Projects one extent into bar, connector and label primitives.
///
/// Returns `None` when the extent lies outside the axis range. `highlighted`
/// reverses the gradient stops of a gradient fill.
#[must_use]
pub fn project_extent(
    extent: &Extent,
    set: &ExtentSet,
    options: &ExtentSeriesOptions,
    axis: &impl AxisTransform,
    plot: PlotArea,
    highlighted: bool,
) -> Option<ExtentGeometry> {
    if !is_visible(extent, axis) {
        return None;
    }

    let (min, max) = axis.bounds();
    let x_from = axis.to_pixel(extent.start.max(min));
    let x_to = axis.to_pixel(extent.end.min(max));

    let bar = build_bar(extent, options, plot, x_from, x_to, highlighted);

    let mut connectors = Vec::new();
    if options.show_connections && extent.start > min && extent.start < max {
        for &predecessor in &extent.depends_on {
            let Some(source) = set.by_raw_index(predecessor) else {
                trace!(
                    index = extent.index,
                    predecessor,
                    "skipping unresolved extent dependency"
                );
                continue;
            };
            let source_x = axis.to_pixel(source.end.max(min).min(max));
            connectors.push(build_connector(
                options, plot, source_x, x_from, source.row, extent.row,
            ));
        }
    }

    let label = options
        .show_labels
        .then(|| build_label(extent, options, plot, x_from, x_to))
        .flatten();

    Some(ExtentGeometry {
        index: extent.index,
        bar,
        connectors,
        label,
    })
}

/// Projects every visible extent of a series, in input order.
///
/// `highlighted` is the raw index of the hovered extent in this series, if any.
#[must_use]
pub fn project_series(
    set: &ExtentSet,
    options: &ExtentSeriesOptions,
    axis: &impl AxisTransform,
    plot: PlotArea,
    highlighted: Option<usize>,
) -> Vec<ExtentGeometry> {
    set.iter()
        .filter_map(|extent| {
            let is_highlighted = highlighted == Some(extent.index);
            project_extent(extent, set, options, axis, plot, is_highlighted)
        })
        .collect()
}

fn build_bar(
    extent: &Extent,
    options: &ExtentSeriesOptions,
    plot: PlotArea,
    x_from: f64,
    x_to: f64,
    highlighted: bool,
) -> BarPrimitive {
    let pad = options.expand_bar;
    let left = x_from.max(0.0) - pad;
    let right = x_to.min(plot.viewport.width_px()) + pad;
    let top = bar_top(extent.row, options, plot.viewport.height_px());
    let height = options.bar_height;

    let fill = options
        .fill
        .then(|| fill_style(extent.fill, left, top, height, highlighted));

    let pointers = extent.has_pointer_markers.then(|| {
        let base = top + height;
        [
            PointerMarker {
                points: [
                    (left + pad * 0.5, base),
                    (left + pad, base + pad * 0.5),
                    (left + pad * 1.5, base),
                ],
            },
            PointerMarker {
                points: [
                    (right - pad * 0.5, base),
                    (right - pad, base + pad * 0.5),
                    (right - pad * 1.5, base),
                ],
            },
        ]
    });

    BarPrimitive {
        x: left,
        y: top,
        width: right - left,
        height,
        corner_radius: BAR_CORNER_RADIUS_PX,
        fill,
        stroke_color: extent.color,
        stroke_width: options.line_width,
        pointers,
    }
}

fn fill_style(fill: Fill, x: f64, top: f64, height: f64, highlighted: bool) -> FillStyle {
    match fill {
        Fill::Solid(color) => FillStyle::Solid(color),
        Fill::Gradient {
            top: top_color,
            bottom: bottom_color,
        } => {
            let (first, last) = if highlighted {
                (bottom_color, top_color)
            } else {
                (top_color, bottom_color)
            };
            FillStyle::LinearGradient(LinearGradient {
                x0: x,
                y0: top,
                x1: x,
                y1: top + height,
                stops: [
                    ColorStop {
                        offset: 0.0,
                        color: first,
                    },
                    ColorStop {
                        offset: 1.0,
                        color: last,
                    },
                ],
            })
        }
    }
}

fn build_connector(
    options: &ExtentSeriesOptions,
    plot: PlotArea,
    x_from: f64,
    x_to: f64,
    row_from: usize,
    row_to: usize,
) -> ConnectorPrimitive {
    let height = plot.viewport.height_px();
    let xf = x_from.max(0.0);
    let xt = x_to.min(plot.viewport.width_px());
    let yf = row_center(row_from, options, height);
    let yt = row_center(row_to, options, height);

    ConnectorPrimitive {
        points: smallvec![
            (xf, yf),
            (xf + CONNECTOR_ELBOW_PX, yf),
            (xt - CONNECTOR_ELBOW_PX, yt),
            (xt, yt),
            (xt - ARROW_LENGTH_PX, yt - ARROW_HALF_WIDTH_PX),
            (xt - ARROW_LENGTH_PX, yt + ARROW_HALF_WIDTH_PX),
            (xt, yt),
        ],
        color: options.connection_color,
        stroke_width: options.line_width,
    }
}

fn build_label(
    extent: &Extent,
    options: &ExtentSeriesOptions,
    plot: PlotArea,
    x_from: f64,
    x_to: f64,
) -> Option<LabelPrimitive> {
    let text = extent.label.clone()?;
    let offset = plot.offset;
    let row_offset = options.row_height * extent.row as f64 + ROW_MARGIN_PX;

    let vertical = match options.bar_v_align {
        BarVAlign::Top => LabelVAnchor::Top(round_px(offset.top + row_offset)),
        BarVAlign::Bottom => LabelVAnchor::Bottom(round_px(offset.bottom + row_offset)),
    };
    let horizontal = match extent.label_h_align {
        LabelHAlign::Left => LabelHAnchor::Left(round_px(offset.left + x_from + LABEL_INSET_PX)),
        LabelHAlign::Right => LabelHAnchor::Right(round_px(
            offset.right + (plot.viewport.width_px() - x_to) + LABEL_INSET_PX,
        )),
    };

    Some(LabelPrimitive {
        text,
        id: extent.id.clone(),
        vertical,
        horizontal,
        width: round_px(x_to - x_from),
    })
}
