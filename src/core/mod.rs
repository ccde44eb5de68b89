pub mod extent;
pub mod geometry;
pub mod normalizer;
pub mod options;
pub mod primitives;
pub mod row_assigner;
pub mod scale;
pub mod types;

pub use extent::{DependsOn, Extent, ExtentSet, RawExtent};
pub use geometry::{
    ExtentGeometry, bar_band, bar_top, is_visible, project_extent, project_series, row_center,
};
pub use normalizer::normalize_extents;
pub use options::{
    BAR_CORNER_RADIUS_PX, BarVAlign, ExtentSeriesOptions, LabelHAlign, ROW_MARGIN_PX, RowPolicy,
};
pub use primitives::datetime_to_unix_seconds;
pub use row_assigner::{LayoutContext, spans_overlap};
pub use scale::{AxisTransform, LinearScale};
pub use types::{PlotArea, PlotOffset, SeriesId, Viewport};
