mod frame;
mod named_colors;
mod null_renderer;
mod painter;
mod primitives;
mod recording;

pub use frame::ExtentFrame;
pub use null_renderer::NullRenderer;
pub use painter::{PaintStats, SurfaceRenderer, paint_frame};
pub use primitives::{
    BarPrimitive, Color, ColorStop, ConnectorPrimitive, EXTENT_LABEL_CLASS, Fill, FillStyle,
    LabelHAnchor, LabelPrimitive, LabelVAnchor, LinearGradient, PathCommand, PointerMarker,
};
pub use recording::{RecordingLabelHost, RecordingSurface, SurfaceCall};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `ExtentFrame`, so drawing code stays
/// isolated from layout and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &ExtentFrame) -> ChartResult<()>;
}

/// Host 2D drawing surface with canvas-like path semantics.
///
/// `stroke` and `fill` paint the current path without consuming it; the path
/// is reset by `begin_path`.
pub trait DrawSurface {
    fn save(&mut self) -> ChartResult<()>;
    fn restore(&mut self) -> ChartResult<()>;
    fn translate(&mut self, dx: f64, dy: f64);
    fn set_round_line_join(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn close_path(&mut self);
    fn set_stroke_style(&mut self, color: Color, width: f64);
    /// Selects the fill paint; gradients are created by the surface.
    fn set_fill_style(&mut self, style: FillStyle);
    fn stroke(&mut self) -> ChartResult<()>;
    fn fill(&mut self) -> ChartResult<()>;
}

/// Host surface that owns absolutely positioned text fragments.
pub trait LabelHost {
    /// Removes every fragment inserted by the previous redraw.
    fn clear_labels(&mut self);
    fn insert_label(&mut self, label: &LabelPrimitive) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoLabelHost, CairoRenderer, CairoSurface};
