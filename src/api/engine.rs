use indexmap::IndexMap;
use tracing::warn;

use crate::core::{AxisTransform, PlotArea, PlotOffset, SeriesId, Viewport, project_series};
use crate::error::ChartResult;
use crate::extensions::{ExtentPlugin, PluginEvent};
use crate::interaction::HighlightState;
use crate::render::{ExtentFrame, Renderer};

use super::ExtentSeries;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtentsEngineConfig {
    pub viewport: Viewport,
    pub offset: PlotOffset,
}

impl ExtentsEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            offset: PlotOffset::default(),
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: PlotOffset) -> Self {
        self.offset = offset;
        self
    }
}

/// Extent overlay state of one chart instance.
///
/// Owns the registered series in registration order, the hover highlight and
/// the pending redraw flag. Axis transforms stay with the host and are passed
/// into every redraw and pointer call.
pub struct ExtentsEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) plot: PlotArea,
    pub(super) series: IndexMap<SeriesId, ExtentSeries>,
    pub(super) highlight: HighlightState,
    pub(super) redraw_requested: bool,
    pub(super) plugins: Vec<Box<dyn ExtentPlugin>>,
}

impl<R: Renderer> ExtentsEngine<R> {
    pub fn new(renderer: R, config: ExtentsEngineConfig) -> ChartResult<Self> {
        let plot = PlotArea::new(config.viewport, config.offset).validate()?;
        Ok(Self {
            renderer,
            plot,
            series: IndexMap::new(),
            highlight: HighlightState::Empty,
            redraw_requested: false,
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    /// Updates plot size and margins after a host relayout.
    pub fn set_plot_area(&mut self, plot: PlotArea) -> ChartResult<()> {
        self.plot = plot.validate()?;
        self.request_redraw();
        Ok(())
    }

    /// Projects every shown series into one frame without painting it.
    #[must_use]
    pub fn build_frame(&self, x_axis: &impl AxisTransform) -> ExtentFrame {
        let mut frame = ExtentFrame::new(self.plot);
        for (id, series) in &self.series {
            if !series.is_shown() {
                continue;
            }
            let highlighted = self.highlight.index_in(id);
            for geometry in project_series(
                series.extents(),
                series.options(),
                x_axis,
                self.plot,
                highlighted,
            ) {
                frame.push_geometry(geometry);
            }
        }
        frame
    }

    /// Redraw hook: runs the geometry pass and hands the frame to the renderer.
    pub fn render(&mut self, x_axis: &impl AxisTransform) -> ChartResult<()> {
        let frame = self.build_frame(x_axis);
        if let Err(err) = self.renderer.render(&frame) {
            warn!(error = %err, bars = frame.bars.len(), "extent redraw failed");
            return Err(err);
        }
        self.redraw_requested = false;
        self.emit_plugin_event(PluginEvent::Redrawn {
            bars: frame.bars.len(),
            connectors: frame.connectors.len(),
            labels: frame.labels.len(),
        });
        Ok(())
    }

    /// Renders only when a redraw was requested. Returns `true` when painted.
    pub fn render_if_requested(&mut self, x_axis: &impl AxisTransform) -> ChartResult<bool> {
        if !self.redraw_requested {
            return Ok(false);
        }
        self.render(x_axis)?;
        Ok(true)
    }

    #[must_use]
    pub fn has_pending_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Returns and clears the pending redraw flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub(super) fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
