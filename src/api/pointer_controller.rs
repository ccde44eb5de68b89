use tracing::trace;

use crate::core::AxisTransform;
use crate::interaction::{
    ExtentHit, ExtentPointerEvent, ExtentRef, HitTarget, PointerEventKind, find_extent_at,
};
use crate::render::Renderer;

use super::{ExtentsEngine, PluginEvent};

impl<R: Renderer> ExtentsEngine<R> {
    /// Finds the first extent under a plot-pixel position.
    ///
    /// Series are searched in registration order, extents in input order.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64, x_axis: &impl AxisTransform) -> Option<ExtentHit> {
        let targets = self.series.values().map(|series| HitTarget {
            options: series.options(),
            extents: series.extents(),
        });
        let found = find_extent_at(targets, x_axis, self.plot.viewport.height_px(), x, y)?;
        let (id, series) = self.series.get_index(found.series_position)?;
        let extent = series.extents().by_index(found.index)?;
        Some(ExtentHit {
            series: id.clone(),
            series_position: found.series_position,
            extent: extent.clone(),
        })
    }

    /// Pointer hook for plot-pixel coordinates.
    ///
    /// A match highlights the extent, a miss clears the highlight; a redraw
    /// is requested only when the highlight actually changed.
    pub fn handle_pointer(
        &mut self,
        kind: PointerEventKind,
        x: f64,
        y: f64,
        x_axis: &impl AxisTransform,
    ) -> ExtentPointerEvent {
        let hit = self.hit_test(x, y, x_axis);
        let changed = match &hit {
            Some(hit) => self
                .highlight
                .set(ExtentRef::new(hit.series.clone(), hit.extent.index)),
            None => self.highlight.clear(),
        };
        trace!(?kind, x, y, matched = hit.is_some(), changed, "extent pointer event");

        if changed {
            self.request_redraw();
            self.emit_plugin_event(PluginEvent::HighlightChanged);
        }
        let event = match kind {
            PointerEventKind::Hover => PluginEvent::Hovered {
                x,
                y,
                hit: hit.clone(),
            },
            PointerEventKind::Click => PluginEvent::Clicked {
                x,
                y,
                hit: hit.clone(),
            },
        };
        self.emit_plugin_event(event);

        ExtentPointerEvent {
            kind,
            x,
            y,
            hit,
            redraw_requested: changed,
        }
    }

    /// Pointer hook for host canvas coordinates; subtracts the plot offset.
    pub fn handle_canvas_pointer(
        &mut self,
        kind: PointerEventKind,
        canvas_x: f64,
        canvas_y: f64,
        x_axis: &impl AxisTransform,
    ) -> ExtentPointerEvent {
        let (x, y) = self.plot.canvas_to_plot(canvas_x, canvas_y);
        self.handle_pointer(kind, x, y, x_axis)
    }

    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
        x_axis: &impl AxisTransform,
    ) -> ExtentPointerEvent {
        self.handle_pointer(PointerEventKind::Hover, x, y, x_axis)
    }

    pub fn pointer_click(
        &mut self,
        x: f64,
        y: f64,
        x_axis: &impl AxisTransform,
    ) -> ExtentPointerEvent {
        self.handle_pointer(PointerEventKind::Click, x, y, x_axis)
    }
}
