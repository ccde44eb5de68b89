use tracing::trace;

use crate::core::SeriesId;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ExtentRef, HighlightState};
use crate::render::Renderer;

use super::{ExtentsEngine, PluginEvent};

impl<R: Renderer> ExtentsEngine<R> {
    #[must_use]
    pub fn highlight_state(&self) -> &HighlightState {
        &self.highlight
    }

    /// Highlights the extent with raw index `index` in `series`.
    ///
    /// Returns `true` and requests a redraw only when the highlighted pair
    /// changed. The index is not checked: a stale pair simply matches nothing
    /// at the next redraw.
    pub fn highlight(&mut self, series: &SeriesId, index: usize) -> ChartResult<bool> {
        if !self.series.contains_key(series) {
            return Err(ChartError::UnknownSeries(series.to_string()));
        }
        let changed = self.highlight.set(ExtentRef::new(series.clone(), index));
        if changed {
            trace!(series = %series, index, "extent highlighted");
            self.on_highlight_changed();
        }
        Ok(changed)
    }

    /// Clears the highlight. Returns `true` when something was highlighted.
    pub fn clear_highlight(&mut self) -> bool {
        let changed = self.highlight.clear();
        if changed {
            trace!("extent highlight cleared");
            self.on_highlight_changed();
        }
        changed
    }

    fn on_highlight_changed(&mut self) {
        self.request_redraw();
        self.emit_plugin_event(PluginEvent::HighlightChanged);
    }
}
