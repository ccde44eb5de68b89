use tracing::debug;

use crate::core::{ExtentSeriesOptions, ExtentSet, RawExtent, SeriesId};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ExtentSeries, ExtentsEngine, PluginEvent};

impl<R: Renderer> ExtentsEngine<R> {
    /// Data-ingestion hook: binds records and options to a series.
    ///
    /// Runs a full normalization pass. Invalid records are dropped silently;
    /// only invalid options are an error. Registration order is kept for new
    /// series and preserved for replaced ones.
    pub fn set_series(
        &mut self,
        id: impl Into<SeriesId>,
        options: ExtentSeriesOptions,
        raw: Vec<RawExtent>,
    ) -> ChartResult<()> {
        let options = options.validate()?;
        let id = id.into();
        let series = ExtentSeries::new(options, raw);
        debug!(
            series = %id,
            raw_count = series.raw().len(),
            extent_count = series.extents().len(),
            rows = series.extents().row_count(),
            "set extent series"
        );
        self.series.insert(id.clone(), series);
        self.after_ingestion(id);
        Ok(())
    }

    /// Replaces the records of a registered series, keeping its options.
    pub fn set_series_data(&mut self, id: &SeriesId, raw: Vec<RawExtent>) -> ChartResult<()> {
        let series = self
            .series
            .get_mut(id)
            .ok_or_else(|| ChartError::UnknownSeries(id.to_string()))?;
        series.set_raw(raw);
        debug!(
            series = %id,
            extent_count = series.extents().len(),
            "replaced extent series data"
        );
        self.after_ingestion(id.clone());
        Ok(())
    }

    /// Replaces the options of a registered series and re-packs its rows.
    pub fn set_series_options(
        &mut self,
        id: &SeriesId,
        options: ExtentSeriesOptions,
    ) -> ChartResult<()> {
        let options = options.validate()?;
        let series = self
            .series
            .get_mut(id)
            .ok_or_else(|| ChartError::UnknownSeries(id.to_string()))?;
        series.set_options(options);
        self.after_ingestion(id.clone());
        Ok(())
    }

    /// Removes a series. Returns `true` when it was registered.
    pub fn remove_series(&mut self, id: &SeriesId) -> bool {
        if self.series.shift_remove(id).is_none() {
            return false;
        }
        if self.highlight.index_in(id).is_some() {
            self.highlight.clear();
            self.emit_plugin_event(PluginEvent::HighlightChanged);
        }
        self.request_redraw();
        self.emit_plugin_event(PluginEvent::SeriesRemoved { series: id.clone() });
        true
    }

    #[must_use]
    pub fn series(&self, id: &SeriesId) -> Option<&ExtentSeries> {
        self.series.get(id)
    }

    /// Normalized extents of a series, rows resolved.
    #[must_use]
    pub fn extents(&self, id: &SeriesId) -> Option<&ExtentSet> {
        self.series.get(id).map(ExtentSeries::extents)
    }

    pub fn series_ids(&self) -> impl Iterator<Item = &SeriesId> {
        self.series.keys()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Every ingestion pass starts from a clean highlight.
    fn after_ingestion(&mut self, id: SeriesId) {
        if self.highlight.clear() {
            self.emit_plugin_event(PluginEvent::HighlightChanged);
        }
        self.request_redraw();

        let Some(extents) = self.extents(&id) else {
            return;
        };
        let event = PluginEvent::SeriesUpdated {
            extent_count: extents.len(),
            dropped_count: extents.dropped_count(),
            row_count: extents.row_count(),
            series: id,
        };
        self.emit_plugin_event(event);
    }
}
