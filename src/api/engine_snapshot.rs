use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Extent, ExtentSeriesOptions, PlotArea};
use crate::interaction::HighlightState;
use crate::render::Renderer;

use super::ExtentsEngine;

/// Resolved state of one series inside an [`EngineSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub options: ExtentSeriesOptions,
    pub raw_count: usize,
    pub row_count: usize,
    pub extents: Vec<Extent>,
}

/// Serializable engine state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub plot: PlotArea,
    pub series: IndexMap<String, SeriesSnapshot>,
    pub highlight: HighlightState,
    pub redraw_requested: bool,
}

impl<R: Renderer> ExtentsEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let series = self
            .series
            .iter()
            .map(|(id, series)| {
                let extents = series.extents();
                (
                    id.as_str().to_owned(),
                    SeriesSnapshot {
                        options: *series.options(),
                        raw_count: extents.raw_len(),
                        row_count: extents.row_count(),
                        extents: extents.extents().to_vec(),
                    },
                )
            })
            .collect();

        EngineSnapshot {
            plot: self.plot,
            series,
            highlight: self.highlight.clone(),
            redraw_requested: self.redraw_requested,
        }
    }
}
