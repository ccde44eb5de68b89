use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, SeriesId};
use crate::interaction::{ExtentHit, HighlightState};

/// Read-only engine snapshot passed to plugin hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub plot: PlotArea,
    pub series_count: usize,
    pub highlight: HighlightState,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    SeriesUpdated {
        series: SeriesId,
        extent_count: usize,
        dropped_count: usize,
        row_count: usize,
    },
    SeriesRemoved {
        series: SeriesId,
    },
    Hovered {
        x: f64,
        y: f64,
        hit: Option<ExtentHit>,
    },
    Clicked {
        x: f64,
        y: f64,
        hit: Option<ExtentHit>,
    },
    HighlightChanged,
    Redrawn {
        bars: usize,
        connectors: usize,
        labels: usize,
    },
}

/// Observer hook for hosts that react to extent activity.
///
/// Plugins see events and engine context but cannot mutate engine internals.
pub trait ExtentPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: &PluginContext);
}
