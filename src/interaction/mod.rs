
pub use hit_test::{HitMatch, HitTarget, extent_contains, find_extent_at};

use serde::{Deserialize, Serialize};

use crate::core::{Extent, SeriesId};

/// Pointer gesture forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEventKind {
    Hover,
    Click,
}

/// Series/extent pair referenced by the highlight state.
///
/// `index` is the extent's raw record index. The pair is a plain reference:
/// the extent may be gone after the next ingestion pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtentRef {
    pub series: SeriesId,
    pub index: usize,
}

impl ExtentRef {
    #[must_use]
    pub fn new(series: SeriesId, index: usize) -> Self {
        Self { series, index }
    }
}

/// Hover highlight of one chart instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HighlightState {
    #[default]
    Empty,
    Hovering(ExtentRef),
}

impl HighlightState {
    /// Moves to `Hovering(target)`. Returns `true` when the state changed.
    pub fn set(&mut self, target: ExtentRef) -> bool {
        if matches!(self, Self::Hovering(current) if *current == target) {
            return false;
        }
        *self = Self::Hovering(target);
        true
    }

    /// Moves to `Empty`. Returns `true` when the state changed.
    pub fn clear(&mut self) -> bool {
        !matches!(std::mem::take(self), Self::Empty)
    }

    #[must_use]
    pub fn target(&self) -> Option<&ExtentRef> {
        match self {
            Self::Empty => None,
            Self::Hovering(target) => Some(target),
        }
    }

    /// Raw index of the highlighted extent when it belongs to `series`.
    #[must_use]
    pub fn index_in(&self, series: &SeriesId) -> Option<usize> {
        self.target()
            .filter(|target| target.series == *series)
            .map(|target| target.index)
    }
}

/// Extent matched by a pointer lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtentHit {
    pub series: SeriesId,
    /// Position of the series in registration order.
    pub series_position: usize,
    pub extent: Extent,
}

/// Resolved pointer event handed back to the host for its own dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtentPointerEvent {
    pub kind: PointerEventKind,
    /// Pointer position in plot pixels.
    pub x: f64,
    pub y: f64,
    pub hit: Option<ExtentHit>,
    /// Whether the highlight changed and a redraw was requested.
    pub redraw_requested: bool,
}
