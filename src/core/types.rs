use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Plot area size in pixels, excluding the host's axis margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Margins between the host canvas edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotOffset {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotOffset {
    #[must_use]
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top", self.top),
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "plot offset `{name}` must be finite"
                )));
            }
        }
        Ok(self)
    }
}

/// Plot viewport plus its placement on the host canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub viewport: Viewport,
    pub offset: PlotOffset,
}

impl PlotArea {
    #[must_use]
    pub fn new(viewport: Viewport, offset: PlotOffset) -> Self {
        Self { viewport, offset }
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.viewport.validate()?;
        self.offset.validate()?;
        Ok(self)
    }

    /// Converts host canvas coordinates into plot-area coordinates.
    #[must_use]
    pub fn canvas_to_plot(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.offset.left, y - self.offset.top)
    }
}

/// Host-chosen identifier of one extent series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeriesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
