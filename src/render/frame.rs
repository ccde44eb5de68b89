use crate::core::{ExtentGeometry, PlotArea};
use crate::error::ChartResult;
use crate::render::{BarPrimitive, ConnectorPrimitive, LabelPrimitive};

/// Backend-agnostic extent scene for one redraw.
///
/// Bar and connector coordinates are relative to the plot area; label
/// anchors are relative to the host canvas edges.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtentFrame {
    pub plot: PlotArea,
    pub bars: Vec<BarPrimitive>,
    pub connectors: Vec<ConnectorPrimitive>,
    pub labels: Vec<LabelPrimitive>,
}

impl ExtentFrame {
    #[must_use]
    pub fn new(plot: PlotArea) -> Self {
        Self {
            plot,
            bars: Vec::new(),
            connectors: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn push_geometry(&mut self, geometry: ExtentGeometry) {
        self.bars.push(geometry.bar);
        self.connectors.extend(geometry.connectors);
        self.labels.extend(geometry.label);
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: ExtentGeometry) -> Self {
        self.push_geometry(geometry);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.plot.validate()?;
        for bar in &self.bars {
            bar.validate()?;
        }
        for connector in &self.connectors {
            connector.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.connectors.is_empty() && self.labels.is_empty()
    }
}
