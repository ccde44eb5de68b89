use crate::error::ChartResult;
use crate::render::{ExtentFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// Frames are still validated so invalid geometry surfaces before a real
/// backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_bar_count: usize,
    pub last_connector_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ExtentFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_bar_count = frame.bars.len();
        self.last_connector_count = frame.connectors.len();
        self.last_label_count = frame.labels.len();
        Ok(())
    }
}
