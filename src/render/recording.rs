use crate::error::ChartResult;
use crate::render::{Color, DrawSurface, FillStyle, LabelHost, LabelPrimitive};

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCall {
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    RoundLineJoin,
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    ClosePath,
    StrokeStyle { color: Color, width: f64 },
    FillStyle(FillStyle),
    Stroke,
    Fill,
}

/// Drawing surface that records every call, for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn count(&self, wanted: SurfaceCall) -> usize {
        self.calls.iter().filter(|call| **call == wanted).count()
    }

    /// Save/restore calls are balanced and never underflow.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;
        for call in &self.calls {
            match call {
                SurfaceCall::Save => depth += 1,
                SurfaceCall::Restore => match depth.checked_sub(1) {
                    Some(next) => depth = next,
                    None => return false,
                },
                _ => {}
            }
        }
        depth == 0
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) -> ChartResult<()> {
        self.calls.push(SurfaceCall::Save);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.calls.push(SurfaceCall::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.calls.push(SurfaceCall::Translate { dx, dy });
    }

    fn set_round_line_join(&mut self) {
        self.calls.push(SurfaceCall::RoundLineJoin);
    }

    fn begin_path(&mut self) {
        self.calls.push(SurfaceCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(SurfaceCall::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(SurfaceCall::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.calls.push(SurfaceCall::QuadTo { cx, cy, x, y });
    }

    fn close_path(&mut self) {
        self.calls.push(SurfaceCall::ClosePath);
    }

    fn set_stroke_style(&mut self, color: Color, width: f64) {
        self.calls.push(SurfaceCall::StrokeStyle { color, width });
    }

    fn set_fill_style(&mut self, style: FillStyle) {
        self.calls.push(SurfaceCall::FillStyle(style));
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.calls.push(SurfaceCall::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> ChartResult<()> {
        self.calls.push(SurfaceCall::Fill);
        Ok(())
    }
}

/// Label host keeping the fragments of the latest redraw in memory.
#[derive(Debug, Default)]
pub struct RecordingLabelHost {
    pub labels: Vec<LabelPrimitive>,
    pub clear_count: usize,
}

impl LabelHost for RecordingLabelHost {
    fn clear_labels(&mut self) {
        self.labels.clear();
        self.clear_count += 1;
    }

    fn insert_label(&mut self, label: &LabelPrimitive) -> ChartResult<()> {
        self.labels.push(label.clone());
        Ok(())
    }
}
