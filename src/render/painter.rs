use crate::error::ChartResult;
use crate::render::{DrawSurface, ExtentFrame, FillStyle, LabelHost, PathCommand, Renderer};

/// Counts of primitives replayed by the last paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintStats {
    pub bars: usize,
    pub pointer_markers: usize,
    pub connectors: usize,
    pub labels: usize,
}

/// Replays `frame` onto a host surface and label host.
///
/// Previously inserted labels are cleared first. Shapes are drawn inside a
/// save/restore scope translated to the plot origin: bars (stroke, then fill),
/// their pointer markers, then connectors on top.
pub fn paint_frame<S, L>(
    surface: &mut S,
    labels: &mut L,
    frame: &ExtentFrame,
) -> ChartResult<PaintStats>
where
    S: DrawSurface + ?Sized,
    L: LabelHost + ?Sized,
{
    frame.validate()?;
    labels.clear_labels();

    let mut stats = PaintStats::default();
    surface.save()?;
    surface.translate(frame.plot.offset.left, frame.plot.offset.top);
    surface.set_round_line_join();

    for bar in &frame.bars {
        surface.set_stroke_style(bar.stroke_color, bar.stroke_width);
        append_path(surface, &bar.path());
        surface.stroke()?;
        if let Some(fill) = bar.fill {
            surface.set_fill_style(fill);
            surface.fill()?;
        }

        if let Some(pointers) = bar.pointers {
            surface.set_fill_style(bar.fill.unwrap_or(FillStyle::Solid(bar.stroke_color)));
            for marker in &pointers {
                append_path(surface, &marker.path());
                surface.fill()?;
                stats.pointer_markers += 1;
            }
        }
        stats.bars += 1;
    }

    for connector in &frame.connectors {
        surface.set_stroke_style(connector.color, connector.stroke_width);
        append_path(surface, &connector.path());
        surface.stroke()?;
        stats.connectors += 1;
    }

    surface.restore()?;

    for label in &frame.labels {
        labels.insert_label(label)?;
        stats.labels += 1;
    }

    Ok(stats)
}

fn append_path<S: DrawSurface + ?Sized>(surface: &mut S, commands: &[PathCommand]) {
    surface.begin_path();
    for command in commands {
        match *command {
            PathCommand::MoveTo { x, y } => surface.move_to(x, y),
            PathCommand::LineTo { x, y } => surface.line_to(x, y),
            PathCommand::QuadTo { cx, cy, x, y } => surface.quadratic_curve_to(cx, cy, x, y),
            PathCommand::Close => surface.close_path(),
        }
    }
}

/// `Renderer` adapter pairing a host drawing surface with a label host.
#[derive(Debug)]
pub struct SurfaceRenderer<S, L> {
    surface: S,
    labels: L,
    last_stats: PaintStats,
}

impl<S: DrawSurface, L: LabelHost> SurfaceRenderer<S, L> {
    #[must_use]
    pub fn new(surface: S, labels: L) -> Self {
        Self {
            surface,
            labels,
            last_stats: PaintStats::default(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn labels(&self) -> &L {
        &self.labels
    }

    #[must_use]
    pub fn last_stats(&self) -> PaintStats {
        self.last_stats
    }

    #[must_use]
    pub fn into_parts(self) -> (S, L) {
        (self.surface, self.labels)
    }
}

impl<S: DrawSurface, L: LabelHost> Renderer for SurfaceRenderer<S, L> {
    fn render(&mut self, frame: &ExtentFrame) -> ChartResult<()> {
        self.last_stats = paint_frame(&mut self.surface, &mut self.labels, frame)?;
        Ok(())
    }
}
