use cairo::{Context, Format, ImageSurface, LineJoin};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawSurface, ExtentFrame, FillStyle, LabelHAnchor, LabelHost, LabelPrimitive,
    LabelVAnchor, PaintStats, Renderer, paint_frame,
};

const LABEL_FONT: &str = "Sans 8";

/// `DrawSurface` over a Cairo context.
///
/// Cairo consumes the path on stroke/fill, so both use the `_preserve`
/// variants to keep canvas semantics. Quadratic segments are raised to cubic.
#[derive(Debug, Clone)]
pub struct CairoSurface {
    context: Context,
    stroke_color: Color,
    fill_style: FillStyle,
}

impl CairoSurface {
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self {
            context,
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            fill_style: FillStyle::Solid(Color::rgb(0.0, 0.0, 0.0)),
        }
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }
}

impl DrawSurface for CairoSurface {
    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.context.translate(dx, dy);
    }

    fn set_round_line_join(&mut self) {
        self.context.set_line_join(LineJoin::Round);
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        let (x0, y0) = self.context.current_point().unwrap_or((cx, cy));
        self.context.curve_to(
            x0 + 2.0 / 3.0 * (cx - x0),
            y0 + 2.0 / 3.0 * (cy - y0),
            x + 2.0 / 3.0 * (cx - x),
            y + 2.0 / 3.0 * (cy - y),
            x,
            y,
        );
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn set_stroke_style(&mut self, color: Color, width: f64) {
        self.stroke_color = color;
        self.context.set_line_width(width);
    }

    fn set_fill_style(&mut self, style: FillStyle) {
        self.fill_style = style;
    }

    fn stroke(&mut self) -> ChartResult<()> {
        apply_color(&self.context, self.stroke_color);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill(&mut self) -> ChartResult<()> {
        match self.fill_style {
            FillStyle::Solid(color) => apply_color(&self.context, color),
            FillStyle::LinearGradient(gradient) => {
                let pattern =
                    cairo::LinearGradient::new(gradient.x0, gradient.y0, gradient.x1, gradient.y1);
                for stop in gradient.stops {
                    pattern.add_color_stop_rgba(
                        stop.offset,
                        stop.color.red,
                        stop.color.green,
                        stop.color.blue,
                        stop.color.alpha,
                    );
                }
                self.context
                    .set_source(&pattern)
                    .map_err(|err| map_backend_error("failed to set gradient source", err))?;
            }
        }
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }
}

/// `LabelHost` drawing extent labels with Pango onto a Cairo context.
///
/// Anchors measured from the right/bottom canvas edge are resolved against
/// the canvas size given at construction.
#[derive(Debug, Clone)]
pub struct CairoLabelHost {
    context: Context,
    canvas_width: f64,
    canvas_height: f64,
    color: Color,
    drawn: usize,
}

impl CairoLabelHost {
    #[must_use]
    pub fn new(context: Context, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            context,
            canvas_width,
            canvas_height,
            color: Color::rgb(0.0, 0.0, 0.0),
            drawn: 0,
        }
    }

    pub fn set_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.color = color;
        Ok(())
    }

    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl LabelHost for CairoLabelHost {
    fn clear_labels(&mut self) {
        self.drawn = 0;
    }

    fn insert_label(&mut self, label: &LabelPrimitive) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&FontDescription::from_string(LABEL_FONT)));
        layout.set_width((label.width.max(0.0) * f64::from(pango::SCALE)) as i32);
        layout.set_text(&label.text);
        let (_, text_height) = layout.pixel_size();

        let x = match label.horizontal {
            LabelHAnchor::Left(left) => left,
            LabelHAnchor::Right(right) => self.canvas_width - right - label.width,
        };
        let y = match label.vertical {
            LabelVAnchor::Top(top) => top,
            LabelVAnchor::Bottom(bottom) => self.canvas_height - bottom - f64::from(text_height),
        };

        apply_color(&self.context, self.color);
        self.context.move_to(x, y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.drawn += 1;
        Ok(())
    }
}

/// Offscreen Cairo renderer for extent frames.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: PaintStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: PaintStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> PaintStats {
        self.last_stats
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &ExtentFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut shapes = CairoSurface::new(context.clone());
        let mut labels = CairoLabelHost::new(
            context,
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        );
        self.last_stats = paint_frame(&mut shapes, &mut labels, frame)?;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
