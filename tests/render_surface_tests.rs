use chart_extents::api::ExtentsEngineConfig;
use chart_extents::core::{ExtentSeriesOptions, LinearScale, PlotOffset, RawExtent, Viewport};
use chart_extents::render::{
    Color, DrawSurface, Fill, FillStyle, LabelHAnchor, LabelVAnchor, PaintStats,
    RecordingLabelHost, RecordingSurface, SurfaceCall, SurfaceRenderer,
};
use chart_extents::{ChartError, ChartResult, ExtentsEngine, SeriesId};

const TOP: Color = Color::rgb(1.0, 0.0, 0.0);
const BOTTOM: Color = Color::rgb(0.0, 0.0, 1.0);

type Recording = SurfaceRenderer<RecordingSurface, RecordingLabelHost>;

fn axis() -> LinearScale {
    LinearScale::new(0.0, 100.0, 400.0).expect("axis")
}

fn options() -> ExtentSeriesOptions {
    let mut options = ExtentSeriesOptions::shown()
        .with_rows(0)
        .with_expand_bar(6.0)
        .with_fill_color(Fill::Gradient {
            top: TOP,
            bottom: BOTTOM,
        });
    options.line_width = 2.0;
    options
}

fn engine(options: ExtentSeriesOptions) -> ExtentsEngine<Recording> {
    let renderer = SurfaceRenderer::new(RecordingSurface::default(), RecordingLabelHost::default());
    let config = ExtentsEngineConfig::new(Viewport::new(400, 300))
        .with_offset(PlotOffset::new(10.0, 20.0, 0.0, 0.0));
    let mut engine = ExtentsEngine::new(renderer, config).expect("engine");
    engine
        .set_series(
            "plan",
            options,
            vec![
                RawExtent::new(10.0, 20.0)
                    .with_label("A")
                    .with_pointer_markers(true),
                RawExtent::new(30.0, 40.0).with_label("B").with_depends_on([0]),
            ],
        )
        .expect("series");
    engine
}

fn fill_styles(surface: &RecordingSurface) -> Vec<FillStyle> {
    surface
        .calls
        .iter()
        .filter_map(|call| match call {
            SurfaceCall::FillStyle(style) => Some(*style),
            _ => None,
        })
        .collect()
}

#[test]
fn paint_runs_inside_one_translated_scope() {
    let mut engine = engine(options());
    engine.render(&axis()).expect("render");
    let surface = engine.renderer().surface();

    assert!(surface.is_balanced());
    assert_eq!(surface.calls[0], SurfaceCall::Save);
    assert_eq!(surface.calls[1], SurfaceCall::Translate { dx: 20.0, dy: 10.0 });
    assert_eq!(surface.calls[2], SurfaceCall::RoundLineJoin);
    assert_eq!(surface.calls.last(), Some(&SurfaceCall::Restore));
}

#[test]
fn bars_markers_and_connectors_are_all_painted() {
    let mut engine = engine(options());
    engine.render(&axis()).expect("render");
    let surface = engine.renderer().surface();

    assert_eq!(
        engine.renderer().last_stats(),
        PaintStats {
            bars: 2,
            pointer_markers: 2,
            connectors: 1,
            labels: 2,
        }
    );
    assert_eq!(surface.count(SurfaceCall::BeginPath), 5);
    assert_eq!(surface.count(SurfaceCall::Stroke), 3);
    assert_eq!(surface.count(SurfaceCall::Fill), 4);
    assert_eq!(
        surface.count(SurfaceCall::StrokeStyle {
            color: options().connection_color,
            width: 2.0,
        }),
        1
    );
}

#[test]
fn connectors_are_drawn_after_every_bar() {
    let mut engine = engine(options());
    engine.render(&axis()).expect("render");
    let calls = &engine.renderer().surface().calls;

    let connector_style = SurfaceCall::StrokeStyle {
        color: options().connection_color,
        width: 2.0,
    };
    let connector_at = calls
        .iter()
        .position(|call| *call == connector_style)
        .expect("connector stroke style");
    let last_bar_fill = calls
        .iter()
        .rposition(|call| matches!(call, SurfaceCall::FillStyle(_)))
        .expect("bar fill style");
    assert!(last_bar_fill < connector_at);
}

#[test]
fn highlighted_bar_gets_reversed_gradient() {
    let mut engine = engine(options());
    engine.highlight(&SeriesId::new("plan"), 1).expect("highlight");
    engine.render(&axis()).expect("render");

    let first_stops: Vec<Color> = fill_styles(engine.renderer().surface())
        .into_iter()
        .map(|style| match style {
            FillStyle::LinearGradient(gradient) => gradient.stops[0].color,
            FillStyle::Solid(_) => panic!("expected gradient fills"),
        })
        .collect();

    // Bar A, A's pointer markers, then the hovered bar B.
    assert_eq!(first_stops, vec![TOP, TOP, BOTTOM]);
}

#[test]
fn markers_fall_back_to_outline_color_without_fill() {
    let mut options = options();
    options.fill = false;
    let mut engine = engine(options);
    engine.render(&axis()).expect("render");

    assert_eq!(
        fill_styles(engine.renderer().surface()),
        vec![FillStyle::Solid(options.color)]
    );
    assert_eq!(engine.renderer().surface().count(SurfaceCall::Fill), 2);
}

#[test]
fn labels_are_replaced_on_every_redraw() {
    let mut engine = engine(options());
    engine.render(&axis()).expect("render");
    engine.render(&axis()).expect("render");

    let host = engine.renderer().labels();
    assert_eq!(host.clear_count, 2);
    assert_eq!(host.labels.len(), 2);

    let first = &host.labels[0];
    assert_eq!(first.text, "A");
    // Row 0 at top offset 10, left edge of 10..20 at 40 px plus offset 20.
    assert_eq!(first.vertical, LabelVAnchor::Top(14.0));
    assert_eq!(first.horizontal, LabelHAnchor::Left(63.0));
    assert_eq!(first.width, 40.0);
}

struct FailingSurface;

impl DrawSurface for FailingSurface {
    fn save(&mut self) -> ChartResult<()> {
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        Ok(())
    }

    fn translate(&mut self, _dx: f64, _dy: f64) {}

    fn set_round_line_join(&mut self) {}

    fn begin_path(&mut self) {}

    fn move_to(&mut self, _x: f64, _y: f64) {}

    fn line_to(&mut self, _x: f64, _y: f64) {}

    fn quadratic_curve_to(&mut self, _cx: f64, _cy: f64, _x: f64, _y: f64) {}

    fn close_path(&mut self) {}

    fn set_stroke_style(&mut self, _color: Color, _width: f64) {}

    fn set_fill_style(&mut self, _style: FillStyle) {}

    fn stroke(&mut self) -> ChartResult<()> {
        Err(ChartError::Backend("surface lost".to_owned()))
    }

    fn fill(&mut self) -> ChartResult<()> {
        Ok(())
    }
}

#[test]
fn backend_failure_keeps_the_redraw_pending() {
    let renderer = SurfaceRenderer::new(FailingSurface, RecordingLabelHost::default());
    let mut engine =
        ExtentsEngine::new(renderer, ExtentsEngineConfig::new(Viewport::new(400, 300)))
            .expect("engine");
    engine
        .set_series(
            "plan",
            ExtentSeriesOptions::shown(),
            vec![RawExtent::new(10.0, 20.0)],
        )
        .expect("series");

    let result = engine.render(&axis());
    assert!(matches!(result, Err(ChartError::Backend(_))));
    assert!(engine.has_pending_redraw());
}
