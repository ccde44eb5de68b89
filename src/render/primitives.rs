use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::render::named_colors::NAMED_COLORS;

/// RGBA color in normalized 0..=1 channel values.
///
/// Deserializes either from a channel object or from css-like notation
/// (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`, `rgba(r, g, b, a)`
/// and the CSS color names).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a 0..=1 alpha.
    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || ChartError::InvalidData(format!("unsupported color notation: `{input}`"));

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(invalid());
            }
            let channels: SmallVec<[u8; 4]> = match hex.len() {
                3 | 4 => hex
                    .chars()
                    .map(|digit| digit.to_digit(16).map(|value| value as u8 * 17))
                    .collect::<Option<_>>()
                    .ok_or_else(invalid)?,
                6 | 8 => (0..hex.len())
                    .step_by(2)
                    .map(|at| u8::from_str_radix(&hex[at..at + 2], 16).ok())
                    .collect::<Option<_>>()
                    .ok_or_else(invalid)?,
                _ => return Err(invalid()),
            };
            let alpha = channels.get(3).map_or(1.0, |alpha| f64::from(*alpha) / 255.0);
            return Ok(Self::from_rgba8(channels[0], channels[1], channels[2], alpha));
        }

        let name = trimmed.to_ascii_lowercase();
        if name == "transparent" {
            return Ok(Self::rgba(0.0, 0.0, 0.0, 0.0));
        }
        if let Ok(found) = NAMED_COLORS.binary_search_by_key(&name.as_str(), |(key, _)| *key) {
            let [red, green, blue] = NAMED_COLORS[found].1;
            return Ok(Self::from_rgba8(red, green, blue, 1.0));
        }

        let (body, expected) = if let Some(body) = trimmed.strip_prefix("rgba(") {
            (body, 4)
        } else if let Some(body) = trimmed.strip_prefix("rgb(") {
            (body, 3)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: SmallVec<[f64; 4]> = body
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;
        if parts.len() != expected {
            return Err(invalid());
        }
        for channel in &parts[..3] {
            if !(0.0..=255.0).contains(channel) {
                return Err(invalid());
            }
        }

        let color = Self::rgba(
            parts[0] / 255.0,
            parts[1] / 255.0,
            parts[2] / 255.0,
            parts.get(3).copied().unwrap_or(1.0),
        );
        color.validate()?;
        Ok(color)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Css(String),
    Channels {
        red: f64,
        green: f64,
        blue: f64,
        #[serde(default = "opaque")]
        alpha: f64,
    },
}

fn opaque() -> f64 {
    1.0
}

impl TryFrom<ColorRepr> for Color {
    type Error = ChartError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Css(text) => text.parse(),
            ColorRepr::Channels {
                red,
                green,
                blue,
                alpha,
            } => {
                let color = Self::rgba(red, green, blue, alpha);
                color.validate()?;
                Ok(color)
            }
        }
    }
}

/// Bar interior paint: a solid color or a vertical two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    Gradient {
        #[serde(rename = "topColor")]
        top: Color,
        #[serde(rename = "bottomColor")]
        bottom: Color,
    },
    Solid(Color),
}

impl Fill {
    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::Gradient { top, bottom } => {
                top.validate()?;
                bottom.validate()
            }
        }
    }
}

/// One color stop of a linear gradient, `offset` in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient running from `(x0, y0)` to `(x1, y1)` in plot pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: [ColorStop; 2],
}

/// Resolved paint handed to a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FillStyle {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl FillStyle {
    fn validate(self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::LinearGradient(gradient) => {
                if ![gradient.x0, gradient.y0, gradient.x1, gradient.y1]
                    .iter()
                    .all(|value| value.is_finite())
                {
                    return Err(ChartError::InvalidData(
                        "gradient coordinates must be finite".to_owned(),
                    ));
                }
                for stop in gradient.stops {
                    stop.color.validate()?;
                }
                Ok(())
            }
        }
    }
}

/// Path construction step in plot pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    Close,
}

/// Small filled triangle drawn under a bar end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerMarker {
    pub points: [(f64, f64); 3],
}

impl PointerMarker {
    #[must_use]
    pub fn path(&self) -> [PathCommand; 3] {
        let [a, b, c] = self.points;
        [
            PathCommand::MoveTo { x: a.0, y: a.1 },
            PathCommand::LineTo { x: b.0, y: b.1 },
            PathCommand::LineTo { x: c.0, y: c.1 },
        ]
    }
}

/// Rounded extent bar in plot pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: Option<FillStyle>,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub pointers: Option<[PointerMarker; 2]>,
}

impl BarPrimitive {
    /// Outline of the rounded rectangle, corners drawn as quadratic curves.
    #[must_use]
    pub fn path(&self) -> [PathCommand; 10] {
        let (x, y, w, h, r) = (self.x, self.y, self.width, self.height, self.corner_radius);
        [
            PathCommand::MoveTo { x: x + r, y },
            PathCommand::LineTo { x: x + w - r, y },
            PathCommand::QuadTo {
                cx: x + w,
                cy: y,
                x: x + w,
                y: y + r,
            },
            PathCommand::LineTo {
                x: x + w,
                y: y + h - r,
            },
            PathCommand::QuadTo {
                cx: x + w,
                cy: y + h,
                x: x + w - r,
                y: y + h,
            },
            PathCommand::LineTo { x: x + r, y: y + h },
            PathCommand::QuadTo {
                cx: x,
                cy: y + h,
                x,
                y: y + h - r,
            },
            PathCommand::LineTo { x, y: y + r },
            PathCommand::QuadTo {
                cx: x,
                cy: y,
                x: x + r,
                y,
            },
            PathCommand::Close,
        ]
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn validate(&self) -> ChartResult<()> {
        for value in [self.x, self.y, self.width, self.height, self.corner_radius] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "bar geometry must be finite".to_owned(),
                ));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "bar stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        self.stroke_color.validate()
    }
}

/// Elbow connector plus arrowhead, stroked as one open polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorPrimitive {
    pub points: SmallVec<[(f64, f64); 8]>,
    pub color: Color,
    pub stroke_width: f64,
}

impl ConnectorPrimitive {
    #[must_use]
    pub fn path(&self) -> Vec<PathCommand> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, &(x, y))| {
                if index == 0 {
                    PathCommand::MoveTo { x, y }
                } else {
                    PathCommand::LineTo { x, y }
                }
            })
            .collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 2 {
            return Err(ChartError::InvalidData(
                "connector needs at least two points".to_owned(),
            ));
        }
        if self
            .points
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "connector coordinates must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Vertical anchor of a label box, in canvas pixels from that edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LabelVAnchor {
    Top(f64),
    Bottom(f64),
}

/// Horizontal anchor of a label box, in canvas pixels from that edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LabelHAnchor {
    Left(f64),
    Right(f64),
}

/// CSS-like class attached to every extent label fragment.
pub const EXTENT_LABEL_CLASS: &str = "extentLabel";

/// Absolutely positioned text fragment handed to the label host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPrimitive {
    pub text: String,
    pub id: Option<String>,
    pub vertical: LabelVAnchor,
    pub horizontal: LabelHAnchor,
    pub width: f64,
}

impl LabelPrimitive {
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        EXTENT_LABEL_CLASS
    }

    pub fn validate(&self) -> ChartResult<()> {
        let (LabelVAnchor::Top(v) | LabelVAnchor::Bottom(v)) = self.vertical;
        let (LabelHAnchor::Left(h) | LabelHAnchor::Right(h)) = self.horizontal;
        if !v.is_finite() || !h.is_finite() || !self.width.is_finite() {
            return Err(ChartError::InvalidData(
                "label placement must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Fill};

    #[test]
    fn parses_css_rgba_notation() {
        let color: Color = "rgba(0, 192, 128, 0.8)".parse().expect("color");
        assert_eq!(color, Color::from_rgba8(0, 192, 128, 0.8));
    }

    #[test]
    fn parses_hex_notation() {
        let color: Color = "#ff000080".parse().expect("color");
        assert_eq!(color.red, 1.0);
        assert_eq!(color.alpha, 128.0 / 255.0);
        assert!("#12345".parse::<Color>().is_err());
        assert!("hsl(1, 2, 3)".parse::<Color>().is_err());
        assert!("rgb(300, 0, 0)".parse::<Color>().is_err());
    }

    #[test]
    fn parses_short_hex_and_named_colors() {
        assert_eq!(
            "#fff".parse::<Color>().expect("color"),
            Color::rgb(1.0, 1.0, 1.0)
        );
        assert_eq!(
            "#f008".parse::<Color>().expect("color"),
            Color::from_rgba8(255, 0, 0, 136.0 / 255.0)
        );
        assert_eq!(
            "Red".parse::<Color>().expect("color"),
            Color::rgb(1.0, 0.0, 0.0)
        );
        assert_eq!(
            "teal".parse::<Color>().expect("color"),
            Color::from_rgba8(0, 128, 128, 1.0)
        );
        assert_eq!("transparent".parse::<Color>().expect("color").alpha, 0.0);
        assert!("#ggg".parse::<Color>().is_err());
        assert!("reddish".parse::<Color>().is_err());
    }

    #[test]
    fn fill_deserializes_solid_and_gradient_shapes() {
        let solid: Fill = serde_json::from_str("\"rgb(64, 192, 255)\"").expect("solid");
        assert_eq!(solid, Fill::Solid(Color::from_rgba8(64, 192, 255, 1.0)));

        let gradient: Fill =
            serde_json::from_str(r##"{"topColor": "#ffffff", "bottomColor": "#000000"}"##)
                .expect("gradient");
        assert_eq!(
            gradient,
            Fill::Gradient {
                top: Color::rgb(1.0, 1.0, 1.0),
                bottom: Color::rgb(0.0, 0.0, 0.0),
            }
        );
    }
}
