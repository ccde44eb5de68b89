use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Host-owned mapping between one axis' domain and plot pixels.
///
/// Pixel coordinates are relative to the plot area origin. `bounds` returns
/// the currently visible domain range as `(min, max)`.
pub trait AxisTransform {
    fn to_pixel(&self, value: f64) -> f64;
    fn to_domain(&self, pixel: f64) -> f64;
    fn bounds(&self) -> (f64, f64);
}

impl<T: AxisTransform + ?Sized> AxisTransform for &T {
    fn to_pixel(&self, value: f64) -> f64 {
        (**self).to_pixel(value)
    }

    fn to_domain(&self, pixel: f64) -> f64 {
        (**self).to_domain(pixel)
    }

    fn bounds(&self) -> (f64, f64) {
        (**self).bounds()
    }
}

/// Linear axis mapping `[domain_start, domain_end]` onto `[0, span_px]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    span_px: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, span_px: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale pixel span must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            span_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn span_px(self) -> f64 {
        self.span_px
    }

    /// Pixel distance covered by one domain unit.
    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        self.span_px / (self.domain_end - self.domain_start)
    }
}

impl AxisTransform for LinearScale {
    fn to_pixel(&self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        (value - self.domain_start) / span * self.span_px
    }

    fn to_domain(&self, pixel: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        self.domain_start + pixel / self.span_px * span
    }

    fn bounds(&self) -> (f64, f64) {
        if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        }
    }
}
