//! chart-extents: gantt-style extent bars for 2D chart overlays.
//!
//! The crate packs intervals into display rows, projects them into
//! backend-agnostic draw primitives under a host-supplied axis transform and
//! resolves pointer positions back to the interval under them.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ExtentsEngine, SeriesId};
pub use error::{ChartError, ChartResult};
