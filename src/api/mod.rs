mod data_controller;
mod engine;
mod engine_snapshot;
mod highlight_controller;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod pointer_controller;
mod series;

pub use crate::core::SeriesId;
pub use crate::extensions::{ExtentPlugin, PluginContext, PluginEvent};
pub use crate::interaction::{ExtentHit, ExtentPointerEvent, HighlightState, PointerEventKind};
pub use engine::{ExtentsEngine, ExtentsEngineConfig};
pub use engine_snapshot::{EngineSnapshot, SeriesSnapshot};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use series::ExtentSeries;
