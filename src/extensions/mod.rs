//! Optional hooks around the extent engine.
//!
//! Extensions observe engine activity and never feed back into layout.

pub mod plugins;

pub use plugins::{ExtentPlugin, PluginContext, PluginEvent};
