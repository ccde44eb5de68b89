use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{ExtentsEngine, PluginEvent};

impl<R: Renderer> ExtentsEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            plot: self.plot,
            series_count: self.series.len(),
            highlight: self.highlight.clone(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(&event, &context);
        }
    }
}
