//! Host-side plugin chain
//!
//! Drives a set of [`Plugin`]s the way a bundler does: plugins are tried in
//! enforce order (pre, normal, post) and the first one with an opinion wins.
use std::sync::Arc;
use tracing::{debug, trace};

use crate::error::LoadError;
use crate::plugin::{Enforce, Plugin};

/// Ordered collection of plugins with bundler-style fallback
#[derive(Clone, Default)]
pub struct PluginContainer {
    plugins: Vec<Arc<dyn Plugin>>,
}

fn rank(enforce: Option<Enforce>) -> u8 {
    match enforce {
        Some(Enforce::Pre) => 0,
        None => 1,
        Some(Enforce::Post) => 2,
    }
}

impl PluginContainer {
    /// Create a new empty container
    ///
    /// # Example
    /// ```
    /// use vuetify_configuration::container::PluginContainer;
    ///
    /// let container = PluginContainer::new();
    /// assert!(container.plugin_names().is_empty());
    /// ```
    pub fn new() -> Self {
        PluginContainer {
            plugins: Vec::new(),
        }
    }

    /// Add a plugin to the chain
    ///
    /// Within the same enforce group, plugins run in the order they are added.
    ///
    /// # Example
    /// ```
    /// use vuetify_configuration::container::PluginContainer;
    /// use vuetify_configuration::plugin::VirtualModules;
    /// use std::sync::Arc;
    ///
    /// let container = PluginContainer::new()
    ///     .with_plugin(Arc::new(VirtualModules::new("virtual-modules")));
    /// ```
    pub fn with_plugin(mut self, plugin: Arc<dyn Plugin>) -> Self {
        self.push(plugin);
        self
    }

    /// Create a container from a vector of plugins
    pub fn from_plugins(plugins: Vec<Arc<dyn Plugin>>) -> Self {
        plugins
            .into_iter()
            .fold(PluginContainer::new(), PluginContainer::with_plugin)
    }

    fn push(&mut self, plugin: Arc<dyn Plugin>) {
        let rank_of_new = rank(plugin.enforce());
        // after every plugin of the same or an earlier group
        let index = self
            .plugins
            .iter()
            .position(|existing| rank(existing.enforce()) > rank_of_new)
            .unwrap_or(self.plugins.len());
        self.plugins.insert(index, plugin);
    }

    /// Plugin names in effective order
    pub fn plugin_names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name().to_string()).collect()
    }

    /// Resolve an id through the chain
    pub fn resolve_id(&self, id: &str) -> Option<String> {
        for plugin in &self.plugins {
            if let Some(resolved) = plugin.resolve_id(id) {
                debug!(plugin = plugin.name(), id, "resolved module id");
                return Some(resolved);
            }
        }
        trace!(id, "no plugin resolved module id");
        None
    }

    /// Load a resolved id through the chain
    pub async fn load(&self, id: &str) -> Result<String, LoadError> {
        for plugin in &self.plugins {
            if let Some(source) = plugin.load(id).await {
                debug!(plugin = plugin.name(), bytes = source.len(), "loaded module");
                return Ok(source);
            }
        }
        Err(LoadError::NotFound(id.escape_default().to_string()))
    }

    /// Resolve then load; ids nobody resolves are loaded as requested
    pub async fn import(&self, id: &str) -> Result<String, LoadError> {
        let resolved = self.resolve_id(id);
        self.load(resolved.as_deref().unwrap_or(id)).await
    }
}
