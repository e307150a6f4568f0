//! Bundler plugin hooks and the Vuetify configuration plugin
//!
//! This module defines the two-hook contract a host bundler drives
//! (`resolve_id` then `load`), the plugin that synthesizes the
//! `virtual:vuetify-configuration` module, and a general in-memory
//! virtual module plugin.
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use crate::error::ConfigurationError;
use crate::generator::{self, Feature, GenerationResult};
use crate::selector::Selector;

/// Public name application code imports
pub const VIRTUAL_VUETIFY_CONFIGURATION: &str = "virtual:vuetify-configuration";

/// Resolved form of [`VIRTUAL_VUETIFY_CONFIGURATION`]; the leading NUL marks it
/// as not backed by a file
pub const RESOLVED_VIRTUAL_VUETIFY_CONFIGURATION: &str = "\0virtual:vuetify-configuration";

/// Name the configuration plugin registers under
pub const PLUGIN_NAME: &str = "vuetify:configuration:nuxt";

/// Marker prefix the host reserves for virtual module ids
pub const VIRTUAL_ID_PREFIX: char = '\0';

/// Ordering hint relative to the host's own plugins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enforce {
    Pre,
    Post,
}

/// Async trait for bundler plugins taking part in module resolution
///
/// Both hooks return `None` for ids the plugin does not own, deferring to the
/// next plugin in the host's chain.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Plugin name, used in diagnostics
    fn name(&self) -> &str;

    /// Ordering hint; `None` runs with the host's normal plugins
    fn enforce(&self) -> Option<Enforce> {
        None
    }

    /// Map a requested id to the id this plugin will load
    fn resolve_id(&self, id: &str) -> Option<String>;

    /// Produce source text for a resolved id
    async fn load(&self, id: &str) -> Option<String>;
}

/// Plugin that synthesizes the `virtual:vuetify-configuration` module
///
/// Everything is computed at construction; the plugin is immutable afterwards
/// and every `load` returns the same text.
#[derive(Debug, Clone)]
pub struct ConfigurationPlugin {
    is_dev: bool,
    options_json: String,
    directives: GenerationResult,
    lab_components: GenerationResult,
}

impl ConfigurationPlugin {
    /// Create the plugin, serializing `options` up front
    ///
    /// # Errors
    /// Returns [`ConfigurationError::Serialize`] when `options` cannot be
    /// represented as JSON.
    ///
    /// # Example
    /// ```
    /// use vuetify_configuration::{ConfigurationPlugin, Selector};
    ///
    /// let plugin = ConfigurationPlugin::new(
    ///     true,
    ///     Selector::All,
    ///     Selector::Disabled,
    ///     &serde_json::json!({ "theme": { "defaultTheme": "dark" } }),
    /// )
    /// .unwrap();
    /// assert!(plugin.source().contains("export const isDev = true"));
    /// ```
    pub fn new<T>(
        is_dev: bool,
        directives: Selector,
        lab_components: Selector,
        options: &T,
    ) -> Result<Self, ConfigurationError>
    where
        T: Serialize + ?Sized,
    {
        debug!(
            is_dev,
            directives = directives.is_enabled(),
            directive_names = ?directives.names(),
            lab_components = lab_components.is_enabled(),
            lab_component_names = ?lab_components.names(),
            "configuring vuetify configuration module"
        );

        let options_json = serde_json::to_string(options)?;
        let directives = generator::resolve(Feature::Directives, &directives);
        let lab_components = generator::resolve(Feature::LabComponents, &lab_components);

        Ok(ConfigurationPlugin {
            is_dev,
            options_json,
            directives,
            lab_components,
        })
    }

    pub fn is_dev(&self) -> bool {
        self.is_dev
    }

    pub fn directives(&self) -> &GenerationResult {
        &self.directives
    }

    pub fn lab_components(&self) -> &GenerationResult {
        &self.lab_components
    }

    /// Generated module text
    pub fn source(&self) -> String {
        generator::render_module(
            self.is_dev,
            &self.options_json,
            &self.directives,
            &self.lab_components,
        )
    }
}

#[async_trait]
impl Plugin for ConfigurationPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn enforce(&self) -> Option<Enforce> {
        Some(Enforce::Pre)
    }

    fn resolve_id(&self, id: &str) -> Option<String> {
        (id == VIRTUAL_VUETIFY_CONFIGURATION)
            .then(|| RESOLVED_VIRTUAL_VUETIFY_CONFIGURATION.to_string())
    }

    async fn load(&self, id: &str) -> Option<String> {
        if id != RESOLVED_VIRTUAL_VUETIFY_CONFIGURATION {
            return None;
        }
        debug!(id = VIRTUAL_VUETIFY_CONFIGURATION, "loading virtual module");
        Some(self.source())
    }
}

/// Build the configuration plugin
///
/// Shorthand for [`ConfigurationPlugin::new`] accepting anything convertible
/// into a [`Selector`].
pub fn vuetify_configuration_plugin<T>(
    is_dev: bool,
    directives: impl Into<Selector>,
    lab_components: impl Into<Selector>,
    options: &T,
) -> Result<ConfigurationPlugin, ConfigurationError>
where
    T: Serialize + ?Sized,
{
    ConfigurationPlugin::new(is_dev, directives.into(), lab_components.into(), options)
}

/// In-memory virtual module store
///
/// Serves arbitrary source text under public ids, using the same
/// public/resolved id convention as [`ConfigurationPlugin`]. Useful for tests
/// and for embedding extra modules next to the configuration module.
#[derive(Clone)]
pub struct VirtualModules {
    name: String,
    modules: Arc<RwLock<HashMap<String, String>>>,
}

impl VirtualModules {
    /// Create a new empty store
    ///
    /// # Example
    /// ```
    /// use vuetify_configuration::plugin::VirtualModules;
    ///
    /// let modules = VirtualModules::new("virtual-modules");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        VirtualModules {
            name: name.into(),
            modules: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add or replace a module under its public id
    ///
    /// # Example
    /// ```
    /// use vuetify_configuration::plugin::VirtualModules;
    ///
    /// let modules = VirtualModules::new("virtual-modules");
    /// modules.add("virtual:icons", "export const aliases = {}\n");
    /// ```
    pub fn add(&self, id: impl Into<String>, source: impl Into<String>) {
        let mut modules = self.modules.write().unwrap_or_else(PoisonError::into_inner);
        modules.insert(id.into(), source.into());
    }

    /// Remove a module, returning whether it existed
    pub fn remove(&self, id: &str) -> bool {
        let mut modules = self.modules.write().unwrap_or_else(PoisonError::into_inner);
        modules.remove(id).is_some()
    }

    pub fn clear(&self) {
        let mut modules = self.modules.write().unwrap_or_else(PoisonError::into_inner);
        modules.clear();
    }

    /// Check whether a public id is registered
    pub fn contains(&self, id: &str) -> bool {
        let modules = self.modules.read().unwrap_or_else(PoisonError::into_inner);
        modules.contains_key(id)
    }
}

#[async_trait]
impl Plugin for VirtualModules {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve_id(&self, id: &str) -> Option<String> {
        self.contains(id)
            .then(|| format!("{}{}", VIRTUAL_ID_PREFIX, id))
    }

    async fn load(&self, id: &str) -> Option<String> {
        let public = id.strip_prefix(VIRTUAL_ID_PREFIX)?;
        let modules = self.modules.read().unwrap_or_else(PoisonError::into_inner);
        modules.get(public).cloned()
    }
}
