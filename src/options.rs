//! Plugin options as read from a project configuration file
use serde::Deserialize;
use serde_json::Value;
#[cfg(feature = "tokio-runtime")]
use std::path::Path;
use tracing::debug;

use crate::error::{ConfigError, ConfigurationError};
use crate::plugin::ConfigurationPlugin;
use crate::selector::Selector;

/// Inputs of the configuration plugin
///
/// Deserialized from camelCase JSON; every field is optional:
///
/// ```json
/// {
///   "isDev": true,
///   "directives": ["Ripple"],
///   "labComponents": true,
///   "vuetifyOptions": { "theme": { "defaultTheme": "dark" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginOptions {
    pub is_dev: bool,
    pub directives: Selector,
    pub lab_components: Selector,
    pub vuetify_options: Value,
}

impl Default for PluginOptions {
    fn default() -> Self {
        PluginOptions {
            is_dev: false,
            directives: Selector::Disabled,
            lab_components: Selector::Disabled,
            vuetify_options: Value::Object(Default::default()),
        }
    }
}

impl PluginOptions {
    /// Parse options from JSON text
    ///
    /// # Example
    /// ```
    /// use vuetify_configuration::{PluginOptions, Selector};
    ///
    /// let options = PluginOptions::from_json_str(r#"{"directives": true}"#).unwrap();
    /// assert_eq!(options.directives, Selector::All);
    /// assert_eq!(options.lab_components, Selector::Disabled);
    /// ```
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse options from a JSON file
    ///
    /// Only available with the `tokio-runtime` feature.
    #[cfg(feature = "tokio-runtime")]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "read plugin options");
        Self::from_json_str(&source)
    }

    /// Override the development flag
    pub fn with_dev(mut self, is_dev: bool) -> Self {
        self.is_dev = is_dev;
        self
    }

    /// Build the configuration plugin from these options
    pub fn into_plugin(self) -> Result<ConfigurationPlugin, ConfigurationError> {
        debug!(is_dev = self.is_dev, "building configuration plugin");
        ConfigurationPlugin::new(
            self.is_dev,
            self.directives,
            self.lab_components,
            &self.vuetify_options,
        )
    }
}
