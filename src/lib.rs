//! Vuetify configuration - build-time generator for the `virtual:vuetify-configuration` module
//!
//! This library synthesizes the source text of a virtual module that exports
//! `isDev` and a `vuetifyConfiguration()` factory, and exposes it through the
//! `resolve_id`/`load` hook pair a bundler drives.
//!
//! # Example
//!
//! ```
//! # tokio_test::block_on(async {
//! use vuetify_configuration::{generate, Selector};
//!
//! let module = generate(
//!     false,
//!     Selector::subset(["Ripple"]),
//!     Selector::Disabled,
//!     &serde_json::json!({ "theme": { "defaultTheme": "dark" } }),
//! )
//! .await
//! .unwrap();
//! assert!(module.starts_with("import { Ripple } from 'vuetify/directives/Ripple'"));
//! # });
//! ```
pub mod container;
pub mod diagnostic;
pub mod error;
pub mod generator;
pub mod logging;
pub mod options;
pub mod plugin;
pub mod selector;

use serde::Serialize;
use std::sync::Arc;

/// Re-export main types for convenience
pub use container::PluginContainer;
pub use error::{ConfigError, ConfigurationError, Error, LoadError, Result};
pub use generator::{Feature, GenerationResult};
pub use options::PluginOptions;
pub use plugin::{
    vuetify_configuration_plugin, ConfigurationPlugin, Enforce, Plugin,
    RESOLVED_VIRTUAL_VUETIFY_CONFIGURATION, VIRTUAL_VUETIFY_CONFIGURATION,
};
pub use selector::Selector;

/// Build the configuration plugin and load the virtual module in one step
///
/// Goes through the same `resolve_id`/`load` path a bundler would.
pub async fn generate<T>(
    is_dev: bool,
    directives: Selector,
    lab_components: Selector,
    options: &T,
) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let plugin = ConfigurationPlugin::new(is_dev, directives, lab_components, options)?;
    let container = PluginContainer::new().with_plugin(Arc::new(plugin));
    Ok(container.import(VIRTUAL_VUETIFY_CONFIGURATION).await?)
}

/// Generate the virtual module from parsed plugin options
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// use vuetify_configuration::{generate_from_options, PluginOptions};
///
/// let options = PluginOptions::from_json_str(r#"{"isDev": true}"#).unwrap();
/// let module = generate_from_options(options).await.unwrap();
/// assert!(module.contains("export const isDev = true"));
/// # });
/// ```
pub async fn generate_from_options(options: PluginOptions) -> Result<String> {
    generate(
        options.is_dev,
        options.directives,
        options.lab_components,
        &options.vuetify_options,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_generate_everything_disabled() {
        let module = generate(true, Selector::Disabled, Selector::Disabled, &json!({}))
            .await
            .unwrap();

        assert_eq!(
            module,
            "\n\n\nexport const isDev = true\nexport function vuetifyConfiguration() {\n  const options = {}\n  \n  \n  return options\n}\n"
        );
    }

    #[tokio::test]
    async fn test_generate_is_deterministic() {
        let options = json!({ "defaults": { "VBtn": { "variant": "text" } } });
        let first = generate(false, Selector::All, Selector::All, &options)
            .await
            .unwrap();
        let second = generate(false, Selector::All, Selector::All, &options)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_generate_from_options() {
        let options = PluginOptions::from_json_str(r#"{"labComponents": ["VDataTable"]}"#).unwrap();
        let module = generate_from_options(options).await.unwrap();
        assert!(module.contains("import { VDataTable } from 'vuetify/labs/VDataTable'"));
        assert!(module.contains("options.components = {VDataTable}"));
    }
}
