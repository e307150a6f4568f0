//! Tests for running the configuration plugin inside a plugin chain
use serde_json::json;
use std::sync::Arc;
use vuetify_configuration::plugin::VirtualModules;
use vuetify_configuration::{
    generate, vuetify_configuration_plugin, Error, LoadError, PluginContainer, Selector,
    RESOLVED_VIRTUAL_VUETIFY_CONFIGURATION, VIRTUAL_VUETIFY_CONFIGURATION,
};

#[tokio::test]
async fn test_container_resolves_and_loads() {
    let plugin = vuetify_configuration_plugin(false, true, false, &json!({})).unwrap();
    let container = PluginContainer::new().with_plugin(Arc::new(plugin));

    assert_eq!(
        container.resolve_id(VIRTUAL_VUETIFY_CONFIGURATION).as_deref(),
        Some(RESOLVED_VIRTUAL_VUETIFY_CONFIGURATION)
    );
    let module = container.import(VIRTUAL_VUETIFY_CONFIGURATION).await.unwrap();
    assert!(module.contains("options.directives = directives"));
}

#[tokio::test]
async fn test_configuration_plugin_runs_first() {
    let modules = VirtualModules::new("virtual-modules");
    modules.add("virtual:icons", "export const aliases = {}\n");

    let plugin = vuetify_configuration_plugin(false, false, false, &json!({})).unwrap();
    let container = PluginContainer::new()
        .with_plugin(Arc::new(modules))
        .with_plugin(Arc::new(plugin));

    assert_eq!(
        container.plugin_names(),
        vec!["vuetify:configuration:nuxt", "virtual-modules"]
    );
    assert_eq!(
        container.import("virtual:icons").await.unwrap(),
        "export const aliases = {}\n"
    );
}

#[tokio::test]
async fn test_unowned_id_falls_off_the_chain() {
    let plugin = vuetify_configuration_plugin(false, false, false, &json!({})).unwrap();
    let container = PluginContainer::new().with_plugin(Arc::new(plugin));

    let result = container.import("virtual:vuetify-icons").await;
    assert_eq!(
        result,
        Err(LoadError::NotFound("virtual:vuetify-icons".to_string()))
    );
}

#[tokio::test]
async fn test_generate_matches_plugin_load() {
    let options = json!({ "theme": { "defaultTheme": "light" } });
    let plugin = vuetify_configuration_plugin(
        true,
        vec!["Intersect"],
        vec!["VCalendar"],
        &options,
    )
    .unwrap();

    let generated = generate(
        true,
        Selector::subset(["Intersect"]),
        Selector::subset(["VCalendar"]),
        &options,
    )
    .await
    .unwrap();

    assert_eq!(generated, plugin.source());
}

#[tokio::test]
async fn test_generate_surfaces_serialization_failure() {
    use std::collections::HashMap;

    // JSON object keys must be strings
    let mut options = HashMap::new();
    options.insert((1, 2), "grid");

    let result = generate(false, Selector::Disabled, Selector::Disabled, &options).await;
    assert!(matches!(result, Err(Error::Configuration(_))));
}
