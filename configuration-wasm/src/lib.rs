use serde_json::Value;
use vuetify_configuration::plugin::PLUGIN_NAME;
use vuetify_configuration::{
    ConfigurationPlugin, Selector, RESOLVED_VIRTUAL_VUETIFY_CONFIGURATION,
    VIRTUAL_VUETIFY_CONFIGURATION,
};
use wasm_bindgen::prelude::*;

fn selector_from_js(value: JsValue) -> Result<Selector, String> {
    if value.is_undefined() {
        return Ok(Selector::Disabled);
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("{}", e))
}

fn plugin_from_js(
    is_dev: bool,
    directives: JsValue,
    lab_components: JsValue,
    options: JsValue,
) -> Result<ConfigurationPlugin, String> {
    let directives = selector_from_js(directives)?;
    let lab_components = selector_from_js(lab_components)?;
    let options: Value = if options.is_undefined() {
        Value::Object(Default::default())
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| format!("{}", e))?
    };

    ConfigurationPlugin::new(is_dev, directives, lab_components, &options)
        .map_err(|e| format!("{}", e))
}

/// Generate the `virtual:vuetify-configuration` module source
///
/// `directives` and `lab_components` take `true`, `false`, or an array of names.
#[wasm_bindgen]
pub fn generate_configuration_module(
    is_dev: bool,
    directives: JsValue,
    lab_components: JsValue,
    options: JsValue,
) -> Result<String, String> {
    plugin_from_js(is_dev, directives, lab_components, options).map(|plugin| plugin.source())
}

/// `resolveId` hook for a JS plugin wrapper; `None` defers to the host
#[wasm_bindgen]
pub fn resolve_configuration_id(id: &str) -> Option<String> {
    (id == VIRTUAL_VUETIFY_CONFIGURATION)
        .then(|| RESOLVED_VIRTUAL_VUETIFY_CONFIGURATION.to_string())
}

/// Whether `id` is the resolved id the `load` hook must answer
#[wasm_bindgen]
pub fn is_configuration_id(id: &str) -> bool {
    id == RESOLVED_VIRTUAL_VUETIFY_CONFIGURATION
}

/// Name the JS plugin object registers under; it runs with `enforce: "pre"`
#[wasm_bindgen]
pub fn configuration_plugin_name() -> String {
    PLUGIN_NAME.to_string()
}
