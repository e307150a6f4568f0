#![cfg(feature = "tokio-runtime")]

//! Tests for reading plugin options from disk
use std::io::Write;
use vuetify_configuration::{generate_from_options, ConfigError, PluginOptions, Selector};

#[tokio::test]
async fn test_load_options_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "isDev": true,
            "directives": ["Ripple"],
            "labComponents": true,
            "vuetifyOptions": {{ "theme": {{ "defaultTheme": "dark" }} }}
        }}"#
    )
    .unwrap();

    let options = PluginOptions::load(file.path()).await.unwrap();
    assert!(options.is_dev);
    assert_eq!(options.directives, Selector::subset(["Ripple"]));
    assert_eq!(options.lab_components, Selector::All);

    let module = generate_from_options(options).await.unwrap();
    assert!(module.contains("import { Ripple } from 'vuetify/directives/Ripple'"));
    assert!(module.contains("import * as labsComponents from 'vuetify/labs/components'"));
    assert!(module.contains(r#"const options = {"theme":{"defaultTheme":"dark"}}"#));
}

#[tokio::test]
async fn test_load_invalid_options_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "labComponents": 42 }}"#).unwrap();

    let result = PluginOptions::load(file.path()).await;
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[tokio::test]
async fn test_load_missing_options_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = PluginOptions::load(dir.path().join("vuetify.json")).await;

    match result {
        Err(ConfigError::Io { path, .. }) => assert!(path.ends_with("vuetify.json")),
        other => panic!("expected Io error, got {:?}", other),
    }
}
