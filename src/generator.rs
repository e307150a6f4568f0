//! Generator turns selectors into the source text of the configuration module
use crate::selector::Selector;
use tracing::warn;

/// A Vuetify namespace that a selector can pull into the generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Directives,
    LabComponents,
}

impl Feature {
    /// Module that re-exports the whole namespace
    pub fn namespace(&self) -> &'static str {
        match self {
            Feature::Directives => "vuetify/directives",
            Feature::LabComponents => "vuetify/labs/components",
        }
    }

    /// Prefix of the per-name submodule path
    pub fn submodule_prefix(&self) -> &'static str {
        match self {
            Feature::Directives => "vuetify/directives/",
            Feature::LabComponents => "vuetify/labs/",
        }
    }

    /// Local binding used for the wildcard import
    pub fn alias(&self) -> &'static str {
        match self {
            Feature::Directives => "directives",
            Feature::LabComponents => "labsComponents",
        }
    }

    /// Field of the local `options` record the feature assigns to
    pub fn options_field(&self) -> &'static str {
        match self {
            Feature::Directives => "directives",
            Feature::LabComponents => "components",
        }
    }
}

/// Import statements plus the `options` assignment contributed by one feature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub imports: String,
    pub expression: String,
}

impl GenerationResult {
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.expression.is_empty()
    }
}

/// Resolve a selector for a feature into its import block and assignment
///
/// # Example
/// ```
/// use vuetify_configuration::generator::{resolve, Feature};
/// use vuetify_configuration::Selector;
///
/// let result = resolve(Feature::Directives, &Selector::All);
/// assert_eq!(result.imports, "import * as directives from 'vuetify/directives'");
/// assert_eq!(result.expression, "options.directives = directives");
/// ```
pub fn resolve(feature: Feature, selector: &Selector) -> GenerationResult {
    match selector {
        Selector::Disabled => GenerationResult::default(),
        Selector::All => GenerationResult {
            imports: format!(
                "import * as {} from '{}'",
                feature.alias(),
                feature.namespace()
            ),
            expression: format!("options.{} = {}", feature.options_field(), feature.alias()),
        },
        Selector::Subset(names) => {
            for name in names {
                if !is_identifier(name) {
                    warn!(
                        feature = ?feature,
                        name = %name,
                        "selector name is not a valid identifier; emitting it verbatim"
                    );
                }
            }

            let imports = names
                .iter()
                .map(|name| {
                    format!(
                        "import {{ {} }} from '{}{}'",
                        name,
                        feature.submodule_prefix(),
                        name
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            GenerationResult {
                imports,
                expression: format!("options.{} = {{{}}}", feature.options_field(), names.join(",")),
            }
        }
    }
}

/// Render the full module text.
///
/// `options_json` must already be the serialized base options; it is embedded as-is.
/// Directives always precede lab components, both in the import block and in the
/// function body.
pub fn render_module(
    is_dev: bool,
    options_json: &str,
    directives: &GenerationResult,
    lab_components: &GenerationResult,
) -> String {
    format!(
        "{}\n{}\n\nexport const isDev = {}\nexport function vuetifyConfiguration() {{\n  const options = {}\n  {}\n  {}\n  return options\n}}\n",
        directives.imports,
        lab_components.imports,
        is_dev,
        options_json,
        directives.expression,
        lab_components.expression,
    )
}

// ASCII-only approximation of an ECMAScript IdentifierName
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
