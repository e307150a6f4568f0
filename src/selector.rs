//! Tri-state feature selector
use serde::{Deserialize, Deserializer};

/// Controls how much of a Vuetify feature namespace the generated module pulls in.
///
/// Host configuration spells this as "boolean or array of strings"; this type
/// keeps the three cases apart so every consumer has to handle all of them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Feature is off: nothing is imported or assigned
    #[default]
    Disabled,
    /// Import the whole namespace
    All,
    /// Import exactly these names, in order. Duplicates are kept.
    Subset(Vec<String>),
}

impl Selector {
    /// Create a subset selector from any iterable of names
    ///
    /// # Example
    /// ```
    /// use vuetify_configuration::Selector;
    ///
    /// let selector = Selector::subset(["Ripple", "Resize"]);
    /// assert_eq!(selector.names(), &["Ripple".to_string(), "Resize".to_string()]);
    /// ```
    pub fn subset<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selector::Subset(names.into_iter().map(Into::into).collect())
    }

    /// Whether the feature contributes anything to the generated module.
    ///
    /// An empty subset still counts as enabled: it assigns an empty object.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Selector::Disabled)
    }

    /// Explicitly listed names; empty for `Disabled` and `All`
    pub fn names(&self) -> &[String] {
        match self {
            Selector::Subset(names) => names,
            Selector::Disabled | Selector::All => &[],
        }
    }
}

impl From<bool> for Selector {
    fn from(enabled: bool) -> Self {
        if enabled {
            Selector::All
        } else {
            Selector::Disabled
        }
    }
}

impl From<Vec<String>> for Selector {
    fn from(names: Vec<String>) -> Self {
        Selector::Subset(names)
    }
}

impl From<Vec<&str>> for Selector {
    fn from(names: Vec<&str>) -> Self {
        Selector::subset(names)
    }
}

impl FromIterator<String> for Selector {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Selector::Subset(iter.into_iter().collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelector {
    Flag(bool),
    Names(Vec<String>),
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawSelector>::deserialize(deserializer)?;
        Ok(match raw {
            None => Selector::Disabled,
            Some(RawSelector::Flag(flag)) => Selector::from(flag),
            Some(RawSelector::Names(names)) => Selector::Subset(names),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flags() {
        let off: Selector = serde_json::from_str("false").unwrap();
        let on: Selector = serde_json::from_str("true").unwrap();
        let null: Selector = serde_json::from_str("null").unwrap();

        assert_eq!(off, Selector::Disabled);
        assert_eq!(on, Selector::All);
        assert_eq!(null, Selector::Disabled);
    }

    #[test]
    fn test_deserialize_names_keeps_order_and_duplicates() {
        let selector: Selector = serde_json::from_str(r#"["Resize", "Ripple", "Resize"]"#).unwrap();
        assert_eq!(selector, Selector::subset(["Resize", "Ripple", "Resize"]));
    }

    #[test]
    fn test_empty_array_is_enabled() {
        let selector: Selector = serde_json::from_str("[]").unwrap();
        assert_eq!(selector, Selector::Subset(Vec::new()));
        assert!(selector.is_enabled());
    }

    #[test]
    fn test_names() {
        assert!(Selector::All.names().is_empty());
        assert!(!Selector::Disabled.is_enabled());
        assert_eq!(
            Selector::subset(["Ripple", "Resize"]).names(),
            &["Ripple".to_string(), "Resize".to_string()]
        );
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(serde_json::from_str::<Selector>("\"Ripple\"").is_err());
        assert!(serde_json::from_str::<Selector>("[1, 2]").is_err());
    }
}
