//! Configuration schema definitions.
//!
//! This module defines the localization settings and the route manifest read
//! by the `route-localization` tool. All types derive Serde traits for
//! deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// What happens to a plain route the first time it is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootTranslationProcessing {
    /// Keep the original route as the entry for the default culture.
    #[default]
    ApplyDefaultCultureToRoute,

    /// Replace the original route by the first translation.
    ReplaceRouteByTranslatedRoute,

    /// Keep the original route verbatim as a culture-neutral fallback.
    None,
}

/// Localization settings shared by every translator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Culture assigned to original routes under `ApplyDefaultCultureToRoute`.
    pub default_culture: String,

    /// Cultures translations may target.
    pub accepted_cultures: BTreeSet<String>,

    /// Policy for the first translation of a plain route.
    pub root_translation_processing: RootTranslationProcessing,

    /// Prefix every translated URL with its culture (e.g. "de/produkte").
    pub add_culture_as_route_prefix: bool,

    /// Reject cultures outside `accepted_cultures`.
    pub validate_culture: bool,

    /// Require translated URLs to keep the root's placeholders, in order.
    pub validate_url: bool,

    /// Require a route-area attribute on typed controllers given an area prefix.
    pub validate_route_area: bool,

    /// Require a route-prefix attribute on typed controllers given a route prefix.
    pub validate_route_prefix: bool,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            default_culture: "en".to_string(),
            accepted_cultures: BTreeSet::from(["en".to_string()]),
            root_translation_processing: RootTranslationProcessing::default(),
            add_culture_as_route_prefix: false,
            validate_culture: true,
            validate_url: true,
            validate_route_area: true,
            validate_route_prefix: true,
        }
    }
}

impl LocalizationConfig {
    /// Builder-style helper to accept additional cultures.
    pub fn accepting<I, S>(mut self, cultures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_cultures.extend(cultures.into_iter().map(Into::into));
        self
    }

    /// True when `culture` may be targeted under the current settings.
    pub fn accepts(&self, culture: &str) -> bool {
        !self.validate_culture || self.accepted_cultures.contains(culture)
    }
}

/// Route manifest: the route table to build and the translations to apply.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteManifest {
    /// Localization settings. Overridable by a separate config file.
    pub localization: LocalizationConfig,

    /// Routes in match order.
    pub routes: Vec<RouteConfig>,

    /// Translations applied in order.
    pub translations: Vec<TranslationConfig>,
}

/// A route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Optional route name for named-route lookups.
    pub name: Option<String>,

    /// URL pattern (e.g. "products/{id}").
    pub url: String,

    pub controller: String,

    pub action: String,

    pub namespace: Option<String>,

    /// Action parameter type names.
    pub arguments: Option<Vec<String>>,

    /// Default parameter values, copied onto every translation.
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,

    /// Parameter constraints (parameter name to pattern).
    #[serde(default)]
    pub constraints: BTreeMap<String, String>,
}

/// A translation request, targeting a named route or a controller action.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslationConfig {
    /// Translated URL pattern.
    pub url: String,

    pub culture: String,

    /// Target route name; takes precedence over controller/action.
    pub named_route: Option<String>,

    pub controller: Option<String>,

    pub action: Option<String>,

    pub namespace: Option<String>,

    pub arguments: Option<Vec<String>>,

    pub route_prefix: Option<String>,

    pub area_prefix: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocalizationConfig::default();
        assert_eq!(config.default_culture, "en");
        assert!(config.accepted_cultures.contains("en"));
        assert_eq!(config.accepted_cultures.len(), 1);
        assert_eq!(
            config.root_translation_processing,
            RootTranslationProcessing::ApplyDefaultCultureToRoute
        );
        assert!(!config.add_culture_as_route_prefix);
        assert!(config.validate_culture);
        assert!(config.validate_url);
        assert!(config.validate_route_area);
        assert!(config.validate_route_prefix);
    }

    #[test]
    fn test_accepts() {
        let mut config = LocalizationConfig::default().accepting(["de"]);
        assert!(config.accepts("de"));
        assert!(!config.accepts("fr"));

        config.validate_culture = false;
        assert!(config.accepts("fr"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: LocalizationConfig = toml::from_str(
            r#"
            accepted_cultures = ["en", "de"]
            root_translation_processing = "replace_route_by_translated_route"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_culture, "en");
        assert_eq!(config.accepted_cultures.len(), 2);
        assert_eq!(
            config.root_translation_processing,
            RootTranslationProcessing::ReplaceRouteByTranslatedRoute
        );
        assert!(config.validate_url);
    }

    #[test]
    fn test_manifest_parse() {
        let manifest: RouteManifest = toml::from_str(
            r#"
            [[routes]]
            name = "About"
            url = "about"
            controller = "Home"
            action = "About"

            [[translations]]
            url = "ueber-uns"
            culture = "de"
            named_route = "About"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.routes.len(), 1);
        assert_eq!(manifest.routes[0].name.as_deref(), Some("About"));
        assert_eq!(manifest.translations[0].named_route.as_deref(), Some("About"));
        assert_eq!(manifest.localization, LocalizationConfig::default());
    }
}
