//! Route model.
//!
//! # Responsibilities
//! - Represent a routable URL pattern and its target (controller, action, namespace)
//! - Carry the translation extension (culture, children, root back-reference)
//!
//! # Design Decisions
//! - Children and root are referenced by `RouteId`, never by pointer
//! - A route without a translation extension is a plain route
//! - Controller and action compare case-insensitively, like MVC route values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identity of a route inside a `RouteTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(pub u64);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Translation extension attached to a route once it takes part in localization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Culture served by this route. `None` for a neutral root.
    pub culture: Option<String>,

    /// Children of a root, keyed by culture.
    pub translated_routes: BTreeMap<String, RouteId>,

    /// Root this route was derived from. `None` for roots.
    pub root: Option<RouteId>,
}

/// A URL pattern bound to a controller action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Pattern with `{name}` placeholders, without a leading slash.
    pub url: String,

    /// Target controller name (without the `Controller` suffix).
    pub controller: String,

    /// Target action name.
    pub action: String,

    /// Namespace the controller lives in, if the route restricts it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Parameter type names of the target action, used to tell overloads apart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_arguments: Option<Vec<String>>,

    /// Default values for route parameters.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub defaults: BTreeMap<String, String>,

    /// Parameter constraints (parameter name to pattern).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub constraints: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Translation>,
}

impl Route {
    /// Create a plain route.
    pub fn new(
        url: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            controller: controller.into(),
            action: action.into(),
            namespace: None,
            action_arguments: None,
            defaults: BTreeMap::new(),
            constraints: BTreeMap::new(),
            translation: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_action_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_arguments = Some(arguments.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    pub fn with_constraint(mut self, key: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.constraints.insert(key.into(), pattern.into());
        self
    }

    /// True once the route takes part in localization (root or translation).
    pub fn is_translation_route(&self) -> bool {
        self.translation.is_some()
    }

    /// True for a translation route that owns the per-culture children.
    pub fn is_translation_root(&self) -> bool {
        self.translation.as_ref().is_some_and(|t| t.root.is_none())
    }

    /// Culture served by this route, if any.
    pub fn culture(&self) -> Option<&str> {
        self.translation.as_ref().and_then(|t| t.culture.as_deref())
    }

    /// Root of this translation, if this route is a leaf translation.
    pub fn translation_root(&self) -> Option<RouteId> {
        self.translation.as_ref().and_then(|t| t.root)
    }

    /// Child registered for `culture`, if this route is a root.
    pub fn translated_route(&self, culture: &str) -> Option<RouteId> {
        self.translation
            .as_ref()
            .and_then(|t| t.translated_routes.get(culture).copied())
    }

    /// True if this route already serves `culture`, itself or through a child.
    pub fn is_translated_for(&self, culture: &str) -> bool {
        self.culture() == Some(culture) || self.translated_route(culture).is_some()
    }

    /// Convert into a translation root carrying the same routing metadata.
    ///
    /// An existing translation extension is kept as is.
    pub fn into_translation_route(mut self) -> Self {
        if self.translation.is_none() {
            self.translation = Some(Translation::default());
        }
        self
    }

    /// Copy the routing metadata into a fresh translation route for `culture`.
    ///
    /// The copy has no children and no root; linking is the caller's job.
    pub fn derive_translation(&self, culture: impl Into<String>) -> Self {
        Self {
            translation: Some(Translation {
                culture: Some(culture.into()),
                ..Translation::default()
            }),
            ..self.clone()
        }
    }

    /// Match the controller and action names, case-insensitively.
    pub fn targets(&self, controller: &str, action: &str) -> bool {
        self.controller.eq_ignore_ascii_case(controller) && self.action.eq_ignore_ascii_case(action)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}.{}", self.url, self.controller, self.action)?;
        if let Some(culture) = self.culture() {
            write!(f, " [{}]", culture)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_route_has_no_translation() {
        let route = Route::new("products/{id}", "Products", "Show");
        assert!(!route.is_translation_route());
        assert!(!route.is_translation_root());
        assert_eq!(route.culture(), None);
        assert_eq!(route.translation_root(), None);
    }

    #[test]
    fn test_into_translation_route_keeps_metadata() {
        let route = Route::new("products/{id}", "Products", "Show")
            .with_namespace("shop")
            .with_constraint("id", r"\d+")
            .into_translation_route();

        assert!(route.is_translation_root());
        assert_eq!(route.url, "products/{id}");
        assert_eq!(route.namespace.as_deref(), Some("shop"));
        assert_eq!(route.constraints.get("id").map(String::as_str), Some(r"\d+"));
        assert_eq!(route.culture(), None);
    }

    #[test]
    fn test_derive_translation_drops_children() {
        let mut root = Route::new("about", "Home", "About").into_translation_route();
        if let Some(t) = root.translation.as_mut() {
            t.culture = Some("en".into());
            t.translated_routes.insert("de".into(), RouteId(7));
        }

        let child = root.derive_translation("fr");
        assert_eq!(child.culture(), Some("fr"));
        assert_eq!(child.translated_route("de"), None);
        assert_eq!(child.controller, "Home");
    }

    #[test]
    fn test_is_translated_for_counts_own_culture() {
        let mut root = Route::new("about", "Home", "About").into_translation_route();
        if let Some(t) = root.translation.as_mut() {
            t.culture = Some("en".into());
            t.translated_routes.insert("de".into(), RouteId(2));
        }

        assert!(root.is_translated_for("en"));
        assert!(root.is_translated_for("de"));
        assert!(!root.is_translated_for("fr"));
    }

    #[test]
    fn test_targets_is_case_insensitive() {
        let route = Route::new("", "Home", "Index");
        assert!(route.targets("home", "INDEX"));
        assert!(!route.targets("Products", "Index"));
    }

    #[test]
    fn test_display() {
        let route = Route::new("about", "Home", "About").derive_translation("de");
        assert_eq!(route.to_string(), "about -> Home.About [de]");
    }
}
