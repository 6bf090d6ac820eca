//! Route selection logic.
//!
//! # Responsibilities
//! - Match controller and action names (case-insensitive)
//! - Match controller namespace (exact)
//! - Match action argument signature (exact, ordered)
//! - Match "not yet translated for culture"
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Controller/action matching is case-insensitive (MVC route values are)
//! - Namespace and signature matching are case-sensitive
//! - An absent filter is not a condition; callers only add what they set
//! - Leaf translations never count as untranslated

use crate::routing::route::Route;

/// Trait for matching routes against selection criteria.
pub trait Matcher: std::fmt::Debug {
    /// Returns true if the route matches this condition.
    fn matches(&self, route: &Route) -> bool;
}

/// Matches the target controller and action.
#[derive(Debug, Clone)]
pub struct ActionMatcher {
    controller: String,
    action: String,
}

impl ActionMatcher {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }
}

impl Matcher for ActionMatcher {
    fn matches(&self, route: &Route) -> bool {
        route.targets(&self.controller, &self.action)
    }
}

/// Matches the controller namespace.
#[derive(Debug, Clone)]
pub struct NamespaceMatcher {
    namespace: String,
}

impl NamespaceMatcher {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Matcher for NamespaceMatcher {
    fn matches(&self, route: &Route) -> bool {
        route.namespace.as_deref() == Some(self.namespace.as_str())
    }
}

/// Matches the action's parameter type list, for overloaded actions.
#[derive(Debug, Clone)]
pub struct SignatureMatcher {
    arguments: Vec<String>,
}

impl SignatureMatcher {
    pub fn new(arguments: Vec<String>) -> Self {
        Self { arguments }
    }
}

impl Matcher for SignatureMatcher {
    fn matches(&self, route: &Route) -> bool {
        route.action_arguments.as_deref() == Some(self.arguments.as_slice())
    }
}

/// Matches plain routes and roots that do not serve `culture` yet.
#[derive(Debug, Clone)]
pub struct UntranslatedMatcher {
    culture: String,
}

impl UntranslatedMatcher {
    pub fn new(culture: impl Into<String>) -> Self {
        Self {
            culture: culture.into(),
        }
    }
}

impl Matcher for UntranslatedMatcher {
    fn matches(&self, route: &Route) -> bool {
        match &route.translation {
            None => true,
            Some(t) if t.root.is_none() => !route.is_translated_for(&self.culture),
            Some(_) => false,
        }
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug, Default)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn with(mut self, matcher: impl Matcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, route: &Route) -> bool {
        self.matchers.iter().all(|m| m.matches(route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::{RouteId, Translation};

    #[test]
    fn test_action_matcher() {
        let matcher = ActionMatcher::new("products", "show");
        assert!(matcher.matches(&Route::new("p/{id}", "Products", "Show")));
        assert!(!matcher.matches(&Route::new("p", "Products", "Index")));
    }

    #[test]
    fn test_namespace_matcher() {
        let matcher = NamespaceMatcher::new("shop.admin");
        let route = Route::new("p", "Products", "Index");
        assert!(!matcher.matches(&route));
        assert!(matcher.matches(&route.clone().with_namespace("shop.admin")));
        assert!(!matcher.matches(&route.with_namespace("shop")));
    }

    #[test]
    fn test_signature_matcher_disambiguates_overloads() {
        let matcher = SignatureMatcher::new(vec!["i32".into()]);
        let by_id = Route::new("p/{id}", "Products", "Show").with_action_arguments(["i32"]);
        let by_slug = Route::new("p/{slug}", "Products", "Show").with_action_arguments(["String"]);
        assert!(matcher.matches(&by_id));
        assert!(!matcher.matches(&by_slug));
        assert!(!matcher.matches(&Route::new("p", "Products", "Show")));
    }

    #[test]
    fn test_untranslated_matcher() {
        let matcher = UntranslatedMatcher::new("de");

        let plain = Route::new("about", "Home", "About");
        assert!(matcher.matches(&plain));

        let mut root = plain.clone().into_translation_route();
        assert!(matcher.matches(&root));
        if let Some(t) = root.translation.as_mut() {
            t.translated_routes.insert("de".into(), RouteId(1));
        }
        assert!(!matcher.matches(&root));

        let mut leaf = plain;
        leaf.translation = Some(Translation {
            culture: Some("fr".into()),
            root: Some(RouteId(0)),
            ..Translation::default()
        });
        assert!(!matcher.matches(&leaf));
    }

    #[test]
    fn test_and_matcher() {
        let matcher = AndMatcher::default()
            .with(ActionMatcher::new("Home", "About"))
            .with(UntranslatedMatcher::new("de"));
        assert!(matcher.matches(&Route::new("about", "Home", "About")));
        assert!(!matcher.matches(&Route::new("contact", "Home", "Contact")));
    }
}
