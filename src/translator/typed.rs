//! Translator bound to a controller type.

use std::fmt;
use std::marker::PhantomData;

use crate::controller::{Controller, ControllerAttribute};
use crate::routing::RouteId;
use crate::translation::{TranslationError, TranslationResult};
use crate::translator::RouteTranslator;

/// A `RouteTranslator` whose controller is fixed by the type `C`.
///
/// Before each translation it checks that any route or area prefix is backed
/// by the matching attribute on `C` (under the corresponding config toggle).
pub struct TypedRouteTranslator<'a, C: Controller> {
    inner: RouteTranslator<'a>,
    _controller: PhantomData<fn() -> C>,
}

impl<C: Controller> fmt::Debug for TypedRouteTranslator<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedRouteTranslator")
            .field("controller", &C::TYPE_NAME)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<'a, C: Controller> TypedRouteTranslator<'a, C> {
    pub(super) fn new(inner: RouteTranslator<'a>) -> Self {
        Self {
            inner,
            _controller: PhantomData,
        }
    }

    /// Drop the type binding, keeping the accumulated selection.
    pub fn into_untyped(self) -> RouteTranslator<'a> {
        self.inner
    }

    pub fn last_translation(&self) -> Option<RouteId> {
        self.inner.last_translation()
    }

    pub fn for_action(self, action: impl Into<String>) -> Self {
        Self::new(self.inner.for_action(action))
    }

    pub fn for_action_with_arguments<I, S>(self, action: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(self.inner.for_action_with_arguments(action, arguments))
    }

    pub fn for_culture(self, culture: impl Into<String>) -> Self {
        Self::new(self.inner.for_culture(culture))
    }

    pub fn set_route_prefix(self, route_prefix: impl Into<String>) -> Self {
        Self::new(self.inner.set_route_prefix(route_prefix))
    }

    pub fn set_area_prefix(self, area_prefix: impl Into<String>) -> Self {
        Self::new(self.inner.set_area_prefix(area_prefix))
    }

    pub fn add_translation(self, url: &str) -> TranslationResult<Self> {
        self.validate_attributes()?;
        self.inner.add_translation(url).map(Self::new)
    }

    pub fn add_translation_for_culture(self, url: &str, culture: &str) -> TranslationResult<Self> {
        self.validate_attributes()?;
        self.inner.add_translation_for_culture(url, culture).map(Self::new)
    }

    pub fn add_translation_for_action(self, url: &str, culture: &str, action: &str) -> TranslationResult<Self> {
        self.validate_attributes()?;
        self.inner
            .add_translation_for_action(url, culture, action)
            .map(Self::new)
    }

    pub fn add_translation_for_route(self, url: &str, culture: &str, route_id: RouteId) -> TranslationResult<Self> {
        self.validate_attributes()?;
        self.inner
            .add_translation_for_route(url, culture, route_id)
            .map(Self::new)
    }

    pub fn add_translation_for_named_route(
        self,
        url: &str,
        culture: &str,
        named_route: &str,
    ) -> TranslationResult<Self> {
        self.validate_attributes()?;
        self.inner
            .add_translation_for_named_route(url, culture, named_route)
            .map(Self::new)
    }

    fn validate_attributes(&self) -> TranslationResult<()> {
        let config = self.inner.config();
        let prefixes = self.inner.prefixes();

        if config.validate_route_prefix && prefixes.route_prefix().is_some() {
            require_attribute::<C>(ControllerAttribute::RoutePrefix)?;
        }
        if config.validate_route_area && prefixes.area_prefix().is_some() {
            require_attribute::<C>(ControllerAttribute::RouteArea)?;
        }
        Ok(())
    }
}

fn require_attribute<C: Controller>(attribute: ControllerAttribute) -> TranslationResult<()> {
    if C::has_attribute(attribute) {
        Ok(())
    } else {
        Err(TranslationError::MissingAttribute {
            controller: C::TYPE_NAME,
            attribute,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocalizationConfig;
    use crate::routing::{Route, RouteTable};

    struct ProductsController;

    impl Controller for ProductsController {
        const TYPE_NAME: &'static str = "ProductsController";
        const NAMESPACE: Option<&'static str> = Some("shop");
        const ATTRIBUTES: &'static [ControllerAttribute] = &[ControllerAttribute::RoutePrefix];
    }

    fn table() -> RouteTable {
        let mut table = RouteTable::new();
        table.add(Route::new("products/{id}", "Products", "Show").with_namespace("shop"));
        table.add(Route::new("products", "Products", "Index").with_namespace("shop"));
        table
    }

    #[test]
    fn test_binds_controller_and_namespace() {
        let config = LocalizationConfig::default().accepting(["de"]);
        let mut table = table();

        let translator = RouteTranslator::new(&mut table, &config)
            .for_typed_controller::<ProductsController>()
            .for_action("Index")
            .for_culture("de")
            .add_translation("produkte")
            .unwrap();
        let id = translator.last_translation().unwrap();

        let route = table.get(id).unwrap();
        assert_eq!(route.action, "Index");
        assert_eq!(route.namespace.as_deref(), Some("shop"));
    }

    #[test]
    fn test_declared_route_prefix_is_accepted() {
        let config = LocalizationConfig::default().accepting(["de"]);
        let mut table = table();

        let translator = RouteTranslator::new(&mut table, &config)
            .for_typed_controller::<ProductsController>()
            .for_action("Show")
            .for_culture("de")
            .set_route_prefix("katalog")
            .add_translation("produkte/{id}")
            .unwrap();
        let id = translator.last_translation().unwrap();

        assert_eq!(table.get(id).unwrap().url, "katalog/produkte/{id}");
    }

    #[test]
    fn test_missing_area_attribute() {
        let config = LocalizationConfig::default().accepting(["de"]);
        let mut table = table();
        let before = table.clone();

        let err = RouteTranslator::new(&mut table, &config)
            .for_typed_controller::<ProductsController>()
            .for_action("Show")
            .for_culture("de")
            .set_area_prefix("admin")
            .add_translation("produkte/{id}")
            .unwrap_err();

        assert_eq!(
            err,
            TranslationError::MissingAttribute {
                controller: "ProductsController",
                attribute: ControllerAttribute::RouteArea,
            }
        );
        assert_eq!(table.len(), before.len());
    }

    #[test]
    fn test_area_check_disabled() {
        let config = LocalizationConfig {
            validate_route_area: false,
            ..LocalizationConfig::default().accepting(["de"])
        };
        let mut table = table();

        let translator = RouteTranslator::new(&mut table, &config)
            .for_typed_controller::<ProductsController>()
            .for_action("Show")
            .for_culture("de")
            .set_area_prefix("admin")
            .add_translation("produkte/{id}")
            .unwrap();

        assert!(translator.last_translation().is_some());
    }

    #[test]
    fn test_empty_prefix_needs_no_attribute() {
        let config = LocalizationConfig::default().accepting(["de"]);
        let mut table = table();

        let result = RouteTranslator::new(&mut table, &config)
            .for_typed_controller::<ProductsController>()
            .for_action("Show")
            .for_culture("de")
            .set_area_prefix("")
            .add_translation("produkte/{id}");

        assert!(result.is_ok());
    }
}
