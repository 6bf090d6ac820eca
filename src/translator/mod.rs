//! Chainable translation builder.
//!
//! # Responsibilities
//! - Accumulate selection criteria (controller, action, culture, named route)
//! - Accumulate static prefixes (route prefix, area prefix)
//! - Resolve the target root through the table index
//! - Hand the translation to the engine
//!
//! # Design Decisions
//! - Holds `&mut RouteTable`: no other code sees the table while translating
//! - Methods take and return `self`; `add_*` return `Result<Self, _>` so calls chain with `?`
//! - A named route, once set, takes precedence over controller/action

mod typed;

pub use typed::TypedRouteTranslator;

use crate::config::LocalizationConfig;
use crate::controller::Controller;
use crate::routing::{RouteId, RouteTable};
use crate::translation::{RoutePrefixes, TranslationEngine, TranslationError, TranslationResult};

/// Builder that adds culture-specific variants of existing routes.
///
/// ```
/// use route_localization::{LocalizationConfig, Route, RouteTable, RouteTranslator};
///
/// let config = LocalizationConfig::default().accepting(["de"]);
/// let mut table = RouteTable::new();
/// table.add(Route::new("products/{id}", "Products", "Show"));
///
/// RouteTranslator::new(&mut table, &config)
///     .for_controller("Products")
///     .for_action("Show")
///     .for_culture("de")
///     .add_translation("produkte/{id}")
///     .unwrap();
///
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug)]
pub struct RouteTranslator<'a> {
    table: &'a mut RouteTable,
    config: &'a LocalizationConfig,
    culture: Option<String>,
    controller: Option<String>,
    controller_namespace: Option<String>,
    action: Option<String>,
    action_arguments: Option<Vec<String>>,
    named_route: Option<String>,
    prefixes: RoutePrefixes,
    last_translation: Option<RouteId>,
}

impl<'a> RouteTranslator<'a> {
    pub fn new(table: &'a mut RouteTable, config: &'a LocalizationConfig) -> Self {
        Self {
            table,
            config,
            culture: None,
            controller: None,
            controller_namespace: None,
            action: None,
            action_arguments: None,
            named_route: None,
            prefixes: RoutePrefixes::default(),
            last_translation: None,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &*self.table
    }

    pub fn config(&self) -> &LocalizationConfig {
        self.config
    }

    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    pub fn controller(&self) -> Option<&str> {
        self.controller.as_deref()
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn named_route(&self) -> Option<&str> {
        self.named_route.as_deref()
    }

    pub fn prefixes(&self) -> &RoutePrefixes {
        &self.prefixes
    }

    /// Route produced by the most recent successful `add_*` call.
    pub fn last_translation(&self) -> Option<RouteId> {
        self.last_translation
    }

    pub fn for_controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self.controller_namespace = None;
        self
    }

    /// Select a controller restricted to `namespace`.
    pub fn for_controller_in(mut self, controller: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self.controller_namespace = Some(namespace.into());
        self
    }

    /// Bind the builder to a controller type.
    pub fn for_typed_controller<C: Controller>(mut self) -> TypedRouteTranslator<'a, C> {
        self.controller = Some(C::name().to_string());
        self.controller_namespace = C::NAMESPACE.map(str::to_string);
        TypedRouteTranslator::new(self)
    }

    pub fn for_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self.action_arguments = None;
        self
    }

    /// Select an overloaded action by its parameter type names.
    pub fn for_action_with_arguments<I, S>(mut self, action: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action = Some(action.into());
        self.action_arguments = Some(arguments.into_iter().map(Into::into).collect());
        self
    }

    pub fn for_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    pub fn for_named_route(mut self, named_route: impl Into<String>) -> Self {
        self.named_route = Some(named_route.into());
        self
    }

    pub fn set_route_prefix(mut self, route_prefix: impl Into<String>) -> Self {
        self.prefixes.route = Some(route_prefix.into());
        self
    }

    pub fn set_area_prefix(mut self, area_prefix: impl Into<String>) -> Self {
        self.prefixes.area = Some(area_prefix.into());
        self
    }

    /// Translate the selected route for the selected culture.
    pub fn add_translation(self, url: &str) -> TranslationResult<Self> {
        let culture = self
            .culture
            .clone()
            .filter(|c| !c.is_empty())
            .ok_or(TranslationError::MissingArgument("culture"))?;
        self.add_translation_for_culture(url, &culture)
    }

    /// Translate the selected route for `culture`.
    pub fn add_translation_for_culture(self, url: &str, culture: &str) -> TranslationResult<Self> {
        match self.named_route.clone().filter(|n| !n.is_empty()) {
            Some(name) => self.add_translation_for_named_route(url, culture, &name),
            None => {
                let action = self.action.clone().unwrap_or_default();
                self.add_translation_for_action(url, culture, &action)
            }
        }
    }

    /// Translate `action` of the selected controller for `culture`.
    pub fn add_translation_for_action(self, url: &str, culture: &str, action: &str) -> TranslationResult<Self> {
        let controller = self.controller.clone().unwrap_or_default();
        let namespace = self.controller_namespace.clone();
        let arguments = self.action_arguments.clone();
        self.add_translation_for(
            url,
            culture,
            &controller,
            action,
            namespace.as_deref(),
            arguments.as_deref(),
        )
    }

    /// Translate the first untranslated route matching the given selection.
    pub fn add_translation_for(
        mut self,
        url: &str,
        culture: &str,
        controller: &str,
        action: &str,
        namespace: Option<&str>,
        action_arguments: Option<&[String]>,
    ) -> TranslationResult<Self> {
        if controller.is_empty() {
            return Err(TranslationError::MissingArgument("controller"));
        }
        if action.is_empty() {
            return Err(TranslationError::MissingArgument("action"));
        }
        self.engine().check_culture(culture)?;

        let route_id = self
            .table
            .find_untranslated_route(culture, controller, action, namespace, action_arguments)
            .ok_or_else(|| {
                TranslationError::RouteNotFound(format!(
                    "controller '{}' and action '{}'",
                    controller, action
                ))
            })?;

        self.commit(url, culture, route_id)?;
        Ok(self)
    }

    /// Translate a specific route.
    pub fn add_translation_for_route(mut self, url: &str, culture: &str, route_id: RouteId) -> TranslationResult<Self> {
        self.commit(url, culture, route_id)?;
        Ok(self)
    }

    /// Translate the route registered under `named_route`.
    pub fn add_translation_for_named_route(
        mut self,
        url: &str,
        culture: &str,
        named_route: &str,
    ) -> TranslationResult<Self> {
        self.engine().check_culture(culture)?;

        let route_id = self
            .table
            .find_untranslated_named_route(culture, named_route)
            .ok_or_else(|| TranslationError::RouteNotFound(format!("name '{}'", named_route)))?;

        self.commit(url, culture, route_id)?;
        Ok(self)
    }

    fn engine(&self) -> TranslationEngine<'a> {
        TranslationEngine::new(self.config)
    }

    fn commit(&mut self, url: &str, culture: &str, route_id: RouteId) -> TranslationResult<()> {
        let engine = self.engine();
        let translated = engine.add_translation(self.table, url, culture, route_id, &self.prefixes)?;
        self.last_translation = Some(translated);
        Ok(())
    }
}
