//! Ordered route table and its lookup index.
//!
//! # Responsibilities
//! - Store routes in match order, each under a stable `RouteId`
//! - Map route names to routes and back
//! - Insert, remove and replace entries at explicit positions
//! - Find routes that are not yet translated for a culture
//!
//! # Design Decisions
//! - `RouteId`s are never reused, so stale back-references resolve to nothing
//! - `replace` keeps index, id and name; root conversion relies on it
//! - O(n) scans (route tables are small and built once at startup)
//! - First match wins, in table order

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::routing::matcher::{
    ActionMatcher, AndMatcher, Matcher, NamespaceMatcher, SignatureMatcher, UntranslatedMatcher,
};
use crate::routing::route::{Route, RouteId};

/// Errors raised by table registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A route is already registered under this name.
    #[error("A route named '{0}' is already registered")]
    DuplicateName(String),
}

/// A route together with its identity in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub id: RouteId,
    #[serde(flatten)]
    pub route: Route,
}

/// The ordered route collection consumed by request dispatch.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    names: HashMap<String, RouteId>,
    next_id: u64,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in match order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Iterate routes in match order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.entries.iter().map(|e| &e.route)
    }

    /// Append an unnamed route.
    pub fn add(&mut self, route: Route) -> RouteId {
        let index = self.entries.len();
        self.insert(index, route)
    }

    /// Append a route registered under `name`.
    pub fn add_named(&mut self, name: impl Into<String>, route: Route) -> Result<RouteId, TableError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(TableError::DuplicateName(name));
        }
        let id = self.add(route);
        self.names.insert(name, id);
        Ok(id)
    }

    /// Insert a route at `index`, shifting later entries.
    ///
    /// `index` is clamped to the table length.
    pub fn insert(&mut self, index: usize, route: Route) -> RouteId {
        let id = RouteId(self.next_id);
        self.next_id += 1;
        let index = index.min(self.entries.len());
        self.entries.insert(index, RouteEntry { id, route });
        id
    }

    /// Remove a route and its name registration.
    ///
    /// A removed child is unregistered from its root, so the root counts as
    /// untranslated for that culture again. Children of a removed root are
    /// detached and become roots themselves.
    pub fn remove(&mut self, id: RouteId) -> Option<Route> {
        let index = self.index_of(id)?;
        self.names.retain(|_, v| *v != id);
        let removed = self.entries.remove(index).route;

        if let Some(translation) = &removed.translation {
            if let Some(root) = translation.root {
                if let Some(t) = self.get_mut(root).and_then(|r| r.translation.as_mut()) {
                    t.translated_routes.retain(|_, child| *child != id);
                }
            }
            for child in translation.translated_routes.values() {
                if let Some(t) = self.get_mut(*child).and_then(|r| r.translation.as_mut()) {
                    t.root = None;
                }
            }
            debug!(route = %id, children = translation.translated_routes.len(), "Removed translation route");
        }

        Some(removed)
    }

    /// Swap the route stored under `id` in place, returning the previous one.
    pub fn replace(&mut self, id: RouteId, route: Route) -> Option<Route> {
        let index = self.index_of(id)?;
        Some(std::mem::replace(&mut self.entries[index].route, route))
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.route)
    }

    pub fn get_mut(&mut self, id: RouteId) -> Option<&mut Route> {
        self.entries.iter_mut().find(|e| e.id == id).map(|e| &mut e.route)
    }

    pub fn index_of(&self, id: RouteId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Route registered under `name`.
    pub fn named(&self, name: &str) -> Option<RouteId> {
        self.names.get(name).copied()
    }

    /// Registered name of a route, if any.
    pub fn name_of(&self, id: RouteId) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, v)| **v == id)
            .map(|(k, _)| k.as_str())
    }

    /// First route for controller/action that does not serve `culture` yet.
    pub fn find_untranslated_route(
        &self,
        culture: &str,
        controller: &str,
        action: &str,
        namespace: Option<&str>,
        action_arguments: Option<&[String]>,
    ) -> Option<RouteId> {
        let mut matcher = AndMatcher::default()
            .with(ActionMatcher::new(controller, action))
            .with(UntranslatedMatcher::new(culture));
        if let Some(namespace) = namespace {
            matcher = matcher.with(NamespaceMatcher::new(namespace));
        }
        if let Some(arguments) = action_arguments {
            matcher = matcher.with(SignatureMatcher::new(arguments.to_vec()));
        }

        let found = self
            .entries
            .iter()
            .find(|e| matcher.matches(&e.route))
            .map(|e| e.id);
        debug!(culture, controller, action, ?namespace, found = ?found, "Untranslated route lookup");
        found
    }

    /// Named route that does not serve `culture` yet.
    pub fn find_untranslated_named_route(&self, culture: &str, name: &str) -> Option<RouteId> {
        let id = self.named(name)?;
        let route = self.get(id)?;
        let found = UntranslatedMatcher::new(culture).matches(route).then_some(id);
        debug!(culture, name, found = ?found, "Untranslated named route lookup");
        found
    }

    /// Children of a root, by culture.
    pub fn translations_of(&self, root: RouteId) -> Vec<(&str, &Route)> {
        let Some(translation) = self.get(root).and_then(|r| r.translation.as_ref()) else {
            return Vec::new();
        };
        translation
            .translated_routes
            .iter()
            .filter_map(|(culture, id)| self.get(*id).map(|r| (culture.as_str(), r)))
            .collect()
    }

    /// Root route of a leaf translation.
    pub fn root_of(&self, id: RouteId) -> Option<&Route> {
        self.get(id)?.translation_root().and_then(|root| self.get(root))
    }

    /// Index of the last entry belonging to a root or any of its children.
    pub(crate) fn last_family_index(&self, root: RouteId) -> Option<usize> {
        let root_index = self.index_of(root)?;
        let children = self
            .get(root)
            .and_then(|r| r.translation.as_ref())
            .map(|t| t.translated_routes.values().copied().collect::<Vec<_>>())
            .unwrap_or_default();
        Some(
            children
                .into_iter()
                .filter_map(|id| self.index_of(id))
                .fold(root_index, usize::max),
        )
    }
}
