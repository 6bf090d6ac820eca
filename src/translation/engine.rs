//! Translation engine.
//!
//! # Responsibilities
//! - Compose translated URLs (route prefix, area prefix, culture prefix)
//! - Check placeholder parity against the root
//! - Convert plain routes into roots (see policy.rs) and link children
//! - Commit roots and children into the table at deterministic positions
//!
//! # Design Decisions
//! - Every check runs before the first table write
//! - Children are inserted after the root's last existing child, so
//!   translations keep call order and never precede their root
//! - Re-translating a culture replaces the previous child (one entry per culture)

use tracing::{debug, info, warn};

use crate::config::LocalizationConfig;
use crate::routing::{Route, RouteId, RouteTable};
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::placeholders::validate_placeholders;
use crate::translation::policy::{convert_root, RootConversion};

/// Static prefixes applied in front of a translated URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePrefixes {
    /// Controller-level prefix, applied first (innermost).
    pub route: Option<String>,

    /// Area prefix, applied around the route prefix.
    pub area: Option<String>,
}

impl RoutePrefixes {
    pub fn route_prefix(&self) -> Option<&str> {
        self.route.as_deref().filter(|p| !p.is_empty())
    }

    pub fn area_prefix(&self) -> Option<&str> {
        self.area.as_deref().filter(|p| !p.is_empty())
    }
}

/// Join a prefix and the rest of a URL with exactly one slash.
pub fn join_segments(prefix: &str, rest: &str) -> String {
    let prefix = prefix.trim_matches('/');
    let rest = rest.trim_start_matches('/');

    match (prefix.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}/{}", prefix, rest),
    }
}

/// Drop leading, trailing and repeated slashes.
pub fn normalize_url(url: &str) -> String {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Compose `culture/area/route/url`, skipping empty parts.
///
/// The result is always normalized, prefixed or not.
pub fn compose_url(url: &str, culture: &str, prefixes: &RoutePrefixes, culture_prefix: bool) -> String {
    let mut composed = url.to_string();

    if let Some(prefix) = prefixes.route_prefix() {
        composed = join_segments(prefix, &composed);
    }
    if let Some(prefix) = prefixes.area_prefix() {
        composed = join_segments(prefix, &composed);
    }
    if culture_prefix {
        composed = join_segments(culture, &composed);
    }

    normalize_url(&composed)
}

/// Derives translated routes and writes them into a route table.
#[derive(Debug, Clone, Copy)]
pub struct TranslationEngine<'c> {
    config: &'c LocalizationConfig,
}

impl<'c> TranslationEngine<'c> {
    pub fn new(config: &'c LocalizationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'c LocalizationConfig {
        self.config
    }

    /// Fail unless `culture` is accepted (when culture validation is on).
    pub fn check_culture(&self, culture: &str) -> TranslationResult<()> {
        if self.config.accepts(culture) {
            Ok(())
        } else {
            Err(TranslationError::UnacceptedCulture(culture.to_string()))
        }
    }

    /// Derive a translation of `root` for `culture`.
    ///
    /// The returned route is neither linked to its root nor inserted.
    pub fn translate(
        &self,
        url: &str,
        culture: &str,
        root: &Route,
        prefixes: &RoutePrefixes,
    ) -> TranslationResult<Route> {
        let mut translated = root.derive_translation(culture);
        translated.url = compose_url(url, culture, prefixes, self.config.add_culture_as_route_prefix);

        if self.config.validate_url {
            validate_placeholders(&root.url, &translated.url)?;
        }

        Ok(translated)
    }

    /// Translate the route stored under `route_id` and commit the result.
    ///
    /// A leaf translation is resolved to its root first. Returns the id of the
    /// route now serving `culture`.
    pub fn add_translation(
        &self,
        table: &mut RouteTable,
        url: &str,
        culture: &str,
        route_id: RouteId,
        prefixes: &RoutePrefixes,
    ) -> TranslationResult<RouteId> {
        self.check_culture(culture)?;

        let route = table
            .get(route_id)
            .ok_or(TranslationError::UnknownRoute(route_id))?;
        let root_id = match route.translation_root() {
            Some(root_id) => {
                debug!(route = %route_id, root = %root_id, "Resolved translation to its root");
                root_id
            }
            None => route_id,
        };
        let root = table
            .get(root_id)
            .ok_or(TranslationError::UnknownRoute(root_id))?;

        if root.is_translation_route() {
            ensure_not_served_by_root(root, root_id, culture)?;
            let child = self.translate(url, culture, root, prefixes)?;
            return Ok(link_child(table, root_id, culture, child));
        }

        match convert_root(self, root, url, culture, prefixes)? {
            RootConversion::Replaced(replacement) => {
                table.replace(root_id, replacement);
                info!(root = %root_id, culture, url, "Replaced route by its translation");
                Ok(root_id)
            }
            RootConversion::Root(converted) => {
                ensure_not_served_by_root(&converted, root_id, culture)?;
                let child = self.translate(url, culture, &converted, prefixes)?;
                table.replace(root_id, converted);
                debug!(root = %root_id, "Converted route into translation root");
                Ok(link_child(table, root_id, culture, child))
            }
        }
    }
}

fn ensure_not_served_by_root(root: &Route, root_id: RouteId, culture: &str) -> TranslationResult<()> {
    if root.culture() == Some(culture) {
        return Err(TranslationError::RouteNotFound(format!(
            "route {} (it already serves culture '{}')",
            root_id, culture
        )));
    }
    Ok(())
}

/// Insert `child` after the root's family and register it under `culture`.
fn link_child(table: &mut RouteTable, root_id: RouteId, culture: &str, mut child: Route) -> RouteId {
    let previous = table.get(root_id).and_then(|r| r.translated_route(culture));
    if let Some(previous) = previous {
        warn!(root = %root_id, previous = %previous, culture, "Replacing existing translation");
        table.remove(previous);
    }

    if let Some(translation) = child.translation.as_mut() {
        translation.root = Some(root_id);
    }
    let url = child.url.clone();

    let index = table
        .last_family_index(root_id)
        .map_or(table.len(), |last| last + 1);
    let child_id = table.insert(index, child);

    if let Some(translation) = table.get_mut(root_id).and_then(|r| r.translation.as_mut()) {
        translation.translated_routes.insert(culture.to_string(), child_id);
    }

    info!(root = %root_id, route = %child_id, culture, url = %url, "Added route translation");
    child_id
}
