//! Building a localized route table from a `RouteManifest`.

use thiserror::Error;
use tracing::info;

use crate::config::{LocalizationConfig, RouteConfig, RouteManifest, TranslationConfig};
use crate::routing::{Route, RouteTable, TableError};
use crate::translation::TranslationError;
use crate::translator::RouteTranslator;

/// Errors raised while applying a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("route {index}: {source}")]
    Route { index: usize, source: TableError },

    #[error("translation {index} ('{url}'): {source}")]
    Translation {
        index: usize,
        url: String,
        source: TranslationError,
    },
}

/// Build the route table described by `manifest` and apply its translations in order.
///
/// `config` overrides the manifest's own localization settings when given.
pub fn build_route_table(
    manifest: &RouteManifest,
    config: Option<&LocalizationConfig>,
) -> Result<RouteTable, ManifestError> {
    let config = config.unwrap_or(&manifest.localization);
    let mut table = RouteTable::new();

    for (index, route) in manifest.routes.iter().enumerate() {
        let built = to_route(route);
        match &route.name {
            Some(name) => {
                table
                    .add_named(name.clone(), built)
                    .map_err(|source| ManifestError::Route { index, source })?;
            }
            None => {
                table.add(built);
            }
        }
    }

    for (index, translation) in manifest.translations.iter().enumerate() {
        apply_translation(&mut table, config, translation).map_err(|source| {
            ManifestError::Translation {
                index,
                url: translation.url.clone(),
                source,
            }
        })?;
    }

    info!(
        routes = table.len(),
        translations = manifest.translations.len(),
        "Route table localized"
    );
    Ok(table)
}

fn to_route(config: &RouteConfig) -> Route {
    let mut route = Route::new(&config.url, &config.controller, &config.action);
    route.namespace = config.namespace.clone();
    route.action_arguments = config.arguments.clone();
    route.defaults = config.defaults.clone();
    route.constraints = config.constraints.clone();
    route
}

fn apply_translation(
    table: &mut RouteTable,
    config: &LocalizationConfig,
    translation: &TranslationConfig,
) -> Result<(), TranslationError> {
    let mut translator = RouteTranslator::new(table, config).for_culture(&translation.culture);

    if let Some(prefix) = &translation.route_prefix {
        translator = translator.set_route_prefix(prefix);
    }
    if let Some(prefix) = &translation.area_prefix {
        translator = translator.set_area_prefix(prefix);
    }

    if let Some(name) = &translation.named_route {
        translator = translator.for_named_route(name);
    } else {
        let controller = translation.controller.clone().unwrap_or_default();
        translator = match &translation.namespace {
            Some(namespace) => translator.for_controller_in(controller, namespace),
            None => translator.for_controller(controller),
        };
        let action = translation.action.clone().unwrap_or_default();
        translator = match &translation.arguments {
            Some(arguments) => translator.for_action_with_arguments(action, arguments.iter().cloned()),
            None => translator.for_action(action),
        };
    }

    translator.add_translation(&translation.url)?;
    Ok(())
}
