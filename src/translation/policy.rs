//! Root route processing.
//!
//! Decides what becomes of a plain route the first time it is translated.
//! Runs once per root; later translations only add children.

use crate::config::RootTranslationProcessing;
use crate::routing::Route;
use crate::translation::engine::{compose_url, RoutePrefixes, TranslationEngine};
use crate::translation::error::TranslationResult;

/// Outcome of converting a plain route into a translation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootConversion {
    /// The converted root. The requested translation is still to be added as a child.
    Root(Route),

    /// The requested translation took the original's place and is the new root.
    Replaced(Route),
}

/// Convert `plain` into a translation root according to the configured policy.
///
/// Nothing is written to the table here; the caller commits the result.
pub fn convert_root(
    engine: &TranslationEngine<'_>,
    plain: &Route,
    url: &str,
    culture: &str,
    prefixes: &RoutePrefixes,
) -> TranslationResult<RootConversion> {
    let config = engine.config();
    let mut root = plain.clone().into_translation_route();

    match config.root_translation_processing {
        RootTranslationProcessing::ApplyDefaultCultureToRoute => {
            let default_culture = config.default_culture.clone();
            if config.add_culture_as_route_prefix {
                root.url = compose_url(&root.url, &default_culture, &RoutePrefixes::default(), true);
            }
            if let Some(translation) = root.translation.as_mut() {
                translation.culture = Some(default_culture);
            }
            Ok(RootConversion::Root(root))
        }
        RootTranslationProcessing::ReplaceRouteByTranslatedRoute => Ok(RootConversion::Replaced(
            engine.translate(url, culture, &root, prefixes)?,
        )),
        RootTranslationProcessing::None => Ok(RootConversion::Root(root)),
    }
}
