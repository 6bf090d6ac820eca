//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check culture identifiers are usable as URL segments
//! - Check the default culture is accepted when cultures are validated
//! - Check manifest translations name a target
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::{LocalizationConfig, RouteManifest};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("default_culture must not be empty")]
    EmptyDefaultCulture,

    #[error("accepted_cultures must not be empty while validate_culture is enabled")]
    NoAcceptedCultures,

    #[error("default culture '{0}' is not in accepted_cultures")]
    DefaultCultureNotAccepted(String),

    #[error("culture '{0}' is not a valid URL segment")]
    InvalidCulture(String),

    #[error("route {index} has an empty {field}")]
    EmptyRouteField { index: usize, field: &'static str },

    #[error("translation {index} names neither a route nor a controller and action")]
    MissingTranslationTarget { index: usize },
}

/// Validate localization settings.
pub fn validate_config(config: &LocalizationConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.default_culture.is_empty() {
        errors.push(ValidationError::EmptyDefaultCulture);
    } else if !is_valid_culture(&config.default_culture) {
        errors.push(ValidationError::InvalidCulture(config.default_culture.clone()));
    }

    for culture in &config.accepted_cultures {
        if !is_valid_culture(culture) {
            errors.push(ValidationError::InvalidCulture(culture.clone()));
        }
    }

    if config.validate_culture {
        if config.accepted_cultures.is_empty() {
            errors.push(ValidationError::NoAcceptedCultures);
        } else if !config.default_culture.is_empty()
            && !config.accepted_cultures.contains(&config.default_culture)
        {
            errors.push(ValidationError::DefaultCultureNotAccepted(
                config.default_culture.clone(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a route manifest, including its localization settings.
pub fn validate_manifest(manifest: &RouteManifest) -> Result<(), Vec<ValidationError>> {
    let mut errors = validate_config(&manifest.localization).err().unwrap_or_default();

    for (index, route) in manifest.routes.iter().enumerate() {
        if route.controller.is_empty() {
            errors.push(ValidationError::EmptyRouteField { index, field: "controller" });
        }
        if route.action.is_empty() {
            errors.push(ValidationError::EmptyRouteField { index, field: "action" });
        }
    }

    for (index, translation) in manifest.translations.iter().enumerate() {
        let has_name = translation.named_route.as_deref().is_some_and(|n| !n.is_empty());
        let has_action = translation.controller.as_deref().is_some_and(|c| !c.is_empty())
            && translation.action.as_deref().is_some_and(|a| !a.is_empty());
        if !has_name && !has_action {
            errors.push(ValidationError::MissingTranslationTarget { index });
        }
        if !is_valid_culture(&translation.culture) {
            errors.push(ValidationError::InvalidCulture(translation.culture.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_valid_culture(culture: &str) -> bool {
    !culture.is_empty()
        && !culture
            .chars()
            .any(|c| c == '/' || c == '{' || c == '}' || c.is_whitespace())
}
