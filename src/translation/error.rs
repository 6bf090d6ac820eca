//! Translation error definitions.

use thiserror::Error;

use crate::controller::ControllerAttribute;
use crate::routing::RouteId;

/// Errors that can occur while translating routes.
///
/// Every error is raised before the route table is touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    /// A selection criterion required by the resolution path is empty.
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// No untranslated route matches the selection.
    #[error("No route found for {0}")]
    RouteNotFound(String),

    /// The culture is not in the accepted set.
    #[error("AcceptedCultures does not contain culture '{0}'")]
    UnacceptedCulture(String),

    /// The translated URL does not expose the root's placeholders in order.
    #[error(
        "Translation route '{translated}' contains different {{ }} placeholders than original route '{original}'"
    )]
    PlaceholderMismatch { translated: String, original: String },

    /// A prefix was supplied but the controller lacks the matching attribute.
    #[error("Controller '{controller}' does not declare a {attribute} attribute")]
    MissingAttribute {
        controller: &'static str,
        attribute: ControllerAttribute,
    },

    /// The route id does not belong to the table.
    #[error("Route {0} is not in the route table")]
    UnknownRoute(RouteId),
}

/// Result type for translation operations.
pub type TranslationResult<T> = Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslationError::UnacceptedCulture("fr".into());
        assert_eq!(err.to_string(), "AcceptedCultures does not contain culture 'fr'");

        let err = TranslationError::PlaceholderMismatch {
            translated: "produkte".into(),
            original: "products/{id}".into(),
        };
        assert_eq!(
            err.to_string(),
            "Translation route 'produkte' contains different { } placeholders than original route 'products/{id}'"
        );

        let err = TranslationError::MissingAttribute {
            controller: "ProductsController",
            attribute: ControllerAttribute::RouteArea,
        };
        assert!(err.to_string().contains("RouteArea"));
    }
}
