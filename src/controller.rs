//! Controller metadata.
//!
//! Controllers bound to a `TypedRouteTranslator` describe themselves through
//! the `Controller` trait: their type name, namespace and the routing
//! attributes they declare.

use std::fmt;

/// Declarative routing attributes a controller may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerAttribute {
    /// The controller lives in a routing area (area prefix).
    RouteArea,
    /// The controller declares a common route prefix.
    RoutePrefix,
}

impl fmt::Display for ControllerAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerAttribute::RouteArea => write!(f, "RouteArea"),
            ControllerAttribute::RoutePrefix => write!(f, "RoutePrefix"),
        }
    }
}

/// Compile-time description of a controller type.
///
/// ```
/// use route_localization::controller::{Controller, ControllerAttribute};
///
/// struct ProductsController;
///
/// impl Controller for ProductsController {
///     const TYPE_NAME: &'static str = "ProductsController";
///     const NAMESPACE: Option<&'static str> = Some("shop");
///     const ATTRIBUTES: &'static [ControllerAttribute] = &[ControllerAttribute::RoutePrefix];
/// }
///
/// assert_eq!(ProductsController::name(), "Products");
/// assert!(ProductsController::has_attribute(ControllerAttribute::RoutePrefix));
/// ```
pub trait Controller {
    /// Full type name, e.g. "ProductsController".
    const TYPE_NAME: &'static str;

    /// Namespace routes for this controller are restricted to, if any.
    const NAMESPACE: Option<&'static str> = None;

    /// Routing attributes declared on the controller.
    const ATTRIBUTES: &'static [ControllerAttribute] = &[];

    /// Route value name: the type name without its `Controller` suffix.
    fn name() -> &'static str {
        Self::TYPE_NAME
            .strip_suffix("Controller")
            .unwrap_or(Self::TYPE_NAME)
    }

    fn has_attribute(attribute: ControllerAttribute) -> bool {
        Self::ATTRIBUTES.contains(&attribute)
    }
}
