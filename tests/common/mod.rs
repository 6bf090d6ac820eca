//! Shared fixtures for integration tests.

use route_localization::{LocalizationConfig, Route, RouteId, RouteTable};

/// Config accepting `en` (default) plus `extra` cultures.
pub fn config_accepting(extra: &[&str]) -> LocalizationConfig {
    LocalizationConfig::default().accepting(extra.iter().copied())
}

/// A small application route table.
///
/// Returns the table and the id of `products/{id}` (`Products.Show`).
pub fn shop_table() -> (RouteTable, RouteId) {
    let mut table = RouteTable::new();
    table
        .add_named("Home", Route::new("", "Home", "Index"))
        .unwrap();
    table
        .add_named("About", Route::new("about", "Home", "About"))
        .unwrap();
    let show = table.add(
        Route::new("products/{id}", "Products", "Show")
            .with_namespace("shop")
            .with_constraint("id", r"\d+"),
    );
    table.add(Route::new("products", "Products", "Index").with_namespace("shop"));
    (table, show)
}

/// URLs in table order.
#[allow(dead_code)]
pub fn urls(table: &RouteTable) -> Vec<String> {
    table.routes().map(|r| r.url.clone()).collect()
}

/// (url, culture) pairs in table order.
#[allow(dead_code)]
pub fn snapshot(table: &RouteTable) -> Vec<(String, Option<String>)> {
    table
        .routes()
        .map(|r| (r.url.clone(), r.culture().map(str::to_string)))
        .collect()
}
