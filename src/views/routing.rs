//! Routes between the two screens and the parameters a route carries.

use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

/// Name of the route parameter holding the product id.
pub const ID_PARAM: &str = "id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/products`
    Catalog,
    /// `/products/{id}`
    ProductDetail(i64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Catalog => "/products".to_string(),
            Route::ProductDetail(id) => format!("/products/{id}"),
        }
    }

    /// Reads a path back into a route. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["products"] => Some(Route::Catalog),
            ["products", id] => coerce_product_id(id).map(Route::ProductDetail),
            _ => None,
        }
    }

    /// The parameters a view activated by this route would see.
    pub fn params(&self) -> RouteParams {
        match self {
            Route::Catalog => RouteParams::default(),
            Route::ProductDetail(id) => RouteParams::with_id(id.to_string()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Raw string parameters of the current route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn with_id(id: impl Into<String>) -> Self {
        let mut params = Self::default();
        params.insert(ID_PARAM, id);
        params
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The `id` parameter coerced to a product id.
    pub fn product_id(&self) -> Option<i64> {
        self.get(ID_PARAM).and_then(coerce_product_id)
    }
}

/// Numeric coercion of a route parameter: surrounding whitespace is ignored,
/// anything that is not an integer is rejected.
pub fn coerce_product_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Something that can move the user to another screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Logs navigation requests. Used by the demo binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) {
        info!(path = %route, "Navigate");
    }
}
