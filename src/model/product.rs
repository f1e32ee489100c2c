/// Represents a product in the catalog.
///
/// The catalog only knows how a product is described and priced. Stock lives in
/// the inventory service, see [`InventoryRecord`](crate::model::InventoryRecord).
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Product name
    /// * `price` - Unit price in the smallest display unit of the store currency
    /// * `description` - Free text shown on the detail screen
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_catalog_payload() {
        let json = r#"{"id":7,"name":"Lamp","price":45000.0,"description":"Desk lamp"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product, Product::new(7, "Lamp", 45000.0, "Desk lamp"));
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let product: Product = serde_json::from_str(r#"{"id":1,"name":"A","price":1}"#).unwrap();
        assert!(product.description.is_empty());
    }
}
