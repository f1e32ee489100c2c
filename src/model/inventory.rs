use serde::{Deserialize, Serialize};

/// Stock and display data for a single product, as served by the inventory endpoint.
///
/// `quantity` is the authoritative stock level. The remaining fields mirror the
/// catalog so the detail screen can render without a second call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub product_id: i64,
    pub quantity: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl InventoryRecord {
    pub fn new(
        product_id: i64,
        quantity: u32,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            quantity,
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case_fields() {
        let json = r#"{"productId":1,"quantity":50,"name":"Product 1","price":100000,"description":"Description 1"}"#;
        let record: InventoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.product_id, 1);
        assert_eq!(record.quantity, 50);
        assert!(record.in_stock());
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let json = r#"{"productId":1,"quantity":-1,"name":"x","price":1}"#;
        assert!(serde_json::from_str::<InventoryRecord>(json).is_err());
    }
}
