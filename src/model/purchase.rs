use serde::{Deserialize, Serialize};

/// Quantity used when the caller does not ask for a specific amount.
///
/// The default is applied on the client; the purchase endpoint always receives
/// an explicit quantity.
pub const DEFAULT_PURCHASE_QUANTITY: u32 = 1;

/// Outbound purchase payload: `{"productId": .., "quantity": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub product_id: i64,
    pub quantity: u32,
}

impl PurchaseRequest {
    pub fn new(product_id: i64, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    /// A request for a single unit.
    pub fn single(product_id: i64) -> Self {
        Self::new(product_id, DEFAULT_PURCHASE_QUANTITY)
    }
}

/// Confirmation returned by the purchase endpoint.
///
/// `remaining_quantity` is the stock *after* this purchase as seen by the server.
/// Views re-fetch inventory instead of deriving stock from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub message: String,
    pub remaining_quantity: u32,
}
