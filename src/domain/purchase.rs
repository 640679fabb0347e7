use serde::{Deserialize, Serialize};

use crate::domain::types::Amount;

/// A purchase with its line items.
///
/// `purchase_date` is kept as sent (ISO date or date-time); it is only parsed
/// when formatted for display.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub total_amount: Amount,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A single product line of a purchase.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub unit_price: Option<Amount>,
    #[serde(default)]
    pub subtotal: Option<Amount>,
}

impl Item {
    /// Product line as listed in the purchases table: `name (quantity)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.product_name, self.quantity)
    }
}
