//! Payload types returned by the customer lookup API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;
use crate::domain::purchase::Purchase;
use crate::domain::types::CustomerId;

pub mod customer;
pub mod purchase;
pub mod types;

/// Customers matching a document number together with their recent purchases.
///
/// An empty `customers` list is a valid result meaning "no matches".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub purchases_by_customer: HashMap<CustomerId, Vec<Purchase>>,
}

impl SearchResult {
    /// Purchases recorded for `customer`, in the order the API sent them.
    ///
    /// Customers without an entry have no purchases.
    pub fn purchases_for(&self, customer: &Customer) -> &[Purchase] {
        self.purchases_by_customer
            .get(&customer.id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stringified_customer_keys() {
        let payload = r#"{
            "customers": [{"id": 1, "document_type_name": "CC", "document_number": "12345678",
                           "first_name": "Ana", "last_name": "Gómez", "email": "ana@example.com",
                           "phone": "3001234567", "address": "Calle 1"}],
            "purchases_by_customer": {"1": [{"id": 9, "purchase_date": "2024-01-05T10:00:00Z",
                                             "total_amount": "150000.00",
                                             "items": [{"product_name": "Widget", "quantity": 2,
                                                        "unit_price": "75000.00", "subtotal": "150000.00"}]}]}
        }"#;

        let result: SearchResult = serde_json::from_str(payload).unwrap();
        let customer = &result.customers[0];
        let purchases = result.purchases_for(customer);

        assert_eq!(purchases.len(), 1);
        assert_eq!(purchases[0].total_amount.get(), 150000.0);
        assert_eq!(purchases[0].items[0].product_name, "Widget");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let result: SearchResult = serde_json::from_str("{}").unwrap();
        assert!(result.is_empty());
        assert!(result.purchases_by_customer.is_empty());
    }

    #[test]
    fn unmapped_customer_has_no_purchases() {
        let result: SearchResult =
            serde_json::from_str(r#"{"customers": [{"id": 3}], "purchases_by_customer": {}}"#)
                .unwrap();
        assert!(result.purchases_for(&result.customers[0]).is_empty());
    }
}
