use serde::{Deserialize, Serialize};

use crate::domain::types::CustomerId;

/// Identity and contact details of a customer.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Customer {
    pub id: CustomerId,
    pub document_type_name: String,
    pub document_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    /// Document type and number as shown to the user, e.g. `CC 12345678`.
    pub fn document_label(&self) -> String {
        join_non_empty(&self.document_type_name, &self.document_number)
    }

    pub fn full_name(&self) -> String {
        join_non_empty(&self.first_name, &self.last_name)
    }
}

fn join_non_empty(first: &str, second: &str) -> String {
    [first.trim(), second.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
