//! Customer domain type.

use serde::Serialize;

use punchcard_core::CustomerId;

/// A registered customer.
///
/// Created on the first check-in for an unseen ID and never updated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    /// Caller-supplied identifier.
    pub id: CustomerId,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
}

impl Customer {
    /// Create a customer, falling back to the default name when `name` is
    /// absent or empty.
    #[must_use]
    pub fn new(id: CustomerId, name: Option<String>) -> Self {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| Self::default_name(&id));
        Self { id, name }
    }

    /// Name given to customers who check in without one.
    #[must_use]
    pub fn default_name(id: &CustomerId) -> String {
        format!("Cliente {id}")
    }
}
