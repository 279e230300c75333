//! Seller data models.

use serde::{Deserialize, Serialize};

use super::Entity;

/// Represents a seller record from the `sellers` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Seller {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Request body for creating or updating a seller.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Jane Smith",
///   "email": "jane.smith@example.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerDetails {
    pub name: String,
    pub email: String,
}

impl Seller {
    pub fn apply(&mut self, details: SellerDetails) {
        self.name = details.name;
        self.email = details.email;
    }
}

impl Entity for Seller {
    const KIND: &'static str = "Seller";
    type Details = SellerDetails;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_details(id: i64, details: SellerDetails) -> Self {
        Self {
            id,
            name: details.name,
            email: details.email,
        }
    }
}
