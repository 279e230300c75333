//! Product data models.
//!
//! - `Product`: a stored product record
//! - `ProductDetails`: request body for creating and updating products

use serde::{Deserialize, Serialize};

use super::Entity;

/// Represents a product record from the database.
///
/// Maps to the `products` table. Price and stock are expected to be
/// non-negative but nothing enforces it; negative values are stored as given.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,

    pub name: String,

    /// Unit price
    pub price: f64,

    /// Units on hand
    pub stock: i32,
}

/// Request body for creating or updating a product.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Product 1",
///   "price": 10.0,
///   "stock": 100
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

impl Product {
    /// Overwrite name, price and stock, keeping the identifier.
    pub fn apply(&mut self, details: ProductDetails) {
        self.name = details.name;
        self.price = details.price;
        self.stock = details.stock;
    }
}

impl Entity for Product {
    const KIND: &'static str = "Product";
    type Details = ProductDetails;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_details(id: i64, details: ProductDetails) -> Self {
        Self {
            id,
            name: details.name,
            price: details.price,
            stock: details.stock,
        }
    }
}
