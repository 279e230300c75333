//! Data models representing stored entities.
//!
//! Every entity is an `i64` identifier plus a `...Details` payload holding its
//! mutable fields. The payload type is what callers send on create and update.

/// Client model
pub mod client;
/// Product model
pub mod product;
/// Seller model
pub mod seller;
/// Transaction model and approval status
pub mod transaction;

pub use client::{Client, ClientDetails};
pub use product::{Product, ProductDetails};
pub use seller::{Seller, SellerDetails};
pub use transaction::{Transaction, TransactionDetails, TransactionResponse, TransactionStatus};

/// A record that a repository can store.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Name used in `NotFound` errors and log lines.
    const KIND: &'static str;

    /// The mutable fields, without the identifier.
    type Details: Send + 'static;

    fn id(&self) -> i64;

    /// Assemble a stored record from a freshly assigned id.
    fn from_details(id: i64, details: Self::Details) -> Self;
}
