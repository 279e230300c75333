//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: a stored sale of a product by a seller to a client
//! - `TransactionDetails`: request body for recording a transaction
//! - `TransactionStatus`: the approval state derived from `approved`
//! - `TransactionResponse`: response body returned to clients

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Entity;

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction:
/// - Names one client, one product and one seller by id
/// - Holds those ids as weak references; the rows they point at may not exist
/// - Starts with whatever `approved` flag the caller supplied
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,

    /// Buying client
    pub client_id: i64,

    /// Product sold
    pub product_id: i64,

    /// Seller who made the sale
    pub seller_id: i64,

    /// Number of units
    pub quantity: i32,

    /// When the sale happened, without a time zone; `None` if never supplied
    pub date: Option<NaiveDateTime>,

    /// Set once by approval and never cleared
    pub approved: bool,
}

/// Approval state of a transaction.
///
/// `Pending → Approved` is the only transition; nothing leads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Approved,
}

impl Transaction {
    pub fn status(&self) -> TransactionStatus {
        if self.approved {
            TransactionStatus::Approved
        } else {
            TransactionStatus::Pending
        }
    }

    /// Move to `Approved`. Approving twice leaves the record unchanged.
    pub fn approve(&mut self) {
        self.approved = true;
    }
}

/// Request to record a transaction.
///
/// # JSON Example
///
/// ```json
/// {
///   "client_id": 1,
///   "product_id": 1,
///   "seller_id": 1,
///   "quantity": 1,
///   "date": "2024-06-11T12:00:00",
///   "approved": false
/// }
/// ```
///
/// `date` may be omitted and is then stored as null. `approved` may be
/// omitted and defaults to `false`. Referenced ids are not checked for
/// existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub client_id: i64,
    pub product_id: i64,
    pub seller_id: i64,
    pub quantity: i32,
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub approved: bool,
}

impl Entity for Transaction {
    const KIND: &'static str = "Transaction";
    type Details = TransactionDetails;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_details(id: i64, details: TransactionDetails) -> Self {
        Self {
            id,
            client_id: details.client_id,
            product_id: details.product_id,
            seller_id: details.seller_id,
            quantity: details.quantity,
            date: details.date,
            approved: details.approved,
        }
    }
}

/// Response returned for transaction operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 7,
///   "client_id": 1,
///   "product_id": 1,
///   "seller_id": 1,
///   "quantity": 1,
///   "date": "2024-06-11T12:00:00",
///   "approved": true,
///   "status": "approved"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub client_id: i64,
    pub product_id: i64,
    pub seller_id: i64,
    pub quantity: i32,
    pub date: Option<NaiveDateTime>,
    pub approved: bool,
    pub status: TransactionStatus,
}

/// Convert a stored Transaction into its API shape, adding `status`.
impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        let status = transaction.status();
        Self {
            id: transaction.id,
            client_id: transaction.client_id,
            product_id: transaction.product_id,
            seller_id: transaction.seller_id,
            quantity: transaction.quantity,
            date: transaction.date,
            approved: transaction.approved,
            status,
        }
    }
}
