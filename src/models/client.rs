//! Client data models.
//!
//! - `Client`: a stored client record
//! - `ClientDetails`: request body for creating and updating clients

use serde::{Deserialize, Serialize};

use super::Entity;

/// Represents a client record from the database.
///
/// Maps to the `clients` table. The core enforces no uniqueness on `email`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Client {
    /// Assigned by storage on first save, never changed afterwards
    pub id: i64,

    pub name: String,

    pub email: String,
}

/// Request body for creating or updating a client.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john.doe@example.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub name: String,
    pub email: String,
}

impl Client {
    /// Overwrite every mutable field, keeping the identifier.
    pub fn apply(&mut self, details: ClientDetails) {
        self.name = details.name;
        self.email = details.email;
    }
}

impl Entity for Client {
    const KIND: &'static str = "Client";
    type Details = ClientDetails;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_details(id: i64, details: ClientDetails) -> Self {
        Self {
            id,
            name: details.name,
            email: details.email,
        }
    }
}
