//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Calls one service operation
//! 3. Returns the record as JSON, or an `AppError` response

use crate::error::AppError;

/// Client endpoints
pub mod clients;
/// Liveness and storage connectivity
pub mod health;
/// Product endpoints
pub mod products;
/// Seller endpoints
pub mod sellers;
/// Transaction endpoints, including approval
pub mod transactions;

/// Reject blank names before they reach a service.
///
/// Services accept any value; this check belongs to the HTTP layer only.
pub(crate) fn require_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "name must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(require_name("").is_err());
        assert!(require_name("   ").is_err());
        assert!(require_name("Product 1").is_ok());
    }
}
