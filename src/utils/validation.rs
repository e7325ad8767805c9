//! Validation utilities

use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is a non-negative magnitude
pub fn validate_non_negative_amount(amount: &BigDecimal) -> ReconResult<()> {
    if *amount < BigDecimal::from(0) {
        Err(ReconError::Validation(
            "Amount must be a non-negative magnitude; direction carries the sign".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a transaction ID is usable
pub fn validate_transaction_id(id: &str) -> ReconResult<()> {
    if id.trim().is_empty() {
        return Err(ReconError::Validation(
            "Transaction ID cannot be empty".to_string(),
        ));
    }

    if id.len() > 64 {
        return Err(ReconError::Validation(
            "Transaction ID cannot exceed 64 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a transaction description fits display constraints
pub fn validate_description(description: &str) -> ReconResult<()> {
    if description.len() > 500 {
        return Err(ReconError::Validation(
            "Transaction description cannot exceed 500 characters".to_string(),
        ));
    }

    Ok(())
}
