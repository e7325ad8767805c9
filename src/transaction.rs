//! Transaction records and construction

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::*;
use crate::utils::validation::{
    validate_description, validate_non_negative_amount, validate_transaction_id,
};

/// A single financial event from either the ledger or the bank statement
///
/// Immutable once created except for the match annotations (`status` and
/// `matched_with_id`), which the matcher writes on its own copies. The
/// amount is always a non-negative magnitude; the economic direction is
/// carried entirely by `direction` and `source`, never by sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique identifier, stable for the transaction's lifetime
    pub id: String,
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Free-text label; display-only, never used in matching
    pub description: String,
    /// External reference code (check number, transfer code); may be absent
    pub reference: Option<String>,
    /// Non-negative magnitude of the movement
    pub amount: BigDecimal,
    /// Accounting direction, side-relative
    pub direction: Direction,
    /// Which record set this transaction belongs to
    pub source: TransactionSource,
    /// Match state within the current reconciliation session
    pub status: MatchStatus,
    /// Id of the paired transaction; present iff `status` is `Matched`
    pub matched_with_id: Option<String>,
    /// Free-text annotation for reviewers
    pub notes: Option<String>,
}

impl Transaction {
    /// Create a new unmatched transaction
    ///
    /// Fails fast on a blank id or a negative amount so malformed records
    /// never reach the matching algorithm.
    pub fn new(
        id: String,
        date: NaiveDate,
        description: String,
        reference: Option<String>,
        amount: BigDecimal,
        direction: Direction,
        source: TransactionSource,
    ) -> ReconResult<Self> {
        validate_transaction_id(&id)?;
        validate_description(&description)?;
        validate_non_negative_amount(&amount)?;

        Ok(Self {
            id,
            date,
            description,
            reference,
            amount,
            direction,
            source,
            status: MatchStatus::Unmatched,
            matched_with_id: None,
            notes: None,
        })
    }

    /// Whether this transaction has been paired with a counterpart
    pub fn is_matched(&self) -> bool {
        self.status == MatchStatus::Matched
    }

    /// The reference code, if present and non-empty
    ///
    /// An empty reference string is treated as absent: it can never satisfy
    /// the matcher's reference-equality rule.
    pub fn effective_reference(&self) -> Option<&str> {
        self.reference.as_deref().filter(|r| !r.is_empty())
    }
}

/// Builder for transactions
#[derive(Debug)]
pub struct TransactionBuilder {
    id: Option<String>,
    date: NaiveDate,
    description: String,
    reference: Option<String>,
    amount: BigDecimal,
    direction: Direction,
    source: TransactionSource,
    notes: Option<String>,
}

impl TransactionBuilder {
    /// Create a new builder for the given side and direction
    pub fn new(
        date: NaiveDate,
        description: String,
        amount: BigDecimal,
        direction: Direction,
        source: TransactionSource,
    ) -> Self {
        Self {
            id: None,
            date,
            description,
            reference: None,
            amount,
            direction,
            source,
            notes: None,
        }
    }

    /// Set an explicit id instead of a generated one
    pub fn id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the external reference code
    pub fn reference(mut self, reference: String) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Attach a reviewer note
    pub fn notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Build the transaction, generating a UUID id if none was set
    pub fn build(self) -> ReconResult<Transaction> {
        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let mut transaction = Transaction::new(
            id,
            self.date,
            self.description,
            self.reference,
            self.amount,
            self.direction,
            self.source,
        )?;
        transaction.notes = self.notes;
        Ok(transaction)
    }
}
