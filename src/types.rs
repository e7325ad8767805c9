//! Core types and data structures for the reconciliation engine

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accounting direction of a transaction
///
/// The meaning is relative to the side that recorded it: on the ledger
/// (cash-account) side a debit is money in; on the bank statement the same
/// movement appears as a credit. The two sides of a matched pair therefore
/// always carry opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Debit entry (ledger: money in; bank statement: withdrawal)
    Debit,
    /// Credit entry (ledger: money out; bank statement: deposit)
    Credit,
}

impl Direction {
    /// Returns the complementary direction on the other side of the account
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Debit => Direction::Credit,
            Direction::Credit => Direction::Debit,
        }
    }
}

/// Which record set a transaction originates from; fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionSource {
    /// The internally maintained book of record
    Ledger,
    /// The externally issued bank statement
    Bank,
}

/// Match state of a transaction within a reconciliation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Not yet paired with a counterpart on the other side
    Unmatched,
    /// Paired one-to-one with a counterpart transaction
    Matched,
    /// Reserved for heuristic matches; never produced by the deterministic matcher
    Suggested,
}

/// Derived balance summary for one reconciliation session
///
/// Recomputed on demand from the annotated transaction sets; never mutated
/// in place. When reconciliation is correct and complete,
/// `adjusted_ledger_balance` and `adjusted_bank_balance` are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    /// Agreed opening balance for the period, ledger side
    pub ledger_start_balance: BigDecimal,
    /// Agreed opening balance for the period, bank side
    pub bank_start_balance: BigDecimal,
    /// Book balance after applying all ledger transactions
    pub ledger_end_balance: BigDecimal,
    /// Statement balance after applying all bank transactions
    pub bank_end_balance: BigDecimal,
    /// Magnitude sum of unmatched ledger items (informational)
    pub unmatched_ledger_total: BigDecimal,
    /// Magnitude sum of unmatched bank items (informational)
    pub unmatched_bank_total: BigDecimal,
    /// Book balance corrected for bank items not yet booked
    pub adjusted_ledger_balance: BigDecimal,
    /// Statement balance corrected for ledger items not yet cleared
    pub adjusted_bank_balance: BigDecimal,
}

impl ReconciliationSummary {
    /// Whether the two adjusted balances agree
    pub fn is_reconciled(&self) -> bool {
        self.adjusted_ledger_balance == self.adjusted_bank_balance
    }

    /// Difference between the adjusted ledger and bank balances
    pub fn adjusted_difference(&self) -> BigDecimal {
        &self.adjusted_ledger_balance - &self.adjusted_bank_balance
    }
}

/// A suggested adjusting journal entry for an item one side has not booked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentEntry {
    /// Unique identifier for the suggestion
    pub id: String,
    /// Date of the underlying unmatched transaction
    pub date: NaiveDate,
    /// Description carried over from the unmatched transaction
    pub description: String,
    /// Account to debit
    pub debit_account: String,
    /// Account to credit
    pub credit_account: String,
    /// Entry amount
    pub amount: BigDecimal,
}

/// Errors that can occur in the reconciliation system
#[derive(Debug, thiserror::Error)]
pub enum ReconError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Analysis service error: {0}")]
    Analysis(String),
}

/// Result type for reconciliation operations
pub type ReconResult<T> = Result<T, ReconError>;
