//! Suggested adjusting entries for bank items not yet on the books

use uuid::Uuid;

use crate::transaction::Transaction;
use crate::types::{AdjustmentEntry, Direction, TransactionSource};

/// Default expense account for bank-side charges
pub const BANK_CHARGES_ACCOUNT: &str = "Bank Fees and Charges";
/// Default cash account
pub const CASH_ACCOUNT: &str = "Cash at Bank";
/// Default income account for bank-side credits
pub const OTHER_INCOME_ACCOUNT: &str = "Other Income";

/// Propose one adjusting journal entry per unmatched bank transaction
///
/// A bank debit the books have not recorded (service charge, returned
/// check) becomes an expense entry against cash; a bank credit (interest,
/// collections made by the bank) becomes a cash entry against income.
/// Ledger-side and already-matched transactions produce no suggestion:
/// those are timing differences the bank will resolve, not missing book
/// entries.
pub fn suggest_adjustments(bank: &[Transaction]) -> Vec<AdjustmentEntry> {
    bank.iter()
        .filter(|t| t.source == TransactionSource::Bank && !t.is_matched())
        .map(|transaction| {
            let (debit_account, credit_account) = match transaction.direction {
                Direction::Debit => (BANK_CHARGES_ACCOUNT, CASH_ACCOUNT),
                Direction::Credit => (CASH_ACCOUNT, OTHER_INCOME_ACCOUNT),
            };

            AdjustmentEntry {
                id: Uuid::new_v4().to_string(),
                date: transaction.date,
                description: transaction.description.clone(),
                debit_account: debit_account.to_string(),
                credit_account: credit_account.to_string(),
                amount: transaction.amount.clone(),
            }
        })
        .collect()
}
