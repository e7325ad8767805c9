//! Balance-adjustment calculator
//!
//! Derives ending and adjusted balances from the annotated transaction
//! sets. Trusts whatever match annotation is present; it does not decide
//! matching itself, so manual overrides flow through unchanged.

use bigdecimal::BigDecimal;

use crate::transaction::Transaction;
use crate::types::{Direction, ReconciliationSummary};

/// Compute the reconciliation summary for one period
///
/// Direction labels are side-relative, which is why the two ending-balance
/// formulas are inverted:
///
/// - `ledger_end = start + ledger debits - ledger credits` (cash-account
///   perspective),
/// - `bank_end = start + bank credits - bank debits` (the bank restating
///   the same account from its own records).
///
/// The adjusted balances then correct each side for items only the other
/// side has recorded: unmatched bank credits/debits (interest earned,
/// service charges) adjust the book balance; unmatched ledger debits and
/// credits (deposits in transit, outstanding checks) adjust the bank
/// balance. Both figures converge when reconciliation is complete.
///
/// The single `start_balance` is the agreed opening figure for the period
/// and populates both start fields. Pure function; inputs are not mutated.
pub fn summarize(
    ledger: &[Transaction],
    bank: &[Transaction],
    start_balance: &BigDecimal,
) -> ReconciliationSummary {
    let ledger_debits = direction_total(ledger, Direction::Debit);
    let ledger_credits = direction_total(ledger, Direction::Credit);
    let ledger_end = start_balance + &ledger_debits - &ledger_credits;

    let bank_credits = direction_total(bank, Direction::Credit);
    let bank_debits = direction_total(bank, Direction::Debit);
    let bank_end = start_balance + &bank_credits - &bank_debits;

    // Bank movements the books have not yet recorded.
    let unbooked_credits = unmatched_direction_total(bank, Direction::Credit);
    let unbooked_debits = unmatched_direction_total(bank, Direction::Debit);
    let adjusted_ledger = &ledger_end + &unbooked_credits - &unbooked_debits;

    // Ledger movements the bank has not yet cleared.
    let deposits_in_transit = unmatched_direction_total(ledger, Direction::Debit);
    let outstanding_checks = unmatched_direction_total(ledger, Direction::Credit);
    let adjusted_bank = &bank_end + &deposits_in_transit - &outstanding_checks;

    ReconciliationSummary {
        ledger_start_balance: start_balance.clone(),
        bank_start_balance: start_balance.clone(),
        ledger_end_balance: ledger_end,
        bank_end_balance: bank_end,
        unmatched_ledger_total: &deposits_in_transit + &outstanding_checks,
        unmatched_bank_total: &unbooked_credits + &unbooked_debits,
        adjusted_ledger_balance: adjusted_ledger,
        adjusted_bank_balance: adjusted_bank,
    }
}

/// Magnitude sum of all transactions with the given direction
fn direction_total(transactions: &[Transaction], direction: Direction) -> BigDecimal {
    transactions
        .iter()
        .filter(|t| t.direction == direction)
        .map(|t| &t.amount)
        .sum()
}

/// Magnitude sum of unmatched transactions with the given direction
fn unmatched_direction_total(transactions: &[Transaction], direction: Direction) -> BigDecimal {
    transactions
        .iter()
        .filter(|t| !t.is_matched() && t.direction == direction)
        .map(|t| &t.amount)
        .sum()
}
