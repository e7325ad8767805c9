//! Canned reconciliation scenario for examples and testing
//!
//! One month of activity with the classic reconciling items: an outstanding
//! check, a bank fee and interest the books have not recorded, and a
//! deliberate recording error (the customer receipt booked as 1200.00 that
//! the bank shows as 1250.00).

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::transaction::{Transaction, TransactionBuilder};
use crate::types::{Direction, TransactionSource};

/// Opening balance both sides agree on for the demo period
pub fn demo_start_balance() -> BigDecimal {
    BigDecimal::from(10000)
}

/// Ledger (book) side of the demo period
pub fn demo_ledger() -> Vec<Transaction> {
    vec![
        ledger_row(1, "Opening balance", "INIT", 0, Direction::Debit),
        ledger_row(2, "Supplier ABC payment", "CHK-1001", 150_000, Direction::Credit),
        ledger_row(5, "Invoice 500 collection", "DEP-998", 500_000, Direction::Debit),
        ledger_row(10, "Rent payment", "TRF-202", 200_000, Direction::Credit),
        // Booked as 1200.00; the bank statement shows 1250.00.
        ledger_row(12, "Customer XYZ receipt", "DEP-1002", 120_000, Direction::Debit),
        // Outstanding check, not yet cleared by the bank.
        ledger_row(25, "Utilities payment", "CHK-1003", 30_000, Direction::Credit),
    ]
}

/// Bank-statement side of the demo period
pub fn demo_bank() -> Vec<Transaction> {
    vec![
        bank_row(1, "PREVIOUS BALANCE", "INIT", 0, Direction::Credit),
        bank_row(3, "CHECK CLEARED", "CHK-1001", 150_000, Direction::Debit),
        bank_row(5, "CASH DEPOSIT", "DEP-998", 500_000, Direction::Credit),
        bank_row(10, "OUTGOING TRANSFER", "TRF-202", 200_000, Direction::Debit),
        bank_row(12, "CHECK DEPOSIT", "DEP-1002", 125_000, Direction::Credit),
        // Fee and interest only the bank knows about.
        bank_row(30, "MAINTENANCE FEE", "COM-OCT", 5_000, Direction::Debit),
        bank_row(31, "INTEREST EARNED", "INT-OCT", 1_500, Direction::Credit),
    ]
}

fn ledger_row(
    day: u32,
    description: &str,
    reference: &str,
    cents: i64,
    direction: Direction,
) -> Transaction {
    row(day, description, reference, cents, direction, TransactionSource::Ledger)
}

fn bank_row(
    day: u32,
    description: &str,
    reference: &str,
    cents: i64,
    direction: Direction,
) -> Transaction {
    row(day, description, reference, cents, direction, TransactionSource::Bank)
}

fn row(
    day: u32,
    description: &str,
    reference: &str,
    cents: i64,
    direction: Direction,
    source: TransactionSource,
) -> Transaction {
    TransactionBuilder::new(
        NaiveDate::from_ymd_opt(2023, 10, day).expect("valid demo date"),
        description.to_string(),
        BigDecimal::from(cents) / BigDecimal::from(100),
        direction,
        source,
    )
    .reference(reference.to_string())
    .build()
    .expect("demo rows are well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchStatus;

    #[test]
    fn demo_rows_start_unmatched_with_unique_ids() {
        let ledger = demo_ledger();
        let bank = demo_bank();

        assert_eq!(ledger.len(), 6);
        assert_eq!(bank.len(), 7);

        let mut ids: Vec<&str> = ledger
            .iter()
            .chain(bank.iter())
            .map(|t| t.id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ledger.len() + bank.len());

        assert!(ledger
            .iter()
            .chain(bank.iter())
            .all(|t| t.status == MatchStatus::Unmatched));
    }

    #[test]
    fn recording_error_is_present() {
        let ledger = demo_ledger();
        let bank = demo_bank();

        let booked = ledger
            .iter()
            .find(|t| t.effective_reference() == Some("DEP-1002"))
            .unwrap();
        let cleared = bank
            .iter()
            .find(|t| t.effective_reference() == Some("DEP-1002"))
            .unwrap();

        assert_ne!(booked.amount, cleared.amount);
    }
}
