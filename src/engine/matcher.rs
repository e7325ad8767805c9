//! Deterministic one-to-one matching of ledger and bank transactions

use bigdecimal::BigDecimal;

use crate::transaction::Transaction;
use crate::types::MatchStatus;

/// Absolute amount tolerance for pairing
///
/// Absorbs residual floating-point error from upstream ingestion only; this
/// is not a fuzzy-amount heuristic. Comparison is strict: a difference of
/// exactly 0.01 does not match.
pub fn amount_tolerance() -> BigDecimal {
    BigDecimal::from(1) / BigDecimal::from(100)
}

/// Pair ledger transactions with bank transactions one-to-one
///
/// Works on copies: the caller's sequences are never mutated, so a retry
/// always starts from the same state. All match annotations are reset
/// before the pairing pass, making the operation idempotent from a clean
/// baseline.
///
/// For each ledger transaction in input order, the first still-unmatched
/// bank transaction satisfying all three rules is taken:
///
/// - complementary direction (a debit on one side against a credit on the
///   other),
/// - identical non-empty reference codes (exact, case-sensitive),
/// - amounts equal within [`amount_tolerance`].
///
/// Transactions without a usable reference stay unmatched by design and are
/// surfaced for manual or assisted review; there is no secondary
/// amount-plus-date pass.
pub fn match_transactions(
    ledger: &[Transaction],
    bank: &[Transaction],
) -> (Vec<Transaction>, Vec<Transaction>) {
    let mut ledger = ledger.to_vec();
    let mut bank = bank.to_vec();

    for transaction in ledger.iter_mut().chain(bank.iter_mut()) {
        transaction.status = MatchStatus::Unmatched;
        transaction.matched_with_id = None;
    }

    let tolerance = amount_tolerance();

    for ledger_txn in ledger.iter_mut() {
        let candidate = bank.iter_mut().find(|bank_txn| {
            !bank_txn.is_matched() && is_counterpart(ledger_txn, bank_txn, &tolerance)
        });

        if let Some(bank_txn) = candidate {
            ledger_txn.status = MatchStatus::Matched;
            bank_txn.status = MatchStatus::Matched;
            ledger_txn.matched_with_id = Some(bank_txn.id.clone());
            bank_txn.matched_with_id = Some(ledger_txn.id.clone());
        }
    }

    (ledger, bank)
}

/// Whether a bank transaction is an eligible counterpart for a ledger one
fn is_counterpart(
    ledger_txn: &Transaction,
    bank_txn: &Transaction,
    tolerance: &BigDecimal,
) -> bool {
    if bank_txn.direction != ledger_txn.direction.opposite() {
        return false;
    }

    let references_match = matches!(
        (ledger_txn.effective_reference(), bank_txn.effective_reference()),
        (Some(lhs), Some(rhs)) if lhs == rhs
    );
    if !references_match {
        return false;
    }

    (&ledger_txn.amount - &bank_txn.amount).abs() < *tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionBuilder;
    use crate::types::{Direction, TransactionSource};
    use chrono::NaiveDate;

    fn txn(
        id: &str,
        reference: &str,
        amount: &str,
        direction: Direction,
        source: TransactionSource,
    ) -> Transaction {
        let mut builder = TransactionBuilder::new(
            NaiveDate::from_ymd_opt(2023, 10, 2).unwrap(),
            format!("txn {id}"),
            amount.parse().unwrap(),
            direction,
            source,
        )
        .id(id.to_string());
        if !reference.is_empty() {
            builder = builder.reference(reference.to_string());
        }
        builder.build().unwrap()
    }

    fn ledger_txn(id: &str, reference: &str, amount: &str, direction: Direction) -> Transaction {
        txn(id, reference, amount, direction, TransactionSource::Ledger)
    }

    fn bank_txn(id: &str, reference: &str, amount: &str, direction: Direction) -> Transaction {
        txn(id, reference, amount, direction, TransactionSource::Bank)
    }

    #[test]
    fn matches_complementary_pair_with_equal_reference() {
        let ledger = vec![ledger_txn("l1", "CHK-1001", "1500.00", Direction::Credit)];
        let bank = vec![bank_txn("b1", "CHK-1001", "1500.00", Direction::Debit)];

        let (ledger, bank) = match_transactions(&ledger, &bank);

        assert!(ledger[0].is_matched());
        assert!(bank[0].is_matched());
        assert_eq!(ledger[0].matched_with_id.as_deref(), Some("b1"));
        assert_eq!(bank[0].matched_with_id.as_deref(), Some("l1"));
    }

    #[test]
    fn same_direction_never_matches() {
        let ledger = vec![ledger_txn("l1", "TRF-202", "2000.00", Direction::Credit)];
        let bank = vec![bank_txn("b1", "TRF-202", "2000.00", Direction::Credit)];

        let (ledger, bank) = match_transactions(&ledger, &bank);

        assert!(!ledger[0].is_matched());
        assert!(!bank[0].is_matched());
    }

    #[test]
    fn empty_reference_never_matches() {
        // Equal amount, complementary direction, but the ledger side has no
        // usable reference.
        let ledger = vec![ledger_txn("l1", "", "300.00", Direction::Credit)];
        let bank = vec![bank_txn("b1", "CHK-1003", "300.00", Direction::Debit)];

        let (ledger, bank) = match_transactions(&ledger, &bank);

        assert!(!ledger[0].is_matched());
        assert!(!bank[0].is_matched());
    }

    #[test]
    fn both_references_empty_never_match() {
        let ledger = vec![ledger_txn("l1", "", "300.00", Direction::Credit)];
        let bank = vec![bank_txn("b1", "", "300.00", Direction::Debit)];

        let (ledger, bank) = match_transactions(&ledger, &bank);

        assert!(!ledger[0].is_matched());
        assert!(!bank[0].is_matched());
    }

    #[test]
    fn reference_comparison_is_case_sensitive() {
        let ledger = vec![ledger_txn("l1", "chk-1001", "1500.00", Direction::Credit)];
        let bank = vec![bank_txn("b1", "CHK-1001", "1500.00", Direction::Debit)];

        let (ledger, _) = match_transactions(&ledger, &bank);

        assert!(!ledger[0].is_matched());
    }

    #[test]
    fn tolerance_boundary_is_strict() {
        // Exactly 0.01 apart: no match.
        let ledger = vec![ledger_txn("l1", "X", "100.00", Direction::Credit)];
        let bank = vec![bank_txn("b1", "X", "100.01", Direction::Debit)];
        let (ledger, _) = match_transactions(&ledger, &bank);
        assert!(!ledger[0].is_matched());

        // 0.0099 apart: match.
        let ledger = vec![ledger_txn("l1", "X", "100.00", Direction::Credit)];
        let bank = vec![bank_txn("b1", "X", "100.0099", Direction::Debit)];
        let (ledger, _) = match_transactions(&ledger, &bank);
        assert!(ledger[0].is_matched());
    }

    #[test]
    fn duplicate_reference_takes_earliest_bank_entry() {
        let ledger = vec![ledger_txn("l1", "X", "100.00", Direction::Credit)];
        let bank = vec![
            bank_txn("b1", "X", "100.00", Direction::Debit),
            bank_txn("b2", "X", "100.00", Direction::Debit),
        ];

        let (ledger, bank) = match_transactions(&ledger, &bank);

        assert_eq!(ledger[0].matched_with_id.as_deref(), Some("b1"));
        assert!(bank[0].is_matched());
        assert!(!bank[1].is_matched());
    }

    #[test]
    fn matching_is_one_to_one() {
        // Two ledger entries share the reference; each must take a distinct
        // bank entry.
        let ledger = vec![
            ledger_txn("l1", "X", "100.00", Direction::Credit),
            ledger_txn("l2", "X", "100.00", Direction::Credit),
        ];
        let bank = vec![
            bank_txn("b1", "X", "100.00", Direction::Debit),
            bank_txn("b2", "X", "100.00", Direction::Debit),
        ];

        let (ledger, bank) = match_transactions(&ledger, &bank);

        assert_eq!(ledger[0].matched_with_id.as_deref(), Some("b1"));
        assert_eq!(ledger[1].matched_with_id.as_deref(), Some("b2"));
        let matched_ledger = ledger.iter().filter(|t| t.is_matched()).count();
        let matched_bank = bank.iter().filter(|t| t.is_matched()).count();
        assert_eq!(matched_ledger, matched_bank);
    }

    #[test]
    fn matching_is_symmetric() {
        let ledger = vec![
            ledger_txn("l1", "A", "10.00", Direction::Debit),
            ledger_txn("l2", "B", "20.00", Direction::Credit),
            ledger_txn("l3", "C", "30.00", Direction::Debit),
        ];
        let bank = vec![
            bank_txn("b1", "B", "20.00", Direction::Debit),
            bank_txn("b2", "A", "10.00", Direction::Credit),
        ];

        let (ledger, bank) = match_transactions(&ledger, &bank);

        for txn in ledger.iter().filter(|t| t.is_matched()) {
            let partner_id = txn.matched_with_id.as_deref().unwrap();
            let partner = bank.iter().find(|b| b.id == partner_id).unwrap();
            assert!(partner.is_matched());
            assert_eq!(partner.matched_with_id.as_deref(), Some(txn.id.as_str()));
        }
    }

    #[test]
    fn rerun_reproduces_identical_annotations() {
        let ledger = vec![
            ledger_txn("l1", "CHK-1001", "1500.00", Direction::Credit),
            ledger_txn("l2", "", "42.00", Direction::Debit),
        ];
        let bank = vec![bank_txn("b1", "CHK-1001", "1500.00", Direction::Debit)];

        let first = match_transactions(&ledger, &bank);
        // Feed the annotated output back in; the reset pass must erase the
        // previous annotations before re-pairing.
        let second = match_transactions(&first.0, &first.1);

        assert_eq!(first, second);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let ledger = vec![ledger_txn("l1", "CHK-1001", "1500.00", Direction::Credit)];
        let bank = vec![bank_txn("b1", "CHK-1001", "1500.00", Direction::Debit)];

        let _ = match_transactions(&ledger, &bank);

        assert!(!ledger[0].is_matched());
        assert!(ledger[0].matched_with_id.is_none());
        assert!(!bank[0].is_matched());
    }

    #[test]
    fn empty_inputs_yield_no_matches() {
        let (ledger, bank) = match_transactions(&[], &[]);
        assert!(ledger.is_empty());
        assert!(bank.is_empty());

        let one = vec![ledger_txn("l1", "X", "5.00", Direction::Debit)];
        let (ledger, bank) = match_transactions(&one, &[]);
        assert!(!ledger[0].is_matched());
        assert!(bank.is_empty());
    }
}
