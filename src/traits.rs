//! Pluggable boundary for per-item discrepancy analysis
//!
//! The hosting application may consult an external analysis service for a
//! natural-language explanation of any unmatched transaction. The hook is
//! out-of-band: its failures never abort or corrupt a reconciliation run.

use async_trait::async_trait;

use crate::transaction::Transaction;
use crate::types::{ReconError, ReconResult};

/// Fixed fallback text shown when the analysis service cannot be reached
pub const ANALYSIS_UNAVAILABLE_MESSAGE: &str =
    "Unable to reach the analysis service. Check the service credentials and try again.";

/// External analysis service for unmatched transactions
///
/// Implementations receive the full transaction record (date, description,
/// reference, amount, direction, source) and return a free-text causal
/// explanation, e.g. "likely a bank service charge; record an expense".
#[async_trait]
pub trait DiscrepancyAnalyzer: Send + Sync {
    /// Explain why this transaction may have gone unmatched
    async fn explain(&self, transaction: &Transaction) -> ReconResult<String>;
}

/// Analyzer used when no service is configured; always fails
pub struct UnavailableAnalyzer;

#[async_trait]
impl DiscrepancyAnalyzer for UnavailableAnalyzer {
    async fn explain(&self, _transaction: &Transaction) -> ReconResult<String> {
        Err(ReconError::Analysis(
            "no analysis service configured".to_string(),
        ))
    }
}

/// Ask the analyzer for an explanation, mapping any failure to the fixed
/// fallback string
///
/// Callers get a displayable string either way; a network or credential
/// error surfaces inline instead of unwinding reconciliation state.
pub async fn explain_or_fallback(
    analyzer: &dyn DiscrepancyAnalyzer,
    transaction: &Transaction,
) -> String {
    analyzer
        .explain(transaction)
        .await
        .unwrap_or_else(|_| ANALYSIS_UNAVAILABLE_MESSAGE.to_string())
}
