//! # Recon Core
//!
//! A bank reconciliation library that pairs a company's ledger against the
//! bank statement for the same period and derives the adjusted balances
//! both records must agree on.
//!
//! ## Features
//!
//! - **Deterministic matching**: one-to-one pairing by complementary
//!   direction, exact reference, and amount (0.01 float-error tolerance)
//! - **Balance adjustment**: book/bank ending balances and the adjusted
//!   figures corrected for outstanding checks, deposits in transit, and
//!   unrecorded bank items
//! - **Adjusting-entry suggestions**: proposed journal entries for bank
//!   items missing from the books
//! - **Analysis hook**: trait-based seam for AI-assisted explanations of
//!   unmatched items, isolated from engine state
//! - **Decimal-safe arithmetic**: all currency values are `BigDecimal`
//!
//! ## Quick Start
//!
//! ```rust
//! use recon_core::engine::{match_transactions, summarize};
//! use recon_core::utils::demo_data;
//!
//! let (ledger, bank) = match_transactions(&demo_data::demo_ledger(), &demo_data::demo_bank());
//! let summary = summarize(&ledger, &bank, &demo_data::demo_start_balance());
//! assert!(summary.is_reconciled());
//! ```

pub mod engine;
pub mod traits;
pub mod transaction;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use engine::*;
pub use traits::*;
pub use transaction::*;
pub use types::*;
