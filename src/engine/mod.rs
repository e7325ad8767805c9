//! Reconciliation engine: matching pass, balance calculator, and
//! adjusting-entry suggestions

pub mod adjustment;
pub mod balance;
pub mod matcher;

pub use adjustment::*;
pub use balance::*;
pub use matcher::*;
