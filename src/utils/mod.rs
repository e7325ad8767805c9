//! Utility modules for validation and demo data

pub mod demo_data;
pub mod validation;

pub use validation::*;
