//! Integration test suite.
//!
//! 1. Store properties (uniqueness, key monotonicity, filter, search)
//! 2. Restock ledger
//! 3. Full form-to-store workflows

pub mod end_to_end_tests;
pub mod restock_tests;
pub mod store_property_tests;
