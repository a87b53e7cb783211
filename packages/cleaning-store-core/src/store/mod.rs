//! Typed in-memory record stores.
//!
//! Each store owns one collection of records sharing a schema:
//! - Identity keys assigned as (highest key so far) + 1, starting at 1
//! - Insertion order preserved for display
//! - Field-level updates applied all-or-nothing
//! - Lazy, restartable filter and search views

mod query;
mod record;
#[allow(clippy::module_inception)]
mod store;

pub use query::Selection;
pub use record::{Record, RecordKey};
pub use store::RecordStore;
