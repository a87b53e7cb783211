//! In-memory record stores for a cleaning business.
//!
//! Provides typed record stores with insert, update, delete, filter and
//! search, an inventory wrapper with an append-only restock log, a checklist
//! book, input validation, aggregates, and demonstration data.
//!
//! Stores are plain owned values without interior locking. They are not
//! thread-safe; share them across threads only behind external
//! synchronization.

pub mod business;
pub mod checklists;
pub mod config;
pub mod error;
pub mod inventory;
pub mod schema;
pub mod seed;
pub mod store;
pub mod summary;
pub mod types;
pub mod validation;

pub use business::{CleaningBusiness, SupplyInventory};
pub use checklists::ChecklistBook;
pub use error::{StoreError, ValidationError};
pub use inventory::{Inventory, RestockEvent, Stocked};
pub use store::{Record, RecordKey, RecordStore, Selection};
