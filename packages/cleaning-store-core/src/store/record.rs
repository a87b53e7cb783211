//! Record trait and identity keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique, immutable identity of a record within its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(pub u64);

impl RecordKey {
    /// Returns the raw key value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordKey {
    fn from(value: u64) -> Self {
        RecordKey(value)
    }
}

/// A row shape held by a [`RecordStore`](super::RecordStore).
///
/// The key is assigned by the store and never appears among the patchable
/// fields, so a record's identity cannot change after creation.
pub trait Record: Clone + fmt::Debug + Serialize {
    /// All non-key fields, already validated.
    type Draft;
    /// One mutable field together with its new value.
    type Patch: Clone + fmt::Debug;
    /// Text fields that `search` can match against.
    type TextField: Copy + fmt::Debug;

    /// Human-readable record kind used in errors and logs.
    const KIND: &'static str;

    /// Builds a record from its assigned key and validated fields.
    fn from_draft(key: RecordKey, draft: Self::Draft) -> Self;

    /// Returns the identity key.
    fn key(&self) -> RecordKey;

    /// Applies one field update in place.
    fn apply(&mut self, patch: &Self::Patch);

    /// Returns the value of a searchable text field.
    fn text(&self, field: Self::TextField) -> &str;
}
