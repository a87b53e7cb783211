//! Record storage and mutation.
//!
//! A store is a plain owned value: it is not thread-safe and callers that
//! share one across threads must provide their own synchronization.

use serde_json::Value;

use crate::error::{Result, StoreError};

use super::record::{Record, RecordKey};

/// In-memory collection of records of one schema.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    /// Records in insertion order
    records: Vec<R>,
    /// Highest key ever assigned (0 when nothing was inserted yet)
    high_water: u64,
}

impl<R: Record> RecordStore<R> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            high_water: 0,
        }
    }

    /// Creates a store seeded with the given drafts, inserted in order.
    ///
    /// # Arguments
    /// * `drafts` - Validated field sets for the initial records
    ///
    /// # Returns
    /// A store whose keys run from 1 to the number of drafts.
    pub fn from_drafts(drafts: impl IntoIterator<Item = R::Draft>) -> Self {
        let mut store = Self::new();
        for draft in drafts {
            store.insert(draft);
        }
        store
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the key the next insert will receive.
    ///
    /// Keys only come from `insert`, so the high-water mark is never below
    /// the largest live key; keys of deleted records are not handed out again.
    pub fn next_key(&self) -> RecordKey {
        RecordKey(self.high_water + 1)
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Iterates over all records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Returns the keys of all records in insertion order.
    pub fn keys(&self) -> Vec<RecordKey> {
        self.records.iter().map(Record::key).collect()
    }

    /// Looks up a record by key.
    pub fn get(&self, key: RecordKey) -> Option<&R> {
        self.records.iter().find(|record| record.key() == key)
    }

    /// Returns true if a record with the key exists.
    pub fn contains(&self, key: RecordKey) -> bool {
        self.get(key).is_some()
    }

    /// Looks up a record by key, failing with `NotFound` if absent.
    pub fn require(&self, key: RecordKey) -> Result<&R> {
        self.get(key).ok_or_else(|| Self::not_found(key))
    }

    /// Inserts a new record and assigns it the next key.
    ///
    /// # Arguments
    /// * `draft` - Validated non-key fields
    ///
    /// # Returns
    /// The stored record including its assigned key.
    pub fn insert(&mut self, draft: R::Draft) -> &R {
        let key = self.next_key();
        self.high_water = key.get();
        self.records.push(R::from_draft(key, draft));
        tracing::debug!(kind = R::KIND, %key, "record inserted");
        // The vector is non-empty after the push above.
        &self.records[self.records.len() - 1]
    }

    /// Updates one or more fields of an existing record.
    ///
    /// # Arguments
    /// * `key` - Identity key of the record
    /// * `patches` - Field updates to apply in order
    ///
    /// # Returns
    /// `Result<&R, StoreError>` with the updated record, or `NotFound` with
    /// the store left unchanged.
    pub fn update<I>(&mut self, key: RecordKey, patches: I) -> Result<&R>
    where
        I: IntoIterator<Item = R::Patch>,
    {
        let index = self.position(key)?;
        let record = &mut self.records[index];
        let mut applied = 0usize;
        for patch in patches {
            record.apply(&patch);
            applied += 1;
        }
        tracing::debug!(kind = R::KIND, %key, fields = applied, "record updated");
        Ok(&self.records[index])
    }

    /// Updates a single field of an existing record.
    pub fn update_field(&mut self, key: RecordKey, patch: R::Patch) -> Result<&R> {
        self.update(key, std::iter::once(patch))
    }

    /// Removes the record with the given key.
    ///
    /// # Returns
    /// `Result<R, StoreError>` with the removed record, or `NotFound`.
    pub fn delete(&mut self, key: RecordKey) -> Result<R> {
        let index = self.position(key)?;
        let removed = self.records.remove(index);
        tracing::debug!(kind = R::KIND, %key, "record deleted");
        Ok(removed)
    }

    /// Serializes all records, in insertion order, as a JSON array.
    pub fn to_json(&self) -> Result<Value> {
        serde_json::to_value(&self.records)
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Mutable access for wrappers that maintain their own invariants.
    pub(crate) fn get_mut(&mut self, key: RecordKey) -> Result<&mut R> {
        let index = self.position(key)?;
        Ok(&mut self.records[index])
    }

    fn position(&self, key: RecordKey) -> Result<usize> {
        self.records
            .iter()
            .position(|record| record.key() == key)
            .ok_or_else(|| {
                tracing::warn!(kind = R::KIND, %key, "record not found");
                Self::not_found(key)
            })
    }

    fn not_found(key: RecordKey) -> StoreError {
        StoreError::NotFound {
            kind: R::KIND,
            key,
        }
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
