//! Query views over a record store.

use super::record::{Record, RecordKey};
use super::RecordStore;

/// Records of a store that satisfy a predicate.
///
/// A selection borrows the store and evaluates its predicate lazily, so it
/// always reflects the store's current contents and can be iterated any
/// number of times.
#[derive(Debug, Clone)]
pub struct Selection<'a, R, P> {
    records: &'a [R],
    predicate: P,
}

impl<'a, R, P> Selection<'a, R, P>
where
    P: Fn(&R) -> bool,
{
    /// Iterates over the matching records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        let predicate = &self.predicate;
        self.records.iter().filter(move |record| predicate(*record))
    }

    /// Returns the number of matching records.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if no record matches.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns true if any matching record has the given key.
    pub fn contains_key(&self, key: RecordKey) -> bool
    where
        R: Record,
    {
        self.iter().any(|record| record.key() == key)
    }

    /// Returns the keys of the matching records.
    pub fn keys(&self) -> Vec<RecordKey>
    where
        R: Record,
    {
        self.iter().map(Record::key).collect()
    }

    /// Clones the matching records into a vector.
    pub fn to_vec(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<R: Record> RecordStore<R> {
    /// Selects the records satisfying a caller-supplied predicate.
    ///
    /// # Arguments
    /// * `predicate` - Returns true for records to include
    ///
    /// # Returns
    /// A lazy [`Selection`] in insertion order. The store is not modified.
    pub fn filter<P>(&self, predicate: P) -> Selection<'_, R, P>
    where
        P: Fn(&R) -> bool,
    {
        Selection {
            records: self.records(),
            predicate,
        }
    }

    /// Case-insensitive substring search over one text field.
    ///
    /// # Arguments
    /// * `needle` - Substring to look for; empty matches every record
    /// * `field` - Text field to search
    ///
    /// # Returns
    /// A lazy [`Selection`] in insertion order.
    pub fn search(
        &self,
        needle: &str,
        field: R::TextField,
    ) -> Selection<'_, R, impl Fn(&R) -> bool> {
        let needle = needle.to_lowercase();
        self.filter(move |record: &R| {
            needle.is_empty() || record.text(field).to_lowercase().contains(&needle)
        })
    }
}
