//! Inventory stores with an append-only restock log.
//!
//! An [`Inventory`] wraps a [`RecordStore`] of stocked records and records a
//! [`RestockEvent`] for every successful restock. Events are never modified
//! or removed, even when the item they refer to is deleted.

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::store::{Record, RecordKey, RecordStore, Selection};
use crate::types::Price;

/// Record with a stock quantity and a unit price.
pub trait Stocked: Record {
    /// Units on hand.
    fn quantity(&self) -> u32;

    /// Overwrites the units on hand.
    fn set_quantity(&mut self, quantity: u32);

    /// Category used for aggregate reports.
    fn category(&self) -> &str;

    /// Price of a single unit.
    fn unit_price(&self) -> Price;

    /// Value of the stock on hand.
    fn stock_value(&self) -> f64 {
        self.unit_price().times(self.quantity())
    }
}

/// One successful restock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestockEvent {
    /// Key of the restocked item
    pub item: RecordKey,
    /// Units added
    pub delta: u32,
    /// When the restock was recorded
    pub at: DateTime<Utc>,
}

/// Stocked record store plus its restock log.
///
/// Read-only store operations (`get`, `filter`, `search`, ...) are available
/// through `Deref`; mutations go through the methods below.
#[derive(Debug, Clone)]
pub struct Inventory<R: Stocked> {
    items: RecordStore<R>,
    restocks: Vec<RestockEvent>,
}

impl<R: Stocked> Inventory<R> {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self {
            items: RecordStore::new(),
            restocks: Vec::new(),
        }
    }

    /// Creates an inventory seeded with the given drafts.
    pub fn from_drafts(drafts: impl IntoIterator<Item = R::Draft>) -> Self {
        Self {
            items: RecordStore::from_drafts(drafts),
            restocks: Vec::new(),
        }
    }

    /// Returns the underlying record store.
    pub fn items(&self) -> &RecordStore<R> {
        &self.items
    }

    /// Inserts a new item. See [`RecordStore::insert`].
    pub fn insert(&mut self, draft: R::Draft) -> &R {
        self.items.insert(draft)
    }

    /// Updates fields of an item. See [`RecordStore::update`].
    pub fn update<I>(&mut self, key: RecordKey, patches: I) -> Result<&R>
    where
        I: IntoIterator<Item = R::Patch>,
    {
        self.items.update(key, patches)
    }

    /// Removes an item. Its past restock events are kept.
    pub fn delete(&mut self, key: RecordKey) -> Result<R> {
        self.items.delete(key)
    }

    /// Restocks an item, timestamped now.
    pub fn restock(&mut self, key: RecordKey, delta: i64) -> Result<&R> {
        self.restock_at(key, delta, Utc::now())
    }

    /// Increases an item's quantity and appends a restock event.
    ///
    /// # Arguments
    /// * `key` - Identity key of the item
    /// * `delta` - Units to add; negative values are rejected
    /// * `at` - Timestamp recorded in the event
    ///
    /// # Returns
    /// `Result<&R, StoreError>` with the restocked item. On any error the
    /// quantity and the log are left unchanged.
    pub fn restock_at(&mut self, key: RecordKey, delta: i64, at: DateTime<Utc>) -> Result<&R> {
        if delta < 0 {
            tracing::warn!(kind = R::KIND, %key, delta, "negative restock rejected");
            return Err(ValidationError::Negative {
                field: "delta",
                value: delta.to_string(),
            }
            .into());
        }
        let delta = u32::try_from(delta).map_err(|_| ValidationError::Overflow { field: "delta" })?;

        let item = self.items.get_mut(key)?;
        let quantity = item
            .quantity()
            .checked_add(delta)
            .ok_or(ValidationError::Overflow { field: "quantity" })?;
        item.set_quantity(quantity);

        self.restocks.push(RestockEvent {
            item: key,
            delta,
            at,
        });
        tracing::debug!(kind = R::KIND, %key, delta, quantity, "item restocked");
        self.items.require(key)
    }

    /// Items whose quantity is strictly below `threshold`.
    pub fn low_stock(&self, threshold: u32) -> Selection<'_, R, impl Fn(&R) -> bool> {
        self.items.filter(move |item: &R| item.quantity() < threshold)
    }

    /// The full restock log in call order.
    pub fn history(&self) -> &[RestockEvent] {
        &self.restocks
    }

    /// Restock events for one item in call order.
    pub fn history_for(&self, key: RecordKey) -> impl Iterator<Item = &RestockEvent> + '_ {
        self.restocks.iter().filter(move |event| event.item == key)
    }

    /// Total units ever added to an item through restocks.
    pub fn restocked_units(&self, key: RecordKey) -> u64 {
        self.history_for(key).map(|event| u64::from(event.delta)).sum()
    }

    /// Combined value of all stock on hand.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(Stocked::stock_value).sum()
    }
}

impl<R: Stocked> Default for Inventory<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Stocked> Deref for Inventory<R> {
    type Target = RecordStore<R>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::schema::{InventoryDraft, InventoryItem, InventoryPatch};
    use chrono::{NaiveDate, TimeZone};
    use ntest::timeout;

    fn draft(item: &str, quantity: u32) -> InventoryDraft {
        InventoryDraft {
            item: item.to_string(),
            quantity,
            location: "Location 1".to_string(),
            category: "Cleaning Supplies".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cost: Price::new("cost", 2.5).unwrap(),
        }
    }

    fn inventory() -> Inventory<InventoryItem> {
        Inventory::from_drafts(vec![draft("Sponge", 5), draft("Bleach", 50)])
    }

    #[timeout(1000)]
    #[test]
    fn test_restock_accumulates_and_logs() {
        let mut inventory = inventory();
        let key = RecordKey(1);
        for delta in [5, 10, 2] {
            inventory.restock(key, delta).unwrap();
        }

        assert_eq!(inventory.get(key).unwrap().quantity, 22);
        let deltas: Vec<u32> = inventory.history().iter().map(|e| e.delta).collect();
        assert_eq!(deltas, vec![5, 10, 2]);
        assert_eq!(inventory.restocked_units(key), 17);
    }

    #[timeout(1000)]
    #[test]
    fn test_negative_restock_rejected() {
        let mut inventory = inventory();
        let err = inventory.restock(RecordKey(1), -3).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Negative { field: "delta", .. })
        ));
        assert_eq!(inventory.get(RecordKey(1)).unwrap().quantity, 5);
        assert!(inventory.history().is_empty());
    }

    #[timeout(1000)]
    #[test]
    fn test_restock_missing_item() {
        let mut inventory = inventory();
        assert!(inventory.restock(RecordKey(9), 4).unwrap_err().is_not_found());
        assert!(inventory.history().is_empty());
    }

    #[timeout(1000)]
    #[test]
    fn test_restock_overflow_rejected() {
        let mut inventory = inventory();
        inventory
            .update(RecordKey(2), vec![InventoryPatch::Quantity(u32::MAX)])
            .unwrap();
        let err = inventory.restock(RecordKey(2), 1).unwrap_err();

        assert_eq!(
            err,
            StoreError::Validation(ValidationError::Overflow { field: "quantity" })
        );
        assert!(inventory.history().is_empty());
    }

    #[timeout(1000)]
    #[test]
    fn test_restock_event_timestamp() {
        let mut inventory = inventory();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        inventory.restock_at(RecordKey(2), 6, at).unwrap();

        assert_eq!(
            inventory.history(),
            &[RestockEvent {
                item: RecordKey(2),
                delta: 6,
                at
            }]
        );
    }

    #[timeout(1000)]
    #[test]
    fn test_delete_keeps_history() {
        let mut inventory = inventory();
        inventory.restock(RecordKey(1), 3).unwrap();
        inventory.delete(RecordKey(1)).unwrap();

        assert_eq!(inventory.history_for(RecordKey(1)).count(), 1);
        assert!(inventory.restock(RecordKey(1), 3).unwrap_err().is_not_found());
    }

    #[timeout(1000)]
    #[test]
    fn test_low_stock_and_total_value() {
        let inventory = inventory();
        assert_eq!(inventory.low_stock(10).keys(), vec![RecordKey(1)]);
        assert!(inventory.low_stock(5).is_empty());
        assert_eq!(inventory.total_value(), 137.5);
    }
}
