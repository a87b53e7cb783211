//! Restock ledger behaviour on the supply inventory.

use chrono::{Duration, TimeZone, Utc};

use cleaning_store_core::schema::{SupplyPatch, SupplyText};
use cleaning_store_core::{seed, RecordKey, StoreError, ValidationError};

#[test]
fn test_three_restocks_accumulate_in_call_order() {
    let mut supplies = seed::supplies();
    let key = RecordKey(3);
    let initial = supplies.get(key).unwrap().quantity;
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();

    for (i, delta) in [5, 10, 2].into_iter().enumerate() {
        supplies
            .restock_at(key, delta, start + Duration::minutes(i as i64))
            .unwrap();
    }

    assert_eq!(supplies.get(key).unwrap().quantity, initial + 17);
    let log = supplies.history();
    assert_eq!(log.len(), 3);
    assert_eq!(
        log.iter().map(|event| event.delta).collect::<Vec<_>>(),
        vec![5, 10, 2]
    );
    assert!(log.windows(2).all(|pair| pair[0].at < pair[1].at));
    assert!(log.iter().all(|event| event.item == key));
}

#[test]
fn test_restocks_of_other_items_are_separated() {
    let mut supplies = seed::supplies();
    supplies.restock(RecordKey(1), 4).unwrap();
    supplies.restock(RecordKey(2), 9).unwrap();
    supplies.restock(RecordKey(1), 1).unwrap();

    assert_eq!(supplies.history_for(RecordKey(1)).count(), 2);
    assert_eq!(supplies.restocked_units(RecordKey(1)), 5);
    assert_eq!(supplies.restocked_units(RecordKey(2)), 9);
}

#[test]
fn test_negative_delta_rejected_without_side_effects() {
    let mut supplies = seed::supplies();
    let before = supplies.get(RecordKey(5)).unwrap().quantity;

    let err = supplies.restock(RecordKey(5), -1).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::Negative { .. })
    ));
    assert_eq!(supplies.get(RecordKey(5)).unwrap().quantity, before);
    assert!(supplies.history().is_empty());
}

#[test]
fn test_low_stock_follows_restock() {
    let mut supplies = seed::supplies();
    // Floor Polish (8) and Nitrile Gloves (6)
    assert_eq!(supplies.low_stock(10).keys(), vec![RecordKey(3), RecordKey(7)]);

    supplies.restock(RecordKey(3), 20).unwrap();
    assert_eq!(supplies.low_stock(10).keys(), vec![RecordKey(7)]);

    supplies
        .update(RecordKey(1), vec![SupplyPatch::Quantity(2)])
        .unwrap();
    assert_eq!(supplies.low_stock(10).keys(), vec![RecordKey(1), RecordKey(7)]);
}

#[test]
fn test_supply_search_by_name() {
    let supplies = seed::supplies();
    let lower = supplies.search("glass", SupplyText::Name).keys();
    let upper = supplies.search("GLASS", SupplyText::Name).keys();
    assert_eq!(lower, vec![RecordKey(1), RecordKey(8)]);
    assert_eq!(lower, upper);
}
