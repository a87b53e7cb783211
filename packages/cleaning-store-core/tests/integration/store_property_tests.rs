//! Property-style checks over randomised operation sequences.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cleaning_store_core::schema::{Employee, EmployeePatch, EmployeeStatus, EmployeeText};
use cleaning_store_core::seed;
use cleaning_store_core::{RecordKey, RecordStore};

fn assert_unique_keys(store: &RecordStore<Employee>) {
    let keys = store.keys();
    let distinct: HashSet<RecordKey> = keys.iter().copied().collect();
    assert_eq!(distinct.len(), keys.len(), "duplicate keys in {:?}", keys);
}

/// Keys stay unique across any mix of inserts and deletes.
#[test]
fn test_keys_unique_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(7);
    let template = seed::employees().records()[0].clone();

    for _ in 0..20 {
        let mut store = seed::employees();
        let mut deleted: Vec<RecordKey> = Vec::new();

        for _ in 0..200 {
            if rng.gen_bool(0.6) || store.is_empty() {
                let mut draft = cleaning_store_core::schema::EmployeeDraft {
                    name: template.name.clone(),
                    role: template.role,
                    contact: template.contact.clone(),
                    status: template.status,
                    hire_date: template.hire_date,
                    salary: template.salary,
                };
                draft.salary = rng.gen_range(0..10_000);
                let key = store.insert(draft).id;
                assert!(!deleted.contains(&key), "key {} reused", key);
            } else {
                let keys = store.keys();
                let key = keys[rng.gen_range(0..keys.len())];
                store.delete(key).unwrap();
                deleted.push(key);
            }
            assert_unique_keys(&store);
        }
    }
}

/// With no deletes, keys are exactly 1..=N in insertion order.
#[test]
fn test_keys_monotonic_without_deletes() {
    let mut store: RecordStore<Employee> = RecordStore::new();
    let template = seed::employees();
    for employee in template.iter() {
        store.insert(cleaning_store_core::schema::EmployeeDraft {
            name: employee.name.clone(),
            role: employee.role,
            contact: employee.contact.clone(),
            status: employee.status,
            hire_date: employee.hire_date,
            salary: employee.salary,
        });
    }

    let expected: Vec<RecordKey> = (1..=10).map(RecordKey).collect();
    assert_eq!(store.keys(), expected);
}

/// Filtering returns exactly the matching subset, in insertion order.
#[test]
fn test_filter_matches_manual_scan() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut store = seed::employees();
    for key in store.keys() {
        store
            .update_field(key, EmployeePatch::Salary(rng.gen_range(0..6000)))
            .unwrap();
    }

    for threshold in [0, 1000, 3000, 5999, 6000] {
        let selected = store.filter(|e| e.salary < threshold).keys();
        let manual: Vec<RecordKey> = store
            .iter()
            .filter(|e| e.salary < threshold)
            .map(|e| e.id)
            .collect();
        assert_eq!(selected, manual);
    }
}

/// Selections are views: they see the store as it is when iterated.
#[test]
fn test_filter_recomputed_after_mutation() {
    let mut store = seed::employees();
    assert!(store
        .filter(|e| e.status == EmployeeStatus::Inactive)
        .is_empty());

    store
        .update_field(RecordKey(4), EmployeePatch::Status(EmployeeStatus::Inactive))
        .unwrap();

    let inactive = store.filter(|e| e.status == EmployeeStatus::Inactive);
    assert_eq!(inactive.keys(), vec![RecordKey(4)]);
}

#[test]
fn test_search_case_insensitive_on_every_field() {
    let store = seed::employees();
    for (lower, upper, field) in [
        ("employee 1", "EMPLOYEE 1", EmployeeText::Name),
        ("example.com", "EXAMPLE.COM", EmployeeText::Contact),
        ("supervisor", "SUPERVISOR", EmployeeText::Role),
    ] {
        assert_eq!(
            store.search(lower, field).keys(),
            store.search(upper, field).keys()
        );
    }
    // "Employee 1" and "Employee 10"
    assert_eq!(store.search("employee 1", EmployeeText::Name).len(), 2);
}
