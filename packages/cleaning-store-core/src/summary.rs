//! Aggregate figures behind the dashboard and stock charts.
//!
//! Everything here is recomputed from the stores on each call; nothing is
//! cached between calls.

use serde::Serialize;

use crate::inventory::Stocked;
use crate::store::RecordStore;

/// Record counts shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub employees: usize,
    pub locations: usize,
    pub inventory_items: usize,
    pub checklists: usize,
}

/// Stock totals for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub items: usize,
    pub quantity: u64,
    pub value: f64,
}

/// Per-category quantity and value, in order of first appearance.
pub fn by_category<R: Stocked>(store: &RecordStore<R>) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for item in store {
        let index = match totals
            .iter()
            .position(|total| total.category == item.category())
        {
            Some(index) => index,
            None => {
                totals.push(CategoryTotal {
                    category: item.category().to_string(),
                    items: 0,
                    quantity: 0,
                    value: 0.0,
                });
                totals.len() - 1
            }
        };
        let total = &mut totals[index];
        total.items += 1;
        total.quantity += u64::from(item.quantity());
        total.value += item.stock_value();
    }
    totals
}

/// Per-category quantity, in order of first appearance.
pub fn quantity_by_category<R: Stocked>(store: &RecordStore<R>) -> Vec<(String, u64)> {
    by_category(store)
        .into_iter()
        .map(|total| (total.category, total.quantity))
        .collect()
}

/// Per-category stock value, in order of first appearance.
pub fn value_by_category<R: Stocked>(store: &RecordStore<R>) -> Vec<(String, f64)> {
    by_category(store)
        .into_iter()
        .map(|total| (total.category, total.value))
        .collect()
}
