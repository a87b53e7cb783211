//! Demonstration datasets.

use chrono::NaiveDate;

use crate::checklists::ChecklistBook;
use crate::inventory::Inventory;
use crate::schema::{
    EmployeeDraft, EmployeeStatus, Employee, InventoryDraft, InventoryItem, Location,
    LocationDraft, LocationKind, LocationStatus, Role, SupplyDraft, SupplyItem,
};
use crate::store::RecordStore;
use crate::types::{Expiry, Price};

const ROWS: u32 = 10;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn price(amount: f64) -> Price {
    Price::new("price", amount).unwrap_or(Price::ZERO)
}

/// Ten employees: five cleaners then five supervisors, all active.
pub fn employees() -> RecordStore<Employee> {
    RecordStore::from_drafts((1..=ROWS).map(|i| EmployeeDraft {
        name: format!("Employee {}", i),
        role: if i <= 5 { Role::Cleaner } else { Role::Supervisor },
        contact: format!("contact{}@example.com", i),
        status: EmployeeStatus::Active,
        hire_date: date(2023, 1, i),
        salary: 3000 + (i - 1) * 100,
    }))
}

/// Ten operational locations: five offices then five residences.
pub fn locations() -> RecordStore<Location> {
    RecordStore::from_drafts((1..=ROWS).map(|i| LocationDraft {
        name: format!("Location {}", i),
        address: format!("Address {}", i),
        status: LocationStatus::Operational,
        kind: if i <= 5 {
            LocationKind::Office
        } else {
            LocationKind::Residential
        },
        square_footage: 1000 + (i - 1) * 100,
    }))
}

/// Ten items of cleaning supplies, ten units each, spread over the locations.
pub fn inventory() -> Inventory<InventoryItem> {
    Inventory::from_drafts((1..=ROWS).map(|i| InventoryDraft {
        item: format!("Item {}", i),
        quantity: 10,
        location: format!("Location {}", i % ROWS + 1),
        category: "Cleaning Supplies".to_string(),
        last_updated: date(2023, 1, i),
        cost: price(5.0 + f64::from(i - 1)),
    }))
}

/// Ten checklists of ten tasks each.
pub fn checklists() -> ChecklistBook {
    let mut book = ChecklistBook::new();
    for i in 1..=ROWS {
        let tasks = (1..=ROWS).map(|j| format!("Task {}", j)).collect();
        // Names are distinct and task lists non-empty, so creation cannot fail.
        if let Err(e) = book.create(&format!("Checklist {}", i), tasks, None, None) {
            tracing::error!("Failed to seed checklist {}: {}", i, e);
        }
    }
    book
}

/// Supply inventory for the cleaning product catalogue.
pub fn supplies() -> Inventory<SupplyItem> {
    let rows: [(&str, &str, &str, &str, &str, u32, f64, Option<(i32, u32, u32)>); 8] = [
        ("Glass Cleaner", "Chemicals", "Windex", "CleanCo Wholesale", "Shelf A1", 24, 4.99, Some((2026, 6, 30))),
        ("All-Purpose Disinfectant", "Chemicals", "Lysol", "CleanCo Wholesale", "Shelf A2", 36, 6.49, Some((2026, 3, 31))),
        ("Floor Polish", "Chemicals", "Bona", "Janitorial Direct", "Shelf A3", 8, 12.75, Some((2027, 1, 31))),
        ("Microfiber Cloths", "Tools", "Libman", "Janitorial Direct", "Bin B1", 120, 0.89, None),
        ("Mop Heads", "Tools", "O-Cedar", "Janitorial Direct", "Bin B2", 15, 7.25, None),
        ("Trash Bags", "Consumables", "Hefty", "Metro Paper Supply", "Bin C1", 300, 0.18, None),
        ("Nitrile Gloves", "Safety", "Ansell", "Metro Paper Supply", "Bin C2", 6, 14.50, Some((2028, 12, 31))),
        ("Glass Scraper Blades", "Tools", "Unger", "CleanCo Wholesale", "Bin B3", 40, 0.65, None),
    ];

    Inventory::from_drafts(rows.into_iter().map(
        |(name, category, brand, supplier, shelf, quantity, unit_price, expiry)| SupplyDraft {
            name: name.to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            supplier: supplier.to_string(),
            storage_location: shelf.to_string(),
            quantity,
            unit_price: price(unit_price),
            last_updated: date(2024, 1, 15),
            expiry: match expiry {
                Some((year, month, day)) => Expiry::Date(date(year, month, day)),
                None => Expiry::NotApplicable,
            },
        },
    ))
}
