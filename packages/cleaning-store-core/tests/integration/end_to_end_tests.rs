//! End-to-end workflows: raw form input → validation → store → queries.

use cleaning_store_core::config::StoreConfig;
use cleaning_store_core::schema::{
    Employee, EmployeeStatus, InventoryItem, InventoryPatch, Location, LocationStatus, Schema,
};
use cleaning_store_core::summary;
use cleaning_store_core::validation::{self, Form};
use cleaning_store_core::{CleaningBusiness, RecordKey, StoreError, ValidationError};

fn form(pairs: &[&str]) -> Form {
    Form::from_pairs(validation::DEFAULT_DATE_FORMAT, pairs.iter().copied()).unwrap()
}

/// Insert Mop → update quantity → low-stock filter → delete → NotFound.
#[test]
fn test_inventory_item_lifecycle() {
    let mut business = CleaningBusiness::seeded();
    let expected_key = business.inventory.next_key();

    let draft = InventoryItem::draft_from_form(&form(&[
        "Item Name=Mop",
        "Quantity=40",
        "Location=Location 4",
        "Category=Tools",
        "Last Updated=2024-02-10",
        "Cost=18.00",
    ]))
    .unwrap();
    let mop_key = business.add_inventory_item(draft).unwrap().id;
    assert_eq!(mop_key, expected_key);
    assert_eq!(mop_key, RecordKey(11));
    assert!(!business.inventory.filter(|i| i.quantity < 30).contains_key(mop_key));

    let patches = InventoryItem::patches_from_form(&form(&["Quantity=25"])).unwrap();
    let updated = business.inventory.update(mop_key, patches).unwrap();
    assert_eq!(updated.quantity, 25);
    assert!(business.inventory.filter(|i| i.quantity < 30).contains_key(mop_key));

    let removed = business.inventory.delete(mop_key).unwrap();
    assert_eq!(removed.item, "Mop");
    assert!(!business.inventory.filter(|i| i.quantity < 30).contains_key(mop_key));

    let err = business
        .inventory
        .update(mop_key, vec![InventoryPatch::Quantity(5)])
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::NotFound {
            kind: "Inventory item",
            key: mop_key
        }
    );
    assert!(business.inventory.delete(mop_key).unwrap_err().is_not_found());
    assert!(business.inventory.restock(mop_key, 1).unwrap_err().is_not_found());
}

/// Status and salary update as submitted by the employee form.
#[test]
fn test_employee_status_and_salary_update() {
    let mut business = CleaningBusiness::seeded();
    let patches = Employee::patches_from_form(&form(&["status=Inactive", "salary=4100"])).unwrap();

    let employee = business.employees.update(RecordKey(2), patches).unwrap();
    assert_eq!(employee.status, EmployeeStatus::Inactive);
    assert_eq!(employee.salary, 4100);
    assert_eq!(employee.name, "Employee 2");
}

/// An invalid field anywhere in an update leaves the record unchanged.
#[test]
fn test_invalid_update_is_not_partially_applied() {
    let mut business = CleaningBusiness::seeded();
    let before = business.locations.get(RecordKey(6)).unwrap().clone();

    let err = Location::patches_from_form(&form(&["status=Closed", "square_footage=-5"]))
        .unwrap_err();
    assert!(matches!(err, ValidationError::Negative { .. }));
    assert_eq!(business.locations.get(RecordKey(6)).unwrap(), &before);

    let patches =
        Location::patches_from_form(&form(&["status=Closed", "square_footage=2500"])).unwrap();
    let location = business.locations.update(RecordKey(6), patches).unwrap();
    assert_eq!(location.status, LocationStatus::Closed);
    assert_eq!(location.square_footage, 2500);
}

#[test]
fn test_new_employee_rejects_bad_input() {
    let missing_name = form(&[
        "role=Cleaner",
        "contact=x@example.com",
        "status=Active",
        "hire_date=2024-01-01",
        "salary=3000",
    ]);
    assert_eq!(
        Employee::draft_from_form(&missing_name).unwrap_err(),
        ValidationError::EmptyField { field: "name" }
    );

    let bad_date = missing_name.clone().with("name", "Kim").with("hire_date", "01/01/2024");
    assert!(matches!(
        Employee::draft_from_form(&bad_date).unwrap_err(),
        ValidationError::MalformedDate { .. }
    ));
}

#[test]
fn test_checklist_workflow() {
    let mut business = CleaningBusiness::seeded();
    let tasks = validation::task_list("tasks", "Dust desks, Empty bins, Vacuum").unwrap();
    let due = validation::date("due_date", "2024-09-01", validation::DEFAULT_DATE_FORMAT).ok();

    business
        .create_checklist("Office 3 weekly", tasks, Some("Employee 1".to_string()), due)
        .unwrap();
    let replacement = validation::task_list("tasks", "Dust desks,Mop").unwrap();
    business
        .checklists
        .replace_tasks("Office 3 weekly", replacement)
        .unwrap();
    business
        .reassign_checklist("Office 3 weekly", Some("Employee 7".to_string()), None)
        .unwrap();

    let checklist = business.checklists.get("Office 3 weekly").unwrap();
    assert_eq!(checklist.tasks, vec!["Dust desks", "Mop"]);
    assert_eq!(checklist.assignee.as_deref(), Some("Employee 7"));
    assert_eq!(checklist.due, None);
    assert_eq!(business.checklists.names().last(), Some(&"Office 3 weekly"));
}

#[test]
fn test_unseeded_business_starts_at_key_one() {
    let config = StoreConfig::from_toml("seed_demo_data = false").unwrap();
    let mut business = CleaningBusiness::from_config(&config);
    assert!(business.locations.is_empty());

    let draft = Location::draft_from_form(&form(&[
        "name=Depot",
        "address=1 Dock Road",
        "status=Operational",
        "type=Office",
        "square_footage=800",
    ]))
    .unwrap();
    assert_eq!(business.locations.insert(draft).id, RecordKey(1));
}

#[test]
fn test_category_totals_for_seeded_inventory() {
    let business = CleaningBusiness::seeded();
    let totals = summary::by_category(business.inventory.items());

    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].category, "Cleaning Supplies");
    assert_eq!(totals[0].quantity, 100);
    // 10 units each at 5.00 through 14.00
    assert_eq!(totals[0].value, 950.0);
    assert_eq!(business.inventory.total_value(), 950.0);
}
