//! The two applications' datasets, composed from independent stores.

use chrono::NaiveDate;

use crate::checklists::ChecklistBook;
use crate::config::StoreConfig;
use crate::error::{Result, ValidationError};
use crate::inventory::Inventory;
use crate::schema::{
    Checklist, Employee, InventoryDraft, InventoryItem, InventoryPatch, Location, SupplyItem,
};
use crate::seed;
use crate::store::{RecordKey, RecordStore};
use crate::summary::Dashboard;

/// Supply inventory of the cleaning product catalogue.
pub type SupplyInventory = Inventory<SupplyItem>;

/// Datasets of the cleaning business management application.
///
/// The stores are independent; the only cross-store checks are the ones a
/// form makes when it offers existing names to pick from (a stock location,
/// a checklist assignee).
#[derive(Debug, Clone, Default)]
pub struct CleaningBusiness {
    pub employees: RecordStore<Employee>,
    pub locations: RecordStore<Location>,
    pub inventory: Inventory<InventoryItem>,
    pub checklists: ChecklistBook,
}

impl CleaningBusiness {
    /// Creates a business with empty stores.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a business holding the demonstration datasets.
    pub fn seeded() -> Self {
        Self {
            employees: seed::employees(),
            locations: seed::locations(),
            inventory: seed::inventory(),
            checklists: seed::checklists(),
        }
    }

    /// Seeded or empty, as configured.
    pub fn from_config(config: &StoreConfig) -> Self {
        if config.seed_demo_data {
            Self::seeded()
        } else {
            Self::empty()
        }
    }

    /// Record counts for the home page.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            employees: self.employees.len(),
            locations: self.locations.len(),
            inventory_items: self.inventory.len(),
            checklists: self.checklists.len(),
        }
    }

    /// Adds an inventory item stocked at an existing location.
    pub fn add_inventory_item(&mut self, draft: InventoryDraft) -> Result<&InventoryItem> {
        self.require_location(&draft.location)?;
        Ok(self.inventory.insert(draft))
    }

    /// Updates an inventory item; a new location must name an existing one.
    ///
    /// All patches are checked before any is applied.
    pub fn update_inventory_item<I>(&mut self, key: RecordKey, patches: I) -> Result<&InventoryItem>
    where
        I: IntoIterator<Item = InventoryPatch>,
    {
        let patches: Vec<InventoryPatch> = patches.into_iter().collect();
        for patch in &patches {
            if let InventoryPatch::Location(location) = patch {
                self.require_location(location)?;
            }
        }
        self.inventory.update(key, patches)
    }

    /// Creates a checklist, optionally assigned to an existing employee.
    pub fn create_checklist(
        &mut self,
        name: &str,
        tasks: Vec<String>,
        assignee: Option<String>,
        due: Option<NaiveDate>,
    ) -> Result<&Checklist> {
        if let Some(assignee) = &assignee {
            self.require_employee(assignee)?;
        }
        self.checklists.create(name, tasks, assignee, due)
    }

    /// Reassigns a checklist to an existing employee.
    pub fn reassign_checklist(
        &mut self,
        name: &str,
        assignee: Option<String>,
        due: Option<NaiveDate>,
    ) -> Result<&Checklist> {
        if let Some(assignee) = &assignee {
            self.require_employee(assignee)?;
        }
        self.checklists.reassign(name, assignee, due)
    }

    fn require_location(&self, name: &str) -> Result<()> {
        if self.locations.iter().any(|location| location.name == name) {
            return Ok(());
        }
        Err(unknown_name("location", name, self.locations.iter().map(|l| l.name.as_str())).into())
    }

    fn require_employee(&self, name: &str) -> Result<()> {
        if self.employees.iter().any(|employee| employee.name == name) {
            return Ok(());
        }
        Err(unknown_name("assignee", name, self.employees.iter().map(|e| e.name.as_str())).into())
    }
}

fn unknown_name<'a>(
    field: &'static str,
    value: &str,
    allowed: impl Iterator<Item = &'a str>,
) -> ValidationError {
    ValidationError::UnknownVariant {
        field,
        value: value.to_string(),
        allowed: allowed.collect::<Vec<_>>().join(", "),
    }
}
