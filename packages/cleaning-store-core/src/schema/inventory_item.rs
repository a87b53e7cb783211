//! Stock kept at client locations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ValidationError;
use crate::inventory::Stocked;
use crate::store::{Record, RecordKey};
use crate::types::Price;
use crate::validation::{self, normalize_field, Form};

use super::{unknown_field, Schema};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    pub id: RecordKey,
    pub item: String,
    pub quantity: u32,
    /// Name of the location holding the stock
    pub location: String,
    pub category: String,
    pub last_updated: NaiveDate,
    pub cost: Price,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryDraft {
    pub item: String,
    pub quantity: u32,
    pub location: String,
    pub category: String,
    pub last_updated: NaiveDate,
    pub cost: Price,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryPatch {
    Item(String),
    Quantity(u32),
    Location(String),
    Category(String),
    LastUpdated(NaiveDate),
    Cost(Price),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryText {
    Item,
    Location,
    Category,
}

impl Record for InventoryItem {
    type Draft = InventoryDraft;
    type Patch = InventoryPatch;
    type TextField = InventoryText;

    const KIND: &'static str = "Inventory item";

    fn from_draft(key: RecordKey, draft: InventoryDraft) -> Self {
        InventoryItem {
            id: key,
            item: draft.item,
            quantity: draft.quantity,
            location: draft.location,
            category: draft.category,
            last_updated: draft.last_updated,
            cost: draft.cost,
        }
    }

    fn key(&self) -> RecordKey {
        self.id
    }

    fn apply(&mut self, patch: &InventoryPatch) {
        match patch {
            InventoryPatch::Item(item) => self.item = item.clone(),
            InventoryPatch::Quantity(quantity) => self.quantity = *quantity,
            InventoryPatch::Location(location) => self.location = location.clone(),
            InventoryPatch::Category(category) => self.category = category.clone(),
            InventoryPatch::LastUpdated(date) => self.last_updated = *date,
            InventoryPatch::Cost(cost) => self.cost = *cost,
        }
    }

    fn text(&self, field: InventoryText) -> &str {
        match field {
            InventoryText::Item => &self.item,
            InventoryText::Location => &self.location,
            InventoryText::Category => &self.category,
        }
    }
}

impl Stocked for InventoryItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn unit_price(&self) -> Price {
        self.cost
    }
}

impl Schema for InventoryItem {
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Item",
        "Quantity",
        "Location",
        "Category",
        "Last Updated",
        "Cost",
    ];

    fn draft_from_form(form: &Form) -> Result<InventoryDraft, ValidationError> {
        Ok(InventoryDraft {
            item: form.text("item_name")?,
            quantity: form.whole("quantity")?,
            location: form.text("location")?,
            category: form.text("category")?,
            last_updated: form.date("last_updated")?,
            cost: form.price("cost")?,
        })
    }

    fn parse_patch(field: &str, raw: &str, date_format: &str) -> Result<InventoryPatch, ValidationError> {
        match normalize_field(field).as_str() {
            "item" | "item_name" => validation::required_text("item_name", raw).map(InventoryPatch::Item),
            "quantity" => validation::non_negative_u32("quantity", raw).map(InventoryPatch::Quantity),
            "location" => validation::required_text("location", raw).map(InventoryPatch::Location),
            "category" => validation::required_text("category", raw).map(InventoryPatch::Category),
            "last_updated" => {
                validation::date("last_updated", raw, date_format).map(InventoryPatch::LastUpdated)
            }
            "cost" => validation::price("cost", raw).map(InventoryPatch::Cost),
            _ => Err(unknown_field::<Self>(field)),
        }
    }

    fn parse_text_field(field: &str) -> Result<InventoryText, ValidationError> {
        match normalize_field(field).as_str() {
            "item" | "item_name" => Ok(InventoryText::Item),
            "location" => Ok(InventoryText::Location),
            "category" => Ok(InventoryText::Category),
            _ => Err(unknown_field::<Self>(field)),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.item.clone(),
            self.quantity.to_string(),
            self.location.clone(),
            self.category.clone(),
            self.last_updated.to_string(),
            self.cost.to_string(),
        ]
    }
}
