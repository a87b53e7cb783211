//! Cleaning product supplies tracked by the supply inventory.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ValidationError;
use crate::inventory::Stocked;
use crate::store::{Record, RecordKey};
use crate::types::{Expiry, Price};
use crate::validation::{self, normalize_field, Form};

use super::{unknown_field, Schema};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyItem {
    pub id: RecordKey,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub supplier: String,
    pub storage_location: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub last_updated: NaiveDate,
    pub expiry: Expiry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplyDraft {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub supplier: String,
    pub storage_location: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub last_updated: NaiveDate,
    pub expiry: Expiry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SupplyPatch {
    Quantity(u32),
    UnitPrice(Price),
    Supplier(String),
    StorageLocation(String),
    LastUpdated(NaiveDate),
    Expiry(Expiry),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyText {
    Name,
    Category,
    Brand,
    Supplier,
    StorageLocation,
}

impl Record for SupplyItem {
    type Draft = SupplyDraft;
    type Patch = SupplyPatch;
    type TextField = SupplyText;

    const KIND: &'static str = "Supply item";

    fn from_draft(key: RecordKey, draft: SupplyDraft) -> Self {
        SupplyItem {
            id: key,
            name: draft.name,
            category: draft.category,
            brand: draft.brand,
            supplier: draft.supplier,
            storage_location: draft.storage_location,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            last_updated: draft.last_updated,
            expiry: draft.expiry,
        }
    }

    fn key(&self) -> RecordKey {
        self.id
    }

    fn apply(&mut self, patch: &SupplyPatch) {
        match patch {
            SupplyPatch::Quantity(quantity) => self.quantity = *quantity,
            SupplyPatch::UnitPrice(price) => self.unit_price = *price,
            SupplyPatch::Supplier(supplier) => self.supplier = supplier.clone(),
            SupplyPatch::StorageLocation(place) => self.storage_location = place.clone(),
            SupplyPatch::LastUpdated(date) => self.last_updated = *date,
            SupplyPatch::Expiry(expiry) => self.expiry = *expiry,
        }
    }

    fn text(&self, field: SupplyText) -> &str {
        match field {
            SupplyText::Name => &self.name,
            SupplyText::Category => &self.category,
            SupplyText::Brand => &self.brand,
            SupplyText::Supplier => &self.supplier,
            SupplyText::StorageLocation => &self.storage_location,
        }
    }
}

impl Stocked for SupplyItem {
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
        self.unit_price
    }
}

impl Schema for SupplyItem {
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Item Name",
        "Category",
        "Brand",
        "Supplier",
        "Storage Location",
        "Quantity",
        "Unit Price",
        "Last Updated",
        "Expiry Date",
    ];

    fn draft_from_form(form: &Form) -> Result<SupplyDraft, ValidationError> {
        Ok(SupplyDraft {
            name: form.text("item_name")?,
            category: form.text("category")?,
            brand: form.text("brand")?,
            supplier: form.text("supplier")?,
            storage_location: form.text("storage_location")?,
            quantity: form.whole("quantity")?,
            unit_price: form.price("unit_price")?,
            last_updated: form.date("last_updated")?,
            expiry: form.expiry("expiry_date")?,
        })
    }

    fn parse_patch(field: &str, raw: &str, date_format: &str) -> Result<SupplyPatch, ValidationError> {
        match normalize_field(field).as_str() {
            "quantity" => validation::non_negative_u32("quantity", raw).map(SupplyPatch::Quantity),
            "unit_price" | "price" => validation::price("unit_price", raw).map(SupplyPatch::UnitPrice),
            "supplier" => validation::required_text("supplier", raw).map(SupplyPatch::Supplier),
            "storage_location" => {
                validation::required_text("storage_location", raw).map(SupplyPatch::StorageLocation)
            }
            "last_updated" => {
                validation::date("last_updated", raw, date_format).map(SupplyPatch::LastUpdated)
            }
            "expiry" | "expiry_date" => {
                validation::expiry("expiry_date", raw, date_format).map(SupplyPatch::Expiry)
            }
            _ => Err(unknown_field::<Self>(field)),
        }
    }

    fn parse_text_field(field: &str) -> Result<SupplyText, ValidationError> {
        match normalize_field(field).as_str() {
            "name" | "item_name" => Ok(SupplyText::Name),
            "category" => Ok(SupplyText::Category),
            "brand" => Ok(SupplyText::Brand),
            "supplier" => Ok(SupplyText::Supplier),
            "storage_location" => Ok(SupplyText::StorageLocation),
            _ => Err(unknown_field::<Self>(field)),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.category.clone(),
            self.brand.clone(),
            self.supplier.clone(),
            self.storage_location.clone(),
            self.quantity.to_string(),
            self.unit_price.to_string(),
            self.last_updated.to_string(),
            self.expiry.to_string(),
        ]
    }
}
