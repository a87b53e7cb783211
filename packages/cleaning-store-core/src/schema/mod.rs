//! Record schemas held by the stores.
//!
//! Each schema declares its record shape, the draft of non-key fields used
//! for inserts, the patches allowed on updates, and the text fields that can
//! be searched.

mod checklist;
mod employee;
mod inventory_item;
mod location;
mod supply_item;

pub use checklist::Checklist;
pub use employee::{Employee, EmployeeDraft, EmployeePatch, EmployeeStatus, EmployeeText, Role};
pub use inventory_item::{InventoryDraft, InventoryItem, InventoryPatch, InventoryText};
pub use location::{Location, LocationDraft, LocationKind, LocationPatch, LocationStatus, LocationText};
pub use supply_item::{SupplyDraft, SupplyItem, SupplyPatch, SupplyText};

use crate::error::ValidationError;
use crate::store::Record;
use crate::validation::{normalize_field, Form};

/// Record schema that can be driven from raw form input.
pub trait Schema: Record {
    /// Column headers in display order, identity key first.
    const COLUMNS: &'static [&'static str];

    /// Validates a complete set of non-key fields.
    fn draft_from_form(form: &Form) -> Result<Self::Draft, ValidationError>;

    /// Validates one field update.
    fn parse_patch(field: &str, raw: &str, date_format: &str) -> Result<Self::Patch, ValidationError>;

    /// Resolves a searchable text field by name.
    fn parse_text_field(field: &str) -> Result<Self::TextField, ValidationError>;

    /// Cell values in the order of [`Schema::COLUMNS`].
    fn row(&self) -> Vec<String>;

    /// Validates every submitted field as an update.
    ///
    /// Fails on the first invalid field so that no partial update is applied.
    fn patches_from_form(form: &Form) -> Result<Vec<Self::Patch>, ValidationError> {
        form.fields()
            .map(|(field, raw)| Self::parse_patch(field, raw, form.date_format()))
            .collect()
    }
}

pub(crate) fn unknown_field<R: Record>(field: &str) -> ValidationError {
    ValidationError::UnknownField {
        kind: R::KIND,
        field: normalize_field(field),
    }
}
