//! Client locations serviced by the business.

use serde::Serialize;

use crate::error::ValidationError;
use crate::store::{Record, RecordKey};
use crate::types::{choice_enum, Choice};
use crate::validation::{self, normalize_field, Form};

use super::{unknown_field, Schema};

choice_enum! {
    /// Whether a location is currently serviced.
    LocationStatus, field = "status" {
        Operational => "Operational",
        Closed => "Closed",
    }
}

choice_enum! {
    /// Kind of premises.
    LocationKind, field = "type" {
        Office => "Office",
        Residential => "Residential",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: RecordKey,
    pub name: String,
    pub address: String,
    pub status: LocationStatus,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub square_footage: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationDraft {
    pub name: String,
    pub address: String,
    pub status: LocationStatus,
    pub kind: LocationKind,
    pub square_footage: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationPatch {
    Name(String),
    Address(String),
    Status(LocationStatus),
    Kind(LocationKind),
    SquareFootage(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationText {
    Name,
    Address,
    Status,
    Kind,
}

impl Record for Location {
    type Draft = LocationDraft;
    type Patch = LocationPatch;
    type TextField = LocationText;

    const KIND: &'static str = "Location";

    fn from_draft(key: RecordKey, draft: LocationDraft) -> Self {
        Location {
            id: key,
            name: draft.name,
            address: draft.address,
            status: draft.status,
            kind: draft.kind,
            square_footage: draft.square_footage,
        }
    }

    fn key(&self) -> RecordKey {
        self.id
    }

    fn apply(&mut self, patch: &LocationPatch) {
        match patch {
            LocationPatch::Name(name) => self.name = name.clone(),
            LocationPatch::Address(address) => self.address = address.clone(),
            LocationPatch::Status(status) => self.status = *status,
            LocationPatch::Kind(kind) => self.kind = *kind,
            LocationPatch::SquareFootage(area) => self.square_footage = *area,
        }
    }

    fn text(&self, field: LocationText) -> &str {
        match field {
            LocationText::Name => &self.name,
            LocationText::Address => &self.address,
            LocationText::Status => self.status.label(),
            LocationText::Kind => self.kind.label(),
        }
    }
}

impl Schema for Location {
    const COLUMNS: &'static [&'static str] =
        &["ID", "Name", "Address", "Status", "Type", "Square Footage"];

    fn draft_from_form(form: &Form) -> Result<LocationDraft, ValidationError> {
        Ok(LocationDraft {
            name: form.text("name")?,
            address: form.text("address")?,
            status: form.choice()?,
            kind: form.choice()?,
            square_footage: form.whole("square_footage")?,
        })
    }

    fn parse_patch(field: &str, raw: &str, _date_format: &str) -> Result<LocationPatch, ValidationError> {
        match normalize_field(field).as_str() {
            "name" => validation::required_text("name", raw).map(LocationPatch::Name),
            "address" => validation::required_text("address", raw).map(LocationPatch::Address),
            "status" => validation::choice(raw).map(LocationPatch::Status),
            "type" => validation::choice(raw).map(LocationPatch::Kind),
            "square_footage" => {
                validation::non_negative_u32("square_footage", raw).map(LocationPatch::SquareFootage)
            }
            _ => Err(unknown_field::<Self>(field)),
        }
    }

    fn parse_text_field(field: &str) -> Result<LocationText, ValidationError> {
        match normalize_field(field).as_str() {
            "name" => Ok(LocationText::Name),
            "address" => Ok(LocationText::Address),
            "status" => Ok(LocationText::Status),
            "type" => Ok(LocationText::Kind),
            _ => Err(unknown_field::<Self>(field)),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.address.clone(),
            self.status.to_string(),
            self.kind.to_string(),
            self.square_footage.to_string(),
        ]
    }
}
