//! Employee records.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ValidationError;
use crate::store::{Record, RecordKey};
use crate::types::{choice_enum, Choice};
use crate::validation::{self, normalize_field, Form};

use super::{unknown_field, Schema};

choice_enum! {
    /// Job role of an employee.
    Role, field = "role" {
        Cleaner => "Cleaner",
        Supervisor => "Supervisor",
    }
}

choice_enum! {
    /// Employment status.
    EmployeeStatus, field = "status" {
        Active => "Active",
        Inactive => "Inactive",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: RecordKey,
    pub name: String,
    pub role: Role,
    pub contact: String,
    pub status: EmployeeStatus,
    pub hire_date: NaiveDate,
    pub salary: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub role: Role,
    pub contact: String,
    pub status: EmployeeStatus,
    pub hire_date: NaiveDate,
    pub salary: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmployeePatch {
    Name(String),
    Role(Role),
    Contact(String),
    Status(EmployeeStatus),
    Salary(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeText {
    Name,
    Contact,
    Role,
    Status,
}

impl Record for Employee {
    type Draft = EmployeeDraft;
    type Patch = EmployeePatch;
    type TextField = EmployeeText;

    const KIND: &'static str = "Employee";

    fn from_draft(key: RecordKey, draft: EmployeeDraft) -> Self {
        Employee {
            id: key,
            name: draft.name,
            role: draft.role,
            contact: draft.contact,
            status: draft.status,
            hire_date: draft.hire_date,
            salary: draft.salary,
        }
    }

    fn key(&self) -> RecordKey {
        self.id
    }

    fn apply(&mut self, patch: &EmployeePatch) {
        match patch {
            EmployeePatch::Name(name) => self.name = name.clone(),
            EmployeePatch::Role(role) => self.role = *role,
            EmployeePatch::Contact(contact) => self.contact = contact.clone(),
            EmployeePatch::Status(status) => self.status = *status,
            EmployeePatch::Salary(salary) => self.salary = *salary,
        }
    }

    fn text(&self, field: EmployeeText) -> &str {
        match field {
            EmployeeText::Name => &self.name,
            EmployeeText::Contact => &self.contact,
            EmployeeText::Role => self.role.label(),
            EmployeeText::Status => self.status.label(),
        }
    }
}

impl Schema for Employee {
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Role",
        "Contact",
        "Status",
        "Hire Date",
        "Salary",
    ];

    fn draft_from_form(form: &Form) -> Result<EmployeeDraft, ValidationError> {
        Ok(EmployeeDraft {
            name: form.text("name")?,
            role: form.choice()?,
            contact: form.text("contact")?,
            status: form.choice()?,
            hire_date: form.date("hire_date")?,
            salary: form.whole("salary")?,
        })
    }

    fn parse_patch(field: &str, raw: &str, _date_format: &str) -> Result<EmployeePatch, ValidationError> {
        match normalize_field(field).as_str() {
            "name" => validation::required_text("name", raw).map(EmployeePatch::Name),
            "role" => validation::choice(raw).map(EmployeePatch::Role),
            "contact" => validation::required_text("contact", raw).map(EmployeePatch::Contact),
            "status" => validation::choice(raw).map(EmployeePatch::Status),
            "salary" => validation::non_negative_u32("salary", raw).map(EmployeePatch::Salary),
            _ => Err(unknown_field::<Self>(field)),
        }
    }

    fn parse_text_field(field: &str) -> Result<EmployeeText, ValidationError> {
        match normalize_field(field).as_str() {
            "name" => Ok(EmployeeText::Name),
            "contact" => Ok(EmployeeText::Contact),
            "role" => Ok(EmployeeText::Role),
            "status" => Ok(EmployeeText::Status),
            _ => Err(unknown_field::<Self>(field)),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.role.to_string(),
            self.contact.clone(),
            self.status.to_string(),
            self.hire_date.to_string(),
            self.salary.to_string(),
        ]
    }
}
