//! Employee records as they travel to and from the collection resource.
//!
//! # Design
//! `Employee` is what the server hands back and always carries an `id`.
//! `EmployeeFields` is the same record without one; it is the only payload
//! the create and update requests accept, so a create body can never carry
//! an `id`. `EmployeeForm` is the raw text a user typed, before trimming and
//! integer coercion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned identifier of an employee record.
pub type EmployeeId = i64;

/// An employee record returned by the collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub role: String,
    pub employee_number: i64,
    pub organisation: String,
}

impl Employee {
    /// The record minus its identifier, e.g. to prefill an update form.
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            title: self.title.clone(),
            role: self.role.clone(),
            employee_number: self.employee_number,
            organisation: self.organisation.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Request payload for creating or replacing an employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub role: String,
    pub employee_number: i64,
    pub organisation: String,
}

/// Success body of every mutation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(rename = "Message")]
    pub message: String,
}

/// A client-side form rejection. Names the first field that failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("employee number must be a whole number, got {0:?}")]
    NotANumber(String),
}

/// Form input exactly as typed. Every field is text until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub role: String,
    pub employee_number: String,
    pub organisation: String,
}

impl EmployeeForm {
    /// Prefill a form from an existing record.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            title: employee.title.clone(),
            role: employee.role.clone(),
            employee_number: employee.employee_number.to_string(),
            organisation: employee.organisation.clone(),
        }
    }

    /// Trim every field, require all of them, and coerce the employee
    /// number to an integer. Fields are checked in form order.
    pub fn validate(&self) -> Result<EmployeeFields, FieldError> {
        let first_name = required("first name", &self.first_name)?;
        let last_name = required("last name", &self.last_name)?;
        let email = required("email", &self.email)?;
        let title = required("title", &self.title)?;
        let role = required("role", &self.role)?;
        let number = required("employee number", &self.employee_number)?;
        let employee_number = number
            .parse::<i64>()
            .map_err(|_| FieldError::NotANumber(number.clone()))?;
        let organisation = required("organisation", &self.organisation)?;

        Ok(EmployeeFields {
            first_name,
            last_name,
            email,
            title,
            role,
            employee_number,
            organisation,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Missing(field));
    }
    Ok(value.to_string())
}
