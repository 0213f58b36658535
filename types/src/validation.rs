//! The employee form schema.
//!
//! Raw form text goes in as [`FormValues`]; the only way to obtain an
//! [`EmployeeInput`] is [`FormValues::validate`], so anything typed as
//! `EmployeeInput` has passed every rule below.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use validator::Validate;

use crate::Employee;

pub const SALARY_NOT_A_NUMBER: &str = "Salary must be a number";

/// A dotted domain ending in an alphabetic TLD, and a local part with no
/// leading, trailing or doubled dots.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[A-Z0-9_'+\-]+\.)*[A-Z0-9_'+\-]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$",
    )
    .expect("Invalid email regex")
});

/// A validated employee, ready to be sent as a create body.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct EmployeeInput {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    name: String,
    #[validate(regex(path = *EMAIL_RE, message = "Please enter a valid email address."))]
    email: String,
    #[validate(length(min = 2, message = "Position is required."))]
    position: String,
    #[validate(length(min = 2, message = "Department is required."))]
    department: String,
    #[validate(range(min = 0.0, message = "Salary must be a positive number"))]
    salary: f64,
}

impl EmployeeInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Position,
    Department,
    Salary,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Position,
        Field::Department,
        Field::Salary,
    ];

    /// Matches the field name on [`EmployeeInput`] and on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Position => "position",
            Field::Department => "department",
            Field::Salary => "salary",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Position => "Position",
            Field::Department => "Department",
            Field::Salary => "Salary",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Position => "Software Engineer",
            Field::Department => "Engineering",
            Field::Salary => "50000",
        }
    }

    /// Email stays a plain text input so the schema, not the browser,
    /// decides what a valid address is.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Salary => "number",
            _ => "text",
        }
    }
}

/// Form text exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            position: String::new(),
            department: String::new(),
            salary: "0".to_string(),
        }
    }
}

impl FormValues {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Position => &self.position,
            Field::Department => &self.department,
            Field::Salary => &self.salary,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Position => &mut self.position,
            Field::Department => &mut self.department,
            Field::Salary => &mut self.salary,
        };
        *slot = value.into();
    }

    pub fn validate(&self) -> Result<EmployeeInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let salary = coerce_salary(&self.salary).unwrap_or_else(|| {
            errors.insert(Field::Salary, SALARY_NOT_A_NUMBER);
            0.0
        });

        let input = EmployeeInput {
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            salary,
        };

        if let Err(report) = input.validate() {
            for (key, failures) in report.field_errors() {
                let (Some(field), Some(first)) = (Field::from_key(&key), failures.first()) else {
                    continue;
                };
                if errors.get(field).is_none() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| first.code.to_string());
                    errors.insert(field, message);
                }
            }
        }

        if errors.is_empty() {
            Ok(input)
        } else {
            Err(errors)
        }
    }
}

/// The first violation per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Numeric coercion for salary text. Blank text counts as zero.
pub(crate) fn coerce_salary(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
