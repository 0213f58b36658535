mod employee;
mod error;
pub mod validation;

pub use employee::{Employee, EmployeeId, EmployeePatch, format_salary};
pub use error::{Error, Operation, Result};
pub use validation::{EmployeeInput, Field, FieldErrors, FormValues};
