use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The request a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// The user-facing notice for a failed request.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch employees",
            Operation::Get => "Failed to fetch employee",
            Operation::Create => "Failed to create employee",
            Operation::Update => "Failed to update employee",
            Operation::Delete => "Failed to delete employee",
        }
    }

    /// The user-facing notice for a successful mutation. Reads have none.
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Operation::Create => Some("Employee created successfully"),
            Operation::Update => Some("Employee updated successfully"),
            Operation::Delete => Some("Employee deleted successfully"),
            Operation::List | Operation::Get => None,
        }
    }
}

/// A failed backend request.
///
/// Status codes and response bodies are not distinguished; every failure
/// is this one type. `message` keeps the cause chain for logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub operation: Operation,
    pub message: String,
}

impl Error {
    pub fn new(operation: Operation, report: anyhow::Error) -> Self {
        // The alternate Display joins the whole context chain
        Self {
            operation,
            message: format!("{report:#}"),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.operation.failure_message(), self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, anyhow};

    #[test]
    fn display_names_the_operation_and_chain() {
        let report = Err::<(), _>(anyhow!("connection refused"))
            .context("GET /api/employees")
            .unwrap_err();
        let error = Error::new(Operation::List, report);

        assert_eq!(
            error.to_string(),
            "Failed to fetch employees: GET /api/employees: connection refused"
        );
    }

    #[test]
    fn only_mutations_have_success_messages() {
        assert_eq!(Operation::List.success_message(), None);
        assert_eq!(Operation::Get.success_message(), None);
        assert_eq!(
            Operation::Delete.success_message(),
            Some("Employee deleted successfully")
        );
    }
}
