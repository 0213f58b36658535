mod client;
mod config;

pub use client::EmployeeClient;
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use types::{Employee, EmployeeId, EmployeeInput, EmployeePatch, Error, Operation, Result};

/// The five employee operations the dashboard depends on.
///
/// [`EmployeeClient`] talks to the REST backend; tests substitute an
/// in-memory implementation. Futures are not required to be `Send` since
/// everything runs on the UI thread.
#[allow(async_fn_in_trait)]
pub trait EmployeeApi {
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee>;

    /// The backend assigns the id and returns the stored record.
    async fn create_employee(&self, employee: &EmployeeInput) -> Result<Employee>;

    async fn update_employee(&self, id: &EmployeeId, patch: &EmployeePatch) -> Result<Employee>;

    async fn delete_employee(&self, id: &EmployeeId) -> Result<()>;
}
