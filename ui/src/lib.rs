//! Platform-independent pieces of the employee dashboard.

mod dashboard;
mod form;
mod notice;

pub use dashboard::{
    DashboardState, DashboardStore, Dialog, Mutation, confirm_delete, filter_employees, refresh,
    submit,
};
pub use form::{EmployeeForm, EmployeeFormState};
pub use notice::{Notice, NoticeKind, Notices};
