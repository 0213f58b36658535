//! Dashboard state and the fetch → mutate → refetch loop.
//!
//! [`DashboardState`] only knows about transitions. The async drivers at
//! the bottom of this module sequence those transitions around backend
//! calls, so the same loop runs against a Dioxus signal in the app and
//! against a plain value in tests.

use api::EmployeeApi;
use dioxus::prelude::*;
use types::{Employee, EmployeeId, EmployeeInput, EmployeePatch, Operation, Result};

use crate::notice::Notices;

/// Which dialog is showing, and for which record.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dialog {
    #[default]
    Closed,
    Creating,
    Editing(Employee),
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    pub fn prefill(&self) -> Option<&Employee> {
        match self {
            Dialog::Editing(employee) => Some(employee),
            Dialog::Creating | Dialog::Closed => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Editing(_) => "Edit Employee",
            Dialog::Creating | Dialog::Closed => "Add New Employee",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Dialog::Editing(_) => "Make changes to the employee profile here.",
            Dialog::Creating | Dialog::Closed => "Enter the details for the new employee.",
        }
    }
}

/// A submitted dialog, resolved to the request it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(EmployeeInput),
    Update(EmployeeId, EmployeePatch),
}

impl Mutation {
    pub fn operation(&self) -> Operation {
        match self {
            Mutation::Create(_) => Operation::Create,
            Mutation::Update(..) => Operation::Update,
        }
    }

    pub async fn run(&self, api: &impl EmployeeApi) -> Result<Employee> {
        match self {
            Mutation::Create(input) => api.create_employee(input).await,
            Mutation::Update(id, patch) => api.update_employee(id, patch).await,
        }
    }
}

/// Records whose name, department or position contains `term`, ignoring case.
pub fn filter_employees<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let needle = term.to_lowercase();
    employees
        .iter()
        .filter(|employee| {
            [&employee.name, &employee.department, &employee.position]
                .iter()
                .any(|haystack| haystack.to_lowercase().contains(&needle))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    employees: Vec<Employee>,
    loading: bool,
    submitting: bool,
    search: String,
    dialog: Dialog,
    pending_delete: Option<Employee>,
    deleting: bool,
    notices: Notices,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// The first list fetch starts on mount, so a new dashboard is loading.
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            loading: true,
            submitting: false,
            search: String::new(),
            dialog: Dialog::Closed,
            pending_delete: None,
            deleting: false,
            notices: Notices::default(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Recomputed on every call; the fetched list is never filtered in place.
    pub fn visible_employees(&self) -> Vec<&Employee> {
        filter_employees(&self.employees, &self.search)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn open_create(&mut self) {
        self.dialog = Dialog::Creating;
    }

    pub fn open_edit(&mut self, employee: Employee) {
        self.dialog = Dialog::Editing(employee);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    pub fn pending_delete(&self) -> Option<&Employee> {
        self.pending_delete.as_ref()
    }

    pub fn request_delete(&mut self, employee: Employee) {
        self.pending_delete = Some(employee);
    }

    /// Declining the confirmation leaves everything else untouched.
    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.dismiss(id);
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Employee>>) {
        match result {
            Ok(employees) => self.employees = employees,
            Err(e) => {
                self.notices.error(e.operation.failure_message());
            }
        }
        self.loading = false;
    }

    /// Editing a record without an id cannot be sent anywhere and yields nothing.
    pub fn begin_submit(&mut self, input: EmployeeInput) -> Option<Mutation> {
        let mutation = match &self.dialog {
            Dialog::Editing(employee) => {
                let Some(id) = employee.id.clone() else {
                    tracing::warn!(name = %employee.name, "edited employee has no id");
                    return None;
                };
                Mutation::Update(id, input.into())
            }
            Dialog::Creating | Dialog::Closed => Mutation::Create(input),
        };

        self.submitting = true;
        Some(mutation)
    }

    /// Returns whether the list should be fetched again.
    pub fn finish_submit(&mut self, operation: Operation, result: Result<Employee>) -> bool {
        self.submitting = false;
        match result {
            Ok(_) => {
                if let Some(message) = operation.success_message() {
                    self.notices.success(message);
                }
                self.dialog = Dialog::Closed;
                true
            }
            Err(e) => {
                self.notices.error(e.operation.failure_message());
                false
            }
        }
    }

    pub fn begin_delete(&mut self) -> Option<EmployeeId> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.as_ref()?.id.clone();
        if id.is_none() {
            self.pending_delete = None;
        }
        self.deleting = id.is_some();
        id
    }

    /// Returns whether the list should be fetched again.
    pub fn finish_delete(&mut self, result: Result<()>) -> bool {
        self.deleting = false;
        self.pending_delete = None;
        match result {
            Ok(()) => {
                if let Some(message) = Operation::Delete.success_message() {
                    self.notices.success(message);
                }
                true
            }
            Err(e) => {
                self.notices.error(e.operation.failure_message());
                false
            }
        }
    }
}

/// Somewhere a [`DashboardState`] lives between awaits.
pub trait DashboardStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
}

impl DashboardStore for DashboardState {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(self)
    }
}

impl DashboardStore for Signal<DashboardState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }
}

/// Replaces the list with whatever the backend has now.
pub async fn refresh(store: &mut impl DashboardStore, api: &impl EmployeeApi) {
    let result = api.list_employees().await;
    store.update(|state| state.finish_fetch(result));
}

/// Creates or updates depending on the open dialog, then refetches on success.
///
/// Nothing is cancelled if the dialog closes meanwhile; the outcome is still
/// reported and the list still refreshed.
pub async fn submit(store: &mut impl DashboardStore, api: &impl EmployeeApi, input: EmployeeInput) {
    let Some(mutation) = store.update(|state| state.begin_submit(input)) else {
        return;
    };

    let result = mutation.run(api).await;
    if store.update(|state| state.finish_submit(mutation.operation(), result)) {
        refresh(store, api).await;
    }
}

/// Deletes the record awaiting confirmation, then refetches on success.
pub async fn confirm_delete(store: &mut impl DashboardStore, api: &impl EmployeeApi) {
    let Some(id) = store.update(DashboardState::begin_delete) else {
        return;
    };

    let result = api.delete_employee(&id).await;
    if store.update(|state| state.finish_delete(result)) {
        refresh(store, api).await;
    }
}
