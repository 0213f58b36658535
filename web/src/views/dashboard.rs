use api::EmployeeClient;
use dioxus::prelude::*;
use types::{Employee, EmployeeInput};
use ui::{DashboardState, Dialog, EmployeeForm};

use super::toaster::Toaster;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let client = use_context::<EmployeeClient>();
    let mut state = use_signal(DashboardState::new);

    // Fetch employees on mount
    let fetch_client = client.clone();
    use_effect(move || {
        let client = fetch_client.clone();
        spawn(async move {
            ui::refresh(&mut state, &client).await;
        });
    });

    let submit_client = client.clone();
    let delete_client = client;

    let (rows, loading, submitting, deleting, search, dialog, pending, notices) = {
        let s = state.read();
        (
            s.visible_employees().into_iter().cloned().collect::<Vec<_>>(),
            s.is_loading(),
            s.is_submitting(),
            s.is_deleting(),
            s.search().to_string(),
            s.dialog().clone(),
            s.pending_delete().cloned(),
            s.notices().clone(),
        )
    };

    rsx! {
        div { class: "dashboard",
            nav { class: "landing-nav",
                Link { to: Route::Landing {}, class: "landing-brand", "EmpManage" }
            }

            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Employee Dashboard" }
                    p { class: "page-subtitle", "Manage your team members and their roles." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-light",
                        onclick: move |_| state.write().open_create(),
                        "+ Add Employee"
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Overview" }
                    input {
                        class: "form-input search-input",
                        r#type: "search",
                        placeholder: "Search employees...",
                        value: "{search}",
                        oninput: move |e| state.write().set_search(e.value()),
                    }
                }

                if loading {
                    div { class: "loading", "Loading employees..." }
                } else {
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Position" }
                                    th { "Department" }
                                    th { "Salary" }
                                    th { "Hired" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                if rows.is_empty() {
                                    tr {
                                        td { class: "table-empty", colspan: "7", "No employees found." }
                                    }
                                }
                                for (i, employee) in rows.into_iter().enumerate() {
                                    {
                                        let key = row_key(i, &employee);
                                        rsx! {
                                            EmployeeRow {
                                                key: "{key}",
                                                employee,
                                                on_edit: move |employee| state.write().open_edit(employee),
                                                on_delete: move |employee| state.write().request_delete(employee),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if dialog.is_open() {
                EmployeeDialog {
                    dialog,
                    submitting,
                    on_close: move |_| state.write().close_dialog(),
                    on_submit: move |input| {
                        let client = submit_client.clone();
                        spawn(async move {
                            ui::submit(&mut state, &client, input).await;
                        });
                    },
                }
            }

            if let Some(employee) = pending {
                DeleteConfirmModal {
                    employee_name: employee.name,
                    deleting,
                    on_close: move |_| state.write().cancel_delete(),
                    on_confirm: move |_| {
                        let client = delete_client.clone();
                        spawn(async move {
                            ui::confirm_delete(&mut state, &client).await;
                        });
                    },
                }
            }

            Toaster {
                notices,
                on_dismiss: move |id| state.write().dismiss_notice(id),
            }
        }
    }
}

fn row_key(index: usize, employee: &Employee) -> String {
    match &employee.id {
        Some(id) => id.to_string(),
        None => format!("row-{index}"),
    }
}

#[component]
fn EmployeeRow(
    employee: Employee,
    on_edit: EventHandler<Employee>,
    on_delete: EventHandler<Employee>,
) -> Element {
    let salary = employee.salary_display();
    let hired = employee.hire_date_display();
    let edit = employee.clone();
    let remove = employee.clone();

    rsx! {
        tr {
            td { class: "cell-strong", "{employee.name}" }
            td { class: "text-muted", "{employee.email}" }
            td {
                span { class: "pill", "{employee.position}" }
            }
            td { "{employee.department}" }
            td { "{salary}" }
            td { class: "text-muted", "{hired}" }
            td { class: "text-right",
                div { class: "row-actions",
                    button {
                        class: "btn btn-icon",
                        title: "Edit",
                        onclick: move |_| on_edit.call(edit.clone()),
                        "✎"
                    }
                    button {
                        class: "btn btn-icon btn-icon-danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(remove.clone()),
                        "🗑"
                    }
                }
            }
        }
    }
}

#[component]
fn EmployeeDialog(
    dialog: Dialog,
    submitting: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<EmployeeInput>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    div {
                        h2 { class: "modal-title", "{dialog.title()}" }
                        p { class: "text-muted text-sm", "{dialog.description()}" }
                    }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    EmployeeForm {
                        prefill: dialog.prefill().cloned(),
                        on_submit,
                        submitting,
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteConfirmModal(
    employee_name: String,
    deleting: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !deleting { on_close.call(()) },
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Delete Employee" }
                    if !deleting {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body",
                    p { "Are you sure you want to delete " strong { "{employee_name}" } "?" }
                    p { class: "text-muted", "This action cannot be undone." }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: deleting,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: deleting,
                        onclick: move |_| on_confirm.call(()),
                        if deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
