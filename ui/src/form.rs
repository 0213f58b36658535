use dioxus::prelude::*;
use types::{Employee, EmployeeInput, Field, FieldErrors, FormValues};

/// Values and validation messages behind [`EmployeeForm`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFormState {
    values: FormValues,
    errors: FieldErrors,
}

impl EmployeeFormState {
    /// Edit mode copies every field from `prefill`; create mode starts blank.
    pub fn new(prefill: Option<&Employee>) -> Self {
        Self {
            values: prefill.map(FormValues::from_employee).unwrap_or_default(),
            errors: FieldErrors::default(),
        }
    }

    pub fn reset(&mut self, prefill: Option<&Employee>) {
        *self = Self::new(prefill);
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.remove(field);
    }

    /// Returns the validated input, or records why it was rejected.
    pub fn submit(&mut self) -> Option<EmployeeInput> {
        match self.values.validate() {
            Ok(input) => {
                self.errors = FieldErrors::default();
                Some(input)
            }
            Err(errors) => {
                tracing::debug!(invalid = errors.len(), "employee form rejected");
                self.errors = errors;
                None
            }
        }
    }
}

/// Shared create/edit form. It validates and hands the result to
/// `on_submit`; it never talks to the backend itself.
#[component]
pub fn EmployeeForm(
    #[props(!optional)] prefill: Option<Employee>,
    on_submit: EventHandler<EmployeeInput>,
    #[props(default)] submitting: bool,
) -> Element {
    let mut form = use_signal(|| EmployeeFormState::new(prefill.as_ref()));
    let mut prev_prefill = use_signal(|| prefill.clone());

    // Reset everything when the caller switches records
    if *prev_prefill.read() != prefill {
        prev_prefill.set(prefill.clone());
        form.write().reset(prefill.as_ref());
    }

    rsx! {
        form {
            class: "employee-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                submit_form(&mut form.write(), |input| on_submit.call(input));
            },
            FormField { field: Field::Name, form }
            FormField { field: Field::Email, form }
            div { class: "form-row",
                FormField { field: Field::Position, form }
                FormField { field: Field::Department, form }
            }
            FormField { field: Field::Salary, form }
            button {
                r#type: "submit",
                class: "btn btn-primary btn-block",
                disabled: submitting,
                if submitting { "Saving..." } else { "Save Employee" }
            }
        }
    }
}

/// Hands the validated input to `on_submit`; a rejected form never reaches it.
fn submit_form(form: &mut EmployeeFormState, on_submit: impl FnOnce(EmployeeInput)) -> bool {
    match form.submit() {
        Some(input) => {
            on_submit(input);
            true
        }
        None => false,
    }
}

#[component]
fn FormField(field: Field, form: Signal<EmployeeFormState>) -> Element {
    let mut form = form;
    let id = field.key();
    let value = form.read().value(field).to_string();
    let error = form.read().error(field).map(str::to_string);

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: id, "{field.label()}" }
            input {
                id: id,
                class: if error.is_some() { "form-input form-input-invalid" } else { "form-input" },
                r#type: field.input_type(),
                placeholder: field.placeholder(),
                value: "{value}",
                oninput: move |e| form.write().set(field, e.value()),
            }
            if let Some(error) = &error {
                p { class: "form-error", "{error}" }
            }
        }
    }
}
