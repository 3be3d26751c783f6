use std::rc::Rc;
use yew::prelude::*;
use shared::{EmployeeField, EmployeeForm, EmployeeId, FormError};
use crate::services::storage::employee_store;

#[derive(Clone, PartialEq)]
pub struct EmployeeFormState {
    pub form: EmployeeForm,
    /// Message for a save that did not go through
    pub save_error: Option<String>,
    employees_key: String,
}

pub enum EmployeeFormAction {
    SetField(EmployeeField, String),
    Submit,
    Confirm,
    Decline,
}

impl EmployeeFormState {
    fn open(employees_key: String, target: Option<EmployeeId>) -> Self {
        let form = EmployeeForm::open(&employee_store(&employees_key), target).unwrap_or_else(|e| {
            log::error!(target: "employee-form", "Failed to load employee: {}", e);
            EmployeeForm::create()
        });

        Self {
            form,
            save_error: None,
            employees_key,
        }
    }
}

impl Reducible for EmployeeFormState {
    type Action = EmployeeFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            EmployeeFormAction::SetField(field, value) => next.form.set_field(field, value),
            EmployeeFormAction::Submit => {
                next.save_error = None;
                next.form.submit();
            }
            EmployeeFormAction::Decline => next.form.decline(),
            EmployeeFormAction::Confirm => {
                match next.form.confirm(&employee_store(&next.employees_key)) {
                    Ok(id) => log::info!(target: "employee-form", "Employee {} saved", id),
                    Err(FormError::NotAwaitingConfirmation) => {
                        log::debug!(target: "employee-form", "Ignoring confirmation outside the modal");
                    }
                    Err(e) => {
                        log::error!(target: "employee-form", "Failed to save employee: {}", e);
                        next.save_error = Some(e.to_string());
                    }
                }
            }
        }

        Rc::new(next)
    }
}

pub struct UseEmployeeFormResult {
    pub state: UseReducerHandle<EmployeeFormState>,
    pub actions: UseEmployeeFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseEmployeeFormActions {
    pub set_field: Callback<(EmployeeField, String)>,
    pub submit: Callback<()>,
    pub confirm: Callback<()>,
    pub decline: Callback<()>,
}

/// Create/edit form for `target` (a blank form when `None`)
#[hook]
pub fn use_employee_form(employees_key: &str, target: Option<EmployeeId>) -> UseEmployeeFormResult {
    let state = {
        let employees_key = employees_key.to_string();
        use_reducer(move || EmployeeFormState::open(employees_key, target))
    };

    let dispatcher = state.dispatcher();
    let actions = UseEmployeeFormActions {
        set_field: {
            let dispatcher = dispatcher.clone();
            Callback::from(move |(field, value): (EmployeeField, String)| {
                dispatcher.dispatch(EmployeeFormAction::SetField(field, value))
            })
        },
        submit: {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_: ()| dispatcher.dispatch(EmployeeFormAction::Submit))
        },
        confirm: {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_: ()| dispatcher.dispatch(EmployeeFormAction::Confirm))
        },
        decline: Callback::from(move |_: ()| dispatcher.dispatch(EmployeeFormAction::Decline)),
    };

    UseEmployeeFormResult { state, actions }
}
