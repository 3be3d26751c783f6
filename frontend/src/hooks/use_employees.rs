use std::rc::Rc;
use yew::prelude::*;
use shared::{CollectionView, Confirmation, Employee, EmployeeId, EmployeeStore};
use crate::services::storage::employee_store;

/// Employee list state: the collection view plus the pending delete prompt
#[derive(Clone, PartialEq)]
pub struct EmployeesState {
    pub view: CollectionView,
    pub delete_prompt: Confirmation<EmployeeId>,
    pub load_error: Option<String>,
    employees_key: String,
}

pub enum EmployeesAction {
    Search(String),
    GoToPage(usize),
    Select(EmployeeId, bool),
    RequestDelete(EmployeeId),
    ConfirmDelete,
    CancelDelete,
}

fn load(key: &str) -> Result<Vec<Employee>, String> {
    employee_store(key).read_all().map_err(|e| e.to_string())
}

impl EmployeesState {
    fn new(employees_key: String, initial_page: usize) -> Self {
        let mut state = Self {
            view: CollectionView::default(),
            delete_prompt: Confirmation::default(),
            load_error: None,
            employees_key,
        };
        state.reload();
        state.view.set_current_page(initial_page);
        state
    }

    fn reload(&mut self) {
        match load(&self.employees_key) {
            Ok(employees) => {
                log::debug!(target: "employee-list", "Loaded {} employees", employees.len());
                self.view.set_records(employees);
                self.load_error = None;
            }
            Err(e) => {
                log::error!(target: "employee-list", "Failed to load employees: {}", e);
                self.view.set_records(Vec::new());
                self.load_error = Some(e);
            }
        }
    }
}

impl Reducible for EmployeesState {
    type Action = EmployeesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            EmployeesAction::Search(text) => next.view.set_query(&text),
            EmployeesAction::GoToPage(page) => next.view.set_current_page(page),
            EmployeesAction::Select(id, selected) => next.view.set_selected(id, selected),
            EmployeesAction::RequestDelete(id) => next.delete_prompt.request(id),
            EmployeesAction::CancelDelete => next.delete_prompt.dismiss(),
            EmployeesAction::ConfirmDelete => {
                if let Some(id) = next.delete_prompt.accept() {
                    match employee_store(&next.employees_key).delete_by_id(id) {
                        Ok(true) => log::info!(target: "employee-list", "Deleted employee {}", id),
                        Ok(false) => log::warn!(target: "employee-list", "Employee {} was already gone", id),
                        Err(e) => log::error!(target: "employee-list", "Failed to delete employee {}: {}", id, e),
                    }
                    next.reload();
                }
            }
        }

        Rc::new(next)
    }
}

pub struct UseEmployeesResult {
    pub state: UseReducerHandle<EmployeesState>,
    pub actions: UseEmployeesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseEmployeesActions {
    pub search: Callback<String>,
    pub go_to_page: Callback<usize>,
    pub select: Callback<(EmployeeId, bool)>,
    pub request_delete: Callback<EmployeeId>,
    pub confirm_delete: Callback<()>,
    pub cancel_delete: Callback<()>,
}

/// Loads the stored employees and exposes search, paging, selection and delete
#[hook]
pub fn use_employees(employees_key: &str, initial_page: usize) -> UseEmployeesResult {
    let state = {
        let employees_key = employees_key.to_string();
        use_reducer(move || EmployeesState::new(employees_key, initial_page))
    };

    let dispatcher = state.dispatcher();
    let actions = UseEmployeesActions {
        search: {
            let dispatcher = dispatcher.clone();
            Callback::from(move |text: String| dispatcher.dispatch(EmployeesAction::Search(text)))
        },
        go_to_page: {
            let dispatcher = dispatcher.clone();
            Callback::from(move |page: usize| dispatcher.dispatch(EmployeesAction::GoToPage(page)))
        },
        select: {
            let dispatcher = dispatcher.clone();
            Callback::from(move |(id, selected): (EmployeeId, bool)| dispatcher.dispatch(EmployeesAction::Select(id, selected)))
        },
        request_delete: {
            let dispatcher = dispatcher.clone();
            Callback::from(move |id: EmployeeId| dispatcher.dispatch(EmployeesAction::RequestDelete(id)))
        },
        confirm_delete: {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_: ()| dispatcher.dispatch(EmployeesAction::ConfirmDelete))
        },
        cancel_delete: Callback::from(move |_: ()| dispatcher.dispatch(EmployeesAction::CancelDelete)),
    };

    UseEmployeesResult { state, actions }
}
