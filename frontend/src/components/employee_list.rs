use yew::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};
use shared::{DirectoryConfig, Employee, EmployeeId, Layout, MessageKey, Route, ViewMode};
use super::confirm_modal::ConfirmModal;
use super::pagination::Pagination;
use crate::hooks::use_employees::{use_employees, UseEmployeesActions};
use crate::hooks::use_language::{use_language, LanguageContext};
use crate::services::navigation;

#[derive(Properties, PartialEq)]
pub struct EmployeeListProps {
    pub page: usize,
    pub view_mode: ViewMode,
    pub config: DirectoryConfig,
}

/// Stored department/position values shown in the active language when known
fn translated_value(language: &LanguageContext, key: Option<MessageKey>, raw: &str) -> String {
    key.map(|key| language.t(key).to_string()).unwrap_or_else(|| raw.to_string())
}

fn row_actions(
    employee: &Employee,
    current_page: usize,
    view_mode: ViewMode,
    language: &LanguageContext,
    actions: &UseEmployeesActions,
) -> Html {
    let Some(id) = employee.id else {
        return html! {};
    };

    let on_edit = Callback::from(move |_: MouseEvent| {
        navigation::navigate(&Route::Edit {
            id,
            page: current_page,
            view_mode,
        });
    });

    let on_delete = {
        let request_delete = actions.request_delete.clone();
        Callback::from(move |_: MouseEvent| request_delete.emit(id))
    };

    html! {
        <div class="row-actions">
            <button type="button" class="edit-btn" title={language.t(MessageKey::Edit)} onclick={on_edit}>{"✎"}</button>
            <button type="button" class="delete-btn" title={language.t(MessageKey::Delete)} onclick={on_delete}>{"🗑"}</button>
        </div>
    }
}

#[function_component(EmployeeList)]
pub fn employee_list(props: &EmployeeListProps) -> Html {
    let language = use_language();
    let employees = use_employees(&props.config.employees_key, props.page);
    let state = &employees.state;
    let actions = employees.actions.clone();

    let view_mode = props.view_mode;
    let page_size = props.config.page_size(view_mode);
    let current_page = state.view.current_page();
    let rows = state.view.current_rows(page_size);

    let on_search = {
        let search = actions.search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.emit(input.value());
            navigation::push_route(&Route::List { page: 1, view_mode });
        })
    };

    let on_page_change = {
        let go_to_page = actions.go_to_page.clone();
        Callback::from(move |page: usize| {
            go_to_page.emit(page);
            navigation::push_route(&Route::List { page, view_mode });
        })
    };

    let view_mode_button = |mode: ViewMode, label: MessageKey| {
        let on_click = Callback::from(move |_: MouseEvent| {
            if mode != view_mode {
                navigation::navigate(&Route::List {
                    page: current_page,
                    view_mode: mode,
                });
            }
        });
        html! {
            <button
                type="button"
                class={classes!((mode == view_mode).then_some("active"))}
                onclick={on_click}
            >
                {language.t(label)}
            </button>
        }
    };

    let body = if rows.is_empty() {
        html! { <div class="empty-state">{language.t(MessageKey::NoResults)}</div> }
    } else {
        match view_mode.layout() {
            Layout::Rows => html! {
                <div class="table-container">
                    <table class="employees-table">
                        <thead>
                            <tr>
                                <th></th>
                                <th>{language.t(MessageKey::FirstName)}</th>
                                <th>{language.t(MessageKey::LastName)}</th>
                                <th>{language.t(MessageKey::EmploymentDate)}</th>
                                <th>{language.t(MessageKey::DateOfBirth)}</th>
                                <th>{language.t(MessageKey::Phone)}</th>
                                <th>{language.t(MessageKey::Email)}</th>
                                <th>{language.t(MessageKey::Department)}</th>
                                <th>{language.t(MessageKey::Position)}</th>
                                <th>{language.t(MessageKey::Actions)}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for rows.iter().map(|employee| {
                                let selected = employee.id.map(|id| state.view.is_selected(id)).unwrap_or(false);
                                let on_toggle = {
                                    let select = actions.select.clone();
                                    let id = employee.id;
                                    Callback::from(move |e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        if let Some(id) = id {
                                            select.emit((id, input.checked()));
                                        }
                                    })
                                };
                                html! {
                                    <tr key={employee.id.map(EmployeeId::value).unwrap_or_default()} class={classes!(selected.then_some("selected"))}>
                                        <td>
                                            <input type="checkbox" checked={selected} onchange={on_toggle} />
                                        </td>
                                        <td>{employee.first_name.clone()}</td>
                                        <td>{employee.last_name.clone()}</td>
                                        <td>{employee.employment_date.clone()}</td>
                                        <td>{employee.date_of_birth.clone()}</td>
                                        <td>{employee.phone.clone()}</td>
                                        <td>{employee.email.clone()}</td>
                                        <td>{translated_value(&language, MessageKey::for_department(&employee.department), &employee.department)}</td>
                                        <td>{translated_value(&language, MessageKey::for_position(&employee.position), &employee.position)}</td>
                                        <td>{row_actions(employee, current_page, view_mode, &language, &actions)}</td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            },
            Layout::Cards => html! {
                <div class="card-container">
                    {for rows.iter().map(|employee| html! {
                        <div key={employee.id.map(EmployeeId::value).unwrap_or_default()} class="card">
                            <div class="card-header">{employee.full_name()}</div>
                            <div class="card-detail">
                                {language.t(MessageKey::Department)}{": "}
                                {translated_value(&language, MessageKey::for_department(&employee.department), &employee.department)}
                            </div>
                            <div class="card-detail">
                                {language.t(MessageKey::Position)}{": "}
                                {translated_value(&language, MessageKey::for_position(&employee.position), &employee.position)}
                            </div>
                            <div class="card-actions">
                                {row_actions(employee, current_page, view_mode, &language, &actions)}
                            </div>
                        </div>
                    })}
                </div>
            },
        }
    };

    html! {
        <section class="employee-list">
            <ConfirmModal
                is_open={state.delete_prompt.is_open()}
                title={language.t(MessageKey::ConfirmDelete)}
                message={language.t(MessageKey::DeleteDetail)}
                confirm_label={language.t(MessageKey::Yes)}
                cancel_label={language.t(MessageKey::No)}
                on_confirm={actions.confirm_delete.clone()}
                on_cancel={actions.cancel_delete.clone()}
            />

            {if let Some(error) = &state.load_error {
                html! { <div class="load-error">{error.clone()}</div> }
            } else {
                html! {}
            }}

            <div class="search-container">
                <input
                    type="search"
                    placeholder={language.t(MessageKey::SearchPlaceholder)}
                    value={state.view.query().to_string()}
                    oninput={on_search}
                />
                <div class="view-buttons">
                    {view_mode_button(ViewMode::List, MessageKey::ListView)}
                    {view_mode_button(ViewMode::Table, MessageKey::TableView)}
                </div>
            </div>

            {body}

            <Pagination
                current_page={current_page}
                page_count={state.view.page_count(page_size)}
                on_change={on_page_change}
            />
        </section>
    }
}
