use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::{Department, DirectoryConfig, EmployeeField, FormPhase, MessageKey, Position, Route};
use super::confirm_modal::ConfirmModal;
use crate::hooks::use_employee_form::use_employee_form;
use crate::hooks::use_language::use_language;
use crate::services::navigation;

#[derive(Properties, PartialEq)]
pub struct EmployeeFormPageProps {
    /// `Route::Add` or `Route::Edit`
    pub route: Route,
    pub config: DirectoryConfig,
}

fn label_key(field: EmployeeField) -> MessageKey {
    match field {
        EmployeeField::FirstName => MessageKey::FirstName,
        EmployeeField::LastName => MessageKey::LastName,
        EmployeeField::Email => MessageKey::Email,
        EmployeeField::Phone => MessageKey::Phone,
        EmployeeField::Department => MessageKey::Department,
        EmployeeField::Position => MessageKey::Position,
        EmployeeField::EmploymentDate => MessageKey::EmploymentDate,
        EmployeeField::DateOfBirth => MessageKey::DateOfBirth,
    }
}

fn input_type(field: EmployeeField) -> &'static str {
    match field {
        EmployeeField::Email => "email",
        EmployeeField::Phone => "tel",
        EmployeeField::EmploymentDate | EmployeeField::DateOfBirth => "date",
        _ => "text",
    }
}

/// `(stored value, label)` pairs for the select fields
fn options(field: EmployeeField) -> Option<(MessageKey, Vec<(&'static str, MessageKey)>)> {
    match field {
        EmployeeField::Department => Some((
            MessageKey::SelectDepartment,
            Department::ALL
                .iter()
                .filter_map(|d| MessageKey::for_department(d.as_str()).map(|key| (d.as_str(), key)))
                .collect(),
        )),
        EmployeeField::Position => Some((
            MessageKey::SelectPosition,
            Position::ALL
                .iter()
                .filter_map(|p| MessageKey::for_position(p.as_str()).map(|key| (p.as_str(), key)))
                .collect(),
        )),
        _ => None,
    }
}

#[function_component(EmployeeFormPage)]
pub fn employee_form_page(props: &EmployeeFormPageProps) -> Html {
    let language = use_language();
    let target = match props.route {
        Route::Edit { id, .. } => Some(id),
        _ => None,
    };
    let form = use_employee_form(&props.config.employees_key, target);
    let state = &form.state;
    let actions = form.actions.clone();
    let back = props.route.back_to_list();

    // Leave for the list once the draft has been written
    use_effect_with(state.form.phase(), move |phase| {
        if matches!(phase, FormPhase::Committed(_)) {
            navigation::navigate(&back);
        }
        || ()
    });

    let on_close = Callback::from(move |_: MouseEvent| navigation::navigate(&back));

    let on_submit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let field_input = |field: EmployeeField| {
        let value = field.value_of(state.form.draft()).to_string();
        let error = state
            .form
            .errors()
            .get(field)
            .map(|error| language.t(error.message_key(field)))
            .unwrap_or_default();

        let control = match options(field) {
            Some((placeholder, choices)) => {
                let on_change = {
                    let set_field = actions.set_field.clone();
                    Callback::from(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        set_field.emit((field, select.value()));
                    })
                };
                html! {
                    <select id={field.input_id()} onchange={on_change}>
                        <option value="" selected={value.is_empty()}>{language.t(placeholder)}</option>
                        {for choices.into_iter().map(|(stored, key)| html! {
                            <option value={stored} selected={value == stored}>{language.t(key)}</option>
                        })}
                    </select>
                }
            }
            None => {
                let on_input = {
                    let set_field = actions.set_field.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        set_field.emit((field, input.value()));
                    })
                };
                html! {
                    <input
                        type={input_type(field)}
                        id={field.input_id()}
                        value={value}
                        oninput={on_input}
                    />
                }
            }
        };

        html! {
            <div class="form-group">
                <label for={field.input_id()}>{language.t(label_key(field))}</label>
                {control}
                <div class="error">{error}</div>
            </div>
        }
    };

    let (title, submit_label) = if state.form.is_edit() {
        (MessageKey::EditEmployee, MessageKey::UpdateEmployee)
    } else {
        (MessageKey::AddEmployee, MessageKey::AddEmployee)
    };

    html! {
        <section class="employee-form">
            <h1>
                {language.t(title)}
                <button type="button" class="close-btn" title={language.t(MessageKey::Close)} onclick={on_close}>
                    {"×"}
                </button>
            </h1>

            {if let Some(error) = &state.save_error {
                html! { <div class="save-error">{error.clone()}</div> }
            } else {
                html! {}
            }}

            <form onsubmit={on_submit} novalidate={true}>
                {for EmployeeField::ALL.into_iter().map(field_input)}
                <button type="submit" class="btn btn-primary">{language.t(submit_label)}</button>
            </form>

            <ConfirmModal
                is_open={state.form.is_confirmation_visible()}
                title={language.t(MessageKey::ConfirmSubmit)}
                message={language.t(MessageKey::AreYouSureSubmit)}
                confirm_label={language.t(MessageKey::Yes)}
                cancel_label={language.t(MessageKey::No)}
                on_confirm={actions.confirm.clone()}
                on_cancel={actions.decline.clone()}
            />
        </section>
    }
}
