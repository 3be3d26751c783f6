use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_label: AttrValue,
    pub cancel_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Yes/no dialog over a dimmed backdrop; clicking the backdrop cancels
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" role="dialog" onclick={on_modal_click}>
                <h2 class="confirmation-title">{props.title.clone()}</h2>
                <p class="confirmation-message">{props.message.clone()}</p>
                <div class="modal-actions">
                    <button type="button" class="btn btn-primary" onclick={on_confirm}>
                        {props.confirm_label.clone()}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        {props.cancel_label.clone()}
                    </button>
                </div>
            </div>
        </div>
    }
}
