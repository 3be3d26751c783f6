use yew::prelude::*;
use web_sys::MouseEvent;
use crate::hooks::use_language::use_language;
use shared::MessageKey;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    /// Zero hides the controls entirely
    pub page_count: usize,
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let language = use_language();

    if props.page_count == 0 {
        return html! {};
    }

    let go_to = |page: usize| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(page))
    };

    let current = props.current_page;

    html! {
        <nav class="pagination">
            <button
                class="prev"
                title={language.t(MessageKey::PreviousPage)}
                disabled={current <= 1}
                onclick={go_to(current.saturating_sub(1).max(1))}
            >
                {"‹"}
            </button>
            {for (1..=props.page_count).map(|page| html! {
                <button
                    key={page}
                    class={classes!("page", (page == current).then_some("active"))}
                    onclick={go_to(page)}
                >
                    {page.to_string()}
                </button>
            })}
            <button
                class="next"
                title={language.t(MessageKey::NextPage)}
                disabled={current >= props.page_count}
                onclick={go_to(current.saturating_add(1))}
            >
                {"›"}
            </button>
        </nav>
    }
}
