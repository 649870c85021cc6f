use shared::CategoryTotals;
use yew::prelude::*;

use crate::hooks::TipsState;

#[derive(Properties, PartialEq)]
pub struct TipsPanelProps {
    pub totals: CategoryTotals,
    pub state: TipsState,
    pub on_request: Callback<CategoryTotals>,
}

#[function_component(TipsPanel)]
pub fn tips_panel(props: &TipsPanelProps) -> Html {
    let onclick = {
        let totals = props.totals.clone();
        let on_request = props.on_request.clone();
        Callback::from(move |_: MouseEvent| on_request.emit(totals.clone()))
    };

    html! {
        <section class="tips-section">
            <h2>{"Savings Tips"}</h2>
            <button class="btn btn-primary" {onclick} disabled={props.state.loading}>
                {if props.state.loading { "Getting tips..." } else { "Get savings tips" }}
            </button>
            {match props.state.message.as_ref() {
                Some(message) => html! {
                    <div class="tips-output">
                        {for message.lines().map(|line| html! { <p>{line.to_string()}</p> })}
                    </div>
                },
                None => html! {},
            }}
        </section>
    }
}
