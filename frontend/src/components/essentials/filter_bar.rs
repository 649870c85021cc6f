use shared::{EssentialsCounts, EssentialsFilter};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EssentialsFilterBarProps {
    pub filter: EssentialsFilter,
    pub counts: EssentialsCounts,
    pub on_select: Callback<EssentialsFilter>,
}

#[function_component(EssentialsFilterBar)]
pub fn essentials_filter_bar(props: &EssentialsFilterBarProps) -> Html {
    let counts = props.counts;

    html! {
        <div class="essentials-toolbar">
            <div class="essentials-counts">
                <span>{format!("Total: {}", counts.total)}</span>
                <span>{format!("Pending: {}", counts.pending)}</span>
                <span>{format!("Completed: {}", counts.done)}</span>
            </div>
            <div class="essentials-filters">
                {for EssentialsFilter::ALL.iter().map(|&filter| {
                    let on_select = props.on_select.clone();
                    let class = if filter == props.filter { "btn filter active" } else { "btn filter" };
                    html! {
                        <button {class} onclick={Callback::from(move |_| on_select.emit(filter))}>
                            {filter.label()}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
