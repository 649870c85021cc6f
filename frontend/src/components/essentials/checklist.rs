use shared::{EssentialItem, EssentialsFilter, RecordId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EssentialsChecklistProps {
    pub items: Vec<EssentialItem>,
    pub filter: EssentialsFilter,
    pub on_toggle: Callback<RecordId>,
    pub on_remove: Callback<RecordId>,
}

pub fn empty_message(filter: EssentialsFilter) -> &'static str {
    match filter {
        EssentialsFilter::All => "No essentials yet. Add the items your household needs.",
        EssentialsFilter::Pending => "Nothing pending.",
        EssentialsFilter::Done => "Nothing completed yet.",
    }
}

#[function_component(EssentialsChecklist)]
pub fn essentials_checklist(props: &EssentialsChecklistProps) -> Html {
    if props.items.is_empty() {
        return html! { <p class="empty-state">{empty_message(props.filter)}</p> };
    }

    html! {
        <ul class="essentials-list">
            {for props.items.iter().map(|item| {
                let id = item.id;
                let on_toggle = props.on_toggle.clone();
                let on_remove = props.on_remove.clone();
                let class = if item.done { "essential done" } else { "essential" };
                html! {
                    <li key={id.to_string()} {class}>
                        <label>
                            <input
                                type="checkbox"
                                checked={item.done}
                                onchange={Callback::from(move |_: Event| on_toggle.emit(id))}
                            />
                            <span class="essential-label">{&item.label}</span>
                        </label>
                        <button class="btn btn-danger" onclick={Callback::from(move |_: MouseEvent| on_remove.emit(id))}>
                            {"Delete"}
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}
