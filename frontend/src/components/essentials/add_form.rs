use shared::{RecordId, ValidationError};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EssentialsAddFormProps {
    pub on_add: Callback<String, Result<RecordId, ValidationError>>,
}

#[function_component(EssentialsAddForm)]
pub fn essentials_add_form(props: &EssentialsAddFormProps) -> Html {
    let label = use_state(String::new);

    let oninput = {
        let label = label.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            label.set(input.value());
        })
    };

    // Blank labels are declined silently
    let onsubmit = {
        let label = label.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if on_add.emit((*label).clone()).is_ok() {
                label.set(String::new());
            }
        })
    };

    html! {
        <form class="essentials-form" {onsubmit}>
            <input
                type="text"
                placeholder="Add an essential, e.g. Rice"
                value={(*label).clone()}
                {oninput}
            />
            <button type="submit" class="btn btn-primary">{"Add"}</button>
        </form>
    }
}
