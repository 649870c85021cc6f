use shared::{Category, ExpenseDraft, RecordId, ValidationError};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::DateUtils;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub on_add: Callback<ExpenseDraft, Result<RecordId, ValidationError>>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let category = use_state(|| Category::Groceries);
    let item = use_state(String::new);
    let cost = use_state(String::new);
    let date = use_state(|| DateUtils::to_input_value(DateUtils::today()));
    let form_error = use_state(|| None::<String>);

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(Category::parse(&select.value()));
        })
    };
    let on_item_input = {
        let item = item.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            item.set(input.value());
        })
    };
    let on_cost_input = {
        let cost = cost.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cost.set(input.value());
        })
    };
    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let onsubmit = {
        let on_add = props.on_add.clone();
        let category = category.clone();
        let item = item.clone();
        let cost = cost.clone();
        let date = date.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut draft = ExpenseDraft::new((*category).clone(), (*item).clone(), (*cost).clone());
            draft.date = DateUtils::parse_input_value(&date);

            match on_add.emit(draft) {
                Ok(_) => {
                    category.set(Category::Groceries);
                    item.set(String::new());
                    cost.set(String::new());
                    date.set(DateUtils::to_input_value(DateUtils::today()));
                    form_error.set(None);
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <section class="expense-form-section">
            <h2>{"Add Expense"}</h2>

            {if let Some(error) = (*form_error).as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form class="expense-form" {onsubmit}>
                <div class="form-group">
                    <label for="expense-category">{"Category"}</label>
                    <select id="expense-category" onchange={on_category_change}>
                        {for Category::KNOWN.into_iter().map(|known| html! {
                            <option value={known.label().to_string()} selected={known == *category}>
                                {known.to_string()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="expense-item">{"Item"}</label>
                    <input
                        type="text"
                        id="expense-item"
                        placeholder="Rice, bus fare, medicine..."
                        value={(*item).clone()}
                        oninput={on_item_input}
                    />
                </div>

                <div class="form-group">
                    <label for="expense-cost">{"Cost"}</label>
                    <input
                        type="number"
                        id="expense-cost"
                        placeholder="0"
                        step="any"
                        min="0"
                        value={(*cost).clone()}
                        oninput={on_cost_input}
                    />
                </div>

                <div class="form-group">
                    <label for="expense-date">{"Date"}</label>
                    <input type="date" id="expense-date" value={(*date).clone()} onchange={on_date_change} />
                </div>

                <button type="submit" class="btn btn-primary">{"Add Expense"}</button>
            </form>
        </section>
    }
}
