use shared::format::format_amount;
use shared::{Expense, ExpensePatch, RecordId, ValidationError};
use yew::prelude::*;

use super::EditRow;
use crate::services::DateUtils;

pub const EMPTY_LEDGER: &str = "No expenses yet — add something to start tracking.";

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
    pub currency: AttrValue,
    pub on_remove: Callback<RecordId>,
    pub on_edit: Callback<(RecordId, ExpensePatch), Result<bool, ValidationError>>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    let editing = use_state(|| None::<RecordId>);

    if props.expenses.is_empty() {
        return html! {
            <section class="expenses-section">
                <h2>{"Expenses"}</h2>
                <p class="empty-state">{EMPTY_LEDGER}</p>
            </section>
        };
    }

    html! {
        <section class="expenses-section">
            <h2>{"Expenses"}</h2>
            <div class="table-container">
                <table class="expenses-table">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Item"}</th>
                            <th>{"Category"}</th>
                            <th>{"Cost"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.expenses.iter().map(|expense| {
                            let id = expense.id;
                            if *editing == Some(id) {
                                let on_edit = props.on_edit.clone();
                                let on_save = Callback::from(move |patch: ExpensePatch| on_edit.emit((id, patch)));
                                let on_cancel = {
                                    let editing = editing.clone();
                                    Callback::from(move |_| editing.set(None))
                                };
                                return html! {
                                    <EditRow key={id.to_string()} expense={expense.clone()} {on_save} {on_cancel} />
                                };
                            }

                            let on_start_edit = {
                                let editing = editing.clone();
                                Callback::from(move |_: MouseEvent| editing.set(Some(id)))
                            };
                            let on_delete = {
                                let on_remove = props.on_remove.clone();
                                Callback::from(move |_: MouseEvent| on_remove.emit(id))
                            };

                            html! {
                                <tr key={id.to_string()}>
                                    <td class="date">{DateUtils::format_display(expense.date)}</td>
                                    <td class="item">{&expense.item}</td>
                                    <td class="category">{expense.category.to_string()}</td>
                                    <td class="amount">{format_amount(expense.cost, &props.currency)}</td>
                                    <td class="actions">
                                        <button class="btn" onclick={on_start_edit}>{"Edit"}</button>
                                        <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
