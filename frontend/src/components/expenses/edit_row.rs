use shared::{Category, Expense, ExpensePatch, ValidationError};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::DateUtils;

/// Values currently typed into an inline editor row
#[derive(Debug, Clone, PartialEq)]
pub struct EditFields {
    pub category: Category,
    pub item: String,
    pub cost: String,
    pub date: String,
}

impl EditFields {
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            category: expense.category.clone(),
            item: expense.item.clone(),
            cost: expense.cost.normalize().to_string(),
            date: DateUtils::to_input_value(expense.date),
        }
    }
}

/// Patch holding only the fields that differ from `original`.
/// An unparseable date leaves the stored date alone.
pub fn build_patch(original: &Expense, fields: &EditFields) -> ExpensePatch {
    let mut patch = ExpensePatch::default();
    if fields.category != original.category {
        patch = patch.with_category(fields.category.clone());
    }
    if fields.item != original.item {
        patch = patch.with_item(fields.item.clone());
    }
    if fields.cost.trim() != original.cost.normalize().to_string() {
        patch = patch.with_cost(fields.cost.clone());
    }
    if let Some(date) = DateUtils::parse_input_value(&fields.date) {
        if date != original.date {
            patch = patch.with_date(date);
        }
    }
    patch
}

#[derive(Properties, PartialEq)]
pub struct EditRowProps {
    pub expense: Expense,
    pub on_save: Callback<ExpensePatch, Result<bool, ValidationError>>,
    pub on_cancel: Callback<()>,
}

#[function_component(EditRow)]
pub fn edit_row(props: &EditRowProps) -> Html {
    let fields = {
        let expense = props.expense.clone();
        use_state(move || EditFields::from_expense(&expense))
    };
    let error = use_state(|| None::<String>);

    let update = |apply: fn(&mut EditFields, String)| {
        let fields = fields.clone();
        Callback::from(move |value: String| {
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        })
    };
    let set_category = update(|f, v| f.category = Category::parse(&v));
    let set_item = update(|f, v| f.item = v);
    let set_cost = update(|f, v| f.cost = v);
    let set_date = update(|f, v| f.date = v);

    let on_save = {
        let expense = props.expense.clone();
        let fields = fields.clone();
        let error = error.clone();
        let save = props.on_save.clone();
        let cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            let patch = build_patch(&expense, &fields);
            if patch.is_empty() {
                cancel.emit(());
                return;
            }
            match save.emit(patch) {
                Ok(_) => cancel.emit(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };
    let on_cancel = {
        let cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };

    html! {
        <tr class="edit-row">
            <td>
                <input type="date" value={fields.date.clone()}
                    onchange={set_date.reform(|e: Event| e.target_unchecked_into::<HtmlInputElement>().value())} />
            </td>
            <td>
                <input type="text" value={fields.item.clone()}
                    oninput={set_item.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())} />
            </td>
            <td>
                <select onchange={set_category.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value())}>
                    {for Category::KNOWN.into_iter().map(|known| html! {
                        <option value={known.label().to_string()} selected={known == fields.category}>
                            {known.to_string()}
                        </option>
                    })}
                    {if let Category::Custom(label) = &fields.category {
                        html! { <option value={label.to_string()} selected={true}>{label.to_string()}</option> }
                    } else { html! {} }}
                </select>
            </td>
            <td>
                <input type="number" step="any" min="0" value={fields.cost.clone()}
                    oninput={set_cost.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())} />
                {if let Some(message) = (*error).as_ref() {
                    html! { <div class="form-message error">{message}</div> }
                } else { html! {} }}
            </td>
            <td class="actions">
                <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
                <button class="btn" onclick={on_cancel}>{"Cancel"}</button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{Decimal, RecordId};

    fn flour() -> Expense {
        Expense {
            id: RecordId(1),
            category: Category::Groceries,
            item: "Flour".into(),
            cost: Decimal::from(300),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        }
    }

    #[test]
    fn test_untouched_fields_give_empty_patch() {
        let expense = flour();
        assert!(build_patch(&expense, &EditFields::from_expense(&expense)).is_empty());
    }

    #[test]
    fn test_only_changed_cost_is_patched() {
        let expense = flour();
        let mut fields = EditFields::from_expense(&expense);
        fields.cost = "500".into();

        assert_eq!(build_patch(&expense, &fields), ExpensePatch::default().with_cost("500"));
    }

    #[test]
    fn test_category_item_and_date_changes() {
        let expense = flour();
        let mut fields = EditFields::from_expense(&expense);
        fields.category = Category::Transport;
        fields.item = "Bus".into();
        fields.date = "2024-02-01".into();

        let patch = build_patch(&expense, &fields);
        assert_eq!(patch.category, Some(Category::Transport));
        assert_eq!(patch.item.as_deref(), Some("Bus"));
        assert_eq!(patch.cost, None);
        assert_eq!(patch.date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_blank_date_keeps_stored_date() {
        let expense = flour();
        let mut fields = EditFields::from_expense(&expense);
        fields.date = String::new();
        assert!(build_patch(&expense, &fields).is_empty());
    }
}
