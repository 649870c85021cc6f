use shared::format::format_amount;
use shared::{CategoryTotals, Decimal};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpendingSummaryProps {
    pub totals: CategoryTotals,
    pub grand_total: Decimal,
    pub currency: AttrValue,
}

#[function_component(SpendingSummary)]
pub fn spending_summary(props: &SpendingSummaryProps) -> Html {
    html! {
        <section class="summary-section">
            <h2>{"Spending Summary"}</h2>
            <div class="summary-total">
                <span class="summary-label">{"Total spent:"}</span>
                <span class="summary-amount">{format_amount(props.grand_total, &props.currency)}</span>
            </div>
            {if props.totals.is_empty() {
                html! { <p class="empty-state">{"No spending to summarize yet."}</p> }
            } else {
                html! {
                    <ul class="summary-categories">
                        {for props.totals.iter().map(|(category, total)| html! {
                            <li key={category.label().to_string()}>
                                <span class="category">{category.to_string()}</span>
                                <span class="amount">{format_amount(*total, &props.currency)}</span>
                            </li>
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
