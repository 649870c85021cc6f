use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="about-page">
            <h2>{"About Family Budget"}</h2>
            <p>
                {"A small budgeting companion for families. Everything is kept in this browser, \
                  so it keeps working on slow or intermittent connections."}
            </p>
            <ul>
                <li>{"Record expenses by category, then edit or delete them in place."}</li>
                <li>{"See totals per category and per month, with a pie chart and a monthly trend."}</li>
                <li>{"Keep a checklist of household essentials and filter it by what is still pending."}</li>
                <li>{"Ask for a few practical savings tips based on where the money goes."}</li>
            </ul>
            <p class="about-note">
                {"Savings tips send only the category totals to the tips service. Expense details never leave the device."}
            </p>
        </div>
    }
}
