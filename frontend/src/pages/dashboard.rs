use shared::StorageNotice;
use yew::prelude::*;

use crate::components::charts::{MonthlyTrend, SpendingPie};
use crate::components::expenses::ExpenseList;
use crate::components::forms::ExpenseForm;
use crate::components::{SpendingSummary, StorageNoticeBanner, TipsPanel};
use crate::hooks::{LedgerActions, LedgerState, TipsActions, TipsState};

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub ledger: LedgerState,
    pub ledger_actions: LedgerActions,
    pub notice: Option<StorageNotice>,
    pub tips: TipsState,
    pub tips_actions: TipsActions,
    pub currency: AttrValue,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let ledger = &props.ledger;
    let actions = &props.ledger_actions;

    html! {
        <div class="dashboard">
            <StorageNoticeBanner notice={props.notice.clone()} on_dismiss={actions.dismiss_notice.clone()} />
            <div class="dashboard-grid">
                <ExpenseForm on_add={actions.add.clone()} />
                <SpendingSummary
                    totals={ledger.totals.clone()}
                    grand_total={ledger.grand_total}
                    currency={props.currency.clone()}
                />
            </div>
            <ExpenseList
                expenses={ledger.expenses.clone()}
                currency={props.currency.clone()}
                on_remove={actions.remove.clone()}
                on_edit={actions.edit.clone()}
            />
            <div class="dashboard-grid">
                <SpendingPie totals={ledger.totals.clone()} />
                <MonthlyTrend monthly={ledger.monthly.clone()} currency={props.currency.clone()} />
            </div>
            <TipsPanel
                totals={ledger.totals.clone()}
                state={props.tips.clone()}
                on_request={props.tips_actions.request.clone()}
            />
        </div>
    }
}
