use shared::{EssentialsFilter, StorageNotice};
use yew::prelude::*;

use crate::components::essentials::{EssentialsAddForm, EssentialsChecklist, EssentialsFilterBar};
use crate::components::StorageNoticeBanner;
use crate::hooks::{EssentialsActions, EssentialsState};

#[derive(Properties, PartialEq)]
pub struct EssentialsPageProps {
    pub state: EssentialsState,
    pub filter: EssentialsFilter,
    pub notice: Option<StorageNotice>,
    pub actions: EssentialsActions,
}

#[function_component(EssentialsPage)]
pub fn essentials_page(props: &EssentialsPageProps) -> Html {
    let actions = &props.actions;

    html! {
        <div class="essentials-page">
            <h2>{"Household Essentials"}</h2>
            <StorageNoticeBanner notice={props.notice.clone()} on_dismiss={actions.dismiss_notice.clone()} />
            <EssentialsAddForm on_add={actions.add.clone()} />
            <EssentialsFilterBar
                filter={props.filter}
                counts={props.state.counts}
                on_select={actions.set_filter.clone()}
            />
            <EssentialsChecklist
                items={props.state.visible(props.filter)}
                filter={props.filter}
                on_toggle={actions.toggle.clone()}
                on_remove={actions.remove.clone()}
            />
        </div>
    }
}
