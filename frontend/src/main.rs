use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::{Header, Page};
use hooks::{use_essentials, use_ledger, use_tips};
use pages::{AboutPage, DashboardPage, EssentialsPage};
use services::config::load_app_config;
use services::{BrowserStorage, Logger};

#[function_component(App)]
fn app() -> Html {
    let page = use_state(Page::default);
    let config = use_memo((), |_| load_app_config());
    let storage = use_memo((), |_| BrowserStorage::detect());

    let ledger = use_ledger(&storage, &config.expenses_key);
    let essentials = use_essentials(&storage, &config.essentials_key);
    let tips = use_tips(&config.tips);

    use_effect_with((), {
        let config = config.clone();
        move |_| {
            Logger::info_with_component("app", &format!("started with {:?}", config));
            || ()
        }
    });

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };
    let currency = AttrValue::from(config.currency_label.clone());

    html! {
        <div class="app">
            <Header current={*page} {on_navigate} />
            <main class="main">
                <div class="container">
                    {match *page {
                        Page::Dashboard => html! {
                            <DashboardPage
                                ledger={ledger.state}
                                ledger_actions={ledger.actions}
                                notice={ledger.notice}
                                tips={tips.state}
                                tips_actions={tips.actions}
                                {currency}
                            />
                        },
                        Page::Essentials => html! {
                            <EssentialsPage
                                state={essentials.state}
                                filter={essentials.filter}
                                notice={essentials.notice}
                                actions={essentials.actions}
                            />
                        },
                        Page::About => html! { <AboutPage /> },
                    }}
                </div>
            </main>
            <footer class="footer">
                <p>{"Data is stored only in this browser."}</p>
            </footer>
        </div>
    }
}

fn main() {
    Logger::init();
    yew::Renderer::<App>::new().render();
}
