use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Essentials,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Essentials, Page::About];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Essentials => "Essentials",
            Page::About => "About",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Family Budget"}</h1>
                <nav class="header-nav">
                    {for Page::ALL.iter().map(|&page| {
                        let on_navigate = props.on_navigate.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_navigate.emit(page);
                        });
                        let class = if page == props.current { "nav-link active" } else { "nav-link" };
                        html! {
                            <a href="#" {class} {onclick}>{page.title()}</a>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}
