use yew::prelude::*;

use crate::pages::{DetailPage, EditPage, ListPage, NewPage};

/// The page currently on screen. The whole app is client-rendered and
/// switches on this value held at the root; URL routing is out of
/// scope.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    List,
    Detail(String),
    New,
    Edit(String),
}

/// Navigation handle provided to every page through context.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    go: Callback<Page>,
}

impl Navigator {
    pub fn push(&self, page: Page) {
        self.go.emit(page);
    }
}

/// Fetches the `Navigator` from context. Panics outside `App`, which
/// cannot happen for pages rendered by it.
#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator context not provided")
}

#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(|| Page::List);

    let navigator = {
        let page = page.clone();
        Navigator {
            go: Callback::from(move |next| page.set(next)),
        }
    };

    let content = match &*page {
        Page::List => html! { <ListPage /> },
        Page::Detail(id) => html! { <DetailPage id={id.clone()} /> },
        Page::New => html! { <NewPage /> },
        Page::Edit(id) => html! { <EditPage id={id.clone()} /> },
    };

    html! {
        <ContextProvider<Navigator> context={navigator}>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Property Energy Dashboard"}</h1>
                </header>

                <main class="app-main">
                    {content}
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ContextProvider<Navigator>>
    }
}
