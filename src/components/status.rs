use yew::prelude::*;

/// Spinner shown while a page-visit fetch is in flight.
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{"Loading data..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Page-level banner for a failed fetch. Terminal for the visit; the
/// user re-attempts manually.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="status error">
            <p>{"Error: "}{&props.message}</p>
        </div>
    }
}
