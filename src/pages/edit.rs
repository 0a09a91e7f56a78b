use yew::prelude::*;

use crate::components::{ErrorBanner, PropertyForm, Spinner, SubmitHandler};
use crate::hooks::{DataState, use_property};
use crate::services::api::update_property;

#[derive(Properties, PartialEq)]
pub struct EditPageProps {
    pub id: String,
}

/// Edit page: fetches the property, pre-fills the form, and PUTs the
/// validated payload on submit.
#[function_component(EditPage)]
pub fn edit_page(props: &EditPageProps) -> Html {
    let property = use_property(props.id.clone());

    let on_submit = use_memo(props.id.clone(), |id| {
        let id = id.clone();
        SubmitHandler::new(move |payload| {
            let id = id.clone();
            async move { update_property(&id, &payload).await.map(|_| ()) }
        })
    });

    match &*property {
        DataState::Loading => html! { <Spinner /> },
        DataState::Error(message) => html! { <ErrorBanner message={message.clone()} /> },
        DataState::Loaded(property) => html! {
            <div class="form-page">
                <h1>{"Edit Property"}</h1>
                <PropertyForm
                    initial={(**property).clone()}
                    on_submit={(*on_submit).clone()}
                    submit_label="Save Changes"
                />
            </div>
        },
    }
}
