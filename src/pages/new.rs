use yew::prelude::*;

use crate::components::{PropertyForm, SubmitHandler};
use crate::services::api::create_property;

/// Create page: an empty form whose submit handler POSTs the payload.
#[function_component(NewPage)]
pub fn new_page() -> Html {
    let on_submit = use_memo((), |_| {
        SubmitHandler::new(|payload| async move {
            create_property(&payload).await.map(|_| ())
        })
    });

    html! {
        <div class="form-page">
            <h1>{"New Property"}</h1>
            <PropertyForm
                on_submit={(*on_submit).clone()}
                submit_label="Create Property"
            />
        </div>
    }
}
