use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::app::{Page, use_navigator};
use crate::models::error::AppError;
use crate::models::form::{FormField, PropertyDraft};
use crate::models::property::{Property, PropertyCreate, PropertyType};

type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), AppError>>>>;

/// Caller-supplied async submit handler. The form owns validation and
/// navigation; the owning page owns the actual API call.
#[derive(Clone)]
pub struct SubmitHandler(Rc<dyn Fn(PropertyCreate) -> SubmitFuture>);

impl SubmitHandler {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(PropertyCreate) -> Fut + 'static,
        Fut: Future<Output = Result<(), AppError>> + 'static,
    {
        Self(Rc::new(move |payload| Box::pin(f(payload))))
    }

    fn call(&self, payload: PropertyCreate) -> SubmitFuture {
        (self.0)(payload)
    }
}

impl PartialEq for SubmitHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct PropertyFormProps {
    /// Present in edit mode; pre-fills every field.
    #[prop_or_default]
    pub initial: Option<Property>,
    pub on_submit: SubmitHandler,
    pub submit_label: String,
}

/// Shared create/edit form. Validates the draft client-side before
/// delegating to the submit handler; a validation failure renders
/// inline and issues no request.
#[function_component(PropertyForm)]
pub fn property_form(props: &PropertyFormProps) -> Html {
    let navigator = use_navigator();

    let draft = {
        let initial = props.initial.clone();
        use_state(move || {
            initial
                .as_ref()
                .map(PropertyDraft::from_property)
                .unwrap_or_default()
        })
    };
    let saving = use_state(|| false);
    let field_error = use_state(|| None);
    let submit_error = use_state(|| None);

    let onsubmit = {
        let draft = draft.clone();
        let saving = saving.clone();
        let field_error = field_error.clone();
        let submit_error = submit_error.clone();
        let handler = props.on_submit.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            match draft.validate() {
                Err(err) => field_error.set(Some(err)),
                Ok(payload) => {
                    field_error.set(None);
                    submit_error.set(None);
                    saving.set(true);

                    let saving = saving.clone();
                    let submit_error = submit_error.clone();
                    let navigator = navigator.clone();
                    let future = handler.call(payload);

                    spawn_local(async move {
                        match future.await {
                            Ok(()) => navigator.push(Page::List),
                            Err(e) => {
                                submit_error.set(Some(e.to_string()));
                                saving.set(false);
                            }
                        }
                    });
                }
            }
        })
    };

    let on_kind_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(kind) = select.value().parse::<PropertyType>() {
                let mut next = (*draft).clone();
                next.kind = kind;
                draft.set(next);
            }
        })
    };

    let oncancel = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(Page::List))
    };

    let error_under = |field: FormField| -> Html {
        match &*field_error {
            Some(err) if err.field == field => html! {
                <p class="field-error">{err.message.clone()}</p>
            },
            _ => Html::default(),
        }
    };

    html! {
        <form class="property-form" {onsubmit}>
            if let Some(message) = &*submit_error {
                <div class="form-error-banner">{message}</div>
            }

            <div class="form-card">
                <div class="form-field">
                    <label for="name">{"Property Name"}</label>
                    <input
                        type="text"
                        id="name"
                        value={draft.name.clone()}
                        oninput={edit_draft(&draft, |d, v| d.name = v)}
                        placeholder="e.g. Centrum Apartment"
                    />
                    {error_under(FormField::Name)}
                </div>

                <div class="form-field">
                    <label for="type">{"Property Type"}</label>
                    <select id="type" onchange={on_kind_change}>
                        {
                            PropertyType::all().iter().map(|kind| {
                                html! {
                                    <option
                                        value={kind.code()}
                                        selected={*kind == draft.kind}
                                    >
                                        {kind.label()}
                                    </option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <div class="form-field">
                    <label for="address">{"Address"}</label>
                    <input
                        type="text"
                        id="address"
                        value={draft.address.clone()}
                        oninput={edit_draft(&draft, |d, v| d.address = v)}
                        placeholder="e.g. Grote Markt 1, Groningen"
                    />
                    {error_under(FormField::Address)}
                </div>

                <div class="form-field">
                    <label for="floor_area_m2">{"Floor Area (m²)"}</label>
                    <input
                        type="number"
                        id="floor_area_m2"
                        min="0"
                        step="0.01"
                        value={draft.floor_area_m2.clone()}
                        oninput={edit_draft(&draft, |d, v| d.floor_area_m2 = v)}
                        placeholder="e.g. 85"
                    />
                    {error_under(FormField::FloorArea)}
                </div>

                <div class="form-field">
                    <label for="year_of_construction">{"Year of Construction"}</label>
                    <input
                        type="number"
                        id="year_of_construction"
                        step="1"
                        value={draft.year_of_construction.clone()}
                        oninput={edit_draft(&draft, |d, v| d.year_of_construction = v)}
                        placeholder="e.g. 1995"
                    />
                    {error_under(FormField::YearOfConstruction)}
                </div>

                <div class="form-field">
                    <label for="number_of_inhabitants">{"Number of Inhabitants"}</label>
                    <input
                        type="number"
                        id="number_of_inhabitants"
                        min="0"
                        step="1"
                        value={draft.number_of_inhabitants.clone()}
                        oninput={edit_draft(&draft, |d, v| d.number_of_inhabitants = v)}
                        placeholder="e.g. 2"
                    />
                    {error_under(FormField::Inhabitants)}
                </div>

                <div class="form-field">
                    <label for="ceiling_height_m">{"Ceiling Height (m)"}</label>
                    <input
                        type="number"
                        id="ceiling_height_m"
                        min="0"
                        step="0.1"
                        value={draft.ceiling_height_m.clone()}
                        oninput={edit_draft(&draft, |d, v| d.ceiling_height_m = v)}
                        placeholder="e.g. 2.6"
                    />
                    {error_under(FormField::CeilingHeight)}
                </div>

                <div class="form-actions">
                    <button type="submit" class="primary" disabled={*saving}>
                        { if *saving { "Saving...".to_string() } else { props.submit_label.clone() } }
                    </button>
                    <button type="button" class="secondary" onclick={oncancel}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </form>
    }
}

/// Builds an input callback that writes one draft field.
fn edit_draft(
    draft: &UseStateHandle<PropertyDraft>,
    apply: fn(&mut PropertyDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}
