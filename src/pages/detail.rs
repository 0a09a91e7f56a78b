use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::{Page, use_navigator};
use crate::components::{EnergyChart, EnergySummary, ErrorBanner, ReadingsTable, Spinner};
use crate::hooks::{use_energy, use_property};
use crate::models::property::Property;
use crate::services::api::delete_property;

#[derive(Properties, PartialEq)]
pub struct DetailPageProps {
    pub id: String,
}

/// One property with its derived consumption stats, chart and reading
/// history. The property and energy fetches run concurrently; either
/// failure is terminal for the visit.
#[function_component(DetailPage)]
pub fn detail_page(props: &DetailPageProps) -> Html {
    let navigator = use_navigator();
    let property = use_property(props.id.clone());
    let energy = use_energy(props.id.clone());

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(Page::List))
    };

    if property.is_loading() || energy.is_loading() {
        return html! { <Spinner /> };
    }

    // Property error takes precedence when both fetches failed
    if let Some(message) = property.error().or_else(|| energy.error()) {
        return html! {
            <div class="detail-page">
                <ErrorBanner message={message.to_string()} />
                <button class="link" onclick={on_back}>{"← Back to properties"}</button>
            </div>
        };
    }

    let (Some(property), Some(energy)) = (property.data(), energy.data()) else {
        return html! { <Spinner /> };
    };

    let on_edit = {
        let navigator = navigator.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| navigator.push(Page::Edit(id.clone())))
    };

    let on_delete = {
        let navigator = navigator.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this property?") {
                return;
            }

            let navigator = navigator.clone();
            let id = id.clone();
            spawn_local(async move {
                match delete_property(&id).await {
                    Ok(()) => navigator.push(Page::List),
                    Err(e) => {
                        gloo::console::error!(format!("Delete failed: {e}"));
                        gloo::dialogs::alert("Failed to delete property");
                    }
                }
            });
        })
    };

    html! {
        <div class="detail-page">
            <button class="link" onclick={on_back}>{"← Back to properties"}</button>

            <div class="detail-header">
                <h1>{&property.name}</h1>
                <div class="detail-actions">
                    <button class="primary" onclick={on_edit}>{"Edit"}</button>
                    <button class="danger" onclick={on_delete}>{"Delete"}</button>
                </div>
            </div>

            <PropertyCard property={(**property).clone()} />

            if energy.is_empty() {
                <div class="empty-state">
                    <p>{"No energy data available for this property"}</p>
                </div>
            } else {
                <EnergySummary energy={energy.clone()} />
                <section class="chart-section">
                    <EnergyChart energy={energy.clone()} />
                </section>
                <ReadingsTable energy={energy.clone()} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PropertyCardProps {
    property: Property,
}

#[function_component(PropertyCard)]
fn property_card(props: &PropertyCardProps) -> Html {
    let property = &props.property;

    html! {
        <div class="property-card">
            <div class="card-grid">
                <div>
                    <p class="field-label">{"Type"}</p>
                    <p class="field-value">{property.kind.label()}</p>
                </div>
                <div>
                    <p class="field-label">{"Floor Area"}</p>
                    <p class="field-value">{format!("{} m²", property.floor_area_m2)}</p>
                </div>
                <div>
                    <p class="field-label">{"Year of Construction"}</p>
                    <p class="field-value">{property.year_of_construction}</p>
                </div>
                <div>
                    <p class="field-label">{"Inhabitants"}</p>
                    <p class="field-value">{property.number_of_inhabitants}</p>
                </div>
                <div>
                    <p class="field-label">{"Ceiling Height"}</p>
                    <p class="field-value">{format!("{} m", property.ceiling_height_m)}</p>
                </div>
                <div class="full-width">
                    <p class="field-label">{"Address"}</p>
                    <p class="field-value">{&property.address}</p>
                </div>
            </div>
        </div>
    }
}
