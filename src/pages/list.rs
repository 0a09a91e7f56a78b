use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::{Page, use_navigator};
use crate::components::{ErrorBanner, Spinner, TypeBadge};
use crate::hooks::{DataState, use_properties};
use crate::models::property::Property;
use crate::services::api::delete_property;

/// Portfolio overview: every property in a table with view/edit/delete
/// actions.
#[function_component(ListPage)]
pub fn list_page() -> Html {
    let navigator = use_navigator();
    let properties = use_properties();

    let on_delete = {
        let reload = properties.reload.clone();
        Callback::from(move |id: String| {
            // Unconfirmed deletes issue no request
            if !gloo::dialogs::confirm("Delete this property? This cannot be undone.") {
                return;
            }

            let reload = reload.clone();
            spawn_local(async move {
                match delete_property(&id).await {
                    Ok(()) => reload.emit(()),
                    Err(e) => {
                        gloo::console::error!(format!("Delete failed: {e}"));
                        gloo::dialogs::alert("Failed to delete property");
                    }
                }
            });
        })
    };

    match &properties.state {
        DataState::Loading => html! { <Spinner /> },
        DataState::Error(message) => html! { <ErrorBanner message={message.clone()} /> },
        DataState::Loaded(list) => {
            let count = list.len();
            let count_label = if count == 1 {
                "1 property in your portfolio".to_string()
            } else {
                format!("{count} properties in your portfolio")
            };

            let on_add = {
                let navigator = navigator.clone();
                Callback::from(move |_: MouseEvent| navigator.push(Page::New))
            };

            html! {
                <div class="list-page">
                    <div class="page-header">
                        <div>
                            <h1>{"Properties"}</h1>
                            <p class="subtitle">{count_label}</p>
                        </div>
                        <button class="primary" onclick={on_add}>{"Add Property"}</button>
                    </div>

                    if list.is_empty() {
                        <EmptyState />
                    } else {
                        <PropertyTable
                            properties={(**list).clone()}
                            on_delete={on_delete}
                        />
                    }
                </div>
            }
        }
    }
}

#[function_component(EmptyState)]
fn empty_state() -> Html {
    let navigator = use_navigator();
    let on_add = Callback::from(move |_: MouseEvent| navigator.push(Page::New));

    html! {
        <div class="empty-state">
            <p class="empty-title">{"No properties yet"}</p>
            <p class="empty-hint">
                {"Add your first property to start tracking energy consumption"}
            </p>
            <button class="primary" onclick={on_add}>{"Add Property"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PropertyTableProps {
    properties: Vec<Property>,
    on_delete: Callback<String>,
}

#[function_component(PropertyTable)]
fn property_table(props: &PropertyTableProps) -> Html {
    let navigator = use_navigator();

    html! {
        <div class="property-table">
            <table>
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Type"}</th>
                        <th>{"Address"}</th>
                        <th>{"Area"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        props.properties.iter().map(|property| {
                            let id = property.id.clone();

                            let on_view = {
                                let navigator = navigator.clone();
                                let id = id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    navigator.push(Page::Detail(id.clone()));
                                })
                            };
                            let on_edit = {
                                let navigator = navigator.clone();
                                let id = id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    navigator.push(Page::Edit(id.clone()));
                                })
                            };
                            let on_del = {
                                let on_delete = props.on_delete.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_delete.emit(id.clone());
                                })
                            };

                            html! {
                                <tr key={property.id.clone()}>
                                    <td class="name-cell">{&property.name}</td>
                                    <td><TypeBadge kind={property.kind} /></td>
                                    <td class="muted">{&property.address}</td>
                                    <td>{format!("{} m²", property.floor_area_m2)}</td>
                                    <td class="actions">
                                        <button onclick={on_view}>{"View"}</button>
                                        <button onclick={on_edit}>{"Edit"}</button>
                                        <button class="danger" onclick={on_del}>{"Del"}</button>
                                    </td>
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}
