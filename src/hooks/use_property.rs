use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::data_state::DataState;
use crate::models::property::Property;
use crate::services::api::fetch_property;

/// Fetches one property when the page mounts or the id changes.
#[hook]
pub fn use_property(id: String) -> UseStateHandle<DataState<Property>> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with(id, move |id| {
            let state = state.clone();
            let id = id.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(DataState::Loading);

            spawn_local(async move {
                match fetch_property(&id).await {
                    Ok(property) if !aborted_check.get() => {
                        state.set(DataState::Loaded(Rc::new(property)));
                    }
                    Err(e) if !aborted_check.get() => {
                        state.set(DataState::Error(e.to_string()));
                    }
                    _ => {} // Page was left before the response arrived
                }
            });

            move || aborted.set(true)
        });
    }

    state
}
