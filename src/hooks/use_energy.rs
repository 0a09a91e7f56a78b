use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::data_state::DataState;
use crate::models::energy::EnergyData;
use crate::services::api::fetch_energy;

/// Fetches a property's reading history. Mounted next to
/// `use_property` on the detail page, so the two requests are in
/// flight concurrently with no ordering dependency.
#[hook]
pub fn use_energy(id: String) -> UseStateHandle<DataState<EnergyData>> {
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
                match fetch_energy(&id).await {
                    Ok(energy) if !aborted_check.get() => {
                        state.set(DataState::Loaded(Rc::new(energy)));
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
