use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::data_state::DataState;
use crate::models::property::Property;
use crate::services::api::fetch_properties;

/// Handle returned by the `use_properties` hook. `reload` re-fetches
/// the list, e.g. after a delete.
#[derive(Clone, PartialEq)]
pub struct PropertiesHandle {
    pub state: DataState<Vec<Property>>,
    pub reload: Callback<()>,
}

#[hook]
pub fn use_properties() -> PropertiesHandle {
    let state = use_state(|| DataState::Loading);
    let trigger = use_state(|| 0u32); // Reload trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            let state = state.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            // Back to loading when a reload is triggered
            state.set(DataState::Loading);

            spawn_local(async move {
                match fetch_properties().await {
                    Ok(list) if !aborted_check.get() => {
                        state.set(DataState::Loaded(Rc::new(list)));
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

    let reload = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    PropertiesHandle {
        state: (*state).clone(),
        reload,
    }
}
