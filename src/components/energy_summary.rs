use std::rc::Rc;
use yew::prelude::*;

use crate::models::energy::EnergyData;

#[derive(Properties, PartialEq)]
pub struct EnergySummaryProps {
    pub energy: Rc<EnergyData>,
}

/// Aggregate consumption cards for the detail page.
#[function_component(EnergySummary)]
pub fn energy_summary(props: &EnergySummaryProps) -> Html {
    match props.energy.stats() {
        Ok(stats) => html! {
            <div class="energy-summary">
                <div class="summary-grid">
                    <div class="summary-item">
                        <h3>{"Total Consumption"}</h3>
                        <p class="summary-value">{format!("{:.1} kWh", stats.total)}</p>
                    </div>
                    <div class="summary-item">
                        <h3>{"Average Daily"}</h3>
                        <p class="summary-value">{format!("{:.1} kWh", stats.average)}</p>
                    </div>
                    <div class="summary-item">
                        <h3>{"Peak Day"}</h3>
                        <p class="summary-value">{format!("{:.1} kWh", stats.peak)}</p>
                    </div>
                    <div class="summary-item">
                        <h3>{"Days Tracked"}</h3>
                        <p class="summary-value">{stats.days}</p>
                    </div>
                </div>
            </div>
        },
        Err(e) => html! {
            <div class="energy-summary error">
                <p>{"Error calculating summary: "}{e.to_string()}</p>
            </div>
        },
    }
}
