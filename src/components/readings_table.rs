use std::rc::Rc;
use yew::prelude::*;

use crate::models::energy::EnergyData;

#[derive(Properties, PartialEq)]
pub struct ReadingsTableProps {
    pub energy: Rc<EnergyData>,
}

/// Per-day reading rows, newest order as delivered by the backend.
#[function_component(ReadingsTable)]
pub fn readings_table(props: &ReadingsTableProps) -> Html {
    html! {
        <div class="readings-table">
            <h2>{"Energy Readings"}</h2>
            <div class="readings-scroll">
                <table>
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"kWh Consumed"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            props.energy.readings.iter().map(|reading| {
                                html! {
                                    <tr>
                                        <td>{reading.date.format("%d %b %Y").to_string()}</td>
                                        <td>{format!("{:.2} kWh", reading.kwh_consumed)}</td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
