use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle,
        LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::energy::EnergyData;

const CHART_ID: &str = "energy-chart";

const ACCENT: &str = "#d4a843";
const TITLE_COLOR: &str = "#e2e4ec";
const AXIS_COLOR: &str = "#8b90a0";
const GRID_COLOR: &str = "#1e2130";

#[derive(Properties, PartialEq)]
pub struct EnergyChartProps {
    pub energy: Rc<EnergyData>,
}

/// Daily consumption chart. Pure mapping of readings to labels and
/// rounded values; rendering is delegated to charming.
#[function_component(EnergyChart)]
pub fn energy_chart(props: &EnergyChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.energy.clone(), |energy| energy.series_data());

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series_data, container_ref),
            |(series_data, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, series_data);

                    let series_data = series_data.clone();
                    EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                        render_chart(&container, &series_data);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series_data: &(Vec<String>, Vec<f64>)) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series_data);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(series_data: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (x_data, y_data) = series_data;

    // Thin the axis labels to roughly one per week
    let label_interval = (x_data.len() / 7).max(1) as i32;

    CharmingChart::new()
        .title(
            Title::new()
                .text("Energy Consumption Over Time")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(TITLE_COLOR)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data.clone())
                .axis_label(
                    AxisLabel::new()
                        .rotate(45)
                        .color(AXIS_COLOR)
                        .interval(label_interval),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("kWh")
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .data(y_data.clone())
                .show_symbol(false)
                .line_style(LineStyle::new().color(ACCENT).width(1.5))
                .item_style(ItemStyle::new().color(ACCENT))
                .area_style(AreaStyle::new().color("rgba(212, 168, 67, 0.2)")),
        )
}
