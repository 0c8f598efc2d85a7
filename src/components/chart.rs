use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line},
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

const AXIS_COLOR: &str = "#9ca3af";
const GRID_COLOR: &str = "#f0f0f0";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ChartKind {
    Line,
    Bar,
}

/// One named series, aligned with the chart's categories.
#[derive(Clone, PartialEq, Debug)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: String,
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    /// DOM id; must be unique on the page.
    pub id: AttrValue,
    pub kind: ChartKind,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    #[prop_or_default]
    pub y_axis_name: Option<AttrValue>,
    #[prop_or(300)]
    pub height: u32,
    #[prop_or(false)]
    pub legend: bool,
}

#[derive(Clone, PartialEq)]
struct ChartData {
    kind: ChartKind,
    categories: Vec<String>,
    series: Vec<ChartSeries>,
    y_axis_name: Option<AttrValue>,
    legend: bool,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let data = Rc::new(ChartData {
        kind: props.kind,
        categories: props.categories.clone(),
        series: props.series.clone(),
        y_axis_name: props.y_axis_name.clone(),
        legend: props.legend,
    });

    {
        let container_ref = container_ref.clone();
        let id = props.id.clone();

        use_effect_with((data, container_ref, id), |(data, container_ref, id)| {
            let listener = container_ref.cast::<HtmlElement>().map(|container| {
                render_chart(&container, id, data);

                let data = data.clone();
                let id = id.clone();
                EventListener::new(&gloo::utils::window(), "resize", move |_| {
                    render_chart(&container, &id, &data);
                })
            });

            move || drop(listener)
        });
    }

    let style = format!("height: {}px;", props.height);

    html! {
        <div class="chart-container" ref={container_ref} {style}>
            <div id={props.id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, id: &str, data: &ChartData) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(data);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        web_sys::console::error_1(&format!("Render error in {id}: {e:?}").into());
    }
}

fn build_chart(data: &ChartData) -> CharmingChart {
    let mut y_axis = Axis::new()
        .type_(AxisType::Value)
        .axis_label(AxisLabel::new().color(AXIS_COLOR))
        .split_line(
            SplitLine::new().line_style(
                LineStyle::new()
                    .color(GRID_COLOR)
                    .type_(LineStyleType::Dashed),
            ),
        );
    if let Some(name) = &data.y_axis_name {
        y_axis = y_axis.name(name.as_str());
    }

    let pointer = match data.kind {
        ChartKind::Line => AxisPointerType::Line,
        ChartKind::Bar => AxisPointerType::Shadow,
    };

    let mut chart = CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(pointer)),
        )
        .grid(
            Grid::new()
                .left("4%")
                .right("4%")
                .bottom("8%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(data.categories.clone())
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(y_axis);

    if data.legend {
        chart = chart.legend(Legend::new().bottom("0"));
    }

    for series in &data.series {
        chart = match data.kind {
            ChartKind::Line => chart.series(
                Line::new()
                    .name(series.name.as_str())
                    .data(series.values.clone())
                    .item_style(ItemStyle::new().color(series.color.as_str()))
                    .line_style(LineStyle::new().color(series.color.as_str())),
            ),
            ChartKind::Bar => chart.series(
                Bar::new()
                    .name(series.name.as_str())
                    .data(series.values.clone())
                    .item_style(ItemStyle::new().color(series.color.as_str())),
            ),
        };
    }

    chart
}
