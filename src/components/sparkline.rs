use yew::prelude::*;

use crate::utils::sparkline::sparkline_path;

const VIEWBOX_WIDTH: f64 = 200.0;

#[derive(Properties, PartialEq)]
pub struct SparklineProps {
    pub values: Vec<f64>,

    #[prop_or(48)]
    pub height: u32,

    #[prop_or_else(|| "var(--color-accent)".to_string())]
    pub color: String,

    #[prop_or(2.0)]
    pub stroke_width: f64,
}

/// Axis-less trend line used inside KPI cards.
#[function_component(Sparkline)]
pub fn sparkline(props: &SparklineProps) -> Html {
    let height = f64::from(props.height);
    let path_data = sparkline_path(&props.values, VIEWBOX_WIDTH, height, 4.0);
    let viewbox = format!("0 0 {VIEWBOX_WIDTH} {height}");
    let style = format!("width: 100%; height: {}px; display: block;", props.height);

    html! {
        <svg {viewbox} preserveAspectRatio="none" {style} class="sparkline">
            <path
                d={path_data}
                fill="none"
                stroke={props.color.clone()}
                stroke-width={props.stroke_width.to_string()}
                stroke-linecap="round"
                stroke-linejoin="round"
                vector-effect="non-scaling-stroke"
            />
        </svg>
    }
}
