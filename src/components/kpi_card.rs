use yew::prelude::*;

use crate::models::dashboard::Kpi;

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub kpi: Kpi,
    /// Modifier class picking the card's accent colour.
    pub accent: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    let kpi = &props.kpi;
    let arrow_class = if kpi.trend.flipped {
        "trend-arrow flipped"
    } else {
        "trend-arrow"
    };

    html! {
        <div class={classes!("card", "kpi-card", props.accent.to_string())}>
            <div class="kpi-header">
                <h3>{kpi.title}</h3>
                <span class="kpi-icon">{props.icon.clone()}</span>
            </div>
            <div class="kpi-body">
                <p class="kpi-value">
                    <span class="kpi-number">{&kpi.value}</span>
                    <span class="kpi-caption">{kpi.caption}</span>
                </p>
                <p class="kpi-trend">
                    <span class={arrow_class}>{"↗"}</span>
                    <span>{&kpi.trend.text}</span>
                </p>
            </div>
            <div class="kpi-visual">
                {props.children.clone()}
            </div>
        </div>
    }
}
