use yew::prelude::*;

use crate::components::chart::{Chart, ChartKind, ChartSeries};
use crate::components::kpi_card::KpiCard;
use crate::components::sparkline::Sparkline;
use crate::components::status::{Status, StatusKind};
use crate::config::Config;
use crate::hooks::screen_state::ScreenView;
use crate::hooks::use_dashboard::use_dashboard;
use crate::models::dashboard::{DashboardSnapshot, MostUsedModel};
use crate::utils::units::{clamp_score, group_thousands};

const ENERGY_COLOR: &str = "#10b981";
const CO2_COLOR: &str = "#0ea5e9";

#[function_component(DashboardScreen)]
pub fn dashboard_screen() -> Html {
    let state = use_dashboard();

    match state.view() {
        ScreenView::Loading => html! {
            <Status kind={StatusKind::Loading} message="Loading..." />
        },
        ScreenView::Failed(message) => html! {
            <Status kind={StatusKind::Error} message={message.to_string()} />
        },
        ScreenView::Ready(snapshot) => render_snapshot(snapshot),
    }
}

fn render_snapshot(snapshot: &DashboardSnapshot) -> Html {
    let [co2, energy, score] = snapshot.kpis();
    let recent = snapshot.insights.recent_energy(Config::SPARKLINE_POINTS);
    let (energy_labels, energy_values) = snapshot.insights.energy_series();
    let (co2_models, co2_values) = snapshot.insights.co2_series();

    html! {
        <div class="screen dashboard">
            <section class="kpi-grid">
                <KpiCard kpi={co2} accent="accent-co2" icon="☁">
                    <Sparkline values={recent.clone()} color={CO2_COLOR.to_string()} />
                </KpiCard>
                <KpiCard kpi={energy} accent="accent-energy" icon="⚡">
                    <Sparkline values={recent} color={ENERGY_COLOR.to_string()} />
                </KpiCard>
                <KpiCard kpi={score} accent="accent-score" icon="🍃">
                    <svg class="score-ring" viewBox="0 0 36 36">
                        <path
                            class="score-ring-track"
                            d="M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831"
                        />
                        <path
                            class="score-ring-fill"
                            stroke-dasharray={snapshot.score_dasharray()}
                            d="M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831"
                        />
                    </svg>
                </KpiCard>
            </section>

            <section class="chart-grid">
                <div class="card">
                    <h2>{"Energy Usage Over Time"}</h2>
                    <Chart
                        id="energy-trend-chart"
                        kind={ChartKind::Line}
                        categories={energy_labels}
                        series={vec![ChartSeries {
                            name: "Energy (kWh)".to_string(),
                            values: energy_values,
                            color: ENERGY_COLOR.to_string(),
                        }]}
                        y_axis_name="kWh"
                    />
                </div>
                <div class="card">
                    <h2>{"CO₂ Emissions by Model"}</h2>
                    <Chart
                        id="co2-by-model-chart"
                        kind={ChartKind::Bar}
                        categories={co2_models}
                        series={vec![ChartSeries {
                            name: "CO₂ (kg)".to_string(),
                            values: co2_values,
                            color: CO2_COLOR.to_string(),
                        }]}
                        y_axis_name="kg"
                    />
                </div>
            </section>

            <section class="card most-used">
                <h2>{"Most Used Models"}</h2>
                if snapshot.insights.most_used_models.is_empty() {
                    <p class="empty">{"No model usage recorded yet."}</p>
                } else {
                    <div class="model-grid">
                        { for snapshot.insights.most_used_models.iter().map(most_used_card) }
                    </div>
                }
            </section>
        </div>
    }
}

fn most_used_card(model: &MostUsedModel) -> Html {
    let bar_style = format!("width: {}%;", clamp_score(model.efficiency));

    html! {
        <div class="model-card" key={model.name.clone()}>
            <div class="model-card-header">
                <h3>{&model.name}</h3>
                <span class="badge">{model.efficiency_display()}</span>
            </div>
            <dl>
                <dt>{"Usage"}</dt>
                <dd>{format!("{} runs", group_thousands(model.usage))}</dd>
                <dt>{"CO₂"}</dt>
                <dd>{model.display_co2()}</dd>
            </dl>
            <div class="progress">
                <div class="progress-fill" style={bar_style}></div>
            </div>
        </div>
    }
}
