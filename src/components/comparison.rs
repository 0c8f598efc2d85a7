use yew::prelude::*;

use crate::components::chart::{Chart, ChartKind, ChartSeries};
use crate::components::model_selector::ModelSelector;
use crate::components::status::{Status, StatusKind};
use crate::hooks::screen_state::ScreenView;
use crate::hooks::use_comparison::use_comparison;
use crate::models::comparison::{
    MAX_SELECTED, ModelCompareModel, ModelComparison, SelectedModels, series_color,
};
use crate::utils::units::{clamp_score, group_thousands, to_fixed};

#[function_component(ComparisonScreen)]
pub fn comparison_screen() -> Html {
    let handle = use_comparison();
    let state = &handle.state;

    let comparison = match state.load.view() {
        ScreenView::Loading => {
            return html! { <Status kind={StatusKind::Loading} message="Loading..." /> };
        }
        ScreenView::Failed(message) => {
            return html! { <Status kind={StatusKind::Error} message={message.to_string()} /> };
        }
        ScreenView::Ready(comparison) => comparison,
    };

    let selected = &state.selected;
    let available: Vec<String> = comparison.names().map(str::to_string).collect();
    let best = comparison.best_model(selected);

    html! {
        <div class="screen comparison">
            <section class="card selectors">
                <h2>{"Select models to compare"}</h2>
                <div class="selector-row">
                    {
                        (0..MAX_SELECTED).map(|slot| {
                            let taken: Vec<String> = selected
                                .iter()
                                .enumerate()
                                .filter(|(i, _)| *i != slot)
                                .map(|(_, name)| name.to_string())
                                .collect();
                            html! {
                                <ModelSelector
                                    key={slot.to_string()}
                                    {slot}
                                    available={available.clone()}
                                    value={selected.get(slot).map(str::to_string)}
                                    {taken}
                                    on_change={handle.select.clone()}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            if selected.is_empty() {
                <p class="empty">{"No models selected."}</p>
            } else {
                <>
                    <section class="model-grid">
                        {
                            selected.iter()
                                .filter_map(|name| comparison.find(name))
                                .map(|model| {
                                    let is_best = best.is_some_and(|b| b.name == model.name);
                                    comparison_card(model, is_best)
                                })
                                .collect::<Html>()
                        }
                    </section>

                    <section class="card">
                        <h2>{"Side-by-side"}</h2>
                        { comparison_chart(comparison, selected) }
                    </section>
                </>
            }

            if let Some(best) = best {
                <section class="card insight">
                    <h2>{"Key Insight"}</h2>
                    <p>
                        <strong>{&best.name}</strong>
                        {format!(
                            " is the most efficient of the selected models with a green score of {}.",
                            best.efficiency_display()
                        )}
                    </p>
                </section>
            }
        </div>
    }
}

fn comparison_card(model: &ModelCompareModel, is_best: bool) -> Html {
    let bar_style = format!("width: {}%;", clamp_score(model.efficiency));

    html! {
        <div class={classes!("model-card", is_best.then_some("best"))} key={model.name.clone()}>
            <div class="model-card-header">
                <h3>{&model.name}</h3>
                if is_best {
                    <span class="badge best-badge">{"Best"}</span>
                }
            </div>
            <dl>
                <dt>{"CO₂"}</dt>
                <dd>
                    {format!("{} kg", to_fixed(model.co2_kg, 4))}
                    <span class="impact-note">{model.impact_label()}</span>
                </dd>
                <dt>{"Energy"}</dt>
                <dd>{format!("{} kWh", to_fixed(model.energy_kwh, 4))}</dd>
                <dt>{"GPU Hours"}</dt>
                <dd>{to_fixed(model.gpu_hours, 2)}</dd>
                <dt>{"Runs"}</dt>
                <dd>{group_thousands(model.usage)}</dd>
            </dl>
            <div class="score-row">
                <span>{"Green Score"}</span>
                <span class="badge">{model.efficiency_display()}</span>
            </div>
            <div class="progress">
                <div class="progress-fill" style={bar_style}></div>
            </div>
        </div>
    }
}

/// Grouped bars: metrics along the axis, one series per selected model.
fn comparison_chart(comparison: &ModelComparison, selected: &SelectedModels) -> Html {
    let rows = comparison.chart_rows(selected);
    let categories: Vec<String> = rows.iter().map(|r| r.metric.to_string()).collect();

    let series: Vec<ChartSeries> = selected
        .iter()
        .filter(|name| comparison.find(name).is_some())
        .enumerate()
        .map(|(i, name)| ChartSeries {
            name: name.to_string(),
            values: rows
                .iter()
                .map(|r| r.values.get(i).copied().unwrap_or_default())
                .collect(),
            color: series_color(i),
        })
        .collect();

    html! {
        <Chart
            id="model-comparison-chart"
            kind={ChartKind::Bar}
            {categories}
            {series}
            legend={true}
        />
    }
}
