use yew::prelude::*;

use crate::components::status::{Status, StatusKind};
use crate::hooks::use_recommendations::{RecommendationsHandle, use_recommendations};
use crate::models::recommendations::{QUICK_TIPS, QuickTip, Recommendation, total_savings_kg};
use crate::utils::units::to_fixed;

#[function_component(RecommendationsScreen)]
pub fn recommendations_screen() -> Html {
    let handle = use_recommendations();
    let state = &handle.state;

    if state.loading {
        return html! {
            <Status kind={StatusKind::Loading} message="Generating AI recommendations..." />
        };
    }

    let total = total_savings_kg(&state.items);

    html! {
        <div class="screen recommendations">
            <section class="card savings-banner">
                <h2>{"Potential Savings"}</h2>
                <p class="savings-total">
                    {format!("{} kg CO₂/month", to_fixed(total, 2))}
                </p>
                <p class="savings-caption">
                    {format!(
                        "{} of {} recommendations applied",
                        state.applied.len(),
                        state.items.len()
                    )}
                </p>
            </section>

            <section class="recommendation-list">
                if state.items.is_empty() {
                    <p class="empty">{"No recommendations available right now."}</p>
                } else {
                    {
                        state.items.iter().enumerate()
                            .map(|(index, rec)| recommendation_card(&handle, index, rec))
                            .collect::<Html>()
                    }
                }
            </section>

            <section class="card quick-tips">
                <h2>{"Quick Tips"}</h2>
                <ul>
                    { for QUICK_TIPS.iter().map(quick_tip) }
                </ul>
            </section>

            if let Some(rec) = state.selected_item() {
                { detail_dialog(rec, handle.dismiss.clone()) }
            }
        </div>
    }
}

fn recommendation_card(handle: &RecommendationsHandle, index: usize, rec: &Recommendation) -> Html {
    let applied = handle.state.applied.contains(index);
    let on_apply = handle.apply.reform(move |_: MouseEvent| index);
    let on_details = handle.show.reform(move |_: MouseEvent| index);

    html! {
        <div class="card recommendation" key={index.to_string()}>
            <div class="recommendation-header">
                <span class={classes!(rec.icon_classes())}>{"💡"}</span>
                <h3>{&rec.title}</h3>
                <span class={classes!("badge", rec.impact.css_class())}>
                    {format!("{} Impact", rec.impact.label())}
                </span>
            </div>
            <p>{&rec.description}</p>
            <p class="saving">{rec.savings_display()}</p>
            <div class="actions">
                <button class="btn primary" onclick={on_apply} disabled={applied}>
                    { if applied { "Applied ✓" } else { "Apply" } }
                </button>
                <button class="btn secondary" onclick={on_details}>{"Details"}</button>
            </div>
        </div>
    }
}

fn quick_tip(tip: &QuickTip) -> Html {
    html! {
        <li class="quick-tip">
            <div>
                <strong>{tip.title}</strong>
                <p>{tip.description}</p>
            </div>
            <span class={classes!("badge", tip.impact.css_class())}>{tip.impact.label()}</span>
        </li>
    }
}

fn detail_dialog(rec: &Recommendation, dismiss: Callback<()>) -> Html {
    let on_close = dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <h2>{&rec.title}</h2>
                <span class={classes!("badge", rec.impact.css_class())}>
                    {format!("{} Impact", rec.impact.label())}
                </span>
                <p>{&rec.description}</p>
                <p class="saving">{format!("Estimated saving: {}", rec.savings_display())}</p>
                <button class="btn secondary" onclick={on_close}>{"Close"}</button>
            </div>
        </div>
    }
}
