use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::screen_state::{ScreenAction, ScreenState};
use crate::models::esg::EsgReport;
use crate::services::api::fetch_esg_report;

pub type EsgReportState = ScreenState<EsgReport>;

#[hook]
pub fn use_esg_report() -> UseReducerHandle<EsgReportState> {
    let state = use_reducer(EsgReportState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = fetch_esg_report().await.map_err(|e| {
                    gloo::console::error!(&format!("ESG report failed: {e}"));
                    e.to_string()
                });
                dispatcher.dispatch(ScreenAction::Resolved { round: 1, result });
            });
            || ()
        });
    }

    state
}
