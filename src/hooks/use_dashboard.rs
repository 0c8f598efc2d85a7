use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::screen_state::{ScreenAction, ScreenState};
use crate::models::dashboard::DashboardSnapshot;
use crate::services::api::fetch_dashboard;

pub type DashboardState = ScreenState<DashboardSnapshot>;

/// Round numbering for one mounted dashboard, plus the gate that silences
/// rounds still in flight after unmount.
#[derive(Debug, Default)]
pub struct PollRounds {
    last: Cell<u64>,
    closed: Cell<bool>,
}

impl PollRounds {
    /// Sequence number for a new round; strictly increasing from 1.
    pub fn start(&self) -> u64 {
        let round = self.last.get() + 1;
        self.last.set(round);
        round
    }

    /// Whether a finished round may still dispatch.
    pub fn is_open(&self) -> bool {
        !self.closed.get()
    }

    pub fn close(&self) {
        self.closed.set(true);
    }
}

/// Loads the dashboard and re-polls it every [`Config::DASHBOARD_POLL_INTERVAL_MS`]
/// while mounted.
///
/// Rounds are not serialised: a slow round may still be in flight when the next
/// tick fires. The reducer drops any result older than the newest one applied,
/// and nothing is dispatched once the screen has unmounted.
#[hook]
pub fn use_dashboard() -> UseReducerHandle<DashboardState> {
    let state = use_reducer(DashboardState::default);

    {
        let dispatcher = state.dispatcher();

        use_effect_with((), move |_| {
            let rounds = Rc::new(PollRounds::default());

            let start_round = {
                let rounds = rounds.clone();
                move || {
                    let round = rounds.start();
                    let dispatcher = dispatcher.clone();
                    let rounds = rounds.clone();

                    spawn_local(async move {
                        let result = fetch_dashboard().await.map_err(|e| {
                            gloo::console::warn!(&format!("Dashboard round {round} failed: {e}"));
                            e.to_string()
                        });

                        if rounds.is_open() {
                            dispatcher.dispatch(ScreenAction::Resolved { round, result });
                        }
                    });
                }
            };

            start_round();
            let interval = Config::ENABLE_AUTO_REFRESH
                .then(|| Interval::new(Config::DASHBOARD_POLL_INTERVAL_MS, start_round));

            move || {
                rounds.close();
                drop(interval);
            }
        });
    }

    state
}
